// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use log::{debug, warn};
use reqwest::{
    header::{self, HeaderValue},
    Method, StatusCode,
};
use secrecy::{ExposeSecret as _, SecretString};

use crate::{
    api,
    error::{self, Result},
    key_material,
    options::SecretsOptions,
    transport::{Request, Transport},
};

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const CONTENT_TYPE_JSON: &str = "application/json";

pub(crate) struct SecretUpdater<T> {
    transport: T,
    options: SecretsOptions,
}

impl<T: Transport + Sync> SecretUpdater<T> {
    pub(crate) fn new(transport: T, options: SecretsOptions) -> Self {
        Self { transport, options }
    }

    /// Encrypts `secret_value` against the repository's current public key and
    /// stores it under `secret_name`.
    ///
    /// Returns `Ok(false)` when the platform answers the update with anything
    /// other than 204 No Content. Failing to obtain the public key, or failing
    /// to reach the platform at all, is an error.
    pub(crate) async fn update_value(
        &self,
        secret_name: &str,
        secret_value: &SecretString,
    ) -> Result<bool> {
        let url = self.options.endpoints.secret_url(secret_name)?;

        let public_key = self.fetch_public_key().await?;
        debug!("Sealing secret {} with key {}", secret_name, public_key.key_id);

        let encrypted_value = key_material::Sealer::new(public_key.public_key())
            .seal(secret_value.expose_secret().as_bytes())?;
        let body = serde_json::to_vec(&api::SecretUpdateRequest {
            encrypted_value,
            key_id: public_key.key_id,
        })?;

        let mut headers = self.options.credentials.headers()?;
        _ = headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(CONTENT_TYPE_JSON),
        );

        let resp = self
            .transport
            .send(Request::new(Method::PUT, url, headers).with_body(body))
            .await?;

        if resp.status == StatusCode::NO_CONTENT {
            Ok(true)
        } else {
            warn!(
                "Server responded to the update of secret {} with status {}",
                secret_name, resp.status
            );
            Ok(false)
        }
    }

    async fn fetch_public_key(&self) -> Result<api::PublicKeyResponse> {
        let mut headers = self.options.credentials.headers()?;
        _ = headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_JSON));

        let resp = self
            .transport
            .send(Request::new(
                Method::GET,
                self.options.endpoints.public_key_url.clone(),
                headers,
            ))
            .await
            .map_err(|e| error::KeyFetch::Request(Box::new(e)))?;

        if !resp.status.is_success() {
            return Err(error::KeyFetch::Status(resp.status).into());
        }

        Ok(serde_json::from_slice(&resp.body).map_err(error::KeyFetch::Body)?)
    }
}
