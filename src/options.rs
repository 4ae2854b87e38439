// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use crate::{
    error::{self, Result},
    metadata,
};

#[derive(Clone)]
pub(crate) struct Credentials {
    user: String,
    access_token: SecretString,
}

impl Credentials {
    pub(crate) fn new(user: String, access_token: SecretString) -> Self {
        Self { user, access_token }
    }

    /// The value of an HTTP `Authorization` header using the Basic scheme.
    pub(crate) fn authorization(&self) -> SecretString {
        let pair = SecretString::new(format!(
            "{}:{}",
            self.user,
            self.access_token.expose_secret()
        ));
        SecretString::new(format!("Basic {}", base64::encode(pair.expose_secret())))
    }

    /// Headers shared by every request we make to the platform.
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(self.authorization().expose_secret())
            .map_err(error::Conversion::from)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        _ = headers.insert(header::AUTHORIZATION, authorization);
        _ = headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&metadata::USER_AGENT).map_err(error::Conversion::from)?,
        );
        Ok(headers)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Endpoints {
    pub(crate) secrets_url: Url,
    pub(crate) public_key_url: Url,
}

impl Endpoints {
    /// Derives the repository Actions secrets endpoints from an API root and
    /// an `OWNER/REPO` slug.
    pub(crate) fn for_repository(api_url: &Url, repository: &str) -> Result<Self> {
        let (owner, repo) = match repository.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                (owner, repo)
            }
            _ => return Err(error::Conversion::Repository(repository.to_owned()).into()),
        };

        let mut secrets_url = api_url.clone();
        _ = secrets_url
            .path_segments_mut()
            .map_err(|()| error::Conversion::UrlBase(api_url.clone()))?
            .pop_if_empty()
            .extend(["repos", owner, repo, "actions", "secrets"]);

        let mut public_key_url = secrets_url.clone();
        _ = public_key_url
            .path_segments_mut()
            .map_err(|()| error::Conversion::UrlBase(api_url.clone()))?
            .push("public-key");

        Ok(Self {
            secrets_url,
            public_key_url,
        })
    }

    pub(crate) fn secret_url(&self, secret_name: &str) -> Result<Url> {
        if secret_name.is_empty() {
            return Err(error::Error::InvalidSecretName);
        }

        let mut url = self.secrets_url.clone();
        _ = url
            .path_segments_mut()
            .map_err(|()| error::Conversion::UrlBase(self.secrets_url.clone()))?
            .pop_if_empty()
            .push(secret_name);
        Ok(url)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SecretsOptions {
    pub(crate) endpoints: Endpoints,
    pub(crate) credentials: Credentials,
}
