// SPDX-FileCopyrightText: 2022-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, result};

use reqwest::StatusCode;
use thiserror::Error;

pub(crate) type Result<T, E = Error> = result::Result<T, E>;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("JSON format error: {0}")]
    Json(serde_json::Error),
    #[error("data conversion error: {0}")]
    Conversion(#[from] Conversion),
    #[error("could not retrieve the repository public key: {0}")]
    KeyFetch(#[from] KeyFetch),
    #[error("cryptography error: {0}")]
    Cryptography(#[from] crypto_box::aead::Error),
    #[error("password retrieval error: {0}")]
    Password(#[from] Password),
    #[error("secret names must not be empty")]
    InvalidSecretName,
    #[error(r#"the server did not accept the new value for secret "{}""#, .0.escape_default())]
    NotUpdated(String),
    #[error("command execution failed")]
    Command,
    #[error("operation cancelled")]
    Cancelled,
}

impl From<pinentry::Error> for Error {
    fn from(value: pinentry::Error) -> Self {
        // LINT: Deliberate fall-through that should catch future cases added to
        // the enum.
        #[allow(
            clippy::wildcard_enum_match_arm,
            clippy::match_wildcard_for_single_variants
        )]
        match value {
            pinentry::Error::Cancelled | pinentry::Error::Timeout => Self::Cancelled,
            pinentry::Error::Io(e) => Self::Io(e),
            pinentry::Error::Encoding(e) => Self::Conversion(Conversion::Encoding(e)),
            _ => Self::Password(Password::Pinentry(value)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        // LINT: Deliberate fall-through that should catch future cases added to
        // the enum.
        #[allow(clippy::wildcard_enum_match_arm)]
        match value.classify() {
            serde_json::error::Category::Io => Self::Io(value.into()),
            _ => Self::Json(value),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Io(value.into())
    }
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Self {
        Self::Conversion(value.into())
    }
}

#[derive(Error, Debug)]
pub(crate) enum Conversion {
    #[error("unexpected non-UTF-8-encoded bytes in input: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("value cannot be used in an HTTP header: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),
    #[error(r#"repository "{}" is not of the form OWNER/REPO"#, .0.escape_default())]
    Repository(String),
    #[error("URL {0} cannot have path segments appended to it")]
    UrlBase(url::Url),
    #[error("could not parse URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub(crate) enum KeyFetch {
    #[error("request failed: {0}")]
    Request(Box<Error>),
    #[error("server responded with status {0}")]
    Status(StatusCode),
    #[error("response body is not a public key: {0}")]
    Body(serde_json::Error),
}

#[derive(Error, Debug)]
pub(crate) enum Password {
    #[error("no password prompt available")]
    NoPrompt,
    #[error("Pinentry implementation error: {0}")]
    Pinentry(pinentry::Error),
}
