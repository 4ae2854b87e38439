// SPDX-FileCopyrightText: 2022-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{ffi::OsString, io, path::Path};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::task;

use crate::{error::Result, metadata};

#[derive(Debug, Clone)]
pub(crate) struct Request {
    secret_name: String,
}

impl Request {
    pub(crate) fn new(secret_name: &str) -> Self {
        Self {
            secret_name: secret_name.to_owned(),
        }
    }
}

#[async_trait]
pub(crate) trait Prompt: Send + Sync {
    async fn prompt(&self, req: Request) -> Result<Option<SecretString>>;
}

#[async_trait]
impl<T: Prompt + ?Sized> Prompt for Box<T> {
    async fn prompt(&self, req: Request) -> Result<Option<SecretString>> {
        (**self).prompt(req).await
    }
}

#[async_trait]
impl<T: Prompt> Prompt for Vec<T> {
    async fn prompt(&self, req: Request) -> Result<Option<SecretString>> {
        for candidate in self {
            if let r @ (Ok(Some(_)) | Err(_)) = candidate.prompt(req.clone()).await {
                return r;
            }
        }

        Ok(None)
    }
}

pub(crate) struct PinentryPrompt {
    executable: Option<OsString>,
}

impl PinentryPrompt {
    pub(crate) const fn new() -> Self {
        Self { executable: None }
    }

    pub(crate) fn new_with_executable<P: AsRef<Path>>(executable: P) -> Self {
        Self {
            executable: Some(executable.as_ref().as_os_str().into()),
        }
    }
}

#[async_trait]
impl Prompt for PinentryPrompt {
    async fn prompt(&self, req: Request) -> Result<Option<SecretString>> {
        fn interact<'input>(
            mut input: pinentry::PassphraseInput<'input>,
            title: &'input str,
            description: &'input str,
        ) -> Result<SecretString> {
            _ = input.required("A secret value is required to continue.");
            _ = input.with_title(title);
            _ = input.with_description(description);
            _ = input.with_prompt("Value");

            Ok(input.interact()?)
        }

        let title = format!("Secret value - {}", *metadata::CLIENT_DISPLAY_NAME);
        let description = format!(
            "Enter the new value for the secret {}.",
            req.secret_name.escape_default()
        );

        let input = self
            .executable
            .as_ref()
            .and_then(pinentry::PassphraseInput::with_binary)
            .or_else(pinentry::PassphraseInput::with_default_binary)
            .map(|input| task::spawn_blocking(move || interact(input, &title, &description)));

        Ok(match input {
            Some(fut) => Some(fut.await??),
            None => None,
        })
    }
}

pub(crate) struct RpasswordPrompt;

#[async_trait]
impl Prompt for RpasswordPrompt {
    async fn prompt(&self, req: Request) -> Result<Option<SecretString>> {
        let prompt = format!("Value for {}: ", req.secret_name.escape_default());

        Ok(Some(
            task::spawn_blocking(move || rpassword::prompt_password(prompt).map(SecretString::new))
                .await??,
        ))
    }
}

/// Reads the whole of standard input, so multi-line values such as PEM keys
/// survive intact.
pub(crate) struct StdinPrompt;

#[async_trait]
impl Prompt for StdinPrompt {
    async fn prompt(&self, _req: Request) -> Result<Option<SecretString>> {
        Ok(Some(
            task::spawn_blocking(|| read_value(io::stdin().lock())).await??,
        ))
    }
}

fn read_value<R: io::Read>(mut reader: R) -> io::Result<SecretString> {
    let mut value = String::new();
    _ = reader.read_to_string(&mut value)?;

    // Only the line ending a shell pipeline adds is dropped.
    if value.ends_with('\n') {
        _ = value.pop();
        if value.ends_with('\r') {
            _ = value.pop();
        }
    }
    Ok(SecretString::new(value))
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret as _;

    use crate::error::Result;

    use super::*;

    struct FixedPrompt(Option<&'static str>);

    #[async_trait]
    impl Prompt for FixedPrompt {
        async fn prompt(&self, _req: Request) -> Result<Option<SecretString>> {
            Ok(self.0.map(|value| SecretString::new(value.to_owned())))
        }
    }

    #[test]
    fn read_value_strips_one_trailing_newline() -> Result<()> {
        assert_eq!(read_value(&b"hunter2\n"[..])?.expose_secret(), "hunter2");
        assert_eq!(read_value(&b"hunter2\r\n"[..])?.expose_secret(), "hunter2");
        assert_eq!(read_value(&b"hunter2\n\n"[..])?.expose_secret(), "hunter2\n");
        assert_eq!(read_value(&b"hunter2"[..])?.expose_secret(), "hunter2");
        assert_eq!(read_value(&b""[..])?.expose_secret(), "");
        Ok(())
    }

    #[test]
    fn read_value_keeps_multiline_values() -> Result<()> {
        let pem = "-----BEGIN KEY-----\nabc\n-----END KEY-----";
        assert_eq!(read_value(format!("{pem}\n").as_bytes())?.expose_secret(), pem);
        Ok(())
    }

    #[test]
    fn read_value_rejects_invalid_utf8() {
        assert!(read_value(&[0xff_u8, 0xfe][..]).is_err());
    }

    #[tokio::test]
    async fn first_prompt_with_an_answer_wins() -> Result<()> {
        let prompts = vec![
            FixedPrompt(None),
            FixedPrompt(Some("first")),
            FixedPrompt(Some("second")),
        ];

        let value = prompts.prompt(Request::new("DEPLOY_TOKEN")).await?;
        assert_eq!(
            value.map(|v| v.expose_secret().clone()),
            Some("first".to_owned())
        );
        Ok(())
    }

    #[tokio::test]
    async fn no_answer_from_any_prompt() -> Result<()> {
        let prompts = vec![FixedPrompt(None)];

        assert!(prompts.prompt(Request::new("DEPLOY_TOKEN")).await?.is_none());
        Ok(())
    }
}
