// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use async_trait::async_trait;
use clap::Parser;

use crate::{
    error::{self, Result},
    password::{self, Prompt as _},
    transport::Transport,
    updater::SecretUpdater,
};

/// Encrypt a value and store it as a repository secret.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Read the value from standard input instead of prompting for it.
    #[arg(long)]
    stdin: bool,

    /// The path to the Pinentry program to use when prompting for the value.
    #[arg(long, value_hint = clap::ValueHint::ExecutablePath, conflicts_with = "stdin")]
    pinentry_program: Option<PathBuf>,

    /// The name of the secret to create or replace.
    #[arg()]
    name: String,
}

impl Command {
    fn prompt(&self) -> Box<dyn password::Prompt> {
        if self.stdin {
            return Box::new(password::StdinPrompt);
        }

        let prompts: Vec<Box<dyn password::Prompt>> = vec![
            Box::new(self.pinentry_program.as_ref().map_or_else(
                password::PinentryPrompt::new,
                password::PinentryPrompt::new_with_executable,
            )),
            Box::new(password::RpasswordPrompt),
        ];
        Box::new(prompts)
    }
}

#[async_trait]
impl super::Command for Command {
    async fn execute<T: Transport + Send + Sync>(self, updater: &SecretUpdater<T>) -> Result<()> {
        let value = self
            .prompt()
            .prompt(password::Request::new(&self.name))
            .await?
            .ok_or(error::Password::NoPrompt)?;

        if updater.update_value(&self.name, &value).await? {
            println!("Updated secret {}", self.name);
            Ok(())
        } else {
            Err(error::Error::NotUpdated(self.name))
        }
    }
}
