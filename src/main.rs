// SPDX-FileCopyrightText: 2022-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    missing_doc_code_examples,
    private_doc_tests,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::single_char_lifetime_names,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod api;
mod command;
mod error;
mod key_material;
mod metadata;
mod options;
mod password;
mod rng;
mod transport;
mod updater;

use std::{process, time::Duration};

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use error::Result;
use log::error;
use options::{Credentials, Endpoints, SecretsOptions};
use secrecy::SecretString;
use transport::Transport;
use updater::SecretUpdater;
use url::Url;

#[derive(Debug, Subcommand)]
enum Command {
    Set(command::set::Command),
}

#[async_trait]
impl command::Command for Command {
    async fn execute<T: Transport + Send + Sync>(self, updater: &SecretUpdater<T>) -> Result<()> {
        match self {
            Self::Set(cmd) => command::Command::execute(cmd, updater).await,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The root URL of the platform's REST API.
    #[arg(long, env = "REPOSECRET_API_URL", default_value = "https://api.github.com", value_parser = Url::parse)]
    api_url: Url,

    /// The repository that owns the secret, written as OWNER/REPO.
    #[arg(
        short = 'R',
        long,
        env = "REPOSECRET_REPOSITORY",
        required_unless_present_all = ["secrets_url", "public_key_url"]
    )]
    repository: Option<String>,

    /// The URL that secrets are stored under, overriding the one derived from
    /// the repository.
    #[arg(long, env = "REPOSECRET_SECRETS_URL", value_parser = Url::parse, requires = "public_key_url")]
    secrets_url: Option<Url>,

    /// The URL to retrieve the repository public key from, overriding the one
    /// derived from the repository.
    #[arg(long, env = "REPOSECRET_PUBLIC_KEY_URL", value_parser = Url::parse, requires = "secrets_url")]
    public_key_url: Option<Url>,

    /// The user to authenticate as.
    #[arg(short, long, env = "REPOSECRET_USER")]
    user: String,

    /// The access token to authenticate with.
    #[arg(long, env = "REPOSECRET_ACCESS_TOKEN", hide_env_values = true)]
    access_token: SecretString,

    /// Give up on a request to the platform after this many seconds.
    #[arg(long, env = "REPOSECRET_TIMEOUT")]
    timeout: Option<u64>,

    #[clap(subcommand)]
    command: Command,
}

impl Args {
    fn endpoints(&self) -> Result<Endpoints> {
        if let (Some(secrets_url), Some(public_key_url)) = (&self.secrets_url, &self.public_key_url)
        {
            return Ok(Endpoints {
                secrets_url: secrets_url.clone(),
                public_key_url: public_key_url.clone(),
            });
        }

        match self.repository.as_deref() {
            Some(repository) => Endpoints::for_repository(&self.api_url, repository),
            None => {
                error!("A repository or both the secrets and public key URLs are required");
                Err(error::Error::Command)
            }
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let options = SecretsOptions {
        endpoints: args.endpoints()?,
        credentials: Credentials::new(args.user, args.access_token),
    };
    let client = transport::http_client(args.timeout.map(Duration::from_secs))?;
    let updater = SecretUpdater::new(client, options);

    command::Command::execute(args.command, &updater).await
}

#[tokio::main]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("REPOSECRET_LOG", "warn")
        .write_style("REPOSECRET_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
