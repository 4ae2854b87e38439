// SPDX-FileCopyrightText: 2022-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use inflector::Inflector;
use once_cell::sync::Lazy;

pub(crate) static CLIENT_NAME: Lazy<String> =
    Lazy::new(|| option_env!("CARGO_PKG_NAME").unwrap_or("reposecret").to_owned());
pub(crate) static CLIENT_DISPLAY_NAME: Lazy<String> = Lazy::new(|| CLIENT_NAME.to_title_case());

/// Sent with every request so the platform can attribute traffic to us.
pub(crate) static USER_AGENT: Lazy<String> = Lazy::new(|| {
    match option_env!("CARGO_PKG_VERSION") {
        Some(version) => format!("{}/{version}", *CLIENT_NAME),
        None => CLIENT_NAME.clone(),
    }
});
