// SPDX-FileCopyrightText: 2022-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{error::Result, transport::Transport, updater::SecretUpdater};

pub(crate) mod set;

#[async_trait]
pub(crate) trait Command {
    async fn execute<T: Transport + Send + Sync>(self, updater: &SecretUpdater<T>) -> Result<()>;
}
