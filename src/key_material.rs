// SPDX-FileCopyrightText: 2024-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

pub(crate) use crypto_box::{PublicKey, KEY_SIZE};
use rand_core::CryptoRngCore;

use crate::{error::Result, rng};

/// Anonymous public-key encryption compatible with libsodium's
/// `crypto_box_seal`.
///
/// Every call generates a fresh ephemeral key pair. The output is the
/// ephemeral public key followed by the XSalsa20-Poly1305 box, so only the
/// holder of the recipient's secret key can open it.
pub(crate) struct Sealer<'rng> {
    recipient: PublicKey,
    rng: Option<&'rng mut (dyn CryptoRngCore + Send)>,
}

impl<'rng> Sealer<'rng> {
    pub(crate) fn new(recipient: PublicKey) -> Self {
        Self {
            recipient,
            rng: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_rng(mut self, rng: &'rng mut (dyn CryptoRngCore + Send)) -> Self {
        self.rng = Some(rng);
        self
    }

    pub(crate) fn seal(mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let recipient = &self.recipient;
        Ok(rng::map_option(&mut self.rng, |mut rng| {
            recipient.seal(&mut rng, plaintext)
        })?)
    }
}
