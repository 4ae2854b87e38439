// SPDX-FileCopyrightText: 2024-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use crate::key_material::{PublicKey, KEY_SIZE};

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PublicKeyResponse {
    #[serde_as(as = "Base64")]
    pub(crate) key: [u8; KEY_SIZE],
    pub(crate) key_id: String,
}

impl PublicKeyResponse {
    pub(crate) fn public_key(&self) -> PublicKey {
        PublicKey::from_bytes(self.key)
    }
}

#[serde_as]
#[derive(Clone, Debug, Serialize)]
pub(crate) struct SecretUpdateRequest {
    #[serde_as(as = "Base64")]
    pub(crate) encrypted_value: Vec<u8>,
    pub(crate) key_id: String,
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_ser_tokens, Token};

    use crate::error::Result;

    use super::*;

    #[test]
    fn public_key_response_from_platform_payload() -> Result<()> {
        let resp: PublicKeyResponse = serde_json::from_str(
            r#"{"key_id":"012345678912345678","key":"B6N8vBQgk8i3VdwbEOhstCY3StFqqFPtC9/AsrhtHHw="}"#,
        )?;

        assert_eq!(resp.key_id, "012345678912345678");
        assert_eq!(
            resp.public_key().as_bytes(),
            &[
                7, 163, 124, 188, 20, 32, 147, 200, 183, 85, 220, 27, 16, 232, 108, 180, 38, 55, 74,
                209, 106, 168, 83, 237, 11, 223, 192, 178, 184, 109, 28, 124,
            ],
        );
        Ok(())
    }

    #[test]
    fn public_key_response_requires_key() {
        assert!(serde_json::from_str::<PublicKeyResponse>(r#"{"key_id":"1"}"#).is_err());
    }

    #[test]
    fn public_key_response_requires_key_id() {
        assert!(serde_json::from_str::<PublicKeyResponse>(
            r#"{"key":"B6N8vBQgk8i3VdwbEOhstCY3StFqqFPtC9/AsrhtHHw="}"#
        )
        .is_err());
    }

    #[test]
    fn public_key_response_rejects_short_key() {
        assert!(
            serde_json::from_str::<PublicKeyResponse>(r#"{"key":"AAAA","key_id":"1"}"#).is_err()
        );
    }

    #[test]
    fn public_key_response_rejects_invalid_base64() {
        assert!(serde_json::from_str::<PublicKeyResponse>(
            r#"{"key":"not base64!","key_id":"1"}"#
        )
        .is_err());
    }

    #[test]
    fn secret_update_request() {
        let req = SecretUpdateRequest {
            encrypted_value: b"sealed".to_vec(),
            key_id: "568250167242549743".to_owned(),
        };

        assert_ser_tokens(
            &req,
            &[
                Token::Struct {
                    name: "SecretUpdateRequest",
                    len: 2,
                },
                Token::Str("encrypted_value"),
                Token::Str("c2VhbGVk"),
                Token::Str("key_id"),
                Token::Str("568250167242549743"),
                Token::StructEnd,
            ],
        );
    }
}
