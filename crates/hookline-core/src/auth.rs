//! Shared-token check for incoming webhook calls.
//!
//! The configured value is the hex SHA-256 digest of the token, so the
//! secret itself never sits in the config file. Digests are compared in
//! constant time.

use crate::error::ConfigError;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

#[derive(Clone)]
pub struct TokenAuthenticator {
    digest: [u8; 32],
}

impl TokenAuthenticator {
    /// Build from a hex digest as stored in `auth.token_sha256`.
    pub fn from_hex_digest(hex_digest: &str) -> Result<Self, ConfigError> {
        let hex_digest = hex_digest.trim();
        if hex_digest.is_empty() {
            return Err(ConfigError::MissingTokenDigest);
        }
        let bytes = hex::decode(hex_digest).map_err(|_| ConfigError::InvalidTokenDigest)?;
        let digest: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ConfigError::InvalidTokenDigest)?;
        Ok(Self { digest })
    }

    /// Build directly from the plain token.
    pub fn from_token(token: &str) -> Self {
        Self {
            digest: Sha256::digest(token.as_bytes()).into(),
        }
    }

    /// Hex digest to put in `auth.token_sha256` for `token`.
    pub fn digest_hex(token: &str) -> String {
        hex::encode(Sha256::digest(token.as_bytes()))
    }

    pub fn verify(&self, token: &str) -> bool {
        let candidate = Sha256::digest(token.as_bytes());
        candidate.as_slice().ct_eq(&self.digest[..]).into()
    }
}

impl std::fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthenticator").finish_non_exhaustive()
    }
}
