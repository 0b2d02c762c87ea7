//! Consensus address derivation.
//!
//! A validator's signing info is keyed by its *consensus* address, which is
//! distinct from the operator address: it is derived from the consensus
//! pubkey by hashing the raw key bytes with SHA-256, truncating to 20 bytes,
//! and bech32-encoding under the chain's `valcons` prefix.

use base64::Engine;
use bech32::{ToBase32, Variant};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ConsAddrError;

/// Number of digest bytes that form the consensus address.
const ADDRESS_LEN: usize = 20;

/// A validator's consensus public key as reported by the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusPubkey {
    /// Key type URL, e.g. `/cosmos.crypto.ed25519.PubKey`.
    pub type_url: String,
    /// Base64-encoded raw key bytes.
    pub key: String,
}

impl ConsensusPubkey {
    pub fn new(type_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            type_url: type_url.into(),
            key: key.into(),
        }
    }

    /// Derive the bech32 consensus address for this key.
    pub fn consensus_address(&self, prefix: &str) -> Result<String, ConsAddrError> {
        let raw = base64::engine::general_purpose::STANDARD
            .decode(&self.key)
            .map_err(|e| ConsAddrError::KeyEncoding(e.to_string()))?;
        let digest = Sha256::digest(&raw);
        bech32::encode(prefix, (&digest[..ADDRESS_LEN]).to_base32(), Variant::Bech32)
            .map_err(|e| ConsAddrError::Bech32(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bech32::FromBase32;

    fn key_of(bytes: &[u8]) -> ConsensusPubkey {
        ConsensusPubkey::new(
            "/cosmos.crypto.ed25519.PubKey",
            base64::engine::general_purpose::STANDARD.encode(bytes),
        )
    }

    #[test]
    fn derivation_is_deterministic_and_prefixed() {
        let pubkey = key_of(&[7u8; 32]);
        let a = pubkey.consensus_address("cosmosvalcons").unwrap();
        let b = pubkey.consensus_address("cosmosvalcons").unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("cosmosvalcons1"));
    }

    #[test]
    fn address_decodes_back_to_truncated_digest() {
        let key_bytes = [42u8; 32];
        let addr = key_of(&key_bytes).consensus_address("testvalcons").unwrap();

        let (hrp, data, variant) = bech32::decode(&addr).unwrap();
        assert_eq!(hrp, "testvalcons");
        assert_eq!(variant, Variant::Bech32);

        let payload = Vec::<u8>::from_base32(&data).unwrap();
        let digest = Sha256::digest(key_bytes);
        assert_eq!(payload, &digest[..ADDRESS_LEN]);
    }

    #[test]
    fn distinct_keys_yield_distinct_addresses() {
        let a = key_of(&[1u8; 32]).consensus_address("v").unwrap();
        let b = key_of(&[2u8; 32]).consensus_address("v").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_base64_is_an_error() {
        let pubkey = ConsensusPubkey::new("/cosmos.crypto.ed25519.PubKey", "!!not base64!!");
        assert!(matches!(
            pubkey.consensus_address("cosmosvalcons"),
            Err(ConsAddrError::KeyEncoding(_))
        ));
    }
}
