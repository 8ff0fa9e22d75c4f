//! Agent wallet identity
//!
//! Derives the agent's Ethereum-style address from its private key: the last 20 bytes of
//! the Keccak-256 hash of the uncompressed secp256k1 public key.

use anyhow::{anyhow, Context, Result};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha3::{Digest, Keccak256};

#[derive(Debug, Clone)]
pub struct AgentWallet {
    address: String,
}

impl AgentWallet {
    pub fn from_private_key(key: &str) -> Result<Self> {
        let trimmed = key.trim();
        let hex_key = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(hex_key).context("Wallet key is not valid hex")?;

        let secret =
            SecretKey::from_slice(&bytes).map_err(|e| anyhow!("Invalid wallet key: {e}"))?;
        let secp = Secp256k1::new();
        let public = PublicKey::from_secret_key(&secp, &secret);

        // Skip the 0x04 prefix of the uncompressed point
        let uncompressed = public.serialize_uncompressed();
        let hash = Keccak256::digest(&uncompressed[1..]);

        Ok(AgentWallet {
            address: format!("0x{}", hex::encode(&hash[12..])),
        })
    }

    /// Lowercase `0x`-prefixed address
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Hex addresses compare case-insensitively (checksummed vs lowercase)
pub fn same_address(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
