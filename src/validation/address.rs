//! Token address validation (EIP-55 checksummed hex)

use super::{Rejection, Verdict};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "0x";
const HEX_LEN: usize = 40;

/// A 20-byte account address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Render as `0x` + mixed-case hex, upper-casing each letter whose
    /// nibble in keccak256(lowercase hex) is >= 8.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = hex::encode(Keccak256::digest(lower.as_bytes()));

        let mut out = String::with_capacity(PREFIX.len() + HEX_LEN);
        out.push_str(PREFIX);
        for (c, h) in lower.chars().zip(hash.chars()) {
            if c.is_ascii_alphabetic() && h >= '8' {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl FromStr for Address {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix(PREFIX).ok_or(Rejection::NotAnAddress)?;
        if body.len() != HEX_LEN || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Rejection::NotAnAddress);
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| Rejection::NotAnAddress)?;
        let address = Address(bytes);

        // Single-case input carries no checksum; mixed case must match it exactly
        let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper && address.to_checksum() != s {
            return Err(Rejection::NotAnAddress);
        }

        Ok(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

/// Validate a raw address string, normalizing it to checksum form on acceptance
pub fn validate_address(raw: &str) -> Verdict {
    raw.parse::<Address>()
        .map(|address| address.to_checksum())
        .into()
}
