//! Hex-encoded unsigned quantities as used by Ethereum JSON-RPC.
//!
//! Quantities are `0x`-prefixed, lowercase when encoded, and never carry
//! leading zeros (`0x0` is the only representation of zero).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of hex digits that fit in a `u64`.
const MAX_U64_DIGITS: usize = 16;

/// Decoding failures for hex quantities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("empty hex string")]
    EmptyString,

    #[error("hex string without 0x prefix")]
    MissingPrefix,

    #[error("hex string \"0x\"")]
    EmptyNumber,

    #[error("hex number with leading zero digits")]
    LeadingZero,

    #[error("hex number > 64 bits")]
    Uint64Range,

    #[error("invalid hex string")]
    InvalidSyntax,

    #[error("quantity must be a JSON string")]
    NotAString,
}

/// `u64` with JSON-RPC hex quantity serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HexU64(pub u64);

impl HexU64 {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for HexU64 {
    fn from(value: u64) -> Self {
        HexU64(value)
    }
}

impl From<HexU64> for u64 {
    fn from(value: HexU64) -> Self {
        value.0
    }
}

impl fmt::Display for HexU64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl FromStr for HexU64 {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(QuantityError::EmptyString);
        }
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(QuantityError::MissingPrefix)?;
        if digits.is_empty() {
            return Err(QuantityError::EmptyNumber);
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(QuantityError::LeadingZero);
        }
        if digits.len() > MAX_U64_DIGITS {
            return Err(QuantityError::Uint64Range);
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(QuantityError::InvalidSyntax);
        }
        u64::from_str_radix(digits, 16)
            .map(HexU64)
            .map_err(|_| QuantityError::InvalidSyntax)
    }
}

/// Decode a JSON-RPC result value into a `u64`.
pub fn decode_quantity(value: &serde_json::Value) -> Result<u64, QuantityError> {
    value
        .as_str()
        .ok_or(QuantityError::NotAString)?
        .parse::<HexU64>()
        .map(HexU64::get)
}

/// Encode a `u64` as a JSON-RPC quantity string.
pub fn encode_quantity(value: u64) -> String {
    HexU64(value).to_string()
}
