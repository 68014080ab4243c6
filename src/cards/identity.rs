//! Short, stable card identifiers.
//!
//! A card id is six base-36 symbols (`0-9A-Z`) taken from the low end of the
//! SHA-256 digest of the card's defining values. Ids are uppercase, so they
//! compare case-insensitively once parsed. Collisions are possible over the
//! 36^6 space; the id is a label, not a security boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::CardGenError;

/// Symbols of the id alphabet, in digit order.
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in a card id.
pub const ID_LEN: usize = 6;

/// 36^6; only the last six base-36 digits of the digest survive.
const ID_SPACE: u64 = 36u64.pow(ID_LEN as u32);

/// Six-symbol card identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId([u8; ID_LEN]);

impl CardId {
    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ever built from ALPHABET bytes.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    fn from_value(mut value: u64) -> Self {
        let mut out = [ALPHABET[0]; ID_LEN];
        for slot in out.iter_mut().rev() {
            *slot = ALPHABET[(value % 36) as usize];
            value /= 36;
        }
        Self(out)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.as_str())
    }
}

impl FromStr for CardId {
    type Err = CardGenError;

    /// Parse an id, accepting either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != ID_LEN {
            return Err(CardGenError::InvalidCardId(s.to_string()));
        }
        let mut out = [0u8; ID_LEN];
        for (slot, &b) in out.iter_mut().zip(bytes) {
            let upper = b.to_ascii_uppercase();
            if !ALPHABET.contains(&upper) {
                return Err(CardGenError::InvalidCardId(s.to_string()));
            }
            *slot = upper;
        }
        Ok(Self(out))
    }
}

impl TryFrom<String> for CardId {
    type Error = CardGenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.as_str().to_string()
    }
}

/// Canonical text form of a sequence of parts: `[a, b, c]`.
fn canonical<T: fmt::Display>(parts: &[T]) -> String {
    let joined = parts.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}

/// Derive the id of a sequence of card-defining values.
///
/// Deterministic for identical input; total over any displayable parts.
#[must_use]
pub fn hash_id<T: fmt::Display>(parts: &[T]) -> CardId {
    let digest = Sha256::digest(canonical(parts).as_bytes());

    // Big-endian digest modulo 36^6, by long division over the bytes.
    let remainder = digest
        .iter()
        .fold(0u64, |acc, &byte| ((acc << 8) | u64::from(byte)) % ID_SPACE);

    CardId::from_value(remainder)
}
