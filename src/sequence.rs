//! Validation and normalization of raw DNA input.

use std::collections::BTreeSet;
use std::fmt;

use log::warn;

use crate::{AlignerError, Result};

/// Permitted bases, in canonical (uppercase) form.
pub const ALPHABET: [u8; 4] = [b'A', b'T', b'G', b'C'];

/// Marker emitted in aligned output where one side has no symbol.
pub const GAP: u8 = b'-';

/// An uppercase DNA sequence guaranteed to contain only [`ALPHABET`] bases.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    /// Uppercases `raw` and checks every symbol against [`ALPHABET`].
    ///
    /// Fails with [`AlignerError::InvalidSequence`] carrying the distinct
    /// offending symbols after case normalization. An empty input is valid.
    pub fn new(raw: &str) -> Result<Self> {
        let mut data = Vec::with_capacity(raw.len());
        let mut invalid = BTreeSet::new();

        for symbol in raw.chars().flat_map(char::to_uppercase) {
            match u8::try_from(symbol) {
                Ok(base) if ALPHABET.contains(&base) => data.push(base),
                _ => {
                    invalid.insert(symbol);
                }
            }
        }

        if !invalid.is_empty() {
            warn!("Rejected sequence with {} invalid base(s)", invalid.len());
            return Err(AlignerError::InvalidSequence { symbols: invalid });
        }

        Ok(Self { data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only ALPHABET bytes are ever stored.
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}
