//! Serialization layer. Defaults to JSON via serde_json.
//!
//! Implement [`Serializer`] if you need a different on-disk format.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Converts record collections to/from bytes for persistence.
pub trait Serializer: Send + Sync {
    /// Encode a record collection to bytes.
    fn serialize<T>(&self, records: &[T]) -> Result<Vec<u8>>
    where
        T: Serialize;

    /// Decode bytes back into a record collection.
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<Vec<T>>
    where
        T: DeserializeOwned;
}

/// JSON array serializer with optional pretty-printing.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact JSON (single line, no extra whitespace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printed JSON, two-space indent.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serializer for JsonSerializer {
    fn serialize<T>(&self, records: &[T]) -> Result<Vec<u8>>
    where
        T: Serialize,
    {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(records)
        } else {
            serde_json::to_vec(records)
        };
        bytes.map_err(|e| Error::Serialize(e.to_string()))
    }

    fn deserialize<T>(&self, bytes: &[u8]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(bytes).map_err(|e| Error::Malformed(e.to_string()))
    }
}
