//! Serialization and deserialization of the persisted collection.
//!
//! The blob is JSON text so it can live in any string-keyed store.

use crate::stored::{AnyShape, StoredCollection};

/// Error type for codec encode/decode operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Encodes a [`StoredCollection`] into its JSON text form.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the collection cannot be serialized.
pub fn encode(collection: &StoredCollection) -> Result<String, CodecError> {
    serde_json::to_string(collection).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Decodes a [`StoredCollection`] from JSON text.
///
/// Accepts the `{ "lists": [...] }` object, the legacy bare array of lists,
/// and the single-list array of tasks.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the text matches none of them.
pub fn decode(text: &str) -> Result<StoredCollection, CodecError> {
    serde_json::from_str::<AnyShape>(text)
        .map(StoredCollection::from)
        .map_err(|e| CodecError::Serialization(e.to_string()))
}
