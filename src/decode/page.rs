//! Wire-format page envelope and its decoder

use crate::error::{Error, Result};
use crate::types::{JsonValue, MediaItem};
use serde::Deserialize;

/// One page of the listing as returned by the server.
///
/// Item order is the server's; it is never re-sorted.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaPage {
    /// Server-reported continuation flag
    pub more: bool,

    /// Items on this page, in arrival order
    pub response: Vec<MediaItem>,
}

impl MediaPage {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.response.len()
    }

    /// Check if this page carries no items
    pub fn is_empty(&self) -> bool {
        self.response.is_empty()
    }
}

/// Decode a parsed JSON value into a [`MediaPage`].
///
/// The payload must be an object carrying a boolean `more` and an array
/// `response`; both are required, matching the shapes the pagination loop
/// can act on.
pub fn decode_page(payload: &JsonValue) -> Result<MediaPage> {
    if !payload.is_object() {
        return Err(Error::decode("payload is not a JSON object"));
    }

    serde_json::from_value(payload.clone()).map_err(|e| Error::decode(e.to_string()))
}
