//! Common types for media-census
//!
//! The wire-format item types and the HD-flag predicate that drives both
//! counting and listing. Only `id` and `flags.hd` are interpreted; every
//! other field the server sends is preserved opaquely.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Media Item
// ============================================================================

/// Nested flags structure on a media item.
///
/// `hd` is modelled as an explicit `Option`: the upstream API always sends
/// it, but an item without it is a hard error at filter time rather than a
/// silent default (see [`MediaItem::matches_hd`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFlags {
    /// High-definition availability
    pub hd: Option<bool>,

    /// Any other flag fields, preserved as-is
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// One media item as returned by the listing API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Server-assigned identifier
    pub id: String,

    /// Nested flags structure
    #[serde(default)]
    pub flags: MediaFlags,

    /// All remaining wire fields, preserved as-is
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl MediaItem {
    /// Check whether this item's HD flag equals `desired`.
    ///
    /// Returns [`Error::MissingHdFlag`] when `flags.hd` is absent. This
    /// error always propagates to the caller; the skip-and-continue failure
    /// policy only covers page fetch/decode failures.
    pub fn matches_hd(&self, desired: bool) -> Result<bool> {
        match self.flags.hd {
            Some(hd) => Ok(hd == desired),
            None => Err(Error::missing_hd_flag(&self.id)),
        }
    }
}

/// Count the items in `items` whose HD flag equals `desired`.
pub fn count_matching(items: &[MediaItem], desired: bool) -> Result<usize> {
    let mut count = 0;
    for item in items {
        if item.matches_hd(desired)? {
            count += 1;
        }
    }
    Ok(count)
}

// ============================================================================
// Service Mode
// ============================================================================

/// Service configuration mode, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceMode {
    /// Fetch all pages once up front and answer queries from memory
    Cached,
    /// Re-page through the API on every query, retaining nothing
    #[default]
    Streaming,
}

impl ServiceMode {
    /// Check if this mode retains fetched items
    pub fn is_cached(self) -> bool {
        matches!(self, Self::Cached)
    }
}
