//! # media-census
//!
//! Fetches a paginated media listing from a remote JSON API and counts the
//! items matching the high-definition flag, optionally caching the full
//! listing in memory.
//!
//! The service runs in one of two modes, fixed at construction:
//!
//! - **Cached**: every page is fetched once up front; queries filter the
//!   in-memory copy and never touch the network again.
//! - **Streaming**: every query re-pages through the API and counts on the
//!   fly, retaining nothing.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use media_census::config::ServiceConfig;
//! use media_census::service::MediaService;
//! use media_census::types::ServiceMode;
//!
//! #[tokio::main]
//! async fn main() -> media_census::Result<()> {
//!     let config = ServiceConfig::default();
//!     let service = MediaService::connect(config, ServiceMode::Streaming).await?;
//!
//!     let hd = service.count(true).await?;
//!     let non_hd = service.count(false).await?;
//!     println!("HD Media Count={hd}");
//!     println!("Non HD Media Count={non_hd}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! cli ──> service (MediaService: mode, cache, count/list)
//!             │
//!      ┌──────┴──────┐
//!      │  pagination │  PageCursor: 1-based pages, do/while continuation
//!      ├─────────────┤
//!      │    http     │  one GET per page, JSON body
//!      ├─────────────┤
//!      │   decode    │  payload -> MediaPage { more, response }
//!      └─────────────┘
//! ```

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and the HD-flag predicate
pub mod types;

/// Service configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Page decoding
pub mod decode;

/// Pagination state
pub mod pagination;

/// The media service (query facade)
pub mod service;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use service::MediaService;
pub use types::{MediaFlags, MediaItem, ServiceMode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
