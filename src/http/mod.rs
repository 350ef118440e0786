//! HTTP transport module
//!
//! One GET per page against the listing endpoint, response body parsed as a
//! JSON value. Failures are explicit errors; there is deliberately no retry,
//! backoff, or rate limiting here.

mod client;

pub use client::MediaClient;
