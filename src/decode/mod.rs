//! Page decoder module
//!
//! Turns a parsed JSON value into the typed page envelope: the `more`
//! continuation flag and the ordered `response` item list. Anything else —
//! a non-object payload, a missing field, a malformed item — is a decode
//! error for the failure policy to rule on.

mod page;

pub use page::{decode_page, MediaPage};

#[cfg(test)]
mod tests;
