//! Pagination module
//!
//! Tracks position in the paginated listing: 1-based page number, fixed page
//! size, and the last known continuation flag. The loop shape is do/while —
//! the first fetch is unconditional, and the flag is consulted only after
//! each page has been handled.

mod cursor;

pub use cursor::PageCursor;
