//! Page cursor state

/// Tracks position and continuation state while walking the listing.
///
/// Page numbering starts at 1 and advances by exactly 1 per fetch, whether
/// the fetch succeeded or not. The continuation flag starts false and is
/// only ever updated from a successfully decoded page; a failed page leaves
/// it at its last known value. That stale-flag rule is the legacy quirk the
/// skip-and-continue policy preserves: a failure on the first page stops the
/// run (flag still false), and a failure mid-run costs one extra iteration
/// (flag still true).
#[derive(Debug, Clone)]
pub struct PageCursor {
    page: u32,
    per_page: u32,
    has_more: bool,
    pages_visited: u32,
}

impl PageCursor {
    /// Create a cursor positioned on the first page
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            has_more: false,
            pages_visited: 0,
        }
    }

    /// The page number the next fetch should request (1-based)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The fixed page size for every request
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of fetches performed so far
    pub fn pages_visited(&self) -> u32 {
        self.pages_visited
    }

    /// Record a successfully decoded page and advance.
    ///
    /// `more` is the server-reported continuation flag for the page just
    /// handled.
    pub fn record_page(&mut self, more: bool) {
        self.has_more = more;
        self.advance();
    }

    /// Record a failed fetch/decode and advance.
    ///
    /// The continuation flag deliberately keeps its last known value.
    pub fn record_failure(&mut self) {
        self.advance();
    }

    /// Whether the loop should fetch another page.
    ///
    /// Checked after each iteration; the first fetch never consults it.
    pub fn should_continue(&self) -> bool {
        self.has_more
    }

    fn advance(&mut self) {
        self.page += 1;
        self.pages_visited += 1;
    }
}
