//! Service types

/// Statistics from one pagination run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Total page fetches attempted, successful or not
    pub pages_fetched: u32,
    /// Items received across all successfully decoded pages
    pub items_fetched: usize,
    /// Pages that failed to fetch or decode
    pub failed_pages: u32,
}

impl FetchStats {
    /// Record one page fetch attempt
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Record items received from a decoded page
    pub fn add_items(&mut self, count: usize) {
        self.items_fetched += count;
    }

    /// Record a page that failed to fetch or decode
    pub fn add_failed_page(&mut self) {
        self.failed_pages += 1;
    }
}
