//! Media service module
//!
//! The query facade. A [`MediaService`] owns its mode, its (possibly empty)
//! cache, and the pagination loop that walks the listing endpoint. The mode
//! is fixed when the service is constructed and cannot change afterwards —
//! ownership replaces the legacy first-caller-wins singleton.

mod types;

pub use types::FetchStats;

use crate::config::{FailurePolicy, ServiceConfig};
use crate::decode::{decode_page, MediaPage};
use crate::error::{Error, Result};
use crate::http::MediaClient;
use crate::pagination::PageCursor;
use crate::types::{count_matching, MediaItem, ServiceMode};
use tracing::{debug, error, info};

/// Service over the paginated media listing.
///
/// In cached mode the full listing is fetched once, inside [`connect`],
/// and every query filters the in-memory copy. In streaming mode every
/// query re-pages through the API and counts on the fly.
///
/// [`connect`]: MediaService::connect
pub struct MediaService {
    client: MediaClient,
    config: ServiceConfig,
    mode: ServiceMode,
    cache: Vec<MediaItem>,
    stats: FetchStats,
}

impl MediaService {
    /// Construct a service in the given mode.
    ///
    /// In cached mode this populates the cache before returning, so a
    /// constructed cached service is always ready to answer queries without
    /// further network traffic.
    pub async fn connect(config: ServiceConfig, mode: ServiceMode) -> Result<Self> {
        let client = MediaClient::new(&config)?;
        let mut service = Self {
            client,
            config,
            mode,
            cache: Vec::new(),
            stats: FetchStats::default(),
        };

        if mode.is_cached() {
            service.populate().await?;
        }

        Ok(service)
    }

    /// The mode this service was constructed in
    pub fn mode(&self) -> ServiceMode {
        self.mode
    }

    /// Number of items held in the cache (0 in streaming mode)
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Fetch statistics from cache population (empty in streaming mode)
    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// Count the items whose HD flag equals `desired`.
    ///
    /// Cached mode filters the cache fresh on every call and performs no
    /// network traffic; streaming mode pages through the whole listing.
    pub async fn count(&self, desired: bool) -> Result<usize> {
        let (count, _) = self.count_with_stats(desired).await?;
        Ok(count)
    }

    /// Like [`count`](MediaService::count), also returning the fetch
    /// statistics of the run (for cached mode, those of the original
    /// population).
    pub async fn count_with_stats(&self, desired: bool) -> Result<(usize, FetchStats)> {
        match self.mode {
            ServiceMode::Cached => {
                let count = count_matching(&self.cache, desired)?;
                Ok((count, self.stats.clone()))
            }
            ServiceMode::Streaming => {
                let mut count = 0;
                let stats = self
                    .walk_pages(|page| {
                        count += count_matching(&page.response, desired)?;
                        Ok(())
                    })
                    .await?;
                Ok((count, stats))
            }
        }
    }

    /// All cached items with the HD flag set, in arrival order.
    ///
    /// Only available in cached mode; streaming mode has nothing to list.
    pub fn hd_media(&self) -> Result<Vec<MediaItem>> {
        self.select(true)
    }

    /// All cached items without the HD flag, in arrival order.
    pub fn non_hd_media(&self) -> Result<Vec<MediaItem>> {
        self.select(false)
    }

    fn select(&self, desired: bool) -> Result<Vec<MediaItem>> {
        if !self.mode.is_cached() {
            return Err(Error::CacheDisabled);
        }

        let mut selected = Vec::new();
        for item in &self.cache {
            if item.matches_hd(desired)? {
                selected.push(item.clone());
            }
        }
        Ok(selected)
    }

    /// Fetch every page and append every item to the cache in arrival order.
    async fn populate(&mut self) -> Result<()> {
        let mut cache = Vec::new();
        let stats = self
            .walk_pages(|page| {
                for item in page.response {
                    debug!(id = %item.id, "cached media item");
                    cache.push(item);
                }
                Ok(())
            })
            .await?;

        info!(
            items = cache.len(),
            pages = stats.pages_fetched,
            failed = stats.failed_pages,
            "cache populated"
        );

        self.cache = cache;
        self.stats = stats;
        Ok(())
    }

    /// Drive the pagination loop, handing each decoded page to `on_page`.
    ///
    /// Do/while shape: the first fetch is unconditional, then the loop keeps
    /// going while the cursor's continuation flag holds. A fetch or decode
    /// failure is ruled on by the configured [`FailurePolicy`]; errors out
    /// of `on_page` (such as a missing HD flag) always abort.
    async fn walk_pages<F>(&self, mut on_page: F) -> Result<FetchStats>
    where
        F: FnMut(MediaPage) -> Result<()>,
    {
        let mut cursor = PageCursor::new(self.config.per_page);
        let mut stats = FetchStats::default();

        loop {
            let outcome = self.fetch_and_decode(&cursor).await;
            stats.add_page();

            match outcome {
                Ok(page) => {
                    stats.add_items(page.len());
                    debug!(
                        page = cursor.page(),
                        items = page.len(),
                        more = page.more,
                        "completed processing page"
                    );
                    cursor.record_page(page.more);
                    on_page(page)?;
                }
                Err(err) if err.is_page_failure() => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::SkipAndContinue => {
                        error!(page = cursor.page(), %err, "page failed, skipping");
                        stats.add_failed_page();
                        cursor.record_failure();
                    }
                },
                Err(err) => return Err(err),
            }

            if !cursor.should_continue() {
                break;
            }
        }

        Ok(stats)
    }

    async fn fetch_and_decode(&self, cursor: &PageCursor) -> Result<MediaPage> {
        let payload = self
            .client
            .fetch_page(cursor.per_page(), cursor.page())
            .await?;
        decode_page(&payload)
    }
}

impl std::fmt::Debug for MediaService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaService")
            .field("mode", &self.mode)
            .field("cached_len", &self.cache.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
