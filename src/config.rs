//! Service configuration
//!
//! Holds everything the service needs to reach the listing endpoint and
//! drive pagination: base URL, app key, page size, request timeout, and the
//! failure policy applied when a page fetch or decode fails.

use std::time::Duration;

/// Default listing endpoint (the legacy service URL)
pub const DEFAULT_BASE_URL: &str = "http://api.viki.io/v4/videos.json";

/// Default app key carried as a query parameter
pub const DEFAULT_APP_KEY: &str = "100250a";

/// Default number of items requested per page
pub const DEFAULT_PER_PAGE: u32 = 10;

/// What to do when a single page fails to fetch or decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Surface the error to the caller immediately
    #[default]
    Abort,

    /// Log the failure, count the page as zero items, and keep paginating on
    /// the last known continuation flag. This replicates the legacy
    /// behavior, stale-flag quirk included: a failure leaves `has_more`
    /// untouched, which can cost one wasted iteration or stop a run early.
    SkipAndContinue,
}

/// Configuration for the media service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listing endpoint URL (without query parameters)
    pub base_url: String,
    /// App key sent as the `app` query parameter
    pub app_key: String,
    /// Items requested per page; must be at least 1
    pub per_page: u32,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Failure policy for page fetch/decode errors
    pub failure_policy: FailurePolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_key: DEFAULT_APP_KEY.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(30),
            user_agent: format!("media-census/{}", env!("CARGO_PKG_VERSION")),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl ServiceConfig {
    /// Create a new config builder
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }
}

/// Builder for [`ServiceConfig`]
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    /// Set the listing endpoint URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the app key
    pub fn app_key(mut self, key: impl Into<String>) -> Self {
        self.config.app_key = key.into();
        self
    }

    /// Set the page size
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.config.per_page = per_page;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the failure policy
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Build the config
    pub fn build(self) -> ServiceConfig {
        self.config
    }
}
