//! HTTP client for the paginated listing endpoint

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use reqwest::Client;
use url::Url;

/// Query parameter names expected by the listing API
const PARAM_APP: &str = "app";
const PARAM_PER_PAGE: &str = "per_page";
const PARAM_PAGE: &str = "page";

/// Thin client over the paginated media-listing endpoint.
///
/// Each call is a single blocking-until-complete GET; the only bound on a
/// request is the configured timeout.
#[derive(Debug, Clone)]
pub struct MediaClient {
    client: Client,
    base_url: Url,
    app_key: String,
}

impl MediaClient {
    /// Create a client from service configuration.
    ///
    /// Fails if the configured base URL does not parse or the underlying
    /// HTTP client cannot be built.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            base_url,
            app_key: config.app_key.clone(),
        })
    }

    /// Fetch one page of the listing and parse the body as a JSON value.
    ///
    /// `per_page` must be at least 1 and `page` numbering starts at 1.
    /// A non-2xx status, an unreadable body, or a body that is not valid
    /// JSON all return an error; the caller decides whether that aborts the
    /// pagination run.
    pub async fn fetch_page(&self, per_page: u32, page: u32) -> Result<JsonValue> {
        if per_page == 0 {
            return Err(Error::config("per_page must be at least 1"));
        }
        if page == 0 {
            return Err(Error::config("page numbering starts at 1"));
        }

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[
                (PARAM_APP, self.app_key.clone()),
                (PARAM_PER_PAGE, per_page.to_string()),
                (PARAM_PAGE, page.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        // reqwest hands the body back as UTF-8 text; parse it separately so
        // a malformed body surfaces as a JSON error rather than an HTTP one.
        let body = response.text().await?;
        let payload: JsonValue = serde_json::from_str(&body)?;

        tracing::debug!(page, per_page, "fetched listing page");
        Ok(payload)
    }

    /// The endpoint this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
