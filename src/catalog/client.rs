use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::catalog::error::FetchError;
use crate::catalog::types::{MovieDetail, MoviePage, PageRequest};
use crate::catalog::wire;
use crate::config::{ApiConfig, SecureString};

/// Source of catalog data consumed by the store.
///
/// Implementations must map every failure to a [`FetchError`] and never retry.
#[async_trait]
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetch one page of a listing, clamped and truncated per the request.
    async fn fetch_page(&self, request: &PageRequest) -> Result<MoviePage, FetchError>;

    /// Fetch the full record for one movie. `id` is forwarded verbatim.
    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, FetchError>;
}

/// HTTP client for the TMDB v3 API.
pub struct TmdbClient {
    http: Client,
    base_url: String,
    language: String,
    token: SecureString,
}

impl TmdbClient {
    /// Build a client. An empty `token` is accepted and sent as an empty bearer.
    pub fn new(api: &ApiConfig, token: SecureString) -> reqwest::Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds))
            .timeout(Duration::from_secs(api.timeout_seconds))
            .user_agent(concat!("moviebase/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            language: api.language.clone(),
            token,
        })
    }

    /// URL of a listing page. The page number is clamped before it is encoded.
    pub fn page_url(&self, request: &PageRequest) -> Result<Url, FetchError> {
        let mut url = self.endpoint(request.collection.api_path())?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(query) = request.query.as_deref() {
                pairs.append_pair("query", query);
            }
            pairs.append_pair("page", &request.wire_page().to_string());
        }
        Ok(url)
    }

    pub fn detail_url(&self, id: &str) -> Result<Url, FetchError> {
        let mut url = self.endpoint(&format!("movie/{id}"))?;
        url.query_pairs_mut()
            .append_pair("language", &self.language)
            .append_pair("append_to_response", "credits");
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        let raw = format!("{}/3/{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| FetchError::Transport {
            message: format!("Invalid URL '{}': {}", raw, e),
        })
    }

    async fn get_json(&self, url: Url) -> Result<Value, FetchError> {
        tracing::debug!(
            url = %url,
            token = %self.token.preview(),
            "Catalog request"
        );

        let response = self
            .http
            .get(url.clone())
            .bearer_auth(self.token.expose())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Catalog request failed without response");
                FetchError::transport(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Catalog request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| FetchError::Decode {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<MoviePage, FetchError> {
        let url = self.page_url(request)?;
        let body = self.get_json(url).await?;
        let page = wire::movie_page(&body, request.per_page);
        tracing::debug!(
            collection = request.collection.api_path(),
            items = page.items.len(),
            page = page.page,
            total_pages = page.total_pages,
            "Catalog page received"
        );
        Ok(page)
    }

    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, FetchError> {
        let url = self.detail_url(id)?;
        let body = self.get_json(url).await?;
        wire::movie_detail(&body).ok_or_else(|| FetchError::Decode {
            message: format!("Movie {id}: response is not a JSON object"),
        })
    }
}
