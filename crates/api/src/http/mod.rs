use async_trait::async_trait;
use items_core::model::{Item, ItemDraft, ItemId};
use reqwest::{Client, Response};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::resource::{ApiError, ItemsApi};

mod detail;

/// Fixed path of the collection resource, relative to the configured origin.
pub const ITEMS_PATH: &str = "/api/items";

pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

pub const ORIGIN_ENV: &str = "ITEMS_API_URL";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiConfigError {
    #[error("invalid api url {raw:?}: {reason}")]
    InvalidUrl { raw: String, reason: String },
    #[error("unsupported api url scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),
}

/// Where the collection resource lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    origin: Url,
}

impl ApiConfig {
    /// Parse an origin such as `http://localhost:8000`.
    ///
    /// # Errors
    ///
    /// Returns `ApiConfigError` for unparsable URLs or non-HTTP schemes.
    pub fn new(origin: &str) -> Result<Self, ApiConfigError> {
        let raw = origin.trim();
        let origin = Url::parse(raw).map_err(|e| ApiConfigError::InvalidUrl {
            raw: raw.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(origin.scheme(), "http" | "https") {
            return Err(ApiConfigError::UnsupportedScheme(origin.scheme().to_owned()));
        }
        Ok(Self { origin })
    }

    #[must_use]
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}{ITEMS_PATH}", self.origin.as_str().trim_end_matches('/'))
    }

    #[must_use]
    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/{id}", self.collection_url())
    }
}

/// `ItemsApi` over HTTP/JSON.
#[derive(Clone)]
pub struct HttpItemsApi {
    client: Client,
    config: ApiConfig,
}

impl HttpItemsApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    #[must_use]
    pub fn with_client(config: ApiConfig, client: Client) -> Self {
        Self { client, config }
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    ApiError::Transport(err.to_string())
}

fn decode(err: reqwest::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Pass 2xx responses through; turn anything else into `ApiError::Status`.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.bytes().await.unwrap_or_default();
    let detail = detail::parse_detail(&body);
    warn!(status = status.as_u16(), %url, detail = ?detail, "items request rejected");
    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

#[async_trait]
impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let url = self.config.collection_url();
        debug!(method = "GET", %url, "items request");
        let response = self.client.get(&url).send().await.map_err(transport)?;
        let items: Vec<Item> = check_status(response).await?.json().await.map_err(decode)?;
        debug!(count = items.len(), "items listed");
        Ok(items)
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<Item, ApiError> {
        let url = self.config.collection_url();
        debug!(method = "POST", %url, "items request");
        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await?.json().await.map_err(decode)
    }

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<Item, ApiError> {
        let url = self.config.item_url(id);
        debug!(method = "PUT", %url, "items request");
        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await?.json().await.map_err(decode)
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ApiError> {
        let url = self.config.item_url(id);
        debug!(method = "DELETE", %url, "items request");
        let response = self.client.delete(&url).send().await.map_err(transport)?;
        check_status(response).await?;
        Ok(())
    }
}
