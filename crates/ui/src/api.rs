//! The REST API as seen from the UI.

use async_trait::async_trait;
use media_tracker_core::{
    DEFAULT_API_BASE_URL, EntryUpdate, ListKind, LookupRecord, MediaEntry, NewMediaEntry,
    env_or_default,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::UiError;

/// Every call the UI makes. Implemented over HTTP by [`HttpMediaApi`].
#[async_trait]
pub trait MediaApi: Send + Sync {
    async fn search(&self, title: &str) -> Result<LookupRecord, UiError>;

    async fn list(&self, kind: ListKind) -> Result<Vec<MediaEntry>, UiError>;

    async fn create(&self, kind: ListKind, entry: &NewMediaEntry) -> Result<MediaEntry, UiError>;

    async fn update(
        &self,
        kind: ListKind,
        id: i32,
        update: &EntryUpdate,
    ) -> Result<MediaEntry, UiError>;

    /// Returns the row as it was before deletion.
    async fn delete(&self, kind: ListKind, id: i32) -> Result<MediaEntry, UiError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct DeleteBody {
    deleted: MediaEntry,
}

/// reqwest client for the media tracker REST API.
#[derive(Debug, Clone)]
pub struct HttpMediaApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMediaApi {
    pub fn new(base_url: &str) -> Result<Self, UiError> {
        let client =
            reqwest::Client::builder().build().map_err(|e| UiError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Client against `API_BASE_URL`, or `http://localhost:4000` when unset.
    pub fn from_env() -> Result<Self, UiError> {
        Self::new(&env_or_default("API_BASE_URL", DEFAULT_API_BASE_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, kind: ListKind) -> String {
        format!("{}/api/{}", self.base_url, kind.as_str())
    }

    fn entry_url(&self, kind: ListKind, id: i32) -> String {
        format!("{}/{id}", self.collection_url(kind))
    }

    async fn read<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, UiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body).ok().and_then(|b| b.error);
            tracing::debug!(status = status.as_u16(), ?message, context, "API call rejected");
            return Err(UiError::Api { status: status.as_u16(), message });
        }
        serde_json::from_str(&body)
            .map_err(|source| UiError::Decode { context: context.to_owned(), source })
    }
}

#[async_trait]
impl MediaApi for HttpMediaApi {
    async fn search(&self, title: &str) -> Result<LookupRecord, UiError> {
        let response = self
            .client
            .get(format!("{}/api/search", self.base_url))
            .query(&[("title", title)])
            .send()
            .await?;
        Self::read(response, "search result").await
    }

    async fn list(&self, kind: ListKind) -> Result<Vec<MediaEntry>, UiError> {
        let response = self.client.get(self.collection_url(kind)).send().await?;
        Self::read(response, kind.as_str()).await
    }

    async fn create(&self, kind: ListKind, entry: &NewMediaEntry) -> Result<MediaEntry, UiError> {
        let response = self.client.post(self.collection_url(kind)).json(entry).send().await?;
        Self::read(response, "created entry").await
    }

    async fn update(
        &self,
        kind: ListKind,
        id: i32,
        update: &EntryUpdate,
    ) -> Result<MediaEntry, UiError> {
        let response = self.client.put(self.entry_url(kind, id)).json(update).send().await?;
        Self::read(response, "updated entry").await
    }

    async fn delete(&self, kind: ListKind, id: i32) -> Result<MediaEntry, UiError> {
        let response = self.client.delete(self.entry_url(kind, id)).send().await?;
        let body: DeleteBody = Self::read(response, "delete result").await?;
        Ok(body.deleted)
    }
}
