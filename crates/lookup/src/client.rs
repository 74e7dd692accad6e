use async_trait::async_trait;
use media_tracker_core::{DEFAULT_OMDB_BASE_URL, LookupRecord};

use crate::TitleLookup;
use crate::error::LookupError;
use crate::omdb_types::OmdbResponse;

/// Client for the OMDb title endpoint.
pub struct OmdbClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OmdbClient {
    /// Creates a client against `base_url` (trailing slashes are dropped).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(api_key: String, base_url: String) -> Result<Self, LookupError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client =
            reqwest::Client::builder().build().map_err(|e| LookupError::ClientInit(e.to_string()))?;
        Ok(Self { client, api_key, base_url })
    }

    /// Client against the public OMDb endpoint.
    ///
    /// # Errors
    /// See [`OmdbClient::new`].
    pub fn with_default_url(api_key: String) -> Result<Self, LookupError> {
        Self::new(api_key, DEFAULT_OMDB_BASE_URL.to_owned())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a single title. The body is parsed regardless of HTTP status,
    /// since OMDb reports bad keys and misses in the JSON itself.
    ///
    /// # Errors
    /// `NotFound` when OMDb has no match, otherwise transport or parse failures.
    pub async fn fetch_title(&self, title: &str) -> Result<LookupRecord, LookupError> {
        tracing::debug!(title, "OMDb lookup");
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let body = response.text().await?;
        let parsed: OmdbResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::JsonParse {
                context: format!("OMDb response (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        if parsed.is_not_found() {
            let message = parsed.error.unwrap_or_else(|| "Movie not found!".to_owned());
            return Err(LookupError::NotFound(message));
        }

        parsed.into_record().ok_or_else(|| LookupError::MissingField("Title".to_owned()))
    }
}

#[async_trait]
impl TitleLookup for OmdbClient {
    async fn lookup(&self, title: &str) -> Result<LookupRecord, LookupError> {
        self.fetch_title(title).await
    }
}

pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        s.get(..end).unwrap_or(s)
    }
}
