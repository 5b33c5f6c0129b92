use reqwest::Url;
use thiserror::Error;
use tracing::debug;

use crate::config::Settings;
use crate::state::data::{SearchResponse, PAGE_SIZE};

/// Errors raised while talking to the image search service
///
/// Variants carry rendered messages so results can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no API key configured, set PIXABAY_API_KEY")]
    MissingApiKey,
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("service returned status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

/// Thin async wrapper around one GET endpoint
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl Client {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Build the request URL for one page of results
    pub fn search_url(&self, keyword: &str, page: u32) -> Result<Url, ApiError> {
        let key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;
        let page = page.to_string();
        let per_page = PAGE_SIZE.to_string();

        Url::parse_with_params(
            &self.endpoint,
            [
                ("key", key),
                ("q", keyword),
                ("image_type", "photo"),
                ("orientation", "horizontal"),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
            ],
        )
        .map_err(|e| ApiError::InvalidEndpoint(e.to_string()))
    }

    /// Fetch one page of hits for `keyword`
    ///
    /// Not cached and not deduplicated: every call hits the network.
    pub async fn fetch_images(&self, keyword: &str, page: u32) -> Result<SearchResponse, ApiError> {
        let url = self.search_url(keyword, page)?;
        debug!(keyword, page, "Requesting search page");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.json::<SearchResponse>().await?)
    }

    /// Download the raw bytes behind an image URL
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> Client {
        let settings = Settings {
            api_key: api_key.map(str::to_string),
            ..Settings::default()
        };
        Client::new(&settings)
    }

    #[test]
    fn test_search_url_contains_query() {
        let url = client(Some("secret")).search_url("red fox", 3).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(url.host_str(), Some("pixabay.com"));
        assert!(pairs.contains(&("key".into(), "secret".into())));
        assert!(pairs.contains(&("q".into(), "red fox".into())));
        assert!(pairs.contains(&("page".into(), "3".into())));
        assert!(pairs.contains(&("per_page".into(), "12".into())));
    }

    #[test]
    fn test_search_url_requires_api_key() {
        assert_eq!(client(None).search_url("dog", 1), Err(ApiError::MissingApiKey));
    }

    #[test]
    fn test_invalid_endpoint() {
        let settings = Settings {
            api_key: Some("secret".into()),
            endpoint: "not a url".into(),
            ..Settings::default()
        };
        let result = Client::new(&settings).search_url("dog", 1);
        assert!(matches!(result, Err(ApiError::InvalidEndpoint(_))));
    }

    #[tokio::test]
    async fn test_fetch_without_key_fails_before_network() {
        let result = client(None).fetch_images("dog", 1).await;
        assert_eq!(result, Err(ApiError::MissingApiKey));
    }
}
