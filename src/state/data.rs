/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the search API and the UI layer.

use serde::Deserialize;

/// Number of hits the search API returns per page
pub const PAGE_SIZE: u32 = 12;

/// A single image record returned by the search API
///
/// Hits are taken verbatim from the response and never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hit {
    /// Unique id assigned by the search service
    pub id: u64,
    /// Medium sized rendition used for the gallery tile
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Full size rendition shown in the overlay
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Comma separated tags, used as the tile caption
    #[serde(default)]
    pub tags: String,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// Total number of images matching the keyword
    pub total: u32,
    /// Hits on the requested page
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// A fetch the controller wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub keyword: String,
    pub page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_response() {
        let json = r#"{
            "total": 4462,
            "totalHits": 500,
            "hits": [{
                "id": 195893,
                "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                "tags": "blossom, bloom, flower",
                "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                "likes": 40
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.total, 4462);
        assert_eq!(response.hits.len(), 1);
        assert_eq!(response.hits[0].id, 195893);
        assert_eq!(response.hits[0].tags, "blossom, bloom, flower");
        assert!(response.hits[0].large_image_url.ends_with("_1280.jpg"));
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let json = r#"{"id": 1, "webformatURL": "a", "largeImageURL": "b"}"#;
        let hit: Hit = serde_json::from_str(json).unwrap();
        assert!(hit.tags.is_empty());
    }
}
