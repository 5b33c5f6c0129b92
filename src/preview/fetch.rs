/// Async preview loading
/// Downloads with the shared API client and decodes on a blocking task
use iced::widget::image::Handle;
use thiserror::Error;
use tracing::debug;

use super::decode::decode;
use crate::api::{ApiError, Client};

#[derive(Debug, Clone, Error)]
pub enum PreviewError {
    #[error("download failed: {0}")]
    Download(#[from] ApiError),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("task join error: {0}")]
    Join(String),
}

/// A decoded image ready for display
#[derive(Debug, Clone)]
pub struct Preview {
    pub url: String,
    pub handle: Handle,
}

/// Download `url` and decode it, downscaling to `max_side` when given
pub async fn fetch_preview(
    client: Client,
    url: String,
    max_side: Option<u32>,
) -> Result<Preview, PreviewError> {
    let bytes = client.download(&url).await?;
    debug!(url = %url, bytes = bytes.len(), "Downloaded preview");

    // Spawn blocking task for CPU-bound work
    let decoded = tokio::task::spawn_blocking(move || decode(&bytes, max_side))
        .await
        .map_err(|e| PreviewError::Join(e.to_string()))?
        .map_err(|e| PreviewError::Decode(e.to_string()))?;

    Ok(Preview {
        url,
        handle: Handle::from_rgba(decoded.width, decoded.height, decoded.pixels),
    })
}
