/// Image preview module
///
/// This module handles:
/// - Downloading thumbnail and full size renditions
/// - Decoding them off the UI thread
/// - Downscaling thumbnails for the gallery grid

pub mod decode;
pub mod fetch;

pub use fetch::{fetch_preview, Preview, PreviewError};
