/// Image search API module
///
/// This module handles:
/// - Building search requests for the image search service
/// - Decoding result pages
/// - Downloading image renditions for previews

pub mod client;

pub use client::{ApiError, Client};
