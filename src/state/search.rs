/// Search, pagination and overlay state machine
///
/// Every user event and every completed fetch maps to one method here.
/// Methods never touch the network: a transition that needs data returns a
/// [`FetchRequest`] and the caller reports the outcome back through
/// [`SearchState::search_completed`] or [`SearchState::more_loaded`].

use tracing::{debug, info, warn};

use super::data::{FetchRequest, Hit, SearchResponse, PAGE_SIZE};
use crate::api::ApiError;

pub const MSG_EMPTY_KEYWORD: &str = "Please enter something";
pub const MSG_NOT_FOUND: &str = "Images not found";
pub const MSG_FETCH_FAILED: &str = "Failed to load images";

/// Capability used to raise user-visible failure notifications
pub trait Notifier {
    fn notify_failure(&mut self, message: &str);
}

/// All mutable state of the search screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Hits currently shown in the gallery, in display order
    pub images: Vec<Hit>,
    /// Total matches for the current keyword, `None` until the first page arrives
    pub total_images: Option<u32>,
    /// Last requested page, starting at 1
    pub page: u32,
    pub loading: bool,
    pub show_modal: bool,
    /// URL of the image shown in the overlay
    pub large_image: Option<String>,
    /// Normalized keyword of the current search
    pub keyword: String,
    /// Message of the last failed fetch
    pub error: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            total_images: None,
            page: 1,
            loading: false,
            show_modal: false,
            large_image: None,
            keyword: String::new(),
            error: None,
        }
    }
}

/// Trim and lowercase a raw keyword
pub fn normalize_keyword(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search for `raw`.
    ///
    /// Returns the first page request, or `None` when the keyword is empty
    /// after normalization (the gallery is cleared and the user notified).
    pub fn search_by_keyword(
        &mut self,
        raw: &str,
        notifier: &mut impl Notifier,
    ) -> Option<FetchRequest> {
        let keyword = normalize_keyword(raw);
        if keyword.is_empty() {
            notifier.notify_failure(MSG_EMPTY_KEYWORD);
            self.clear_images();
            return None;
        }

        info!(keyword = %keyword, "Searching images");
        self.loading = true;
        self.page = 1;
        self.total_images = None;
        self.error = None;
        self.keyword = keyword;

        Some(FetchRequest {
            keyword: self.keyword.clone(),
            page: 1,
        })
    }

    /// Apply the outcome of the first page fetch
    pub fn search_completed(
        &mut self,
        result: Result<SearchResponse, ApiError>,
        notifier: &mut impl Notifier,
    ) {
        match result {
            Ok(response) if response.hits.is_empty() => {
                notifier.notify_failure(MSG_NOT_FOUND);
                self.clear_images();
            }
            Ok(response) => {
                debug!(hits = response.hits.len(), total = response.total, "Search completed");
                self.images = response.hits;
                self.total_images = Some(response.total);
                self.error = None;
            }
            Err(err) => self.record_error(err, notifier),
        }
        self.loading = false;
    }

    /// Request the next page for the current keyword.
    ///
    /// The page counter is advanced before the fetch resolves. Returns `None`
    /// when no search has been made yet.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if self.keyword.is_empty() {
            debug!("Load more ignored without a keyword");
            return None;
        }

        self.loading = true;
        self.page += 1;
        info!(keyword = %self.keyword, page = self.page, "Loading more images");

        Some(FetchRequest {
            keyword: self.keyword.clone(),
            page: self.page,
        })
    }

    /// Apply the outcome of a next page fetch
    pub fn more_loaded(
        &mut self,
        result: Result<SearchResponse, ApiError>,
        notifier: &mut impl Notifier,
    ) {
        match result {
            Ok(response) if response.hits.is_empty() => {
                notifier.notify_failure(MSG_NOT_FOUND);
                self.clear_images();
            }
            Ok(response) => {
                debug!(hits = response.hits.len(), page = self.page, "Page appended");
                self.images.extend(response.hits);
                self.error = None;
            }
            Err(err) => {
                // Roll back so the next attempt asks for the same page again
                self.page = self.page.saturating_sub(1).max(1);
                self.record_error(err, notifier);
            }
        }
        self.loading = false;
    }

    /// Flip overlay visibility. Opening requires a selected image.
    pub fn toggle_modal(&mut self) {
        if !self.show_modal && self.large_image.is_none() {
            debug!("No image selected, overlay stays closed");
            return;
        }
        self.show_modal = !self.show_modal;
    }

    /// Remember the full size URL of the hit at `index`
    ///
    /// Returns `false` and leaves the selection untouched when the index is
    /// out of range or the hit has no full size URL.
    pub fn select_image(&mut self, index: usize) -> bool {
        match self.images.get(index) {
            Some(hit) if !hit.large_image_url.is_empty() => {
                self.large_image = Some(hit.large_image_url.clone());
                true
            }
            Some(hit) => {
                warn!(id = hit.id, "Hit has no full size URL");
                false
            }
            None => {
                warn!(index, len = self.images.len(), "Selected image out of range");
                false
            }
        }
    }

    /// Gallery click: select the hit at `index` and reveal the overlay.
    /// A rejected selection leaves the overlay closed.
    pub fn open_image(&mut self, index: usize) -> bool {
        if !self.select_image(index) {
            return false;
        }
        if !self.show_modal {
            self.toggle_modal();
        }
        true
    }

    /// Whether the service is known to hold more pages than are shown
    pub fn has_more_images(&self) -> bool {
        match self.total_images {
            Some(total) => u64::from(total) > u64::from(self.page) * u64::from(PAGE_SIZE),
            None => false,
        }
    }

    fn clear_images(&mut self) {
        self.images.clear();
        self.total_images = None;
    }

    fn record_error(&mut self, err: ApiError, notifier: &mut impl Notifier) {
        warn!(keyword = %self.keyword, page = self.page, error = %err, "Image fetch failed");
        notifier.notify_failure(MSG_FETCH_FAILED);
        self.error = Some(err.to_string());
    }
}
