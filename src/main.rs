use iced::keyboard::{self, key};
use iced::time::{self, Duration, Instant};
use iced::widget::image::Handle;
use iced::widget::{column, scrollable, stack, text};
use iced::{Element, Length, Subscription, Task, Theme};
use std::collections::HashMap;
use tracing::{info, warn};

mod api;
mod config;
mod logging;
mod preview;
mod state;
mod ui;

use api::{ApiError, Client};
use config::Settings;
use preview::{fetch_preview, Preview, PreviewError};
use state::data::{FetchRequest, SearchResponse};
use state::search::SearchState;
use ui::toast::Toasts;

/// Main application state
struct ImageFinder {
    /// Search, pagination and overlay state
    search: SearchState,
    /// Text currently in the search box
    query: String,
    client: Client,
    settings: Settings,
    toasts: Toasts,
    /// Decoded thumbnails by hit id; `None` while downloading or after a failure
    thumbnails: HashMap<u64, Option<Handle>>,
    /// Decoded full size image for the overlay
    large_preview: Option<Preview>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Search box text edited
    QueryChanged(String),
    /// Search submitted with the raw text
    Search(String),
    /// First page fetch finished
    SearchCompleted(Result<SearchResponse, ApiError>),
    /// User clicked "Load more"
    LoadMore,
    /// Next page fetch finished
    MoreLoaded(Result<SearchResponse, ApiError>),
    /// A gallery thumbnail finished downloading
    ThumbnailLoaded(u64, Result<Preview, PreviewError>),
    /// User clicked the tile at this index
    OpenImage(usize),
    /// The full size image finished downloading
    LargeImageLoaded(Result<Preview, PreviewError>),
    /// Backdrop or close button clicked
    ToggleModal,
    /// Escape pressed
    CloseModal,
    DismissToast(usize),
    Tick(Instant),
}

impl ImageFinder {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load().unwrap_or_else(|err| {
            warn!(error = %err, "Ignoring settings file");
            let mut settings = Settings::default();
            settings.apply_env(|name| std::env::var(name).ok());
            settings
        });

        if settings.api_key.is_none() {
            warn!(
                "No API key configured, searches will fail until {} is set",
                config::ENV_API_KEY
            );
        }
        info!(endpoint = %settings.endpoint, "Image finder initialized");

        let app = ImageFinder {
            search: SearchState::new(),
            query: String::new(),
            client: Client::new(&settings),
            toasts: Toasts::new(Duration::from_secs(settings.toast_timeout_secs)),
            settings,
            thumbnails: HashMap::new(),
            large_preview: None,
        };

        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }
            Message::Search(raw) => match self.search.search_by_keyword(&raw, &mut self.toasts) {
                Some(request) => self.fetch(request, Message::SearchCompleted),
                None => {
                    self.thumbnails.clear();
                    Task::none()
                }
            },
            Message::SearchCompleted(result) => {
                self.search.search_completed(result, &mut self.toasts);
                self.retain_thumbnails();
                self.load_thumbnails()
            }
            Message::LoadMore => match self.search.load_more() {
                Some(request) => self.fetch(request, Message::MoreLoaded),
                None => Task::none(),
            },
            Message::MoreLoaded(result) => {
                self.search.more_loaded(result, &mut self.toasts);
                self.retain_thumbnails();
                self.load_thumbnails()
            }
            Message::ThumbnailLoaded(id, result) => {
                match result {
                    Ok(preview) => {
                        if let Some(slot) = self.thumbnails.get_mut(&id) {
                            *slot = Some(preview.handle);
                        }
                    }
                    Err(err) => warn!(id, error = %err, "Thumbnail failed"),
                }
                Task::none()
            }
            Message::OpenImage(index) => {
                if self.search.open_image(index) {
                    self.load_large_image()
                } else {
                    Task::none()
                }
            }
            Message::LargeImageLoaded(result) => {
                match result {
                    Ok(preview) => self.large_preview = Some(preview),
                    Err(err) => warn!(error = %err, "Full size image failed"),
                }
                Task::none()
            }
            Message::ToggleModal => {
                self.search.toggle_modal();
                Task::none()
            }
            Message::CloseModal => {
                if self.search.show_modal {
                    self.search.toggle_modal();
                }
                Task::none()
            }
            Message::DismissToast(index) => {
                self.toasts.dismiss(index);
                Task::none()
            }
            Message::Tick(now) => {
                self.toasts.prune(now);
                Task::none()
            }
        }
    }

    /// Run a search page fetch in the background
    fn fetch(
        &self,
        request: FetchRequest,
        on_done: fn(Result<SearchResponse, ApiError>) -> Message,
    ) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_images(&request.keyword, request.page).await },
            on_done,
        )
    }

    /// Forget thumbnails for hits that are no longer displayed
    fn retain_thumbnails(&mut self) {
        let images = &self.search.images;
        self.thumbnails
            .retain(|id, _| images.iter().any(|hit| hit.id == *id));
    }

    /// Start downloads for every displayed hit without a thumbnail
    fn load_thumbnails(&mut self) -> Task<Message> {
        let pending: Vec<(u64, String)> = self
            .search
            .images
            .iter()
            .filter(|hit| !self.thumbnails.contains_key(&hit.id))
            .map(|hit| (hit.id, hit.webformat_url.clone()))
            .collect();

        let size = self.settings.thumbnail_size;
        let tasks = pending.into_iter().map(|(id, url)| {
            self.thumbnails.insert(id, None);
            Task::perform(
                fetch_preview(self.client.clone(), url, Some(size)),
                move |result| Message::ThumbnailLoaded(id, result),
            )
        });

        Task::batch(tasks.collect::<Vec<_>>())
    }

    /// Download the selected full size image unless it is already shown
    fn load_large_image(&mut self) -> Task<Message> {
        if !self.search.show_modal {
            return Task::none();
        }
        let Some(url) = self.search.large_image.clone() else {
            return Task::none();
        };
        if self.large_preview.as_ref().is_some_and(|p| p.url == url) {
            return Task::none();
        }

        self.large_preview = None;
        Task::perform(
            fetch_preview(self.client.clone(), url, None),
            Message::LargeImageLoaded,
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content = column![ui::searchbar::view(&self.query)]
            .spacing(20)
            .padding(20);

        if let Some(error) = &self.search.error {
            content = content
                .push(text(format!("Could not load images: {error}")).style(text::danger));
        }

        content = content.push(ui::gallery::view(
            &self.search.images,
            &self.thumbnails,
            self.search.loading,
        ));

        if self.search.has_more_images() {
            content = content.push(ui::load_more::view());
        }

        let page: Element<Message> = scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        let screen = if self.search.show_modal {
            let large = self
                .large_preview
                .as_ref()
                .filter(|p| self.search.large_image.as_deref() == Some(p.url.as_str()))
                .map(|p| &p.handle);
            ui::modal::view(page, large)
        } else {
            page
        };

        stack![screen, self.toasts.view()].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let escape = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseModal),
            _ => None,
        });

        if self.toasts.is_empty() {
            escape
        } else {
            let tick = time::every(Duration::from_millis(500)).map(Message::Tick);
            Subscription::batch([escape, tick])
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    logging::init();

    iced::application("Image Finder", ImageFinder::update, ImageFinder::view)
        .subscription(ImageFinder::subscription)
        .theme(ImageFinder::theme)
        .centered()
        .run_with(ImageFinder::new)
}
