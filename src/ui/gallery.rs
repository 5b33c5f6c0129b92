/// Thumbnail grid for the current result list
use iced::widget::{column, container, image, mouse_area, text, tooltip, Space};
use iced::widget::image::Handle;
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;

use crate::state::data::Hit;
use crate::Message;

const TILE_WIDTH: f32 = 256.0;
const TILE_HEIGHT: f32 = 180.0;

/// Render `images` as a wrapping grid
///
/// `thumbnails` maps hit ids to decoded previews; a `None` entry (or no entry)
/// renders a placeholder. Clicking a tile emits its index.
pub fn view<'a>(
    images: &'a [Hit],
    thumbnails: &'a HashMap<u64, Option<Handle>>,
    loading: bool,
) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = images
        .iter()
        .enumerate()
        .map(|(index, hit)| tile(index, hit, thumbnails.get(&hit.id).and_then(Option::as_ref)))
        .collect();

    let grid: Element<'a, Message> = Wrap::with_elements(tiles)
        .spacing(12.0)
        .line_spacing(12.0)
        .into();

    let status: Element<'a, Message> = if loading {
        text("Loading...").size(18).into()
    } else {
        Space::with_height(0).into()
    };

    column![grid, status].spacing(16).into()
}

fn tile<'a>(index: usize, hit: &'a Hit, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(TILE_WIDTH))
            .height(Length::Fixed(TILE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("...").size(24))
            .width(Length::Fixed(TILE_WIDTH))
            .height(Length::Fixed(TILE_HEIGHT))
            .center_x(Length::Fixed(TILE_WIDTH))
            .center_y(Length::Fixed(TILE_HEIGHT))
            .style(container::rounded_box)
            .into(),
    };

    let clickable = mouse_area(picture).on_press(Message::OpenImage(index));

    if hit.tags.is_empty() {
        clickable.into()
    } else {
        tooltip(
            clickable,
            container(text(&hit.tags).size(14)).padding(6).style(container::rounded_box),
            tooltip::Position::Bottom,
        )
        .into()
    }
}
