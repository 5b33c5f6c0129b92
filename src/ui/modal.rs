/// Full size image overlay
use iced::widget::image::Handle;
use iced::widget::{button, center, column, container, image, mouse_area, opaque, stack, text};
use iced::{Color, ContentFit, Element, Length};

use crate::Message;

/// Largest area the full size image may cover; the rest of the window stays
/// backdrop so a click there dismisses the overlay
const FRAME_WIDTH: f32 = 960.0;
const FRAME_HEIGHT: f32 = 640.0;

/// Draw the overlay on top of `base`
///
/// Clicking the backdrop or the close button toggles the overlay off.
pub fn view<'a>(base: Element<'a, Message>, large_image: Option<&Handle>) -> Element<'a, Message> {
    let backdrop = center(opaque(frame(large_image))).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    stack![base, opaque(mouse_area(backdrop).on_press(Message::ToggleModal))].into()
}

/// Close button above the image, sized to a fixed frame
fn frame<'a>(large_image: Option<&Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match large_image {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("Loading image...").size(20).into(),
    };

    column![
        button("Close").on_press(Message::ToggleModal).padding([6, 14]),
        container(picture)
            .center_x(Length::Fixed(FRAME_WIDTH))
            .center_y(Length::Fixed(FRAME_HEIGHT)),
    ]
    .spacing(10)
    .padding(10)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_leaves_backdrop_clickable() {
        let handle = Handle::from_rgba(2, 2, vec![0u8; 16]);

        for large_image in [None, Some(&handle)] {
            let content = frame(large_image);
            let size = content.as_widget().size();

            assert_eq!(size.width.fill_factor(), 0);
            assert_eq!(size.height.fill_factor(), 0);
        }
    }
}
