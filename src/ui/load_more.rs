use iced::widget::{button, container};
use iced::{Element, Length};

use crate::Message;

/// "Load more" button, rendered by the caller only while more pages exist
pub fn view<'a>() -> Element<'a, Message> {
    container(button("Load more").on_press(Message::LoadMore).padding([10, 24]))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
