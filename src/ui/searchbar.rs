use iced::widget::{button, row, text_input};
use iced::{Element, Length};

use crate::Message;

/// Search input with a submit button
///
/// Submits the raw text as typed; normalization happens in the controller.
pub fn view(query: &str) -> Element<'_, Message> {
    let submit = Message::Search(query.to_string());

    row![
        text_input("Search images and photos", query)
            .on_input(Message::QueryChanged)
            .on_submit(submit.clone())
            .padding(10)
            .size(18)
            .width(Length::Fill),
        button("Search").on_press(submit).padding(10),
    ]
    .spacing(10)
    .into()
}
