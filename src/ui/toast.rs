/// Failure notifications shown in the corner of the window
use iced::time::{Duration, Instant};
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::state::search::Notifier;
use crate::Message;

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    created: Instant,
}

/// Queue of visible notifications, oldest first
#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    timeout: Duration,
}

impl Toasts {
    pub fn new(timeout: Duration) -> Self {
        Self {
            items: Vec::new(),
            timeout,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop notifications older than the timeout
    pub fn prune(&mut self, now: Instant) {
        let timeout = self.timeout;
        self.items
            .retain(|toast| now.saturating_duration_since(toast.created) < timeout);
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let stack = self.items.iter().enumerate().fold(
            column![].spacing(8).align_x(Alignment::End),
            |col, (index, toast)| {
                col.push(
                    button(text(&toast.message).size(16))
                        .on_press(Message::DismissToast(index))
                        .padding([10, 16])
                        .style(button::danger),
                )
            },
        );

        container(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_right(Length::Fill)
            .align_bottom(Length::Fill)
            .padding(20)
            .into()
    }
}

impl Notifier for Toasts {
    fn notify_failure(&mut self, message: &str) {
        self.items.push(Toast {
            message: message.to_string(),
            created: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(toasts: &Toasts) -> Vec<&str> {
        toasts.items.iter().map(|toast| toast.message.as_str()).collect()
    }

    #[test]
    fn test_notify_and_expire() {
        let mut toasts = Toasts::new(Duration::from_secs(3));
        toasts.notify_failure("Images not found");
        assert_eq!(messages(&toasts), vec!["Images not found"]);

        toasts.prune(Instant::now());
        assert!(!toasts.is_empty());

        toasts.prune(Instant::now() + Duration::from_secs(4));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_dismiss() {
        let mut toasts = Toasts::new(Duration::from_secs(3));
        toasts.notify_failure("first");
        toasts.notify_failure("second");

        toasts.dismiss(0);
        toasts.dismiss(7);

        assert_eq!(messages(&toasts), vec!["second"]);
    }
}
