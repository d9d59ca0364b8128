use super::*;
use iced::{
    Length,
    alignment::{Horizontal, Vertical},
    widget::{Button, Text, button, text},
};

pub(super) fn make_button<'a, Message: Clone>(
    label: impl text::IntoFragment<'a>,
) -> Button<'a, Message> {
    button(centered_text(label).size(MEDIUM_TEXT))
        .padding(PADDING)
        .height(Length::Fixed(MIN_BUTTON_SIZE))
        .width(Length::Fill)
}

pub(super) fn centered_text<'a>(label: impl text::IntoFragment<'a>) -> Text<'a> {
    text(label)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
}
