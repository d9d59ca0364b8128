use super::{super::message::Message, shared_elements::*, *};
use iced::{
    Alignment, Element, Length,
    alignment::Horizontal,
    widget::{column, container, horizontal_space, row, text, vertical_space},
};

pub(in super::super) fn build_reset_confirmation_page<'a>(palette: Palette) -> Element<'a, Message> {
    let buttons = row![
        make_button("YES")
            .style(red_button)
            .on_press(Message::ConfirmReset(true)),
        make_button("NO")
            .style(green_button)
            .on_press(Message::ConfirmReset(false)),
    ]
    .spacing(SPACING);

    column![
        vertical_space(),
        row![
            horizontal_space(),
            container(
                column![
                    text("RESET GAME?")
                        .size(LARGE_TEXT)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                    text("THIS WILL CLEAR ALL SCORES.")
                        .size(MEDIUM_TEXT)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                    buttons,
                ]
                .spacing(SPACING * 2.0)
                .align_x(Alignment::Center),
            )
            .width(Length::FillPortion(4))
            .padding(PADDING * 2.0)
            .style(surface_container(palette)),
            horizontal_space(),
        ]
        .spacing(SPACING),
        vertical_space(),
    ]
    .padding(PADDING)
    .into()
}
