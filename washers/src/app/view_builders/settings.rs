use super::{super::message::Message, shared_elements::*, *};
use iced::{
    Element, Length,
    alignment::Horizontal,
    widget::{column, text, vertical_space},
};
use washers_common::theme::ThemePreference;

pub(in super::super) fn build_settings_page<'a>(
    active: ThemePreference,
    palette: Palette,
) -> Element<'a, Message> {
    let themes = enum_iterator::all::<ThemePreference>().fold(
        column![].spacing(SPACING),
        |themes, preference| {
            let preview = super::super::theme::palette(preference);
            themes.push(
                make_button(preference.to_string().to_uppercase())
                    .style(theme_button(preview, preference == active))
                    .on_press(Message::SelectTheme(preference)),
            )
        },
    );

    column![
        text("THEME")
            .size(LARGE_TEXT)
            .style(glow_text(palette))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        themes,
        vertical_space(),
        make_button("DONE")
            .style(green_button)
            .on_press(Message::SettingsComplete),
    ]
    .spacing(SPACING)
    .padding(PADDING)
    .into()
}
