use super::{super::message::Message, shared_elements::*, *};
use crate::match_manager::WinInfo;
use iced::{
    Alignment, Element, Length,
    alignment::Horizontal,
    widget::{column, container, opaque, text},
};

pub(in super::super) fn build_win_overlay<'a>(win: &WinInfo, palette: Palette) -> Element<'a, Message> {
    let highlight = if win.is_shutout {
        SHUTOUT_RED
    } else {
        GOLD
    };

    let mut content = column![
        text(format!("{} WINS!", win.team.to_string().to_uppercase()))
            .size(LARGE_TEXT)
            .color(team_text_color(win.team, &palette))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    ]
    .spacing(SPACING * 2.0)
    .align_x(Alignment::Center);

    if win.is_shutout {
        content = content.push(
            text("SHUTOUT!")
                .size(MEDIUM_TEXT)
                .color(SHUTOUT_RED)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );
    }

    content = content
        .push(
            text(final_score_text(win))
                .size(MEDIUM_TEXT)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(
            make_button("PLAY AGAIN")
                .style(green_button)
                .on_press(Message::PlayAgain),
        );

    opaque(
        container(
            container(content)
                .width(Length::Fixed(600.0))
                .padding(PADDING * 3.0)
                .style(win_container(palette, highlight)),
        )
        .center(Length::Fill)
        .style(backdrop_container),
    )
}

pub(in super::super) fn build_win_by_2_flash<'a>() -> Element<'a, Message> {
    opaque(
        container(text("WIN BY 2!").size(LARGE_TEXT * 1.5).color(GOLD))
            .center(Length::Fill)
            .style(backdrop_container),
    )
}

pub(super) fn final_score_text(win: &WinInfo) -> String {
    format!(
        "FINAL SCORE: {} - {}",
        win.final_scores.teal, win.final_scores.white
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use washers_common::{bundles::TealWhiteBundle, team::Team};

    #[test]
    fn test_final_score_text() {
        let win = WinInfo {
            team: Team::White,
            is_shutout: false,
            final_scores: TealWhiteBundle::new(19, 21),
        };
        assert_eq!(final_score_text(&win), "FINAL SCORE: 19 - 21");
    }
}
