use super::{
    super::{effects::Effects, message::Message},
    shared_elements::*,
    *,
};
use iced::{
    Alignment, Element, Length,
    alignment::Horizontal,
    widget::{button, column, horizontal_space, progress_bar, row, text},
};
use washers_common::{
    match_snapshot::MatchSnapshot,
    rules::{POINT_VALUES, Score, WIN_THRESHOLD},
    team::Team,
};

pub(in super::super) fn build_main_view<'a>(
    snapshot: &MatchSnapshot,
    effects: &Effects,
    palette: Palette,
) -> Element<'a, Message> {
    let header = row![
        text("WASHERS").size(LARGE_TEXT).style(glow_text(palette)),
        horizontal_space(),
        make_button("SETTINGS")
            .width(Length::Fixed(220.0))
            .style(accent_button(palette))
            .on_press(Message::ShowSettings),
        make_button("RESET")
            .width(Length::Fixed(160.0))
            .style(red_button)
            .on_press(Message::RequestReset),
    ]
    .spacing(SPACING)
    .align_y(Alignment::Center);

    let cards = row![
        make_team_card(Team::Teal, snapshot, effects, palette),
        make_team_card(Team::White, snapshot, effects, palette),
    ]
    .spacing(SPACING)
    .height(Length::Fill);

    let instruction = text(instruction_text(snapshot.selected_team))
        .size(if effects.nudging() {
            MEDIUM_TEXT * 1.15
        } else {
            MEDIUM_TEXT
        })
        .color(match (effects.nudging(), snapshot.selected_team) {
            (true, _) => RED,
            (false, Some(team)) => team_text_color(team, &palette),
            (false, None) => palette.text,
        })
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let points = POINT_VALUES.iter().fold(row![].spacing(SPACING), |points, &value| {
        let label = if value == 0 {
            "WASH".to_string()
        } else {
            value.to_string()
        };
        let mut point = make_button(label).style(point_button(palette));
        if !snapshot.game_over {
            point = point.on_press(Message::ScorePoints(value));
        }
        points.push(point)
    });

    column![header, cards, instruction, points]
        .spacing(SPACING)
        .padding(PADDING)
        .into()
}

fn make_team_card<'a>(
    team: Team,
    snapshot: &MatchSnapshot,
    effects: &Effects,
    palette: Palette,
) -> Element<'a, Message> {
    let score = snapshot.scores[team];
    let selected = snapshot.selected_team == Some(team);

    let content = column![
        text(team.to_string().to_uppercase())
            .size(MEDIUM_TEXT)
            .color(team_text_color(team, &palette)),
        text(score.to_string())
            .size(if effects.bouncing(team) {
                SCORE_BOUNCE_TEXT
            } else {
                SCORE_TEXT
            })
            .color(team_text_color(team, &palette)),
        progress_bar(0.0..=WIN_THRESHOLD as f32, progress_value(score))
            .height(Length::Fixed(PROGRESS_BAR_HEIGHT))
            .style(team_progress(team, palette)),
    ]
    .spacing(SPACING)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let mut card = button(content)
        .padding(PADDING * 2.0)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(team_card_button(team, selected, palette));
    if !snapshot.game_over {
        card = card.on_press(Message::SelectTeam(team));
    }
    card.into()
}

pub(super) fn instruction_text(selected: Option<Team>) -> String {
    match selected {
        Some(team) => format!("SELECT POINTS FOR {} TEAM", team.to_string().to_uppercase()),
        None => "SELECT A TEAM TO SCORE".to_string(),
    }
}

/// How full a team's bar is, capped at the winning score
pub(super) fn progress_value(score: Score) -> f32 {
    score.min(WIN_THRESHOLD) as f32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_instruction_text() {
        assert_eq!(instruction_text(None), "SELECT A TEAM TO SCORE");
        assert_eq!(
            instruction_text(Some(Team::Teal)),
            "SELECT POINTS FOR TEAL TEAM"
        );
        assert_eq!(
            instruction_text(Some(Team::White)),
            "SELECT POINTS FOR WHITE TEAM"
        );
    }

    #[test]
    fn test_progress_value() {
        assert_eq!(progress_value(0), 0.0);
        assert_eq!(progress_value(14), 14.0);
        assert_eq!(progress_value(21), 21.0);
        assert_eq!(progress_value(300), 21.0);
        assert_eq!(progress_value(26), 21.0);
    }
}
