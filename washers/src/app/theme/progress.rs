use super::{BORDER_RADIUS, Palette, team_color};
use iced::{Background, Border, Theme, widget::progress_bar::Style};
use washers_common::team::Team;

/// Fills toward the winning score in the team's color
pub fn team_progress(team: Team, palette: Palette) -> impl Fn(&Theme) -> Style {
    move |_theme| Style {
        background: Background::Color(palette.background),
        bar: Background::Color(team_color(team)),
        border: Border {
            width: 0.0,
            color: palette.glow,
            radius: BORDER_RADIUS,
        },
    }
}
