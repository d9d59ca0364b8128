use super::{
    BLACK, BORDER_RADIUS, BORDER_WIDTH, CARD_RADIUS, DISABLED_COLOR, GREEN, GREEN_PRESSED,
    Palette, RED, RED_PRESSED, team_color,
};
use iced::{
    Background, Border, Color, Shadow, Theme, Vector,
    widget::button::{Status, Style},
};
use washers_common::team::Team;

fn darken(color: Color) -> Color {
    Color {
        r: color.r * 0.85,
        g: color.g * 0.85,
        b: color.b * 0.85,
        a: color.a,
    }
}

fn solid_button(color: Color, pressed: Color, text_color: Color, status: Status) -> Style {
    let background = match status {
        Status::Disabled => None,
        Status::Pressed => Some(Background::Color(pressed)),
        Status::Active | Status::Hovered => Some(Background::Color(color)),
    };

    let text_color = if matches!(status, Status::Disabled) {
        DISABLED_COLOR
    } else {
        text_color
    };

    let border = Border {
        width: if matches!(status, Status::Disabled) {
            BORDER_WIDTH / 2.0
        } else {
            0.0
        },
        color: DISABLED_COLOR,
        radius: BORDER_RADIUS,
    };

    Style {
        background,
        text_color,
        border,
        shadow: Shadow::default(),
    }
}

pub fn red_button(_theme: &Theme, status: Status) -> Style {
    solid_button(RED, RED_PRESSED, BLACK, status)
}

pub fn green_button(_theme: &Theme, status: Status) -> Style {
    solid_button(GREEN, GREEN_PRESSED, BLACK, status)
}

pub fn accent_button(palette: Palette) -> impl Fn(&Theme, Status) -> Style {
    move |_theme, status| {
        solid_button(palette.accent, darken(palette.accent), palette.background, status)
    }
}

pub fn point_button(palette: Palette) -> impl Fn(&Theme, Status) -> Style {
    move |_theme, status| {
        let mut style = solid_button(palette.surface, darken(palette.surface), palette.text, status);
        style.border.width = BORDER_WIDTH / 2.0;
        style.border.color = palette.glow;
        style
    }
}

/// The big team cards. A selected card is outlined in the team color and glows.
pub fn team_card_button(
    team: Team,
    selected: bool,
    palette: Palette,
) -> impl Fn(&Theme, Status) -> Style {
    move |_theme, status| {
        let background = match status {
            Status::Pressed => Some(Background::Color(darken(palette.surface))),
            _ => Some(Background::Color(palette.surface)),
        };

        let border = if selected {
            Border {
                width: BORDER_WIDTH,
                color: team_color(team),
                radius: CARD_RADIUS,
            }
        } else {
            Border {
                width: BORDER_WIDTH / 3.0,
                color: darken(palette.glow),
                radius: CARD_RADIUS,
            }
        };

        let shadow = if selected {
            Shadow {
                color: team_color(team),
                offset: Vector::new(0.0, 0.0),
                blur_radius: 24.0,
            }
        } else {
            Shadow::default()
        };

        Style {
            background,
            text_color: palette.text,
            border,
            shadow,
        }
    }
}

/// Theme picker entries, highlighted when they match the active theme
pub fn theme_button(preview: Palette, active: bool) -> impl Fn(&Theme, Status) -> Style {
    move |_theme, status| {
        let mut style = solid_button(
            preview.background,
            darken(preview.background),
            preview.text,
            status,
        );
        style.border = Border {
            width: if active { BORDER_WIDTH } else { BORDER_WIDTH / 3.0 },
            color: if active { preview.glow } else { preview.surface },
            radius: BORDER_RADIUS,
        };
        style
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use washers_common::theme::ThemePreference;

    #[test]
    fn test_selected_card_uses_team_border() {
        let palette = super::super::palette(ThemePreference::Space);
        let style = team_card_button(Team::Teal, true, palette)(&Theme::Dark, Status::Active);
        assert_eq!(style.border.color, team_color(Team::Teal));
        assert_eq!(style.border.width, BORDER_WIDTH);

        let style = team_card_button(Team::White, false, palette)(&Theme::Dark, Status::Active);
        assert!(style.border.width < BORDER_WIDTH);
    }

    #[test]
    fn test_disabled_button_is_grayed() {
        let style = red_button(&Theme::Dark, Status::Disabled);
        assert_eq!(style.text_color, DISABLED_COLOR);
        assert_eq!(style.background, None);
    }
}
