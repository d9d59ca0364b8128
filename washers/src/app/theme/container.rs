use super::{BORDER_WIDTH, CARD_RADIUS, OVERLAY_BACKDROP, Palette};
use iced::{Background, Border, Color, Shadow, Theme, widget::container::Style};

pub fn surface_container(palette: Palette) -> impl Fn(&Theme) -> Style {
    move |_theme| Style {
        background: Some(Background::Color(palette.surface)),
        text_color: Some(palette.text),
        border: Border {
            width: 0.0,
            color: palette.glow,
            radius: CARD_RADIUS,
        },
        shadow: Shadow::default(),
    }
}

pub fn backdrop_container(_theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(OVERLAY_BACKDROP)),
        text_color: None,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// The card shown when a team wins, outlined in `highlight`
pub fn win_container(palette: Palette, highlight: Color) -> impl Fn(&Theme) -> Style {
    move |_theme| Style {
        background: Some(Background::Color(palette.surface)),
        text_color: Some(palette.text),
        border: Border {
            width: BORDER_WIDTH,
            color: highlight,
            radius: CARD_RADIUS,
        },
        shadow: Shadow {
            color: highlight,
            blur_radius: 40.0,
            ..Shadow::default()
        },
    }
}
