use iced::{Color, Theme, border::Radius, widget::text};
use paste::paste;
use washers_common::{team::Team, theme::ThemePreference};

pub const BORDER_RADIUS: Radius = Radius {
    top_left: 9.0,
    top_right: 9.0,
    bottom_right: 9.0,
    bottom_left: 9.0,
};
pub const CARD_RADIUS: Radius = Radius {
    top_left: 18.0,
    top_right: 18.0,
    bottom_right: 18.0,
    bottom_left: 18.0,
};
pub const BORDER_WIDTH: f32 = 6.0;
pub const SPACING: f32 = 8.0;
pub const PADDING: f32 = 8.0;
pub const MIN_BUTTON_SIZE: f32 = 89.0;
pub const PROGRESS_BAR_HEIGHT: f32 = 14.0;

pub const SMALL_PLUS_TEXT: f32 = 29.0;
pub const MEDIUM_TEXT: f32 = 38.0;
pub const LARGE_TEXT: f32 = 66.0;
pub const SCORE_TEXT: f32 = 120.0;
pub const SCORE_BOUNCE_TEXT: f32 = 150.0;
pub const BANNER_TEXT: f32 = 96.0;

// See https://stackoverflow.com/a/727339 for color mixing math. For darkening colors with pure
// black, the math simplifies to new_r = orig_r * (1 - black_alpha), so we will multiply by the
// value of (1 - black_alpha)
macro_rules! make_color {
    ($name:ident, $r:literal, $g:literal, $b:literal) => {
        paste! {
            pub const $name: iced::Color = iced::Color::from_rgb($r, $g, $b);
            pub const [<$name _PRESSED>]: iced::Color = iced::Color::from_rgb(
                $r * 0.85,
                $g * 0.85,
                $b * 0.85);
        }
    };
}

make_color!(TEAL, 0.0, 1.0, 1.0);
make_color!(WHITE, 1.0, 1.0, 1.0);
make_color!(RED, 1.0, 0.25, 0.25);
make_color!(GREEN, 0.0, 0.85, 0.35);
make_color!(GRAY, 0.5, 0.5, 0.5);

pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);
pub const GOLD: Color = Color::from_rgb(1.0, 0.84, 0.0);
pub const SHUTOUT_RED: Color = Color::from_rgb(1.0, 0.1, 0.3);

pub const DISABLED_COLOR: Color = GRAY;

/// Dims whatever is underneath an overlay
pub const OVERLAY_BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.85,
};

/// Colors shared by every widget for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub accent: Color,
    pub glow: Color,
    pub text: Color,
}

pub fn palette(theme: ThemePreference) -> Palette {
    match theme {
        ThemePreference::Space => Palette {
            background: Color::from_rgb8(0x0b, 0x0d, 0x2b),
            surface: Color::from_rgb8(0x1a, 0x1f, 0x4d),
            accent: Color::from_rgb8(0x7b, 0x2f, 0xf7),
            glow: Color::from_rgb8(0x00, 0xd4, 0xff),
            text: WHITE,
        },
        ThemePreference::Clouds => Palette {
            background: Color::from_rgb8(0x6f, 0xa8, 0xdc),
            surface: Color::from_rgb8(0x4a, 0x7f, 0xb5),
            accent: Color::from_rgb8(0xff, 0xff, 0xff),
            glow: Color::from_rgb8(0xe3, 0xf2, 0xfd),
            text: WHITE,
        },
        ThemePreference::Sunrise => Palette {
            background: Color::from_rgb8(0x3d, 0x12, 0x2e),
            surface: Color::from_rgb8(0x6b, 0x21, 0x3f),
            accent: Color::from_rgb8(0xff, 0x6b, 0x35),
            glow: Color::from_rgb8(0xff, 0xc8, 0x57),
            text: WHITE,
        },
    }
}

pub fn team_color(team: Team) -> Color {
    match team {
        Team::Teal => TEAL,
        Team::White => WHITE,
    }
}

/// The color a team's name and score are drawn with on top of `surface`
pub fn team_text_color(team: Team, palette: &Palette) -> Color {
    match team {
        Team::Teal => TEAL,
        Team::White => palette.text,
    }
}

pub mod button;
pub use button::{
    accent_button, green_button, point_button, red_button, team_card_button, theme_button,
};

pub mod container;
pub use container::{backdrop_container, surface_container, win_container};

pub mod progress;
pub use progress::team_progress;

pub fn glow_text(palette: Palette) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(palette.glow),
    }
}
