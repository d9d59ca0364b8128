use super::effects::EffectKind;
use iced::time::Instant;
use washers_common::{team::Team, theme::ThemePreference};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectTeam(Team),
    ScorePoints(u8),
    ShowSettings,
    SelectTheme(ThemePreference),
    SettingsComplete,
    RequestReset,
    ConfirmReset(bool),
    PlayAgain,
    DismissWash,
    EffectExpired(EffectKind, u64),
    Tick(Instant),
}

impl Message {
    /// Frame ticks arrive constantly during animations and are only logged at trace level
    pub fn is_frame(&self) -> bool {
        matches!(self, Self::Tick(_))
    }
}
