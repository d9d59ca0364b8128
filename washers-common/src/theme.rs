use derivative::Derivative;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cosmetic look of the scoreboard. The first variant is the default.
#[derive(Derivative, Serialize, Deserialize, Sequence)]
#[derivative(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[derivative(Default)]
    Space,
    Clouds,
    Sunrise,
}

impl ThemePreference {
    /// The key used in the persisted snapshot
    pub fn key(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Clouds => "clouds",
            Self::Sunrise => "sunrise",
        }
    }
}

impl core::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::Space => write!(f, "Space"),
            Self::Clouds => write!(f, "Clouds"),
            Self::Sunrise => write!(f, "Sunrise"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl core::fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Unknown theme: {:?}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<Self>()
            .find(|theme| theme.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}
