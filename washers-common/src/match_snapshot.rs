use crate::{bundles::TealWhiteBundle, rules::Score, team::Team, theme::ThemePreference};
use log::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the scoreboard needs to draw the current state of the match
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct MatchSnapshot {
    pub scores: TealWhiteBundle<Score>,
    pub selected_team: Option<Team>,
    pub game_over: bool,
}

/// The record saved between sessions. Team selection and the game over flag are never saved.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedMatch {
    pub teal_score: Score,
    pub white_score: Score,
    pub theme: ThemePreference,
}

impl PersistedMatch {
    pub fn new(scores: TealWhiteBundle<Score>, theme: ThemePreference) -> Self {
        Self {
            teal_score: scores.teal,
            white_score: scores.white,
            theme,
        }
    }

    pub fn scores(&self) -> TealWhiteBundle<Score> {
        TealWhiteBundle::new(self.teal_score, self.white_score)
    }

    /// Reads each field on its own, replacing anything missing or invalid with its default
    pub fn from_value(value: &Value) -> Self {
        let Self {
            mut teal_score,
            mut white_score,
            mut theme,
        } = Default::default();

        let Some(map) = value.as_object() else {
            warn!("Saved match is not a key-value record, using defaults");
            return Self::default();
        };

        get_score_value(map, "tealScore", &mut teal_score);
        get_score_value(map, "whiteScore", &mut white_score);

        if let Some(value) = map.get("theme") {
            match value.as_str().map(str::parse::<ThemePreference>) {
                Some(Ok(value)) => theme = value,
                _ => warn!("Ignoring invalid saved theme {value}"),
            }
        }

        Self {
            teal_score,
            white_score,
            theme,
        }
    }

    /// Parses a saved record, never failing
    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                warn!("Saved match is not valid JSON, using defaults. Error: {e}");
                Self::default()
            }
        }
    }
}

fn get_score_value(map: &Map<String, Value>, key: &str, save: &mut Score) {
    if let Some(value) = map.get(key) {
        match value.as_u64().and_then(|v| Score::try_from(v).ok()) {
            Some(value) => *save = value,
            None => warn!("Ignoring invalid saved {key}: {value}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn initialize() {
        INIT.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });
    }

    #[test]
    fn test_round_trip() {
        let saved = PersistedMatch {
            teal_score: 5,
            white_score: 7,
            theme: ThemePreference::Sunrise,
        };
        let text = serde_json::to_string(&saved).unwrap();
        assert_eq!(text, r#"{"tealScore":5,"whiteScore":7,"theme":"sunrise"}"#);
        assert_eq!(PersistedMatch::from_json_str(&text), saved);
        assert_eq!(saved.scores(), TealWhiteBundle::new(5, 7));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(PersistedMatch::from_value(&json!({})), PersistedMatch::default());
        assert_eq!(
            PersistedMatch::from_value(&json!({"whiteScore": 9})),
            PersistedMatch {
                white_score: 9,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_invalid_fields_fall_back_individually() {
        initialize();
        let loaded = PersistedMatch::from_value(&json!({
            "tealScore": -4,
            "whiteScore": 12,
            "theme": "volcano"
        }));
        assert_eq!(
            loaded,
            PersistedMatch {
                teal_score: 0,
                white_score: 12,
                theme: ThemePreference::Space,
            }
        );

        let loaded = PersistedMatch::from_value(&json!({
            "tealScore": "6",
            "whiteScore": 3.5,
            "theme": "clouds"
        }));
        assert_eq!(
            loaded,
            PersistedMatch {
                teal_score: 0,
                white_score: 0,
                theme: ThemePreference::Clouds,
            }
        );

        let loaded = PersistedMatch::from_value(&json!({
            "tealScore": 4_294_967_296u64,
            "theme": 2
        }));
        assert_eq!(loaded, PersistedMatch::default());
    }

    #[test]
    fn test_high_scores_kept() {
        let loaded = PersistedMatch::from_json_str(
            r#"{"tealScore":300,"whiteScore":298,"theme":"sunrise"}"#,
        );
        assert_eq!(
            loaded,
            PersistedMatch {
                teal_score: 300,
                white_score: 298,
                theme: ThemePreference::Sunrise,
            }
        );
        assert_eq!(loaded.scores(), TealWhiteBundle::new(300, 298));
    }

    #[test]
    fn test_garbage() {
        initialize();
        assert_eq!(PersistedMatch::from_json_str(""), PersistedMatch::default());
        assert_eq!(PersistedMatch::from_json_str("{not json"), PersistedMatch::default());
        assert_eq!(PersistedMatch::from_json_str("[1, 2]"), PersistedMatch::default());
        assert_eq!(PersistedMatch::from_json_str("null"), PersistedMatch::default());
    }

    #[test]
    fn test_extra_keys_ignored() {
        let loaded = PersistedMatch::from_json_str(
            r#"{"tealScore":4,"whiteScore":2,"theme":"clouds","selectedTeam":"teal","gameOver":true}"#,
        );
        assert_eq!(
            loaded,
            PersistedMatch {
                teal_score: 4,
                white_score: 2,
                theme: ThemePreference::Clouds,
            }
        );
    }
}
