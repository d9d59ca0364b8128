use derivative::Derivative;
use serde::{Deserialize, Serialize};
use toml::Table;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub hardware: Hardware,
    pub effects: Effects,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hardware {
    pub screen_x: i32,
    pub screen_y: i32,
}

impl Default for Hardware {
    fn default() -> Self {
        Self {
            screen_x: 945,
            screen_y: 691,
        }
    }
}

impl Hardware {
    pub fn migrate(old: &Table) -> Self {
        let Self {
            mut screen_x,
            mut screen_y,
        } = Default::default();

        get_integer_value(old, "screen_x", &mut screen_x);
        get_integer_value(old, "screen_y", &mut screen_y);

        Self { screen_x, screen_y }
    }
}

/// Toggles for the purely cosmetic animations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
pub struct Effects {
    #[derivative(Default(value = "true"))]
    pub celebration: bool,
    #[derivative(Default(value = "true"))]
    pub wash_animation: bool,
}

impl Effects {
    pub fn migrate(old: &Table) -> Self {
        let Self {
            mut celebration,
            mut wash_animation,
        } = Default::default();

        get_bool_value(old, "celebration", &mut celebration);
        get_bool_value(old, "wash_animation", &mut wash_animation);

        Self {
            celebration,
            wash_animation,
        }
    }
}

impl Config {
    pub fn migrate(old: &Table) -> Self {
        let Self {
            mut hardware,
            mut effects,
        } = Default::default();

        if let Some(old_hardware) = old.get("hardware").and_then(|v| v.as_table()) {
            hardware = Hardware::migrate(old_hardware);
        }

        if let Some(old_effects) = old.get("effects").and_then(|v| v.as_table()) {
            effects = Effects::migrate(old_effects);
        }

        Self { hardware, effects }
    }
}

fn get_integer_value<T: TryFrom<i64>>(table: &Table, key: &str, save: &mut T) {
    if let Some(value) = table.get(key).and_then(|v| v.as_integer()) {
        if let Ok(value) = value.try_into() {
            *save = value;
        }
    }
}

fn get_bool_value(table: &Table, key: &str, save: &mut bool) {
    if let Some(value) = table.get(key).and_then(|v| v.as_bool()) {
        *save = value;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ser_hardware() {
        let hw: Hardware = Default::default();
        let serialized = toml::to_string(&hw).unwrap();
        let deser = toml::from_str(&serialized);
        assert_eq!(deser, Ok(hw));
    }

    #[test]
    fn test_ser_effects() {
        let effects: Effects = Default::default();
        assert!(effects.celebration);
        assert!(effects.wash_animation);
        let serialized = toml::to_string(&effects).unwrap();
        let deser = toml::from_str(&serialized);
        assert_eq!(deser, Ok(effects));
    }

    #[test]
    fn test_ser_config() {
        let config: Config = Default::default();
        let serialized = toml::to_string(&config).unwrap();
        let deser = toml::from_str(&serialized);
        assert_eq!(deser, Ok(config));
    }

    #[test]
    fn test_migrate_partial_config() {
        let old: Table = toml::from_str(
            r#"
            [hardware]
            screen_x = 1280
            screen_y = "tall"

            [effects]
            wash_animation = false
            "#,
        )
        .unwrap();

        let config = Config::migrate(&old);
        assert_eq!(
            config,
            Config {
                hardware: Hardware {
                    screen_x: 1280,
                    screen_y: 691,
                },
                effects: Effects {
                    celebration: true,
                    wash_animation: false,
                },
            }
        );
    }

    #[test]
    fn test_migrate_unknown_layout() {
        let old: Table = toml::from_str(
            r#"
            hardware = 7

            [sound]
            sound_enabled = true
            "#,
        )
        .unwrap();

        assert_eq!(Config::migrate(&old), Config::default());
    }
}
