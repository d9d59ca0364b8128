use crate::{
    config::Config,
    match_manager::{MatchManager, MatchOutcome, WinInfo},
    store::MatchStore,
};
use iced::{
    Element, Length, Subscription, Task, Theme,
    application::Appearance,
    time::Instant,
    widget::{Stack, canvas},
    window,
};
use log::*;
use message::Message;
use rand::{SeedableRng, rngs::StdRng};
use washers_common::{
    match_snapshot::{MatchSnapshot, PersistedMatch},
    theme::ThemePreference,
};

pub(crate) mod message;

pub mod effects;
use effects::{EffectKind, EffectLayer, Effects, expire_after};

mod view_builders;
use view_builders::*;

pub mod theme;
use theme::*;

#[derive(Debug)]
pub struct WashersAppFlags {
    pub config: Config,
    pub store: MatchStore,
    pub fullscreen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    MainPage,
    Settings,
    ConfirmReset,
}

pub struct WashersApp {
    config: Config,
    mm: MatchManager,
    snapshot: MatchSnapshot,
    theme: ThemePreference,
    store: MatchStore,
    effects: Effects,
    last_win: Option<WinInfo>,
    rng: StdRng,
    app_state: AppState,
}

impl WashersApp {
    fn refresh_snapshot(&mut self) {
        self.snapshot = self.mm.generate_snapshot();
    }

    fn persist(&self) {
        let saved = PersistedMatch::new(self.snapshot.scores, self.theme);
        if let Err(e) = self.store.save(&saved) {
            error!("Failed to save match to {:?}: {e}", self.store.path());
        }
    }

    fn reset_match(&mut self) {
        self.mm.reset();
        self.last_win = None;
        self.effects.clear();
        self.refresh_snapshot();
        self.persist();
    }

    fn set_state(&mut self, state: AppState) {
        self.app_state = state;
        trace!("AppState changed to {:?}", self.app_state);
    }

    fn score_points(&mut self, points: u8) -> Task<Message> {
        let scoring_team = self.mm.selected_team();

        let outcome = match self.mm.score_points(points) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("Ignoring {points} points: {e}");
                return Task::none();
            }
        };

        let mut tasks = Vec::new();

        if points == 0 && self.config.effects.wash_animation {
            let id = self.effects.start_wash(Instant::now(), &mut self.rng);
            tasks.push(expire_after(EffectKind::Wash, id));
        }

        match outcome {
            MatchOutcome::Continue => {}
            MatchOutcome::RejectedNoTeamSelected => {
                let id = self.effects.nudge();
                tasks.push(expire_after(EffectKind::Nudge, id));
            }
            MatchOutcome::WinBy2Warning => {
                let id = self.effects.flash_win_by_2();
                tasks.push(expire_after(EffectKind::WinBy2Flash, id));
            }
            MatchOutcome::Win(win) => {
                self.last_win = Some(win);
                if self.config.effects.celebration {
                    self.effects.celebrate(win.team, Instant::now(), &mut self.rng);
                }
            }
        }

        if let Some(team) = scoring_team.filter(|_| points > 0) {
            let id = self.effects.bounce(team);
            tasks.push(expire_after(EffectKind::ScoreBounce, id));
        }

        self.refresh_snapshot();
        self.persist();
        Task::batch(tasks)
    }

    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        if message.is_frame() {
            trace!("Handling message: {message:?}");
        } else {
            debug!("Handling message: {message:?}");
        }

        match message {
            Message::SelectTeam(team) => {
                if let Err(e) = self.mm.select_team(team) {
                    debug!("Ignoring selection of {team}: {e}");
                }
                self.refresh_snapshot();
            }
            Message::ScorePoints(points) => return self.score_points(points),
            Message::ShowSettings => self.set_state(AppState::Settings),
            Message::SelectTheme(theme) => {
                info!("Theme changed to {theme}");
                self.theme = theme;
                self.persist();
            }
            Message::SettingsComplete => self.set_state(AppState::MainPage),
            Message::RequestReset => self.set_state(AppState::ConfirmReset),
            Message::ConfirmReset(confirmed) => {
                if confirmed {
                    self.reset_match();
                }
                self.set_state(AppState::MainPage);
            }
            Message::PlayAgain => self.reset_match(),
            Message::DismissWash => self.effects.dismiss_wash(),
            Message::EffectExpired(kind, id) => self.effects.expire(kind, id),
            Message::Tick(now) => self.effects.tick(now),
        }
        Task::none()
    }

    pub(super) fn view(&self) -> Element<Message> {
        let palette = palette(self.theme);

        let mut layers = vec![match self.app_state {
            AppState::MainPage => build_main_view(&self.snapshot, &self.effects, palette),
            AppState::Settings => build_settings_page(self.theme, palette),
            AppState::ConfirmReset => build_reset_confirmation_page(palette),
        }];

        if self.app_state == AppState::MainPage {
            if let Some(win) = &self.last_win {
                layers.push(build_win_overlay(win, palette));
            }
        }

        if self.effects.is_animating() {
            layers.push(
                canvas(EffectLayer {
                    effects: &self.effects,
                    palette,
                })
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            );
        }

        if self.effects.showing_win_by_2() {
            layers.push(build_win_by_2_flash());
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub(super) fn new(flags: WashersAppFlags) -> (Self, Task<Message>) {
        let WashersAppFlags {
            config,
            store,
            fullscreen,
        } = flags;

        let saved = store.load();
        let mm = MatchManager::restore(saved.scores());
        let snapshot = mm.generate_snapshot();

        let task = if fullscreen {
            window::get_latest().and_then(|id| window::change_mode(id, window::Mode::Fullscreen))
        } else {
            Task::none()
        };

        (
            Self {
                config,
                mm,
                snapshot,
                theme: saved.theme,
                store,
                effects: Effects::new(Instant::now()),
                last_win: None,
                rng: StdRng::from_os_rng(),
                app_state: AppState::MainPage,
            },
            task,
        )
    }

    pub(super) fn subscription(&self) -> Subscription<Message> {
        if self.effects.is_animating() {
            iced::time::every(effects::FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn application_style(&self, _theme: &Theme) -> Appearance {
        let palette = palette(self.theme);
        Appearance {
            background_color: palette.background,
            text_color: palette.text,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Effects as EffectSettings;
    use std::sync::Once;
    use washers_common::{bundles::TealWhiteBundle, team::Team};

    static INIT: Once = Once::new();

    fn initialize() {
        INIT.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });
    }

    fn make_app(dir: &tempfile::TempDir, config: Config) -> WashersApp {
        initialize();
        let store = MatchStore::new(dir.path().join("match-state.json"));
        WashersApp::new(WashersAppFlags {
            config,
            store,
            fullscreen: false,
        })
        .0
    }

    fn score(app: &mut WashersApp, team: Team, points: u8) {
        let _ = app.update(Message::SelectTeam(team));
        let _ = app.update(Message::ScorePoints(points));
    }

    #[test]
    fn test_scoring_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir, Config::default());
        score(&mut app, Team::Teal, 3);
        score(&mut app, Team::White, 1);
        assert_eq!(app.snapshot.scores, TealWhiteBundle::new(3, 1));
        assert_eq!(app.snapshot.selected_team, None);
        assert!(app.effects.bouncing(Team::White));

        let _ = app.update(Message::SelectTheme(ThemePreference::Clouds));

        let reloaded = make_app(&dir, Config::default());
        assert_eq!(reloaded.snapshot.scores, TealWhiteBundle::new(3, 1));
        assert_eq!(reloaded.snapshot.selected_team, None);
        assert!(!reloaded.snapshot.game_over);
        assert_eq!(reloaded.theme, ThemePreference::Clouds);
    }

    #[test]
    fn test_rejected_score_nudges() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir, Config::default());
        let _ = app.update(Message::ScorePoints(2));
        assert_eq!(app.snapshot.scores, TealWhiteBundle::new(0, 0));
        assert!(app.effects.nudging());
        assert!(!app.effects.bouncing(Team::Teal));
    }

    #[test]
    fn test_wash_clears_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir, Config::default());
        score(&mut app, Team::White, 0);
        assert_eq!(app.snapshot.selected_team, None);
        assert_eq!(app.snapshot.scores, TealWhiteBundle::new(0, 0));
        assert!(app.effects.wash().is_some());
        assert!(!app.effects.bouncing(Team::White));

        let _ = app.update(Message::DismissWash);
        assert!(app.effects.wash().is_none());
    }

    #[test]
    fn test_wash_animation_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            effects: EffectSettings {
                celebration: true,
                wash_animation: false,
            },
            ..Default::default()
        };
        let mut app = make_app(&dir, config);
        score(&mut app, Team::Teal, 0);
        assert!(app.effects.wash().is_none());
        assert_eq!(app.snapshot.selected_team, None);
    }

    #[test]
    fn test_win_by_2_flash() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir, Config::default());
        for _ in 0..10 {
            score(&mut app, Team::Teal, 2);
            score(&mut app, Team::White, 2);
        }
        score(&mut app, Team::White, 1);
        assert_eq!(app.snapshot.scores, TealWhiteBundle::new(20, 21));
        assert!(app.effects.showing_win_by_2());
        assert!(!app.snapshot.game_over);
    }

    #[test]
    fn test_win_and_play_again() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir, Config::default());
        for _ in 0..4 {
            score(&mut app, Team::White, 3);
        }
        assert_eq!(app.snapshot.scores, TealWhiteBundle::new(0, 12));
        let win = app.last_win.unwrap();
        assert_eq!(win.team, Team::White);
        assert!(win.is_shutout);
        assert!(app.snapshot.game_over);
        assert!(app.effects.celebration().is_some());

        score(&mut app, Team::Teal, 3);
        assert_eq!(app.snapshot.scores, TealWhiteBundle::new(0, 12));

        let _ = app.update(Message::PlayAgain);
        assert_eq!(app.snapshot.scores, TealWhiteBundle::new(0, 0));
        assert!(!app.snapshot.game_over);
        assert!(app.last_win.is_none());
        assert!(app.effects.celebration().is_none());
        assert_eq!(app.app_state, AppState::MainPage);
    }

    #[test]
    fn test_reset_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir, Config::default());
        score(&mut app, Team::Teal, 2);

        let _ = app.update(Message::RequestReset);
        assert_eq!(app.app_state, AppState::ConfirmReset);
        let _ = app.update(Message::ConfirmReset(false));
        assert_eq!(app.app_state, AppState::MainPage);
        assert_eq!(app.snapshot.scores, TealWhiteBundle::new(2, 0));

        let _ = app.update(Message::RequestReset);
        let _ = app.update(Message::ConfirmReset(true));
        assert_eq!(app.app_state, AppState::MainPage);
        assert_eq!(app.snapshot.scores, TealWhiteBundle::new(0, 0));
        assert_eq!(app.store.load().scores(), TealWhiteBundle::new(0, 0));
    }

    #[test]
    fn test_settings_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir, Config::default());
        assert_eq!(app.theme, ThemePreference::Space);

        let _ = app.update(Message::ShowSettings);
        assert_eq!(app.app_state, AppState::Settings);
        let _ = app.update(Message::SelectTheme(ThemePreference::Sunrise));
        assert_eq!(app.store.load().theme, ThemePreference::Sunrise);
        let _ = app.update(Message::SettingsComplete);
        assert_eq!(app.app_state, AppState::MainPage);
        assert_eq!(
            app.application_style(&Theme::Dark).background_color,
            palette(ThemePreference::Sunrise).background
        );
    }
}
