use super::message::Message;
use iced::{Task, time::Instant};
use log::*;
use rand::Rng;
use std::time::Duration;
use washers_common::team::Team;

pub mod celebration;
pub mod layer;
pub mod wash;

pub use celebration::Celebration;
pub use layer::EffectLayer;
pub use wash::WashAnimation;

pub const WIN_BY_2_FLASH: Duration = Duration::from_secs(1);
pub const NUDGE: Duration = Duration::from_millis(500);
pub const SCORE_BOUNCE: Duration = Duration::from_millis(500);
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    WinBy2Flash,
    Nudge,
    ScoreBounce,
    Wash,
}

impl EffectKind {
    pub fn lifetime(self) -> Duration {
        match self {
            Self::WinBy2Flash => WIN_BY_2_FLASH,
            Self::Nudge => NUDGE,
            Self::ScoreBounce => SCORE_BOUNCE,
            Self::Wash => wash::WASH_LIFETIME,
        }
    }
}

/// Posts `EffectExpired` once the effect's lifetime has passed
pub fn expire_after(kind: EffectKind, id: u64) -> Task<Message> {
    let lifetime = kind.lifetime();
    Task::perform(
        async move { tokio::time::sleep(lifetime).await },
        move |_| Message::EffectExpired(kind, id),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveWash {
    pub id: u64,
    pub started: Instant,
    pub animation: WashAnimation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveCelebration {
    pub started: Instant,
    pub celebration: Celebration,
}

/// Purely cosmetic state. Each effect instance gets a fresh id so that an expiry meant for an
/// earlier instance leaves a newer one alone.
#[derive(Debug, Clone)]
pub struct Effects {
    next_id: u64,
    now: Instant,
    win_by_2: Option<u64>,
    nudge: Option<u64>,
    bounce: Option<(Team, u64)>,
    wash: Option<ActiveWash>,
    celebration: Option<ActiveCelebration>,
}

impl Effects {
    pub fn new(now: Instant) -> Self {
        Self {
            next_id: 0,
            now,
            win_by_2: None,
            nudge: None,
            bounce: None,
            wash: None,
            celebration: None,
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn flash_win_by_2(&mut self) -> u64 {
        let id = self.take_id();
        self.win_by_2 = Some(id);
        id
    }

    pub fn nudge(&mut self) -> u64 {
        let id = self.take_id();
        self.nudge = Some(id);
        id
    }

    pub fn bounce(&mut self, team: Team) -> u64 {
        let id = self.take_id();
        self.bounce = Some((team, id));
        id
    }

    pub fn start_wash<R: Rng>(&mut self, now: Instant, rng: &mut R) -> u64 {
        let id = self.take_id();
        self.now = now;
        let animation = WashAnimation::new(rng);
        debug!(
            "Wash banner enters from {:?}, leaves toward {:?}",
            animation.enter_from, animation.exit_to
        );
        self.wash = Some(ActiveWash {
            id,
            started: now,
            animation,
        });
        id
    }

    pub fn dismiss_wash(&mut self) {
        self.wash = None;
    }

    pub fn celebrate<R: Rng>(&mut self, team: Team, now: Instant, rng: &mut R) {
        self.now = now;
        self.celebration = Some(ActiveCelebration {
            started: now,
            celebration: Celebration::new(team, rng),
        });
    }

    pub fn expire(&mut self, kind: EffectKind, id: u64) {
        match kind {
            EffectKind::WinBy2Flash => {
                if self.win_by_2 == Some(id) {
                    self.win_by_2 = None;
                }
            }
            EffectKind::Nudge => {
                if self.nudge == Some(id) {
                    self.nudge = None;
                }
            }
            EffectKind::ScoreBounce => {
                if matches!(self.bounce, Some((_, current)) if current == id) {
                    self.bounce = None;
                }
            }
            EffectKind::Wash => {
                if self.wash.as_ref().is_some_and(|w| w.id == id) {
                    self.wash = None;
                }
            }
        }
    }

    /// Advances the animation clock, dropping anything that has run its course
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        if self
            .wash
            .as_ref()
            .is_some_and(|w| now.saturating_duration_since(w.started) >= wash::WASH_LIFETIME)
        {
            self.wash = None;
        }
        if self.celebration.as_ref().is_some_and(|c| {
            c.celebration
                .is_finished(now.saturating_duration_since(c.started))
        }) {
            debug!("Celebration finished");
            self.celebration = None;
        }
    }

    /// Drops every effect, as on reset
    pub fn clear(&mut self) {
        self.win_by_2 = None;
        self.nudge = None;
        self.bounce = None;
        self.wash = None;
        self.celebration = None;
    }

    pub fn showing_win_by_2(&self) -> bool {
        self.win_by_2.is_some()
    }

    pub fn nudging(&self) -> bool {
        self.nudge.is_some()
    }

    pub fn bouncing(&self, team: Team) -> bool {
        matches!(self.bounce, Some((bouncing, _)) if bouncing == team)
    }

    pub fn wash(&self) -> Option<&ActiveWash> {
        self.wash.as_ref()
    }

    pub fn celebration(&self) -> Option<&ActiveCelebration> {
        self.celebration.as_ref()
    }

    /// Frames are only needed while something is moving
    pub fn is_animating(&self) -> bool {
        self.wash.is_some() || self.celebration.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut effects = Effects::new(Instant::now());
        let first = effects.flash_win_by_2();
        let second = effects.flash_win_by_2();
        assert_ne!(first, second);

        effects.expire(EffectKind::WinBy2Flash, first);
        assert!(effects.showing_win_by_2());
        effects.expire(EffectKind::WinBy2Flash, second);
        assert!(!effects.showing_win_by_2());
    }

    #[test]
    fn test_expiry_only_touches_its_kind() {
        let mut effects = Effects::new(Instant::now());
        let nudge = effects.nudge();
        let bounce = effects.bounce(Team::White);
        assert!(effects.nudging());
        assert!(effects.bouncing(Team::White));
        assert!(!effects.bouncing(Team::Teal));

        effects.expire(EffectKind::ScoreBounce, nudge);
        assert!(effects.nudging());
        assert!(effects.bouncing(Team::White));

        effects.expire(EffectKind::Nudge, nudge);
        assert!(!effects.nudging());
        effects.expire(EffectKind::ScoreBounce, bounce);
        assert!(!effects.bouncing(Team::White));
    }

    #[test]
    fn test_wash_lifecycle() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Instant::now();
        let mut effects = Effects::new(start);
        assert!(!effects.is_animating());

        let first = effects.start_wash(start, &mut rng);
        let second = effects.start_wash(start + Duration::from_secs(1), &mut rng);
        assert!(effects.is_animating());

        effects.expire(EffectKind::Wash, first);
        assert_eq!(effects.wash().map(|w| w.id), Some(second));

        effects.tick(start + Duration::from_secs(3));
        assert!(effects.wash().is_some());
        effects.tick(start + Duration::from_secs(1) + wash::WASH_LIFETIME);
        assert!(effects.wash().is_none());

        effects.start_wash(start, &mut rng);
        effects.dismiss_wash();
        assert!(!effects.is_animating());
    }

    #[test]
    fn test_celebration_runs_out() {
        let mut rng = StdRng::seed_from_u64(2);
        let start = Instant::now();
        let mut effects = Effects::new(start);
        effects.celebrate(Team::Teal, start, &mut rng);
        assert!(effects.is_animating());

        effects.tick(start + Duration::from_secs(2));
        assert!(effects.celebration().is_some());
        effects.tick(start + Duration::from_secs(20));
        assert!(effects.celebration().is_none());
        assert!(!effects.is_animating());
    }

    #[test]
    fn test_clear() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = Instant::now();
        let mut effects = Effects::new(start);
        effects.flash_win_by_2();
        effects.nudge();
        effects.bounce(Team::Teal);
        effects.start_wash(start, &mut rng);
        effects.celebrate(Team::White, start, &mut rng);

        effects.clear();
        assert!(!effects.showing_win_by_2());
        assert!(!effects.nudging());
        assert!(!effects.bouncing(Team::Teal));
        assert!(!effects.is_animating());
    }

    #[test]
    fn test_lifetimes() {
        assert_eq!(EffectKind::WinBy2Flash.lifetime(), Duration::from_secs(1));
        assert_eq!(EffectKind::Nudge.lifetime(), Duration::from_millis(500));
        assert_eq!(EffectKind::ScoreBounce.lifetime(), Duration::from_millis(500));
        assert_eq!(EffectKind::Wash.lifetime(), Duration::from_millis(3250));
    }
}
