use iced::{Color, Point, Size};
use rand::Rng;
use std::{f32::consts::TAU, time::Duration};
use washers_common::team::Team;

pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_LIFETIME: Duration = Duration::from_secs(1);
pub const CONFETTI_COUNT: usize = 120;
pub const CONFETTI_DELAY: Duration = Duration::from_millis(300);
pub const BURST_COUNT: usize = 3;
pub const BURST_SIZE: usize = 30;
pub const BURST_INTERVAL: Duration = Duration::from_millis(1500);

const TEAL_PALETTE: [Color; 5] = [
    Color::from_rgb(0.0, 1.0, 1.0),
    Color::from_rgb(0.0, 0.8, 0.8),
    Color::from_rgb(0.25, 0.88, 0.82),
    Color::from_rgb(0.5, 1.0, 0.83),
    Color::from_rgb(1.0, 0.84, 0.0),
];

const WHITE_PALETTE: [Color; 5] = [
    Color::from_rgb(1.0, 1.0, 1.0),
    Color::from_rgb(0.94, 0.97, 1.0),
    Color::from_rgb(0.75, 0.75, 0.75),
    Color::from_rgb(0.9, 0.9, 0.98),
    Color::from_rgb(1.0, 0.84, 0.0),
];

pub fn team_palette(team: Team) -> &'static [Color] {
    match team {
        Team::Teal => &TEAL_PALETTE,
        Team::White => &WHITE_PALETTE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Rounded,
    Square,
}

/// One spark of the initial burst, flying out from the centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub angle: f32,
    pub speed: f32,
    pub size: f32,
    pub color: Color,
}

impl Particle {
    /// Position, radius and opacity, or `None` once the particle has faded out
    pub fn state_at(&self, elapsed: Duration, window: Size) -> Option<(Point, f32, f32)> {
        if elapsed >= PARTICLE_LIFETIME {
            return None;
        }
        let secs = elapsed.as_secs_f32();
        let life = 1.0 - secs / PARTICLE_LIFETIME.as_secs_f32();
        let distance = self.speed * secs;
        let position = Point::new(
            window.width / 2.0 + self.angle.cos() * distance,
            window.height / 2.0 + self.angle.sin() * distance,
        );
        Some((position, self.size * life / 2.0, life))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confetti {
    /// Horizontal start as a fraction of the window width
    pub x: f32,
    /// Vertical start as a fraction of the window height
    pub start_y: f32,
    pub delay: Duration,
    pub fall: Duration,
    pub size: f32,
    pub shape: Shape,
    pub color: Color,
    /// Radians per second
    pub spin: f32,
    /// Sideways travel over the whole fall, in logical pixels
    pub drift: f32,
}

impl Confetti {
    /// Centre and rotation, or `None` before the piece starts or after it has landed
    pub fn state_at(&self, elapsed: Duration, window: Size) -> Option<(Point, f32)> {
        let moving = elapsed.checked_sub(self.delay)?;
        if moving >= self.fall {
            return None;
        }
        let t = moving.as_secs_f32() / self.fall.as_secs_f32();
        let top = self.start_y * window.height - self.size;
        let bottom = window.height + self.size;
        let position = Point::new(
            self.x * window.width + self.drift * t,
            top + (bottom - top) * t,
        );
        Some((position, self.spin * moving.as_secs_f32()))
    }

    fn ends_at(&self) -> Duration {
        self.delay + self.fall
    }
}

/// Everything drawn after a win. Pieces are laid out up front and only their positions move.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub team: Team,
    pub particles: Vec<Particle>,
    pub confetti: Vec<Confetti>,
}

impl Celebration {
    pub fn new<R: Rng>(team: Team, rng: &mut R) -> Self {
        let palette = team_palette(team);
        let pick = |rng: &mut R| palette[rng.random_range(0..palette.len())];

        let particles = (0..PARTICLE_COUNT)
            .map(|i| Particle {
                angle: TAU * i as f32 / PARTICLE_COUNT as f32 + rng.random_range(-0.05..0.05),
                speed: rng.random_range(200.0..300.0),
                size: rng.random_range(6.0..14.0),
                color: pick(rng),
            })
            .collect();

        let mut confetti: Vec<_> = (0..CONFETTI_COUNT)
            .map(|_| Confetti {
                x: rng.random_range(0.0..1.0),
                start_y: 0.0,
                delay: CONFETTI_DELAY + Duration::from_secs_f32(rng.random_range(0.0..4.0)),
                fall: Duration::from_secs_f32(rng.random_range(3.0..5.0)),
                size: rng.random_range(10.0..28.0),
                shape: random_shape(rng),
                color: pick(rng),
                spin: rng.random_range(-6.0..6.0),
                drift: rng.random_range(-80.0..80.0),
            })
            .collect();

        for burst in 1..=BURST_COUNT {
            let start = CONFETTI_DELAY + BURST_INTERVAL * burst as u32;
            confetti.extend((0..BURST_SIZE).map(|_| Confetti {
                x: rng.random_range(0.35..0.65),
                start_y: rng.random_range(0.3..0.5),
                delay: start + Duration::from_secs_f32(rng.random_range(0.0..0.2)),
                fall: Duration::from_secs_f32(rng.random_range(2.5..4.5)),
                size: rng.random_range(8.0..23.0),
                shape: random_shape(rng),
                color: pick(rng),
                spin: rng.random_range(-8.0..8.0),
                drift: rng.random_range(-200.0..200.0),
            }));
        }

        Self {
            team,
            particles,
            confetti,
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= PARTICLE_LIFETIME && self.confetti.iter().all(|c| elapsed >= c.ends_at())
    }
}

fn random_shape<R: Rng>(rng: &mut R) -> Shape {
    match rng.random_range(0..3) {
        0 => Shape::Circle,
        1 => Shape::Rounded,
        _ => Shape::Square,
    }
}
