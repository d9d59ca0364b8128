use iced::{Point, Rectangle, Size, Vector};
use rand::Rng;
use std::time::Duration;

pub const WASH_ENTER: Duration = Duration::from_millis(1200);
pub const WASH_PAUSE: Duration = Duration::from_millis(800);
pub const WASH_EXIT: Duration = Duration::from_millis(1200);
pub const WASH_LIFETIME: Duration = Duration::from_millis(3250);

pub const BANNER_WIDTH: f32 = 420.0;
pub const BANNER_HEIGHT: f32 = 150.0;

/// The eight compass directions the banner can come from or leave toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

pub const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// Unit steps in screen coordinates, y pointing down
    pub fn unit(self) -> Vector {
        match self {
            Self::North => Vector::new(0.0, -1.0),
            Self::NorthEast => Vector::new(1.0, -1.0),
            Self::East => Vector::new(1.0, 0.0),
            Self::SouthEast => Vector::new(1.0, 1.0),
            Self::South => Vector::new(0.0, 1.0),
            Self::SouthWest => Vector::new(-1.0, 1.0),
            Self::West => Vector::new(-1.0, 0.0),
            Self::NorthWest => Vector::new(-1.0, -1.0),
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        DIRECTIONS[rng.random_range(0..DIRECTIONS.len())]
    }

    pub fn random_except<R: Rng>(rng: &mut R, except: Self) -> Self {
        let others: Vec<_> = DIRECTIONS.into_iter().filter(|d| *d != except).collect();
        others[rng.random_range(0..others.len())]
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WashAnimation {
    pub enter_from: Direction,
    pub exit_to: Direction,
}

impl WashAnimation {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let enter_from = Direction::random(rng);
        let exit_to = Direction::random_except(rng, enter_from);
        Self {
            enter_from,
            exit_to,
        }
    }

    /// Where the banner sits relative to the centre, where `(±1, ±1)` is just out of view in
    /// that direction
    pub fn progress_offset(&self, elapsed: Duration) -> Vector {
        let enter_end = WASH_ENTER;
        let pause_end = WASH_ENTER + WASH_PAUSE;

        if elapsed < enter_end {
            let t = elapsed.as_secs_f32() / WASH_ENTER.as_secs_f32();
            self.enter_from.unit() * (1.0 - ease_in_out(t))
        } else if elapsed < pause_end {
            Vector::new(0.0, 0.0)
        } else {
            let t = (elapsed - pause_end).as_secs_f32() / WASH_EXIT.as_secs_f32();
            self.exit_to.unit() * ease_in_out(t)
        }
    }

    /// The banner's rectangle inside a window of the given size
    pub fn banner_bounds(&self, elapsed: Duration, window: Size) -> Rectangle {
        let offset = self.progress_offset(elapsed);
        let travel = Vector::new(
            (window.width + BANNER_WIDTH) / 2.0,
            (window.height + BANNER_HEIGHT) / 2.0,
        );
        let center = Point::new(
            window.width / 2.0 + offset.x * travel.x,
            window.height / 2.0 + offset.y * travel.y,
        );
        Rectangle::new(
            Point::new(center.x - BANNER_WIDTH / 2.0, center.y - BANNER_HEIGHT / 2.0),
            Size::new(BANNER_WIDTH, BANNER_HEIGHT),
        )
    }
}
