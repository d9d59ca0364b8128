//! Win conditions for a game of washers.
//!
//! A game is played to [`WIN_THRESHOLD`] and must be won by [`WIN_MARGIN`]. A team that reaches
//! [`SHUTOUT_THRESHOLD`] while the other team is still on zero wins immediately.

use crate::{bundles::TealWhiteBundle, team::Team};

/// A team's running total
pub type Score = u32;

pub const WIN_THRESHOLD: Score = 21;
pub const WIN_MARGIN: Score = 2;
pub const SHUTOUT_THRESHOLD: Score = 11;

/// Points that can be awarded in a single round. Zero is a wash.
pub const POINT_VALUES: [u8; 4] = [0, 1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinKind {
    Standard,
    Shutout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Continue,
    /// The leader is on exactly `WIN_THRESHOLD` with a one point lead
    WinBy2Warning,
    Win { team: Team, kind: WinKind },
}

/// Classifies the scores after points have been added to one team.
///
/// Checks run in order and the first match wins: shutout, the 21-20 warning, a standard win.
pub fn evaluate(scores: TealWhiteBundle<Score>) -> Evaluation {
    for (team, &score) in scores.iter() {
        if score >= SHUTOUT_THRESHOLD && scores[team.other()] == 0 {
            return Evaluation::Win {
                team,
                kind: WinKind::Shutout,
            };
        }
    }

    for (team, &score) in scores.iter() {
        if score == WIN_THRESHOLD && scores[team.other()] == WIN_THRESHOLD - 1 {
            return Evaluation::WinBy2Warning;
        }
    }

    for (team, &score) in scores.iter() {
        if score >= WIN_THRESHOLD && score.saturating_sub(scores[team.other()]) >= WIN_MARGIN {
            return Evaluation::Win {
                team,
                kind: WinKind::Standard,
            };
        }
    }

    Evaluation::Continue
}
