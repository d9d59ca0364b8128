use log::*;
use thiserror::Error;
use washers_common::{
    bundles::TealWhiteBundle,
    match_snapshot::MatchSnapshot,
    rules::{self, Evaluation, Score, WinKind},
    team::Team,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinInfo {
    pub team: Team,
    pub is_shutout: bool,
    pub final_scores: TealWhiteBundle<Score>,
}

/// Result of a scoring action that was accepted by the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Continue,
    RejectedNoTeamSelected,
    WinBy2Warning,
    Win(WinInfo),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum MatchManagerError {
    #[error("The game is over, reset to keep scoring")]
    GameOver,
    #[error("{0}'s score can not go any higher")]
    ScoreOverflow(Team),
}

pub type Result<T> = std::result::Result<T, MatchManagerError>;

#[derive(Debug, Default)]
pub struct MatchManager {
    scores: TealWhiteBundle<Score>,
    selected_team: Option<Team>,
    game_over: bool,
}

impl MatchManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from saved scores. The selection and game over flag always start neutral.
    pub fn restore(scores: TealWhiteBundle<Score>) -> Self {
        info!("Restoring match with scores {scores}");
        Self {
            scores,
            ..Default::default()
        }
    }

    pub fn get_scores(&self) -> TealWhiteBundle<Score> {
        self.scores
    }

    pub fn selected_team(&self) -> Option<Team> {
        self.selected_team
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn select_team(&mut self, team: Team) -> Result<()> {
        if self.game_over {
            return Err(MatchManagerError::GameOver);
        }

        if self.selected_team != Some(team) {
            debug!("{} Selected {team}", self.status_string());
        }
        self.selected_team = Some(team);
        Ok(())
    }

    /// Awards `points` to the selected team, or handles a wash when `points` is zero.
    ///
    /// Any accepted action other than a rejection clears the selection.
    pub fn score_points(&mut self, points: u8) -> Result<MatchOutcome> {
        if self.game_over {
            return Err(MatchManagerError::GameOver);
        }

        if points == 0 {
            info!("{} Wash", self.status_string());
            self.selected_team = None;
            return Ok(MatchOutcome::Continue);
        }

        let Some(team) = self.selected_team else {
            debug!(
                "{} Ignoring {points} points, no team selected",
                self.status_string()
            );
            return Ok(MatchOutcome::RejectedNoTeamSelected);
        };

        self.scores[team] = self.scores[team]
            .checked_add(Score::from(points))
            .ok_or(MatchManagerError::ScoreOverflow(team))?;
        self.selected_team = None;
        info!("{} {points} points for {team}", self.status_string());

        let outcome = match rules::evaluate(self.scores) {
            Evaluation::Continue => MatchOutcome::Continue,
            Evaluation::WinBy2Warning => {
                info!("{} Must win by 2", self.status_string());
                MatchOutcome::WinBy2Warning
            }
            Evaluation::Win { team, kind } => {
                self.game_over = true;
                let is_shutout = kind == WinKind::Shutout;
                info!(
                    "{} {team} wins{}",
                    self.status_string(),
                    if is_shutout { " by shutout" } else { "" }
                );
                MatchOutcome::Win(WinInfo {
                    team,
                    is_shutout,
                    final_scores: self.scores,
                })
            }
        };

        Ok(outcome)
    }

    pub fn reset(&mut self) {
        info!("{} Resetting match", self.status_string());
        self.scores = Default::default();
        self.selected_team = None;
        self.game_over = false;
    }

    pub fn generate_snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            scores: self.scores,
            selected_team: self.selected_team,
            game_over: self.game_over,
        }
    }

    fn status_string(&self) -> String {
        if self.game_over {
            format!("[{} | Game Over]", self.scores)
        } else {
            format!("[{}]", self.scores)
        }
    }
}
