//! Scores and match phase
//!
//! `Idle -> Playing -> (goal) -> Idle -> ... -> GameOver -> (reset) -> Idle`,
//! with `Paused` reachable from `Idle` and `Playing`.

use serde::{Deserialize, Serialize};

use super::state::{MatchEvent, Side};

/// Top-level match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball at centre, waiting for a serve
    Idle,
    /// Rally in progress
    Playing,
    /// Everything frozen
    Paused,
    /// Match decided, scores frozen until reset
    GameOver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Indexed by [`Side::index`]
    score: [u32; 2],
    phase: Phase,
    winner: Option<Side>,
    /// Phase to return to when unpausing
    resume_phase: Phase,
    win_score: u32,
}

impl MatchState {
    pub fn new(win_score: u32) -> Self {
        Self {
            score: [0, 0],
            phase: Phase::Idle,
            winner: None,
            resume_phase: Phase::Idle,
            win_score,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self, side: Side) -> u32 {
        self.score[side.index()]
    }

    pub fn scores(&self) -> [u32; 2] {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn win_score(&self) -> u32 {
        self.win_score
    }

    /// Serve from `Idle`, or resume from `Paused`. Returns whether the phase changed.
    pub fn serve(&mut self) -> bool {
        match self.phase {
            Phase::Idle => {
                self.set_phase(Phase::Playing);
                true
            }
            Phase::Paused => self.toggle_pause(),
            Phase::Playing | Phase::GameOver => false,
        }
    }

    /// Pause `Idle`/`Playing`, or resume from `Paused`. Ignored in `GameOver`.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Playing => {
                self.resume_phase = self.phase;
                self.set_phase(Phase::Paused);
                true
            }
            Phase::Paused => {
                self.set_phase(self.resume_phase);
                true
            }
            Phase::GameOver => false,
        }
    }

    /// Add points to a side and check for a winner.
    ///
    /// Returns the winner if this award decided the match. Ignored once the
    /// match is over.
    pub fn award(&mut self, side: Side, points: u32) -> Option<Side> {
        if self.phase == Phase::GameOver {
            return None;
        }
        self.score[side.index()] += points;
        self.check_win()
    }

    /// Fold one physics signal into the score. Returns the winner if it decided the match.
    pub fn apply(&mut self, event: &MatchEvent, power_bonus: u32) -> Option<Side> {
        match *event {
            MatchEvent::Goal { scorer } => self.apply_goal(scorer),
            MatchEvent::PaddleHit { side, power: true } => self.award(side, power_bonus),
            _ => None,
        }
    }

    /// Ball crossed a goal line: score it and wait for the next serve
    pub fn apply_goal(&mut self, scorer: Side) -> Option<Side> {
        let won = self.award(scorer, 1);
        if won.is_none() && self.phase == Phase::Playing {
            self.set_phase(Phase::Idle);
        }
        won
    }

    fn check_win(&mut self) -> Option<Side> {
        for side in Side::BOTH {
            let mine = self.score[side.index()];
            let theirs = self.score[side.opposite().index()];
            if mine >= self.win_score && mine > theirs {
                self.winner = Some(side);
                self.set_phase(Phase::GameOver);
                log::info!(
                    "{:?} wins {}-{}",
                    side,
                    self.score[0],
                    self.score[1]
                );
                return Some(side);
            }
        }
        None
    }

    /// Zero the scores and wait for a serve
    pub fn reset(&mut self) {
        self.score = [0, 0];
        self.winner = None;
        self.resume_phase = Phase::Idle;
        self.set_phase(Phase::Idle);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_starts_rally() {
        let mut m = MatchState::new(7);
        assert_eq!(m.phase(), Phase::Idle);
        assert!(m.serve());
        assert_eq!(m.phase(), Phase::Playing);
        assert!(!m.serve());
    }

    #[test]
    fn test_goal_returns_to_idle() {
        let mut m = MatchState::new(7);
        m.serve();
        assert_eq!(m.apply_goal(Side::Right), None);
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.scores(), [0, 1]);
    }

    #[test]
    fn test_pause_round_trip() {
        let mut m = MatchState::new(7);
        m.serve();
        assert!(m.toggle_pause());
        assert_eq!(m.phase(), Phase::Paused);
        assert!(m.toggle_pause());
        assert_eq!(m.phase(), Phase::Playing);

        // Pausing from Idle resumes to Idle
        m.apply_goal(Side::Left);
        m.toggle_pause();
        m.toggle_pause();
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn test_serve_resumes_from_pause() {
        let mut m = MatchState::new(7);
        m.serve();
        m.toggle_pause();
        assert!(m.serve());
        assert_eq!(m.phase(), Phase::Playing);
    }

    #[test]
    fn test_first_to_target_wins_and_freezes() {
        let mut m = MatchState::new(7);
        for _ in 0..5 {
            m.serve();
            m.apply_goal(Side::Right);
        }
        for _ in 0..6 {
            m.serve();
            assert_eq!(m.apply_goal(Side::Left), None);
        }
        m.serve();
        assert_eq!(m.apply_goal(Side::Left), Some(Side::Left));
        assert_eq!(m.scores(), [7, 5]);
        assert_eq!(m.phase(), Phase::GameOver);
        assert_eq!(m.winner(), Some(Side::Left));

        // Frozen
        assert_eq!(m.apply_goal(Side::Right), None);
        assert_eq!(m.award(Side::Right, 3), None);
        assert_eq!(m.scores(), [7, 5]);
        assert!(!m.serve());
        assert!(!m.toggle_pause());
        assert_eq!(m.phase(), Phase::GameOver);
    }

    #[test]
    fn test_bonus_can_win_mid_rally() {
        let mut m = MatchState::new(3);
        m.serve();
        m.award(Side::Left, 2);
        assert_eq!(m.phase(), Phase::Playing);
        assert_eq!(m.award(Side::Left, 1), Some(Side::Left));
        assert_eq!(m.phase(), Phase::GameOver);
    }

    #[test]
    fn test_apply_signals() {
        let mut m = MatchState::new(7);
        m.serve();
        m.apply(&MatchEvent::PaddleHit { side: Side::Left, power: false }, 2);
        assert_eq!(m.scores(), [0, 0]);
        m.apply(&MatchEvent::PaddleHit { side: Side::Left, power: true }, 2);
        assert_eq!(m.scores(), [2, 0]);
        m.apply(&MatchEvent::WallBounce, 2);
        m.apply(&MatchEvent::Goal { scorer: Side::Right }, 2);
        assert_eq!(m.scores(), [2, 1]);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn test_reset() {
        let mut m = MatchState::new(1);
        m.serve();
        m.apply_goal(Side::Right);
        assert_eq!(m.phase(), Phase::GameOver);

        m.reset();
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.scores(), [0, 0]);
        assert_eq!(m.winner(), None);
    }
}
