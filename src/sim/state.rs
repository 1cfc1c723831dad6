//! Match state and core simulation types
//!
//! Everything a match mutates lives in one [`MatchContext`] owned by the
//! controller and lent to each component per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::power::PowerAbilityManager;
use super::score::MatchState;
use crate::config::GameConfig;

/// Player/paddle side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into per-player arrays
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Horizontal direction pointing at this side's goal line
    pub fn toward(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.min = center - self.size / 2.0;
    }

    /// Strict overlap; rects that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Vertical velocity intent for the current tick (px/ms, + is down)
    pub intent: f32,
}

impl Paddle {
    /// Paddle in its column, vertically centred
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let x = match side {
            Side::Left => config.left_paddle_x(),
            Side::Right => config.right_paddle_x(),
        };
        let top = (config.court_height - config.paddle_height) / 2.0;
        Self {
            rect: Rect::new(x, top, config.paddle_width, config.paddle_height),
            intent: 0.0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.rect.center().y
    }

    /// Keep the paddle's full height inside the court
    pub fn clamp_to_court(&mut self, court_height: f32) {
        let max_top = court_height - self.rect.size.y;
        self.rect.min.y = self.rect.min.y.clamp(0.0, max_top);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity (px/ms)
    pub vel: Vec2,
}

impl Ball {
    /// Ball at court centre, not moving
    pub fn new(config: &GameConfig) -> Self {
        let center = Vec2::new(config.court_width / 2.0, config.court_height / 2.0);
        Self {
            rect: Rect::from_center(center, Vec2::splat(config.ball_size)),
            vel: Vec2::ZERO,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// One-shot signals for the audio/HUD layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Ball struck a paddle (`power` if it was a power shot)
    PaddleHit { side: Side, power: bool },
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball crossed a goal line
    Goal { scorer: Side },
    /// A player armed their power shot
    PowerActivated { side: Side },
    /// An armed power shot ran out without a hit
    PowerExpired { side: Side },
    /// Cooldown finished, power shot available again
    PowerReady { side: Side },
    /// Match decided
    MatchWon { winner: Side },
}

/// Complete mutable match state
#[derive(Debug, Clone)]
pub struct MatchContext {
    /// Indexed by [`Side::index`]
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub power: PowerAbilityManager,
    pub score: MatchState,
}

impl MatchContext {
    /// Fresh match: paddles centred, ball at rest in the middle
    pub fn new(config: &GameConfig) -> Self {
        Self {
            paddles: [
                Paddle::new(Side::Left, config),
                Paddle::new(Side::Right, config),
            ],
            ball: Ball::new(config),
            power: PowerAbilityManager::new(config),
            score: MatchState::new(config.win_score),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    /// Put both paddles back in the middle of their columns
    pub fn center_paddles(&mut self, config: &GameConfig) {
        for side in Side::BOTH {
            self.paddles[side.index()] = Paddle::new(side, config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::Left.index(), 0);
        assert_eq!(Side::Right.index(), 1);
        assert!(Side::Left.toward() < 0.0);
        assert!(Side::Right.toward() > 0.0);
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let inside = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_rect_center_roundtrip() {
        let mut r = Rect::from_center(Vec2::new(50.0, 40.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.left(), 40.0);
        assert_eq!(r.top(), 35.0);
        r.set_center(Vec2::new(0.0, 0.0));
        assert_eq!(r.right(), 10.0);
        assert_eq!(r.bottom(), 5.0);
    }

    #[test]
    fn test_new_context_layout() {
        let config = GameConfig::default();
        let ctx = MatchContext::new(&config);

        assert_eq!(ctx.paddle(Side::Left).rect.left(), 30.0);
        assert_eq!(ctx.paddle(Side::Right).rect.right(), 930.0);
        assert_eq!(ctx.paddle(Side::Left).center_y(), 360.0);
        assert_eq!(ctx.ball.center(), Vec2::new(480.0, 360.0));
        assert_eq!(ctx.ball.speed(), 0.0);
    }

    #[test]
    fn test_paddle_clamp() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Left, &config);

        paddle.rect.min.y = -40.0;
        paddle.clamp_to_court(config.court_height);
        assert_eq!(paddle.rect.top(), 0.0);

        paddle.rect.min.y = 700.0;
        paddle.clamp_to_court(config.court_height);
        assert_eq!(paddle.rect.bottom(), 720.0);
    }
}
