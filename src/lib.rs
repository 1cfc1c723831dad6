//! Paddle Duel - a two-paddle Pong simulation core
//!
//! Core modules:
//! - `sim`: Match simulation (physics, power shots, AI, scoring, tick loop)
//! - `config`: Rule constants and their validation
//! - `error`: Startup errors
//!
//! Rendering, audio and input translation live outside this crate; they read
//! [`sim::MatchSnapshot`] and [`sim::MatchEvent`] and feed [`sim::Action`]s.

pub mod config;
pub mod error;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

/// Default rule constants
pub mod consts {
    /// Court dimensions (pixels)
    pub const COURT_WIDTH: f32 = 960.0;
    pub const COURT_HEIGHT: f32 = 720.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 110.0;
    pub const PADDLE_INSET: f32 = 30.0;
    /// Human paddle speed (pixels per ms)
    pub const PADDLE_SPEED: f32 = 0.6;
    /// AI paddle speed cap (pixels per ms)
    pub const AI_MAX_SPEED: f32 = 0.45;
    /// AI stops correcting inside this band
    pub const AI_DEAD_ZONE: f32 = 8.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_BASE_SPEED: f32 = 0.35;
    /// Speed multiplier on a normal paddle hit
    pub const SPEED_INCREMENT: f32 = 1.05;
    pub const HIT_INFLUENCE: f32 = 0.18;
    pub const MAX_SERVE_ANGLE: f32 = 0.38; // radians (~22 degrees)
    pub const PADDLE_NUDGE: f32 = 1.0;

    /// Power shot
    pub const POWER_MULTIPLIER: f32 = 1.6;
    pub const POWER_COOLDOWN_MS: u64 = 5_000;
    pub const POWER_WINDOW_MS: u64 = 1_200;
    pub const POWER_BONUS_POINTS: u32 = 1;

    /// First to this many points wins
    pub const WIN_SCORE: u32 = 7;

    /// Frame length used by headless runs (~60 Hz)
    pub const FRAME_MS: f32 = 16.0;
}
