//! Startup errors
//!
//! The running simulation has no recoverable errors; everything here is
//! raised before the first tick.

use thiserror::Error;

/// A configuration the simulation refuses to start with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in court height {court}")]
    PaddleTooTall { paddle: f32, court: f32 },

    #[error("ball size {ball} does not fit in court height {court}")]
    BallTooLarge { ball: f32, court: f32 },

    #[error("court width {court} is too narrow, paddles and ball need {needed}")]
    CourtTooNarrow { needed: f32, court: f32 },

    #[error("serve angle {0} rad must be below a right angle")]
    ServeAngleTooSteep(f32),

    #[error("win score must be at least 1")]
    ZeroWinScore,
}
