//! Match configuration
//!
//! Fixed rule constants for a match. Built once, validated once, then shared
//! read-only by every simulation component.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Court geometry, speeds, power timings and scoring rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance between the court edge and the paddle's outer face
    pub paddle_inset: f32,
    /// Human paddle speed (px/ms)
    pub paddle_speed: f32,
    /// AI paddle speed cap (px/ms)
    pub ai_max_speed: f32,
    /// AI tolerance band around perfect alignment (px)
    pub ai_dead_zone: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Serve speed (px/ms)
    pub base_ball_speed: f32,
    /// Velocity multiplier applied on every normal paddle hit
    pub speed_increment: f32,
    /// Vertical velocity added per unit of normalized hit offset
    pub hit_influence: f32,
    /// Largest serve angle away from horizontal (radians)
    pub max_serve_angle: f32,
    /// Gap left between ball and paddle face after a hit (px)
    pub paddle_nudge: f32,

    // === Power shot ===
    pub power_multiplier: f32,
    pub power_cooldown_ms: u64,
    pub power_window_ms: u64,
    pub power_bonus_points: u32,

    // === Rules ===
    pub win_score: u32,
    /// Whether the AI drives the right paddle when the match starts
    pub ai_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_speed: PADDLE_SPEED,
            ai_max_speed: AI_MAX_SPEED,
            ai_dead_zone: AI_DEAD_ZONE,

            ball_size: BALL_SIZE,
            base_ball_speed: BALL_BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
            hit_influence: HIT_INFLUENCE,
            max_serve_angle: MAX_SERVE_ANGLE,
            paddle_nudge: PADDLE_NUDGE,

            power_multiplier: POWER_MULTIPLIER,
            power_cooldown_ms: POWER_COOLDOWN_MS,
            power_window_ms: POWER_WINDOW_MS,
            power_bonus_points: POWER_BONUS_POINTS,

            win_score: WIN_SCORE,
            ai_enabled: true,
        }
    }
}

impl GameConfig {
    /// Reject configurations the simulation cannot run with.
    ///
    /// Called once before a match is built; the simulation assumes these
    /// hold afterwards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("court_width", self.court_width)?;
        positive("court_height", self.court_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_size", self.ball_size)?;
        positive("base_ball_speed", self.base_ball_speed)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("ai_max_speed", self.ai_max_speed)?;
        positive("speed_increment", self.speed_increment)?;
        positive("power_multiplier", self.power_multiplier)?;
        non_negative("ai_dead_zone", self.ai_dead_zone)?;
        non_negative("hit_influence", self.hit_influence)?;
        non_negative("max_serve_angle", self.max_serve_angle)?;
        non_negative("paddle_inset", self.paddle_inset)?;
        non_negative("paddle_nudge", self.paddle_nudge)?;

        if self.paddle_height > self.court_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                court: self.court_height,
            });
        }
        if self.ball_size >= self.court_height {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                court: self.court_height,
            });
        }
        // Both paddles plus the serve spot must fit side by side
        let paddles_span = 2.0 * (self.paddle_inset + self.paddle_width) + self.ball_size;
        if paddles_span >= self.court_width {
            return Err(ConfigError::CourtTooNarrow {
                needed: paddles_span,
                court: self.court_width,
            });
        }
        if self.max_serve_angle >= std::f32::consts::FRAC_PI_2 {
            return Err(ConfigError::ServeAngleTooSteep(self.max_serve_angle));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// X of the left paddle's left edge
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_inset
    }

    /// X of the right paddle's left edge
    pub fn right_paddle_x(&self) -> f32 {
        self.court_width - self.paddle_inset - self.paddle_width
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_paddle_height_rejected() {
        let config = GameConfig {
            paddle_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "paddle_height",
                ..
            })
        ));
    }

    #[test]
    fn test_nan_speed_rejected() {
        let config = GameConfig {
            base_ball_speed: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_paddle_taller_than_court_rejected() {
        let config = GameConfig {
            paddle_height: 800.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_narrow_court_rejected() {
        let config = GameConfig {
            court_width: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CourtTooNarrow { .. })
        ));
    }

    #[test]
    fn test_zero_win_score_rejected() {
        let config = GameConfig {
            win_score: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }

    #[test]
    fn test_paddle_columns() {
        let config = GameConfig::default();
        assert_eq!(config.left_paddle_x(), 30.0);
        assert_eq!(config.right_paddle_x(), 960.0 - 30.0 - 10.0);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
