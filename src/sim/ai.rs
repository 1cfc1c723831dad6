//! Proportional paddle tracker
//!
//! Steers a paddle's centre toward the ball's centre at a capped speed,
//! idling inside a dead zone so an aligned paddle does not jitter.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiController {
    /// px/ms
    pub max_speed: f32,
    pub dead_zone: f32,
}

impl AiController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            max_speed: config.ai_max_speed,
            dead_zone: config.ai_dead_zone,
        }
    }

    /// Velocity intent (px/ms) for this tick.
    ///
    /// `intent * dt` never overshoots the ball and never exceeds
    /// `max_speed * dt` in magnitude.
    pub fn compute_intent(&self, ball_center_y: f32, paddle_center_y: f32, dt: f32) -> f32 {
        let diff = ball_center_y - paddle_center_y;
        if diff.abs() <= self.dead_zone || dt <= 0.0 {
            return 0.0;
        }
        let move_amount = (self.max_speed * dt).min(diff.abs());
        diff.signum() * move_amount / dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ai() -> AiController {
        AiController::new(&GameConfig::default())
    }

    #[test]
    fn test_dead_zone() {
        let ai = ai();
        assert_eq!(ai.compute_intent(308.0, 300.0, 16.0), 0.0);
        assert_eq!(ai.compute_intent(292.0, 300.0, 16.0), 0.0);
        assert_ne!(ai.compute_intent(308.5, 300.0, 16.0), 0.0);
    }

    #[test]
    fn test_capped_at_max_speed() {
        let ai = ai();
        // Ball far below: full speed downward
        let intent = ai.compute_intent(600.0, 100.0, 16.0);
        assert!((intent - 0.45).abs() < 1e-6);
        // Ball far above: full speed upward
        let intent = ai.compute_intent(0.0, 500.0, 16.0);
        assert!((intent + 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_no_overshoot() {
        let ai = ai();
        // 14.4 px allowed at 32 ms, only 10 px needed
        let intent = ai.compute_intent(310.0, 300.0, 32.0);
        assert!((intent * 32.0 - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_dt() {
        assert_eq!(ai().compute_intent(600.0, 100.0, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_ai_bound(
            ball in 0.0f32..720.0,
            paddle in 0.0f32..720.0,
            dt in 0.1f32..100.0,
        ) {
            let ai = ai();
            let intent = ai.compute_intent(ball, paddle, dt);
            let displacement = intent * dt;
            let diff = ball - paddle;

            prop_assert!(displacement.abs() <= ai.max_speed * dt + 1e-3);
            prop_assert!(displacement.abs() <= diff.abs() + 1e-3);
            if diff.abs() <= ai.dead_zone {
                prop_assert_eq!(intent, 0.0);
            } else {
                prop_assert_eq!(intent.signum(), diff.signum());
            }
        }
    }
}
