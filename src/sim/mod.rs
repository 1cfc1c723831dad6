//! Match simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and platform dependencies:
//! - Time only from an injected [`Clock`]
//! - Randomness only from an injected RNG
//! - Fixed per-tick ordering (timers, intents, motion, walls, goal, hits, win)

pub mod ai;
pub mod clock;
pub mod physics;
pub mod power;
pub mod score;
pub mod state;
pub mod tick;

pub use ai::AiController;
pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use physics::{PhysicsEngine, StepOutcome};
pub use power::{PowerAbilityManager, PowerAbilityState, PowerStatus};
pub use score::{MatchState, Phase};
pub use state::{Ball, MatchContext, MatchEvent, Paddle, Rect, Side};
pub use tick::{Action, Direction, MatchController, MatchSnapshot, PaddleView, PowerView};
