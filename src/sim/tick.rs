//! Per-frame match orchestration
//!
//! [`MatchController`] owns the [`MatchContext`], turns [`Action`]s into
//! state changes and advances the simulation once per frame in a fixed order:
//!
//! 1. expire/finish power timers
//! 2. resolve human and AI intents
//! 3. move and clamp paddles
//! 4. move the ball
//! 5. walls
//! 6. goal (re-serves and ends the tick's collision checks)
//! 7. paddle hits
//! 8. score and win check

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ai::AiController;
use super::clock::{Clock, Millis, SystemClock};
use super::physics::PhysicsEngine;
use super::power::PowerStatus;
use super::score::Phase;
use super::state::{MatchContext, MatchEvent, Rect, Side};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Vertical paddle command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    /// Sign in court coordinates (y grows downward)
    fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
            Direction::Stop => 0.0,
        }
    }
}

/// Everything the input layer can ask of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Start the rally from `Idle`, or resume from `Paused`
    Serve,
    TogglePause,
    /// Held until replaced (key down / key up)
    SetIntent { side: Side, dir: Direction },
    ActivatePower { side: Side },
    /// Hand the right paddle to the AI or back to a human
    ToggleAi,
    /// Zero scores and start over
    Reset,
    Quit,
}

/// Paddle as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub rect: Rect,
    pub intent: f32,
}

/// Power status as seen by the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerView {
    pub status: PowerStatus,
    pub seconds_remaining: Option<u64>,
}

/// Read-only view of a match after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Indexed by [`Side::index`]
    pub paddles: [PaddleView; 2],
    pub ball: Rect,
    pub ball_velocity: Vec2,
    pub score: [u32; 2],
    pub phase: Phase,
    pub winner: Option<Side>,
    pub power: [PowerView; 2],
    pub ai_enabled: bool,
    /// Match clock (excludes time spent paused)
    pub time_ms: Millis,
}

/// Owns a match and drives it one frame at a time
#[derive(Debug)]
pub struct MatchController<C = SystemClock, R = Pcg32> {
    config: GameConfig,
    ctx: MatchContext,
    physics: PhysicsEngine,
    ai: AiController,
    ai_enabled: bool,
    /// Human intents (px/ms), indexed by [`Side::index`]
    intents: [f32; 2],
    clock: C,
    rng: R,
    /// Clock reading when the current pause began
    paused_at: Option<Millis>,
    /// Total time spent in completed pauses
    paused_total: Millis,
    events: Vec<MatchEvent>,
    running: bool,
}

impl MatchController<SystemClock, Pcg32> {
    /// Real-time match with a seeded serve RNG
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, SystemClock::new(), Pcg32::seed_from_u64(seed))
    }
}

impl<C: Clock, R: Rng> MatchController<C, R> {
    /// Validate `config` and set up a match waiting for its first serve
    pub fn new(config: GameConfig, clock: C, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let physics = PhysicsEngine::new(&config);
        let mut ctx = MatchContext::new(&config);
        physics.serve_random(&mut ctx.ball, &mut rng);

        log::info!(
            "Match ready: first to {}, AI {}",
            config.win_score,
            if config.ai_enabled { "on" } else { "off" }
        );

        Ok(Self {
            ai: AiController::new(&config),
            ai_enabled: config.ai_enabled,
            config,
            ctx,
            physics,
            intents: [0.0; 2],
            clock,
            rng,
            paused_at: None,
            paused_total: 0,
            events: Vec::new(),
            running: true,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn context(&self) -> &MatchContext {
        &self.ctx
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn phase(&self) -> Phase {
        self.ctx.score.phase()
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    /// False once `Quit` has been handled
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Match time: the clock minus every pause. Frozen while paused.
    pub fn match_time(&self) -> Millis {
        let now = self.paused_at.unwrap_or_else(|| self.clock.now());
        now.saturating_sub(self.paused_total)
    }

    /// Apply one input action
    pub fn handle(&mut self, action: Action) {
        if !self.running {
            return;
        }
        match action {
            Action::Serve => {
                self.ctx.score.serve();
            }
            Action::TogglePause => {
                self.ctx.score.toggle_pause();
            }
            Action::SetIntent { side, dir } => {
                self.intents[side.index()] = dir.sign() * self.config.paddle_speed;
            }
            Action::ActivatePower { side } => self.activate_power(side),
            Action::ToggleAi => {
                self.ai_enabled = !self.ai_enabled;
                if !self.ai_enabled {
                    self.intents[Side::Right.index()] = 0.0;
                }
                log::info!("AI {}", if self.ai_enabled { "on" } else { "off" });
            }
            Action::Reset => self.reset(),
            Action::Quit => {
                log::info!("Quit requested");
                self.running = false;
            }
        }
        self.sync_pause_clock();
    }

    fn activate_power(&mut self, side: Side) {
        if self.phase() != Phase::Playing {
            return;
        }
        let now = self.match_time();
        if self.ctx.power.request_activate(side, now) {
            self.events.push(MatchEvent::PowerActivated { side });
        }
    }

    fn reset(&mut self) {
        self.ctx.score.reset();
        self.ctx.power.reset();
        self.ctx.center_paddles(&self.config);
        self.physics.serve_random(&mut self.ctx.ball, &mut self.rng);
        log::info!("Match reset");
    }

    /// Start or stop the pause stopwatch to match the current phase
    fn sync_pause_clock(&mut self) {
        let paused = self.phase() == Phase::Paused;
        match (paused, self.paused_at) {
            (true, None) => self.paused_at = Some(self.clock.now()),
            (false, Some(at)) => {
                self.paused_total += self.clock.now().saturating_sub(at);
                self.paused_at = None;
            }
            _ => {}
        }
    }

    /// Advance the match by `dt` milliseconds
    pub fn update(&mut self, dt: f32) {
        debug_assert!(dt.is_finite() && dt >= 0.0, "invalid frame time {dt}");
        if !self.running || self.phase() == Phase::Paused {
            return;
        }

        let now = self.match_time();
        self.ctx.power.tick(now, &mut self.events);

        if self.phase() != Phase::Playing {
            return;
        }

        let left = self.intents[Side::Left.index()];
        let right = if self.ai_enabled {
            self.ai.compute_intent(
                self.ctx.ball.center().y,
                self.ctx.paddle(Side::Right).center_y(),
                dt,
            )
        } else {
            self.intents[Side::Right.index()]
        };

        let outcome = self
            .physics
            .advance(&mut self.ctx, dt, left, right, &mut self.rng);

        for event in outcome.events {
            self.events.push(event);
            if let Some(winner) = self.ctx.score.apply(&event, self.config.power_bonus_points) {
                self.events.push(MatchEvent::MatchWon { winner });
            }
        }
    }

    /// Signals raised since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let now = self.match_time();
        let paddle = |side: Side| {
            let p = self.ctx.paddle(side);
            PaddleView {
                rect: p.rect,
                intent: p.intent,
            }
        };
        let power = |side: Side| {
            let status = self.ctx.power.status(side, now);
            PowerView {
                status,
                seconds_remaining: status.seconds_remaining(),
            }
        };
        MatchSnapshot {
            paddles: [paddle(Side::Left), paddle(Side::Right)],
            ball: self.ctx.ball.rect,
            ball_velocity: self.ctx.ball.vel,
            score: self.ctx.score.scores(),
            phase: self.phase(),
            winner: self.ctx.score.winner(),
            power: [power(Side::Left), power(Side::Right)],
            ai_enabled: self.ai_enabled,
            time_ms: now,
        }
    }
}
