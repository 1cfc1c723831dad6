//! Paddle and ball motion, collisions and serves
//!
//! One `advance` call moves everything by `dt` milliseconds and resolves, in
//! order: walls, goal lines, then paddle faces. A goal re-serves the ball and
//! skips the paddle checks for that tick.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, MatchContext, MatchEvent, Paddle, Side};
use crate::config::GameConfig;

/// What happened during one physics step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    pub events: Vec<MatchEvent>,
    /// Scoring side, if the ball crossed a goal line
    pub goal: Option<Side>,
}

#[derive(Debug, Clone)]
pub struct PhysicsEngine {
    config: GameConfig,
}

impl PhysicsEngine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Advance paddles and ball by `dt` ms with the given paddle intents (px/ms)
    pub fn advance<R: Rng + ?Sized>(
        &self,
        ctx: &mut MatchContext,
        dt: f32,
        left_intent: f32,
        right_intent: f32,
        rng: &mut R,
    ) -> StepOutcome {
        let mut out = StepOutcome::default();

        // Paddles
        for (side, intent) in [(Side::Left, left_intent), (Side::Right, right_intent)] {
            let paddle = ctx.paddle_mut(side);
            paddle.intent = intent;
            paddle.rect.min.y += intent * dt;
            paddle.clamp_to_court(self.config.court_height);
        }

        // Ball
        ctx.ball.rect.min += ctx.ball.vel * dt;

        if self.bounce_walls(&mut ctx.ball) {
            out.events.push(MatchEvent::WallBounce);
        }

        if let Some(scorer) = self.check_goal(&ctx.ball) {
            log::debug!("Goal for {:?} at speed {:.3}", scorer, ctx.ball.speed());
            self.serve(&mut ctx.ball, scorer.opposite(), rng);
            out.events.push(MatchEvent::Goal { scorer });
            out.goal = Some(scorer);
            return out;
        }

        for side in Side::BOTH {
            if let Some(event) = self.resolve_paddle_hit(ctx, side) {
                out.events.push(event);
            }
        }

        out
    }

    /// Reflect off the top/bottom walls. Returns true on a bounce.
    fn bounce_walls(&self, ball: &mut Ball) -> bool {
        if ball.rect.top() <= 0.0 {
            ball.rect.min.y = 0.0;
            ball.vel.y = -ball.vel.y;
            true
        } else if ball.rect.bottom() >= self.config.court_height {
            ball.rect.min.y = self.config.court_height - ball.rect.size.y;
            ball.vel.y = -ball.vel.y;
            true
        } else {
            false
        }
    }

    /// Scoring side if the ball touched a goal line
    pub fn check_goal(&self, ball: &Ball) -> Option<Side> {
        if ball.rect.left() <= 0.0 {
            Some(Side::Right)
        } else if ball.rect.right() >= self.config.court_width {
            Some(Side::Left)
        } else {
            None
        }
    }

    /// Bounce the ball off `side`'s paddle if it is overlapping and incoming
    fn resolve_paddle_hit(&self, ctx: &mut MatchContext, side: Side) -> Option<MatchEvent> {
        let paddle = ctx.paddle(side).clone();
        let ball = &mut ctx.ball;

        // Only while moving toward this paddle, so a ball being nudged out
        // cannot trigger twice
        let incoming = ball.vel.x * side.toward() > 0.0;
        if !incoming || !paddle.rect.overlaps(&ball.rect) {
            return None;
        }

        let power = ctx.power.is_active(side);
        if power {
            // Fixed arc: no hit-position influence on power shots
            let m = self.config.power_multiplier;
            ball.vel = Vec2::new(-ball.vel.x * m, ball.vel.y * m);
            ctx.power.consume(side);
        } else {
            ball.vel.x = -ball.vel.x;
            ball.vel.y += hit_offset(ball, &paddle) * self.config.hit_influence;
            ball.vel *= self.config.speed_increment;
        }

        // Just outside the paddle face, horizontal axis only
        let nudge = self.config.paddle_nudge;
        ball.rect.min.x = match side {
            Side::Left => paddle.rect.right() + nudge,
            Side::Right => paddle.rect.left() - nudge - ball.rect.size.x,
        };

        log::debug!(
            "{:?} paddle hit (power: {}), ball vel ({:.4}, {:.4})",
            side,
            power,
            ball.vel.x,
            ball.vel.y
        );
        Some(MatchEvent::PaddleHit { side, power })
    }

    /// Centre the ball and launch it at base speed toward `toward`, at a random
    /// angle within the configured serve cone
    pub fn serve<R: Rng + ?Sized>(&self, ball: &mut Ball, toward: Side, rng: &mut R) {
        let max = self.config.max_serve_angle;
        let angle: f32 = rng.random_range(-max..=max);
        let dir = Vec2::new(toward.toward() * angle.cos(), angle.sin());

        ball.rect.set_center(Vec2::new(
            self.config.court_width / 2.0,
            self.config.court_height / 2.0,
        ));
        ball.vel = dir * self.config.base_ball_speed;
    }

    /// Serve toward a randomly chosen side
    pub fn serve_random<R: Rng + ?Sized>(&self, ball: &mut Ball, rng: &mut R) {
        let toward = if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        self.serve(ball, toward, rng);
    }
}

/// Where the ball struck the paddle: 0 at the centre, about ±1 at the ends
fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center().y - paddle.center_y()) / (paddle.rect.size.y / 2.0)
}
