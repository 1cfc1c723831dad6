//! Paddle Duel headless runner
//!
//! Plays a demo match with no window: the left paddle is steered like a
//! human holding keys, the right paddle by the built-in AI, and both fire
//! power shots on a timer. Signals are logged and the final snapshot is
//! printed as JSON.
//!
//! `RUST_LOG=debug` shows every hit and goal; `PADDLE_DUEL_SEED` fixes the
//! serve RNG.

use std::error::Error;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use paddle_duel::GameConfig;
use paddle_duel::consts::FRAME_MS;
use paddle_duel::sim::{
    Action, AiController, Direction, ManualClock, MatchController, MatchEvent, Millis, Phase,
    Side,
};

/// Give up after this many frames (~2 hours of play at 60 Hz)
const MAX_FRAMES: u32 = 432_000;
/// How often each side tries a power shot
const POWER_EVERY_FRAMES: u32 = 180;
const DEFAULT_SEED: u64 = 0xC0FFEE;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Paddle Duel (headless) starting...");

    let seed = match std::env::var("PADDLE_DUEL_SEED") {
        Ok(raw) => raw.parse::<u64>()?,
        Err(_) => DEFAULT_SEED,
    };
    log::info!("Serve RNG seed: {}", seed);

    let clock = ManualClock::new(0);
    let config = GameConfig::default();
    let tracker = AiController::new(&config);
    let mut game = MatchController::new(config, &clock, Pcg32::seed_from_u64(seed))?;

    let mut frame = 0u32;
    while game.is_running() {
        if frame >= MAX_FRAMES {
            log::warn!("Frame limit reached, stopping");
            game.handle(Action::Quit);
            break;
        }

        match game.phase() {
            Phase::GameOver => {
                game.handle(Action::Quit);
                break;
            }
            Phase::Idle => game.handle(Action::Serve),
            _ => {}
        }

        if frame % POWER_EVERY_FRAMES == 0 {
            game.handle(Action::ActivatePower { side: Side::Left });
        }
        if frame % POWER_EVERY_FRAMES == POWER_EVERY_FRAMES / 2 {
            game.handle(Action::ActivatePower { side: Side::Right });
        }

        let dir = steer(&game, &tracker);
        game.handle(Action::SetIntent {
            side: Side::Left,
            dir,
        });

        clock.advance(FRAME_MS as Millis);
        game.update(FRAME_MS);

        for event in game.drain_events() {
            report(&event, &game.snapshot().score);
        }
        frame += 1;
    }

    let snapshot = game.snapshot();
    log::info!(
        "Finished after {} frames ({} ms of match time)",
        frame,
        snapshot.time_ms
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Key the left paddle toward the ball the way a player would
fn steer(game: &MatchController<&ManualClock, Pcg32>, tracker: &AiController) -> Direction {
    let snapshot = game.snapshot();
    let intent = tracker.compute_intent(
        snapshot.ball.center().y,
        snapshot.paddles[Side::Left.index()].rect.center().y,
        FRAME_MS,
    );
    if intent < 0.0 {
        Direction::Up
    } else if intent > 0.0 {
        Direction::Down
    } else {
        Direction::Stop
    }
}

fn report(event: &MatchEvent, score: &[u32; 2]) {
    match event {
        MatchEvent::Goal { scorer } => {
            log::info!("Goal {:?}! {} - {}", scorer, score[0], score[1]);
        }
        MatchEvent::PaddleHit { side, power: true } => {
            log::info!("{:?} POWER SHOT! {} - {}", side, score[0], score[1]);
        }
        MatchEvent::MatchWon { winner } => {
            log::info!("{:?} player wins! {} - {}", winner, score[0], score[1]);
        }
        other => log::debug!("{:?}", other),
    }
}
