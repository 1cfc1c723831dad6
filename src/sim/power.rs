//! Power-shot ability timers
//!
//! Each player owns one ability: `Ready -> Active -> (consumed | expired) ->
//! Cooldown -> Ready`. Activation schedules both the active window and the
//! cooldown from the same instant, so a missed swing still pays the full
//! cooldown.

use serde::{Deserialize, Serialize};

use super::clock::Millis;
use super::state::{MatchEvent, Side};
use crate::config::GameConfig;

/// Timer state for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerAbilityState {
    pub ready: bool,
    pub active: bool,
    pub cooldown_end: Millis,
    pub active_end: Millis,
}

impl Default for PowerAbilityState {
    fn default() -> Self {
        Self {
            ready: true,
            active: false,
            cooldown_end: 0,
            active_end: 0,
        }
    }
}

/// What the HUD shows for a player's ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerStatus {
    Ready,
    Active,
    Cooldown { remaining_ms: Millis },
}

impl PowerStatus {
    /// Whole seconds left on the cooldown, rounded up
    pub fn seconds_remaining(&self) -> Option<u64> {
        match self {
            PowerStatus::Cooldown { remaining_ms } => Some(remaining_ms.div_ceil(1000)),
            _ => None,
        }
    }
}

/// Both players' power-shot state machines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerAbilityManager {
    players: [PowerAbilityState; 2],
    cooldown_ms: Millis,
    window_ms: Millis,
}

impl PowerAbilityManager {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            players: [PowerAbilityState::default(); 2],
            cooldown_ms: config.power_cooldown_ms,
            window_ms: config.power_window_ms,
        }
    }

    pub fn state(&self, side: Side) -> &PowerAbilityState {
        &self.players[side.index()]
    }

    pub fn is_active(&self, side: Side) -> bool {
        self.players[side.index()].active
    }

    /// Arm the ability. Returns `false` (and changes nothing) unless ready.
    pub fn request_activate(&mut self, side: Side, now: Millis) -> bool {
        let p = &mut self.players[side.index()];
        if !p.ready {
            return false;
        }
        p.ready = false;
        p.active = true;
        p.active_end = now + self.window_ms;
        p.cooldown_end = now + self.cooldown_ms;
        log::debug!(
            "{:?} power armed until {} (cooldown until {})",
            side,
            p.active_end,
            p.cooldown_end
        );
        true
    }

    /// Expire windows and finish cooldowns that are due at `now`
    pub fn tick(&mut self, now: Millis, events: &mut Vec<MatchEvent>) {
        for side in Side::BOTH {
            let p = &mut self.players[side.index()];

            if p.active && now >= p.active_end {
                p.active = false;
                log::debug!("{:?} power window expired unused", side);
                events.push(MatchEvent::PowerExpired { side });
            }

            if !p.ready && now >= p.cooldown_end {
                if p.active {
                    // Window longer than the cooldown: the cooldown wins
                    p.active = false;
                    events.push(MatchEvent::PowerExpired { side });
                }
                p.ready = true;
                log::debug!("{:?} power ready", side);
                events.push(MatchEvent::PowerReady { side });
            }
        }
    }

    /// Spend an armed ability on a hit. The cooldown keeps running.
    pub fn consume(&mut self, side: Side) {
        self.players[side.index()].active = false;
    }

    pub fn status(&self, side: Side, now: Millis) -> PowerStatus {
        let p = &self.players[side.index()];
        if p.active {
            PowerStatus::Active
        } else if p.ready {
            PowerStatus::Ready
        } else {
            PowerStatus::Cooldown {
                remaining_ms: p.cooldown_end.saturating_sub(now),
            }
        }
    }

    /// Everyone back to ready
    pub fn reset(&mut self) {
        self.players = [PowerAbilityState::default(); 2];
    }
}
