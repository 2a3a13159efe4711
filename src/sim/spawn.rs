//! Time-gated target spawning
//!
//! Two independent timers run off session time: papers on an interval that
//! shrinks with speed, stacks on a long fixed interval. Each fires at most
//! once per tick.

use serde::{Deserialize, Serialize};

use super::entities::TargetKind;
use crate::consts::*;

/// Fires when more than `interval` has passed since the last fire
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GatedTimer {
    pub last_fire_ms: f64,
}

impl GatedTimer {
    /// Returns true (and records `now_ms`) if the timer fires this tick
    pub fn poll(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        if now_ms - self.last_fire_ms > interval_ms {
            self.last_fire_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Paper interval for the current speed, floored at `MIN_SPAWN_INTERVAL_MS`
pub fn primary_interval_ms(speed: f32) -> f64 {
    let interval = MAX_SPAWN_INTERVAL_MS - (speed as f64 - 1.0) * SPAWN_INTERVAL_SCALE_MS;
    interval.max(MIN_SPAWN_INTERVAL_MS)
}

/// Which timers fired on a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnFire {
    pub primary: bool,
    pub bonus: bool,
}

impl SpawnFire {
    pub fn kinds(self) -> impl Iterator<Item = TargetKind> {
        let primary = self.primary.then_some(TargetKind::Paper);
        let bonus = self.bonus.then_some(TargetKind::Stack);
        primary.into_iter().chain(bonus)
    }

    pub fn any(self) -> bool {
        self.primary || self.bonus
    }
}

/// Spawn timers for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnScheduler {
    pub primary: GatedTimer,
    pub bonus: GatedTimer,
    pub bonus_enabled: bool,
}

impl SpawnScheduler {
    pub fn new(bonus_enabled: bool) -> Self {
        Self {
            primary: GatedTimer::default(),
            bonus: GatedTimer::default(),
            bonus_enabled,
        }
    }

    /// Restart both timers at session time zero
    pub fn reset(&mut self) {
        self.primary = GatedTimer::default();
        self.bonus = GatedTimer::default();
    }

    pub fn poll(&mut self, now_ms: f64, speed: f32) -> SpawnFire {
        let primary = self.primary.poll(now_ms, primary_interval_ms(speed));
        let bonus = self.bonus_enabled && self.bonus.poll(now_ms, BONUS_SPAWN_INTERVAL_MS);
        SpawnFire { primary, bonus }
    }
}
