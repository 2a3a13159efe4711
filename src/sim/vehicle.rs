//! The player's vehicle (bike rider with a net)
//!
//! The vehicle only moves vertically. Its sweep is a small time-driven state
//! machine: `Idle -> Sweeping -> Idle`, with the net angle a pure function of
//! sweep progress.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Net angle curve over a sweep
///
/// Angles are in screen space (+y down): 0 points forward, positive swings
/// the net down toward the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SweepProfile {
    /// Forward and back: `0 -> π/2 -> 0` with equal slopes
    Triangular,
    /// Raise to `-π/6`, strike down to `π/2`, return to `0`
    #[default]
    ThreePhase,
}

impl SweepProfile {
    /// End of the raise phase (three-phase only)
    const RAISE_END: f32 = 0.25;
    /// End of the strike phase (three-phase only)
    const STRIKE_END: f32 = 0.6;
    const RAISE_ANGLE: f32 = -FRAC_PI_6;
    const STRIKE_ANGLE: f32 = FRAC_PI_2;

    /// Net angle for a sweep progress in `[0, 1]` (clamped)
    pub fn angle(self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            SweepProfile::Triangular => {
                if p < 0.5 {
                    p * PI
                } else {
                    (1.0 - p) * PI
                }
            }
            SweepProfile::ThreePhase => {
                if p < Self::RAISE_END {
                    Self::RAISE_ANGLE * (p / Self::RAISE_END)
                } else if p < Self::STRIKE_END {
                    let t = (p - Self::RAISE_END) / (Self::STRIKE_END - Self::RAISE_END);
                    Self::RAISE_ANGLE + (Self::STRIKE_ANGLE - Self::RAISE_ANGLE) * t
                } else {
                    let t = (p - Self::STRIKE_END) / (1.0 - Self::STRIKE_END);
                    Self::STRIKE_ANGLE * (1.0 - t)
                }
            }
        }
    }
}

/// Sweep sub-state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SweepState {
    Idle,
    /// Sweep started at the given session time (ms)
    Sweeping { start_ms: f64 },
}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub sweep: SweepState,
    /// Current net angle (radians, 0 when idle)
    pub sweep_angle: f32,
    /// Cosmetic wheel spin
    pub wheel_rotation: f32,
    min_y: f32,
    max_y: f32,
}

impl Vehicle {
    pub fn new(start_y: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            pos: Vec2::new(VEHICLE_X, start_y.clamp(min_y, max_y)),
            sweep: SweepState::Idle,
            sweep_angle: 0.0,
            wheel_rotation: 0.0,
            min_y,
            max_y,
        }
    }

    /// Back to the starting lane, net at rest
    pub fn reset(&mut self, start_y: f32) {
        self.pos = Vec2::new(VEHICLE_X, start_y.clamp(self.min_y, self.max_y));
        self.sweep = SweepState::Idle;
        self.sweep_angle = 0.0;
        self.wheel_rotation = 0.0;
    }

    /// Vertical bounds `(min_y, max_y)`
    pub fn bounds(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }

    pub fn move_up(&mut self) {
        self.pos.y = (self.pos.y - VEHICLE_SPEED).max(self.min_y);
    }

    pub fn move_down(&mut self) {
        self.pos.y = (self.pos.y + VEHICLE_SPEED).min(self.max_y);
    }

    #[inline]
    pub fn is_sweeping(&self) -> bool {
        matches!(self.sweep, SweepState::Sweeping { .. })
    }

    /// Start a sweep. Returns false (and changes nothing) if one is running.
    pub fn start_sweep(&mut self, now_ms: f64) -> bool {
        if self.is_sweeping() {
            return false;
        }
        self.sweep = SweepState::Sweeping { start_ms: now_ms };
        true
    }

    /// Sweep progress in `[0, 1]`, `None` when idle
    pub fn sweep_progress(&self, now_ms: f64, duration_ms: f64) -> Option<f32> {
        match self.sweep {
            SweepState::Idle => None,
            SweepState::Sweeping { start_ms } => {
                let elapsed = (now_ms - start_ms).max(0.0);
                Some((elapsed / duration_ms).min(1.0) as f32)
            }
        }
    }

    /// Advance the sweep and wheel animation for this tick
    pub fn update(&mut self, now_ms: f64, duration_ms: f64, profile: SweepProfile) {
        self.wheel_rotation += 0.2;

        if let Some(progress) = self.sweep_progress(now_ms, duration_ms) {
            if progress >= 1.0 {
                self.sweep = SweepState::Idle;
                self.sweep_angle = 0.0;
            } else {
                self.sweep_angle = profile.angle(progress);
            }
        }
    }

    /// Centre of the vehicle body
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(VEHICLE_WIDTH / 2.0, VEHICLE_HEIGHT / 2.0)
    }

    /// Point the net can catch at, only while sweeping
    pub fn hit_zone(&self) -> Option<Vec2> {
        if !self.is_sweeping() {
            return None;
        }
        Some(self.center() + Vec2::from_angle(self.sweep_angle) * SWEEP_ARM_LENGTH)
    }
}
