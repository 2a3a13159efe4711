//! Paper Catcher - a side-scrolling paper catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vehicle, targets, spawning, collisions, game state)
//! - `platform`: Frame clock and keyboard/touch input mapping
//! - `persistence`: High score storage backends
//! - `settings`: Game configuration and variant presets

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::{HighScoreStore, MemoryStore};
pub use settings::{Settings, SettingsError, Variant};

/// Game configuration constants
pub mod consts {
    /// Logical ticks per second
    pub const TICK_RATE: u32 = 60;
    /// Simulated milliseconds per tick
    pub const TICK_MS: f64 = 1000.0 / TICK_RATE as f64;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas defaults
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 150.0;

    /// Vehicle (bike rider) geometry
    pub const VEHICLE_X: f32 = 150.0;
    pub const VEHICLE_WIDTH: f32 = 60.0;
    pub const VEHICLE_HEIGHT: f32 = 80.0;
    /// Vertical movement per tick
    pub const VEHICLE_SPEED: f32 = 5.0;
    /// Top of the road band
    pub const VEHICLE_MIN_Y: f32 = 30.0;
    /// How far the vehicle may dip below the top of the ground band
    pub const VEHICLE_GROUND_OVERLAP: f32 = 20.0;

    /// Sweep (net swing)
    pub const SWEEP_DURATION_MS: f64 = 300.0;
    pub const SWEEP_ARM_LENGTH: f32 = 80.0;
    pub const CATCH_RADIUS: f32 = 30.0;

    /// Primary target (newspaper)
    pub const TARGET_WIDTH: f32 = 30.0;
    pub const TARGET_HEIGHT: f32 = 20.0;
    pub const TARGET_SPEED: f32 = 3.0;
    pub const TARGET_ROTATION_SPEED: f32 = 0.05;
    pub const TARGET_POINTS: u64 = 10;

    /// Bonus target (newspaper stack)
    pub const BONUS_WIDTH: f32 = 40.0;
    pub const BONUS_HEIGHT: f32 = 30.0;
    pub const BONUS_SPEED: f32 = 2.0;
    pub const BONUS_ROTATION_SPEED: f32 = 0.03;
    pub const BONUS_POINTS: u64 = TARGET_POINTS * 10;

    /// Spawn band margin from the sky top and the ground line
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Primary spawn interval at speed 1
    pub const MAX_SPAWN_INTERVAL_MS: f64 = 2500.0;
    /// Interval reduction per unit of speed above 1
    pub const SPAWN_INTERVAL_SCALE_MS: f64 = 200.0;
    /// Floor for the primary spawn interval
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 1000.0;
    pub const BONUS_SPAWN_INTERVAL_MS: f64 = 8000.0;

    /// Particle bursts
    pub const PARTICLE_BURST: usize = 8;
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;

    /// Difficulty ramp
    pub const SPEED_STEP_TICKS: u64 = 600;
    pub const SPEED_STEP: f32 = 0.2;

    /// Lives variant
    pub const STARTING_LIVES: u8 = 3;

    /// Background scroll speed at speed 1
    pub const SCROLL_SPEED: f32 = 3.0;
}

/// Session speed multiplier for a given tick count (step function)
#[inline]
pub fn speed_for_frame(frame_count: u64) -> f32 {
    use consts::{SPEED_STEP, SPEED_STEP_TICKS};
    1.0 + (frame_count / SPEED_STEP_TICKS) as f32 * SPEED_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_steps_every_600_ticks() {
        assert_eq!(speed_for_frame(0), 1.0);
        assert_eq!(speed_for_frame(599), 1.0);
        assert!((speed_for_frame(600) - 1.2).abs() < 1e-6);
        assert!((speed_for_frame(1800) - 1.6).abs() < 1e-6);
    }
}
