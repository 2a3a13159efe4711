//! Game state and core simulation types
//!
//! One `GameState` is one explicitly owned game: it holds the current
//! session (score, lives, speed, entities) and survives restarts.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Particle, Target, TargetKind};
use super::scenery::Scenery;
use super::spawn::SpawnScheduler;
use super::vehicle::Vehicle;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Start,
    /// Active gameplay
    Playing,
    /// Frozen mid-session
    Paused,
    /// Run ended, waiting for confirm to restart
    GameOver,
}

/// Things that happened during a tick, for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    SweepStarted,
    SpeedUp { speed: f32 },
    Spawned { kind: TargetKind },
    Caught { kind: TargetKind, points: u64 },
    Missed { kind: TargetKind },
    LifeLost { remaining: u8 },
    GameOver { score: u64, new_high_score: bool },
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    pub score: u64,
    /// Best score known to this game (mirrors the store)
    pub high_score: u64,
    /// Set at game over when the run beat the stored high score
    pub new_high_score: bool,
    /// `None` when a single miss ends the run
    pub lives: Option<u8>,
    /// Difficulty multiplier, steps up every `SPEED_STEP_TICKS`
    pub speed: f32,
    /// Playing ticks this session
    pub frame_count: u64,
    pub vehicle: Vehicle,
    /// Papers in flight (insertion order)
    pub targets: Vec<Target>,
    /// Stacks in flight (insertion order)
    pub bonus_targets: Vec<Target>,
    pub particles: Vec<Particle>,
    pub spawner: SpawnScheduler,
    pub scenery: Scenery,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a game on the title screen
    pub fn new(settings: Settings, high_score: u64) -> Self {
        let vehicle = Vehicle::new(
            settings.canvas_height / 2.0,
            VEHICLE_MIN_Y,
            settings.vehicle_max_y(),
        );
        let scenery = Scenery::new(
            settings.seed ^ 0x9e37_79b9_7f4a_7c15,
            settings.canvas_width,
            settings.ground_y(),
        );
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            spawner: SpawnScheduler::new(settings.bonus_targets_enabled),
            phase: GamePhase::Start,
            score: 0,
            high_score,
            new_high_score: false,
            lives: None,
            speed: 1.0,
            frame_count: 0,
            vehicle,
            targets: Vec::new(),
            bonus_targets: Vec::new(),
            particles: Vec::new(),
            scenery,
            events: Vec::new(),
            next_id: 1,
            settings,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Session time in milliseconds (advances only while playing)
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.frame_count as f64 * TICK_MS
    }

    /// Reset all session data and enter Playing
    pub fn start_session(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.speed = 1.0;
        self.frame_count = 0;
        self.new_high_score = false;
        self.lives = self
            .settings
            .has_lives_model
            .then_some(self.settings.starting_lives);
        self.targets.clear();
        self.bonus_targets.clear();
        self.particles.clear();
        self.vehicle.reset(self.settings.canvas_height / 2.0);
        self.spawner.reset();
        self.scenery.reset();
        self.events.push(GameEvent::Started);
        log::info!(
            "Session started ({}, lives: {:?})",
            self.settings.variant.as_str(),
            self.lives
        );
    }

    /// Spawn a target at the right edge, at a random height in the spawn band
    pub fn spawn_target(&mut self, kind: TargetKind) {
        let (min_y, max_y) = self.settings.spawn_band();
        let y = self.rng.random_range(min_y..max_y);
        let rotation = self.rng.random_range(0.0..std::f32::consts::TAU);
        let id = self.next_entity_id();
        let target = Target::new(id, kind, Vec2::new(self.settings.canvas_width, y), rotation);
        log::debug!("Spawned {:?} #{} at y={:.0}", kind, id, y);
        match kind {
            TargetKind::Paper => self.targets.push(target),
            TargetKind::Stack => self.bonus_targets.push(target),
        }
        self.events.push(GameEvent::Spawned { kind });
    }

    /// Scatter a particle burst from a catch
    pub fn burst_particles(&mut self, origin: Vec2, kind: TargetKind) {
        let burst = Particle::burst(origin, kind.particle_kind(), &mut self.rng);
        self.particles.extend(burst);
    }

    /// Every target in flight, papers first
    pub fn all_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().chain(self.bonus_targets.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Variant;

    #[test]
    fn test_new_game_waits_on_title() {
        let state = GameState::new(Settings::default(), 42);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.high_score, 42);
        assert_eq!(state.vehicle.pos.y, 300.0);
        assert!(state.targets.is_empty());
    }

    #[test]
    fn test_start_session_resets_everything() {
        let mut state = GameState::new(Settings::from_variant(Variant::Arcade), 0);
        state.score = 500;
        state.speed = 2.4;
        state.frame_count = 4000;
        state.spawn_target(TargetKind::Paper);
        state.spawn_target(TargetKind::Stack);
        state.burst_particles(Vec2::ZERO, TargetKind::Paper);
        state.vehicle.move_up();

        state.start_session();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 1.0);
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.lives, Some(3));
        assert!(state.targets.is_empty() && state.bonus_targets.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.vehicle.pos.y, 300.0);
    }

    #[test]
    fn test_classic_has_no_lives() {
        let mut state = GameState::new(Settings::from_variant(Variant::Classic), 0);
        state.start_session();
        assert_eq!(state.lives, None);
    }

    #[test]
    fn test_spawn_at_right_edge_within_band() {
        let mut state = GameState::new(Settings::default(), 0);
        for _ in 0..50 {
            state.spawn_target(TargetKind::Paper);
        }
        let (min_y, max_y) = state.settings.spawn_band();
        for t in &state.targets {
            assert_eq!(t.pos.x, state.settings.canvas_width);
            assert!(t.pos.y >= min_y && t.pos.y < max_y);
        }
        let ids: Vec<u32> = state.targets.iter().map(|t| t.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
