//! Read-only view of a game for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::entities::{Particle, Target};
use super::scenery::Scenery;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VehicleView {
    pub pos: Vec2,
    pub sweep_angle: f32,
    pub sweeping: bool,
    pub hit_zone: Option<Vec2>,
    pub wheel_rotation: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    pub new_high_score: bool,
    pub lives: Option<u8>,
    pub speed: f32,
    pub frame_count: u64,
    pub vehicle: VehicleView,
    pub targets: &'a [Target],
    pub bonus_targets: &'a [Target],
    pub particles: &'a [Particle],
    pub scenery: &'a Scenery,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            new_high_score: self.new_high_score,
            lives: self.lives,
            speed: self.speed,
            frame_count: self.frame_count,
            vehicle: VehicleView {
                pos: self.vehicle.pos,
                sweep_angle: self.vehicle.sweep_angle,
                sweeping: self.vehicle.is_sweeping(),
                hit_zone: self.vehicle.hit_zone(),
                wheel_rotation: self.vehicle.wheel_rotation,
            },
            targets: &self.targets,
            bonus_targets: &self.bonus_targets,
            particles: &self.particles,
            scenery: &self.scenery,
        }
    }
}
