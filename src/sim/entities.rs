//! Passive entities: papers, paper stacks and catch particles

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Target kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// Primary target; missing it costs a life
    Paper,
    /// Bonus target; worth 10x, missing it is free
    Stack,
}

impl TargetKind {
    pub fn size(self) -> Vec2 {
        match self {
            TargetKind::Paper => Vec2::new(TARGET_WIDTH, TARGET_HEIGHT),
            TargetKind::Stack => Vec2::new(BONUS_WIDTH, BONUS_HEIGHT),
        }
    }

    /// Leftward speed per tick at speed 1
    pub fn base_speed(self) -> f32 {
        match self {
            TargetKind::Paper => TARGET_SPEED,
            TargetKind::Stack => BONUS_SPEED,
        }
    }

    pub fn rotation_speed(self) -> f32 {
        match self {
            TargetKind::Paper => TARGET_ROTATION_SPEED,
            TargetKind::Stack => BONUS_ROTATION_SPEED,
        }
    }

    pub fn points(self) -> u64 {
        match self {
            TargetKind::Paper => TARGET_POINTS,
            TargetKind::Stack => BONUS_POINTS,
        }
    }

    /// Whether letting this kind past the left edge is penalized
    pub fn is_primary(self) -> bool {
        self == TargetKind::Paper
    }

    pub fn particle_kind(self) -> ParticleKind {
        match self {
            TargetKind::Paper => ParticleKind::Catch,
            TargetKind::Stack => ParticleKind::BonusCatch,
        }
    }
}

/// A flying paper or paper stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub kind: TargetKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Cosmetic spin (radians)
    pub rotation: f32,
}

impl Target {
    pub fn new(id: u32, kind: TargetKind, pos: Vec2, rotation: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            rotation,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.kind.size()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size() / 2.0
    }

    /// Move left by the kind's speed scaled by session speed, and spin
    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= self.kind.base_speed() * speed;
        self.rotation = (self.rotation + self.kind.rotation_speed()) % std::f32::consts::TAU;
    }

    /// Right edge has passed the left side of the screen
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size().x < 0.0
    }
}

/// Particle flavours (renderer picks colours)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Catch,
    BonusCatch,
}

/// A catch particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining; dead at zero
    pub life: u32,
    pub kind: ParticleKind,
}

impl Particle {
    /// A burst of `PARTICLE_BURST` particles scattering from `origin`
    pub fn burst<R: Rng>(origin: Vec2, kind: ParticleKind, rng: &mut R) -> Vec<Particle> {
        (0..PARTICLE_BURST)
            .map(|_| Particle {
                pos: origin,
                vel: Vec2::new(
                    rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                    rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                ),
                life: PARTICLE_LIFE,
                kind,
            })
            .collect()
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life == 0
    }

    /// Remaining life as a fraction (for fading)
    pub fn alpha(&self) -> f32 {
        self.life as f32 / PARTICLE_LIFE as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_target_moves_left_scaled_by_speed() {
        let mut t = Target::new(1, TargetKind::Paper, Vec2::new(800.0, 100.0), 0.0);
        t.advance(1.0);
        assert_eq!(t.pos.x, 797.0);
        t.advance(2.0);
        assert_eq!(t.pos.x, 791.0);
        assert_eq!(t.pos.y, 100.0);
        assert!(t.rotation > 0.0);
    }

    #[test]
    fn test_off_screen_uses_right_edge() {
        let mut t = Target::new(1, TargetKind::Paper, Vec2::new(-29.0, 100.0), 0.0);
        assert!(!t.is_off_screen());
        t.pos.x = -30.5;
        assert!(t.is_off_screen());
    }

    #[test]
    fn test_bonus_is_worth_ten_papers() {
        assert_eq!(TargetKind::Stack.points(), TargetKind::Paper.points() * 10);
        assert!(!TargetKind::Stack.is_primary());
    }

    #[test]
    fn test_particle_burst_lifecycle() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut burst = Particle::burst(Vec2::new(10.0, 10.0), ParticleKind::Catch, &mut rng);
        assert_eq!(burst.len(), 8);
        for p in &burst {
            assert!(p.vel.x.abs() <= 2.0 && p.vel.y.abs() <= 2.0);
            assert_eq!(p.life, 30);
        }
        for _ in 0..29 {
            burst.iter_mut().for_each(Particle::advance);
        }
        assert!(burst.iter().all(|p| !p.is_dead()));
        burst.iter_mut().for_each(Particle::advance);
        assert!(burst.iter().all(Particle::is_dead));
    }
}
