//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (session time is derived from the tick count)
//! - Seeded RNG only
//! - Stable iteration order (insertion order, compacted after each scan)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entities;
pub mod scenery;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use collision::{CollisionResult, Verdict, catches, resolve};
pub use entities::{Particle, ParticleKind, Target, TargetKind};
pub use scenery::Scenery;
pub use snapshot::{Snapshot, VehicleView};
pub use spawn::{GatedTimer, SpawnFire, SpawnScheduler, primary_interval_ms};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use vehicle::{SweepProfile, SweepState, Vehicle};
