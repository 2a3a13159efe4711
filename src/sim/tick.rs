//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically.

use super::collision::{CollisionResult, resolve};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::highscores::{HighScoreStore, record_final_score};
use crate::speed_for_frame;

/// Commands asserted for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held: move toward the top of the road band
    pub move_up: bool,
    /// Held: move toward the ground
    pub move_down: bool,
    /// Swing the net (no-op while a swing is running)
    pub sweep: bool,
    /// Playing -> Paused
    pub pause: bool,
    /// Paused -> Playing
    pub resume: bool,
    /// Start from the title screen or restart after game over
    pub confirm: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the game by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, store: &mut dyn HighScoreStore) {
    state.events.clear();

    match state.phase {
        GamePhase::Start | GamePhase::GameOver => {
            if input.confirm {
                state.high_score = state.high_score.max(store.high_score());
                state.start_session();
            }
            return;
        }
        GamePhase::Paused => {
            if input.resume {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Resumed);
                log::debug!("Resumed at tick {}", state.frame_count);
            }
            return;
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                state.events.push(GameEvent::Paused);
                log::debug!("Paused at tick {}", state.frame_count);
                return;
            }
        }
    }

    let autopilot;
    let input = if input.idle_mode {
        autopilot = autopilot_input(state, input);
        &autopilot
    } else {
        input
    };

    // Difficulty ramp
    state.frame_count += 1;
    let speed = speed_for_frame(state.frame_count);
    if speed > state.speed {
        state.speed = speed;
        state.events.push(GameEvent::SpeedUp { speed });
        log::debug!("Speed up: {:.1}", speed);
    }
    let now = state.now_ms();

    // Vehicle
    if input.move_up {
        state.vehicle.move_up();
    }
    if input.move_down {
        state.vehicle.move_down();
    }
    if input.sweep && state.vehicle.start_sweep(now) {
        state.events.push(GameEvent::SweepStarted);
    }
    state.vehicle.update(
        now,
        state.settings.sweep_duration_ms,
        state.settings.sweep_profile,
    );
    state.scenery.advance(state.speed);

    // Spawning
    let fired = state.spawner.poll(now, state.speed);
    for kind in fired.kinds() {
        state.spawn_target(kind);
    }

    // Motion
    let speed = state.speed;
    for target in state.targets.iter_mut().chain(state.bonus_targets.iter_mut()) {
        target.advance(speed);
    }

    // Catches and misses
    let hit_zone = state.vehicle.hit_zone();
    let mut result = resolve(hit_zone, &mut state.targets);
    result.merge(resolve(hit_zone, &mut state.bonus_targets));
    if apply_collisions(state, &result) {
        enter_game_over(state, store);
        return;
    }

    // Particles
    for particle in &mut state.particles {
        particle.advance();
    }
    state.particles.retain(|p| !p.is_dead());
}

/// Bank catches and charge misses. Returns true if the run is over.
fn apply_collisions(state: &mut GameState, result: &CollisionResult) -> bool {
    for catch in &result.catches {
        let points = catch.kind.points();
        state.score += points;
        state.burst_particles(catch.center, catch.kind);
        state.events.push(GameEvent::Caught {
            kind: catch.kind,
            points,
        });
    }
    for &kind in &result.missed {
        state.events.push(GameEvent::Missed { kind });
    }

    let misses = result.primary_misses();
    if misses == 0 {
        return false;
    }
    match state.lives.as_mut() {
        None => true,
        Some(lives) => {
            for _ in 0..misses {
                *lives = lives.saturating_sub(1);
                let remaining = *lives;
                state.events.push(GameEvent::LifeLost { remaining });
            }
            log::debug!("Missed {} paper(s), {} lives left", misses, *lives);
            *lives == 0
        }
    }
}

/// Freeze the session and settle the high score
fn enter_game_over(state: &mut GameState, store: &mut dyn HighScoreStore) {
    state.phase = GamePhase::GameOver;
    state.new_high_score = record_final_score(store, state.score);
    if state.new_high_score {
        state.high_score = state.score;
    }
    state.events.push(GameEvent::GameOver {
        score: state.score,
        new_high_score: state.new_high_score,
    });
    log::info!(
        "Game over: score {} after {} ticks (high score {})",
        state.score,
        state.frame_count,
        state.high_score
    );
}

/// Demo player: ride toward the nearest incoming target and swing when it is in reach
fn autopilot_input(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    let center = state.vehicle.center();

    // Nearest target still ahead of the rider, papers before stacks at equal range
    let next = state
        .all_targets()
        .filter(|t| t.center().x > center.x)
        .min_by(|a, b| {
            a.center()
                .x
                .partial_cmp(&b.center().x)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = next else {
        return input;
    };
    let target_center = target.center();

    // The net reaches furthest forward-down, so ride a little above the paper
    let desired_y = target_center.y - SWEEP_ARM_LENGTH / 2.0;
    input.move_up = center.y - desired_y > VEHICLE_SPEED;
    input.move_down = desired_y - center.y > VEHICLE_SPEED;

    let reach = SWEEP_ARM_LENGTH + CATCH_RADIUS / 1.5;
    input.sweep = target_center.x - center.x <= reach;
    input
}
