//! Time-driven spawning and the wave difficulty curve
//!
//! Two independent timers accumulate dt and fire when they reach their
//! interval. The enemy interval tightens with the wave; the power-up
//! interval is fixed. Enemy type mix widens once the run passes wave 3.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, GameState, PowerUp, PowerUpKind};
use crate::consts::*;

/// Spawn cadence for a given wave: starts at 1.5 s, tightens 0.1 s per
/// wave, floors at 0.5 s (reached at wave 11)
pub fn enemy_spawn_interval_for_wave(wave: u32) -> f32 {
    let step = wave.saturating_sub(1) as f32 * ENEMY_SPAWN_STEP_PER_WAVE;
    (ENEMY_SPAWN_BASE_INTERVAL - step).max(ENEMY_SPAWN_MIN_INTERVAL)
}

/// Advance both spawn timers, creating entities when they fire
pub fn update_spawners(state: &mut GameState, dt: f32) {
    state.enemy_spawn_timer += dt;
    if state.enemy_spawn_timer >= state.enemy_spawn_interval {
        spawn_enemy(state);
        state.enemy_spawn_timer = 0.0;

        let interval = enemy_spawn_interval_for_wave(state.wave);
        if (interval - state.enemy_spawn_interval).abs() > f32::EPSILON {
            log::debug!("wave {}: enemy spawn interval now {interval:.1}s", state.wave);
        }
        state.enemy_spawn_interval = interval;
    }

    state.power_up_spawn_timer += dt;
    if state.power_up_spawn_timer >= POWER_UP_SPAWN_INTERVAL {
        spawn_power_up(state);
        state.power_up_spawn_timer = 0.0;
    }
}

/// Pick an enemy type for the current wave.
///
/// Early waves (<= 3) draw from four outcomes with Basic as the default
/// arm; later waves widen to seven equal outcomes that double up on the
/// harder non-Tank types.
fn roll_enemy_kind(wave: u32, rng: &mut rand_pcg::Pcg32) -> EnemyKind {
    if wave > 3 {
        match rng.random_range(0..7) {
            0 | 1 => EnemyKind::Basic,
            2 | 3 => EnemyKind::Scout,
            4 | 5 => EnemyKind::Zigzag,
            _ => EnemyKind::Tank,
        }
    } else {
        match rng.random_range(0..4) {
            0 => EnemyKind::Scout,
            1 => EnemyKind::Tank,
            2 => EnemyKind::Zigzag,
            _ => EnemyKind::Basic,
        }
    }
}

fn spawn_enemy(state: &mut GameState) {
    let x = state.rng.random_range(SPAWN_X_MIN..SPAWN_X_MAX);
    let kind = roll_enemy_kind(state.wave, &mut state.rng);
    state.enemies.push(Enemy::new(kind, Vec2::new(x, SPAWN_Y)));
    log::trace!("spawned {kind:?} at x={x:.0}");
}

fn spawn_power_up(state: &mut GameState) {
    let x = state.rng.random_range(SPAWN_X_MIN..SPAWN_X_MAX);
    let kind = match state.rng.random_range(0..3) {
        0 => PowerUpKind::SpreadShot,
        1 => PowerUpKind::RapidFire,
        _ => PowerUpKind::Shield,
    };
    state
        .power_ups
        .push(PowerUp::new(kind, Vec2::new(x, SPAWN_Y)));
    log::debug!("spawned power-up {kind:?} at x={x:.0}");
}
