//! Per-frame simulation step
//!
//! Fixed update order: shake timer, particles, engine trail, player,
//! spawners, enemies, power-ups, collisions, wave check, game-over check.
//! In `GameOver` the state is terminal and `tick` is a no-op; the host
//! keeps rendering and polling for close on its own.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::spawn::update_spawners;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Sampled input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time += dt;
    state.update_screen_shake(dt);

    state.particles.update(dt);
    let exhaust = Vec2::new(state.player.pos.x, state.player.pos.y + PLAYER_SIZE.y / 2.0);
    state.particles.add_engine_trail(exhaust, &mut state.rng);

    state.player.update(input, dt);

    update_spawners(state, dt);

    // Enemies that slip past the bottom cost a life each
    let mut breaches = 0u32;
    state.enemies.retain_mut(|enemy| {
        enemy.update(dt);
        if enemy.is_off_screen() {
            breaches += 1;
            false
        } else {
            true
        }
    });
    for _ in 0..breaches {
        state.player.lose_life();
    }
    if breaches > 0 {
        log::info!("{breaches} enemy(ies) breached; lives {}", state.player.lives);
    }

    state.power_ups.retain_mut(|pickup| {
        pickup.update(dt);
        !pickup.is_off_screen()
    });

    resolve_collisions(state);

    if state.score >= state.wave * WAVE_SCORE_STEP {
        state.wave += 1;
        log::info!("wave {} reached at score {}", state.wave, state.score);
    }

    if !state.player.is_alive() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over: score {}, waves survived {}",
            state.score,
            state.wave
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, EnemyKind, PowerUp, PowerUpKind};

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_wave_advances_exactly_at_threshold() {
        let mut state = GameState::new(1);
        state.score = 999;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.wave, 1);

        state.score = 1000;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.wave, 2);

        // Next threshold is 2000, so nothing happens at 1500
        state.score = 1500;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.wave, 2);
    }

    #[test]
    fn test_enemy_breach_costs_life_without_scoring() {
        let mut state = GameState::new(1);
        state
            .enemies
            .push(Enemy::new(EnemyKind::Basic, Vec2::new(400.0, 651.0)));
        tick(&mut state, &TickInput::default(), DT);

        assert!(state.enemies.is_empty());
        assert_eq!(state.player.lives, 2);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_power_up_falls_off_without_penalty() {
        let mut state = GameState::new(1);
        state
            .power_ups
            .push(PowerUp::new(PowerUpKind::Shield, Vec2::new(400.0, 651.0)));
        tick(&mut state, &TickInput::default(), DT);

        assert!(state.power_ups.is_empty());
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.score, 0);
        assert!(state.player.active_power_up.is_none());
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = GameState::new(1);
        state.player.lives = 1;
        state
            .enemies
            .push(Enemy::new(EnemyKind::Basic, Vec2::new(400.0, 651.0)));
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Further ticks mutate nothing
        let score = state.score;
        let time = state.time;
        state
            .enemies
            .push(Enemy::new(EnemyKind::Tank, Vec2::new(100.0, 100.0)));
        for _ in 0..120 {
            tick(&mut state, &TickInput { fire: true, ..Default::default() }, DT);
        }
        assert_eq!(state.score, score);
        assert_eq!(state.time, time);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].pos, Vec2::new(100.0, 100.0));
        assert!(state.player.bullets.is_empty());
    }

    #[test]
    fn test_holding_fire_respects_cooldown() {
        let mut state = GameState::new(1);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        // One second of holding fire at a 0.2 s cooldown
        for _ in 0..60 {
            tick(&mut state, &input, DT);
        }
        // 5-6 shots depending on timer phase; nowhere near 60
        let shots = state.player.bullets.len();
        assert!((5..=6).contains(&shots), "shots {shots}");
    }

    #[test]
    fn test_engine_trail_emitted_each_frame() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.particles.len(), 1);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.particles.len(), 2);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);

        let inputs = [
            TickInput { left: true, fire: true, ..Default::default() },
            TickInput { fire: true, ..Default::default() },
            TickInput { right: true, ..Default::default() },
            TickInput::default(),
        ];

        for frame in 0..600 {
            let input = &inputs[frame % inputs.len()];
            tick(&mut a, input, DT);
            tick(&mut b, input, DT);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.wave, b.wave);
        assert_eq!(a.enemies.len(), b.enemies.len());
        assert_eq!(a.player.bullets.len(), b.player.bullets.len());
        assert_eq!(a.player.pos, b.player.pos);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.kind, eb.kind);
        }
    }

    #[test]
    fn test_full_playthrough_reaches_game_over() {
        // Nobody shoots back, but enemies breaching the bottom drain the
        // three lives eventually
        let mut state = GameState::new(123);
        let mut frames = 0u32;
        while state.phase == GamePhase::Playing && frames < 60 * 120 {
            tick(&mut state, &TickInput::default(), DT);
            frames += 1;
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player.lives, 0);
    }
}
