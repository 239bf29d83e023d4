//! Axis-aligned overlap tests and the per-frame collision passes
//!
//! Two independent passes run after all entities have moved:
//! bullets against enemies, then the player against pickups.
//! Removals are collected during the scan and applied once, so no
//! collection is mutated while it is being iterated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, PowerUpKind};

/// Explosion tint for destroyed enemies
const EXPLOSION_COLOR: [u8; 3] = [255, 200, 100];

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Run both collision passes and apply their side effects.
///
/// Bullet pass: each enemy is tested against the live bullets and takes
/// damage from at most one bullet per frame; that bullet is consumed.
/// A destroyed enemy scores, explodes, and shakes the screen.
///
/// Pickup pass: any pickup overlapping the player is applied and removed.
pub fn resolve_collisions(state: &mut GameState) {
    let bullets = &mut state.player.bullets;
    let mut spent = vec![false; bullets.len()];
    let mut kills: Vec<(Vec2, u32)> = Vec::new();

    state.enemies.retain_mut(|enemy| {
        let bounds = enemy.aabb();
        for (i, bullet) in bullets.iter().enumerate() {
            if spent[i] {
                continue;
            }
            if bounds.intersects(&bullet.aabb()) {
                spent[i] = true;
                if enemy.hit() {
                    kills.push((enemy.pos, enemy.score_value()));
                    return false;
                }
                // First overlapping bullet only; a damaged survivor
                // cannot be hit again this frame
                return true;
            }
        }
        true
    });

    let mut idx = 0;
    bullets.retain(|_| {
        let keep = !spent[idx];
        idx += 1;
        keep
    });

    for (pos, value) in kills {
        state.score += value;
        state.particles
            .add_explosion(pos, EXPLOSION_COLOR, &mut state.rng);
        state.trigger_screen_shake();
        log::debug!("enemy destroyed at {pos:?}, +{value} (score {})", state.score);
    }

    let player_bounds = state.player.aabb();
    let mut collected: Vec<PowerUpKind> = Vec::new();
    state.power_ups.retain(|pickup| {
        if pickup.aabb().intersects(&player_bounds) {
            collected.push(pickup.kind);
            false
        } else {
            true
        }
    });

    for kind in collected {
        state.player.activate_power_up(kind);
        log::info!("power-up collected: {kind:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Enemy, EnemyKind, PowerUp};
    use proptest::prelude::*;

    fn state_with(enemies: Vec<Enemy>, bullets: Vec<Bullet>) -> GameState {
        let mut state = GameState::new(42);
        state.enemies = enemies;
        state.player.bullets = bullets;
        state
    }

    fn bullet_at(pos: Vec2) -> Bullet {
        Bullet::new(pos, Vec2::new(0.0, -500.0))
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_center_size(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Aabb::from_center_size(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_bullet_kills_basic_and_is_consumed() {
        let pos = Vec2::new(400.0, 200.0);
        let mut state = state_with(
            vec![Enemy::new(EnemyKind::Basic, pos)],
            vec![bullet_at(pos)],
        );
        resolve_collisions(&mut state);

        assert!(state.enemies.is_empty());
        assert!(state.player.bullets.is_empty());
        assert_eq!(state.score, 100);
        assert_eq!(state.particles.len(), 20);
        assert!(state.shake_remaining > 0.0);
    }

    #[test]
    fn test_tank_survives_first_two_hits() {
        let pos = Vec2::new(400.0, 200.0);
        let mut state = state_with(
            vec![Enemy::new(EnemyKind::Tank, pos)],
            vec![bullet_at(pos)],
        );

        for expected_health in [2, 1] {
            resolve_collisions(&mut state);
            assert_eq!(state.enemies.len(), 1);
            assert_eq!(state.enemies[0].health, expected_health);
            // The hitting bullet is consumed each time
            assert!(state.player.bullets.is_empty());
            assert_eq!(state.score, 0);
            state.player.bullets.push(bullet_at(pos));
        }

        resolve_collisions(&mut state);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 200);
    }

    #[test]
    fn test_one_bullet_per_enemy_per_frame() {
        let pos = Vec2::new(400.0, 200.0);
        let mut state = state_with(
            vec![Enemy::new(EnemyKind::Tank, pos)],
            vec![bullet_at(pos), bullet_at(pos), bullet_at(pos)],
        );
        resolve_collisions(&mut state);

        // Only one of the three overlapping bullets damaged the tank
        assert_eq!(state.enemies[0].health, 2);
        assert_eq!(state.player.bullets.len(), 2);
    }

    #[test]
    fn test_one_bullet_cannot_kill_two_enemies() {
        let pos = Vec2::new(400.0, 200.0);
        let mut state = state_with(
            vec![
                Enemy::new(EnemyKind::Basic, pos),
                Enemy::new(EnemyKind::Basic, pos + Vec2::new(5.0, 0.0)),
            ],
            vec![bullet_at(pos)],
        );
        resolve_collisions(&mut state);

        // Consumed by the first enemy; the second survives
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_miss_leaves_everything_alone() {
        let mut state = state_with(
            vec![Enemy::new(EnemyKind::Scout, Vec2::new(100.0, 100.0))],
            vec![bullet_at(Vec2::new(700.0, 400.0))],
        );
        resolve_collisions(&mut state);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.player.bullets.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_pickup_collected_on_overlap() {
        let mut state = GameState::new(42);
        let player_pos = state.player.pos;
        state
            .power_ups
            .push(PowerUp::new(PowerUpKind::RapidFire, player_pos));
        state
            .power_ups
            .push(PowerUp::new(PowerUpKind::Shield, Vec2::new(50.0, 50.0)));
        resolve_collisions(&mut state);

        assert_eq!(state.power_ups.len(), 1);
        assert_eq!(state.power_ups[0].kind, PowerUpKind::Shield);
        assert_eq!(state.player.active_power_up, Some(PowerUpKind::RapidFire));
    }

    proptest! {
        #[test]
        fn prop_aabb_intersection_is_symmetric(
            ax in -500.0f32..1500.0, ay in -500.0f32..1500.0,
            bx in -500.0f32..1500.0, by in -500.0f32..1500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Aabb::from_center_size(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::from_center_size(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_aabb_never_intersects_when_far_apart(
            x in -500.0f32..1500.0, y in -500.0f32..1500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
        ) {
            let a = Aabb::from_center_size(Vec2::new(x, y), Vec2::new(w, h));
            let b = Aabb::from_center_size(Vec2::new(x + w + 200.0, y), Vec2::new(w, h));
            prop_assert!(!a.intersects(&b));
        }
    }
}
