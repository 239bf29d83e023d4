//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-stepped, driven only by the dt and input passed to `tick`
//! - Seeded RNG only, held by `GameState`
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, resolve_collisions};
pub use particles::{Particle, ParticleSystem};
pub use spawn::{enemy_spawn_interval_for_wave, update_spawners};
pub use state::{Bullet, Enemy, EnemyKind, GamePhase, GameState, Player, PowerUp, PowerUpKind};
pub use tick::{TickInput, tick};
