//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here. Entities are plain records
//! with a kind tag; per-kind behavior is dispatched on the tag rather than
//! through a trait-object hierarchy.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::particles::ParticleSystem;
use super::tick::TickInput;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; simulation state is frozen
    GameOver,
}

/// Temporary modifiers granted by falling pickups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Shoot three bullets in a fan instead of one
    SpreadShot,
    /// Halved shot cooldown
    RapidFire,
    /// Full-duration invincibility
    Shield,
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    /// Fast, fragile
    Scout,
    /// Slow, takes 3 hits
    Tank,
    /// Weaves horizontally as it descends
    Zigzag,
}

impl EnemyKind {
    /// Hits required to destroy
    pub fn health(&self) -> i32 {
        match self {
            EnemyKind::Tank => 3,
            _ => 1,
        }
    }

    /// Downward speed in units/s
    pub fn speed(&self) -> f32 {
        match self {
            EnemyKind::Scout => ENEMY_BASE_SPEED * SCOUT_SPEED_MULT,
            EnemyKind::Tank => ENEMY_BASE_SPEED * TANK_SPEED_MULT,
            _ => ENEMY_BASE_SPEED,
        }
    }

    /// Score awarded when destroyed
    pub fn score_value(&self) -> u32 {
        match self {
            EnemyKind::Basic => 100,
            EnemyKind::Scout => 150,
            EnemyKind::Zigzag => 175,
            EnemyKind::Tank => 200,
        }
    }

    /// Collision box dimensions
    pub fn size(&self) -> Vec2 {
        match self {
            EnemyKind::Scout => Vec2::new(29.0, 29.0),
            EnemyKind::Tank => Vec2::new(48.0, 48.0),
            _ => Vec2::new(38.0, 38.0),
        }
    }

    /// Sprite scale relative to the shared enemy texture
    pub fn sprite_scale(&self) -> f32 {
        match self {
            EnemyKind::Scout => 0.6,
            EnemyKind::Tank => 1.0,
            _ => 0.8,
        }
    }
}

/// A player bullet
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Bullets only die by flying off the top
    pub fn is_off_screen(&self) -> bool {
        self.pos.y < BULLET_OFFSCREEN_Y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, BULLET_SIZE)
    }
}

/// A descending enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: i32,
    /// Spawn x; Zigzag oscillates around this
    origin_x: f32,
    /// Seconds since spawn, drives the zigzag phase
    age: f32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel: Vec2::new(0.0, kind.speed()),
            health: kind.health(),
            origin_x: pos.x,
            age: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.kind == EnemyKind::Zigzag {
            self.age += dt;
            self.pos.x = self.origin_x + (self.age * ZIGZAG_FREQUENCY).sin() * ZIGZAG_AMPLITUDE;
            self.pos.y += self.vel.y * dt;
        } else {
            self.pos += self.vel * dt;
        }
    }

    /// Apply one point of damage. Returns true if the enemy is destroyed.
    /// This is the only mutator of `health`.
    pub fn hit(&mut self) -> bool {
        self.health -= 1;
        self.health <= 0
    }

    pub fn score_value(&self) -> u32 {
        self.kind.score_value()
    }

    /// Past the bottom boundary; costs the player a life
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > BOTTOM_OFFSCREEN_Y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.kind.size())
    }
}

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Spin angle in degrees, visual only
    pub angle: f32,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel: Vec2::new(0.0, POWER_UP_FALL_SPEED),
            angle: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.angle += POWER_UP_SPIN_SPEED * dt;
    }

    /// Past the bottom boundary; removed with no penalty
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > BOTTOM_OFFSCREEN_Y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, POWER_UP_SIZE)
    }
}

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub lives: u32,
    /// At most one active modifier; acquiring another overwrites it
    pub active_power_up: Option<PowerUpKind>,
    pub power_up_remaining: f32,
    /// Current cadence; lowered by RapidFire, restored on power-up expiry
    pub shoot_cooldown: f32,
    pub cooldown_remaining: f32,
    /// Shield and post-hit grace share this timer
    pub invincible_remaining: f32,
    pub bullets: Vec<Bullet>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_START,
            vel: Vec2::ZERO,
            lives: 3,
            active_power_up: None,
            power_up_remaining: 0.0,
            shoot_cooldown: SHOOT_COOLDOWN,
            cooldown_remaining: 0.0,
            invincible_remaining: 0.0,
            bullets: Vec::new(),
        }
    }
}

impl Player {
    pub fn is_invincible(&self) -> bool {
        self.invincible_remaining > 0.0
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, PLAYER_SIZE)
    }

    /// Advance timers, read input, move (clamped to the canvas), shoot,
    /// and prune off-screen bullets.
    pub fn update(&mut self, input: &TickInput, dt: f32) {
        if self.active_power_up.is_some() {
            self.power_up_remaining -= dt;
            if self.power_up_remaining <= 0.0 {
                self.active_power_up = None;
                self.power_up_remaining = 0.0;
                self.shoot_cooldown = SHOOT_COOLDOWN;
            }
        }

        if self.invincible_remaining > 0.0 {
            self.invincible_remaining = (self.invincible_remaining - dt).max(0.0);
        }

        self.vel.x = match (input.left, input.right) {
            (true, false) => -PLAYER_SPEED,
            (false, true) => PLAYER_SPEED,
            _ => 0.0,
        };
        self.vel.y = match (input.up, input.down) {
            (true, false) => -PLAYER_SPEED,
            (false, true) => PLAYER_SPEED,
            _ => 0.0,
        };

        self.pos += self.vel * dt;
        let half = PLAYER_SIZE / 2.0;
        self.pos.x = self.pos.x.clamp(half.x, CANVAS_WIDTH - half.x);
        self.pos.y = self.pos.y.clamp(half.y, CANVAS_HEIGHT - half.y);

        self.cooldown_remaining -= dt;
        if input.fire && self.cooldown_remaining <= 0.0 {
            self.shoot();
            self.cooldown_remaining = self.shoot_cooldown;
        }

        for bullet in &mut self.bullets {
            bullet.update(dt);
        }
        self.bullets.retain(|b| !b.is_off_screen());
    }

    /// Emit one bullet, or three in a fan while SpreadShot is active
    pub fn shoot(&mut self) {
        let muzzle = Vec2::new(self.pos.x, self.pos.y - PLAYER_SIZE.y / 2.0);

        if self.active_power_up == Some(PowerUpKind::SpreadShot) {
            self.bullets
                .push(Bullet::new(muzzle, Vec2::new(-SPREAD_SHOT_X_VEL, -BULLET_SPEED)));
            self.bullets
                .push(Bullet::new(muzzle, Vec2::new(0.0, -BULLET_SPEED)));
            self.bullets
                .push(Bullet::new(muzzle, Vec2::new(SPREAD_SHOT_X_VEL, -BULLET_SPEED)));
        } else {
            self.bullets
                .push(Bullet::new(muzzle, Vec2::new(0.0, -BULLET_SPEED)));
        }
    }

    /// Switch to the given modifier and restart its 10 s window.
    /// The shot cooldown is only restored when the window expires, so
    /// overwriting RapidFire with another pickup keeps the fast cadence
    /// until the shared timer runs out.
    pub fn activate_power_up(&mut self, kind: PowerUpKind) {
        self.active_power_up = Some(kind);
        self.power_up_remaining = POWER_UP_DURATION;

        match kind {
            PowerUpKind::SpreadShot => {} // handled in shoot()
            PowerUpKind::RapidFire => self.shoot_cooldown = RAPID_FIRE_COOLDOWN,
            PowerUpKind::Shield => self.invincible_remaining = POWER_UP_DURATION,
        }
    }

    /// Take a hit. No-op while invincible; otherwise lose one life and
    /// start the grace window.
    pub fn lose_life(&mut self) {
        if self.is_invincible() {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invincible_remaining = GRACE_INVINCIBILITY;
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG, the only randomness source in the core
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Monotonically non-decreasing
    pub score: u32,
    /// Difficulty tier, starts at 1
    pub wave: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: ParticleSystem,
    pub enemy_spawn_timer: f32,
    pub enemy_spawn_interval: f32,
    pub power_up_spawn_timer: f32,
    /// Screen shake bookkeeping, cosmetic
    pub shake_remaining: f32,
    pub shake_offset: Vec2,
    /// Total simulated seconds
    pub time: f32,
}

impl GameState {
    /// Create a new run with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            wave: 1,
            player: Player::default(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            particles: ParticleSystem::default(),
            enemy_spawn_timer: 0.0,
            enemy_spawn_interval: ENEMY_SPAWN_BASE_INTERVAL,
            power_up_spawn_timer: 0.0,
            shake_remaining: 0.0,
            shake_offset: Vec2::ZERO,
            time: 0.0,
        }
    }

    /// Kick off a shake burst with a fresh random offset
    pub fn trigger_screen_shake(&mut self) {
        use rand::Rng;
        self.shake_remaining = SHAKE_DURATION;
        self.shake_offset = Vec2::new(
            self.rng.random_range(-SHAKE_INTENSITY..SHAKE_INTENSITY),
            self.rng.random_range(-SHAKE_INTENSITY..SHAKE_INTENSITY),
        );
    }

    /// Re-roll the offset each frame while the burst lasts, then zero it
    pub fn update_screen_shake(&mut self, dt: f32) {
        use rand::Rng;
        if self.shake_remaining > 0.0 {
            self.shake_remaining -= dt;
            if self.shake_remaining <= 0.0 {
                self.shake_offset = Vec2::ZERO;
            } else {
                self.shake_offset = Vec2::new(
                    self.rng.random_range(-SHAKE_INTENSITY..SHAKE_INTENSITY),
                    self.rng.random_range(-SHAKE_INTENSITY..SHAKE_INTENSITY),
                );
            }
        }
    }
}
