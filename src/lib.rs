//! Nova Barrage - a vertically-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `render`: Draw-command production from simulation state
//! - `assets`: Texture/font handle resolution with fallback paths
//! - `settings`: Quality presets and cosmetic toggles

pub mod assets;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Logical canvas dimensions (all spawning and bounds checks use these)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Bullets are pruned above this y
    pub const BULLET_OFFSCREEN_Y: f32 = -50.0;
    /// Enemies and power-ups are pruned below this y
    pub const BOTTOM_OFFSCREEN_Y: f32 = 650.0;
    /// Spawn row for enemies and power-ups (just above the visible canvas)
    pub const SPAWN_Y: f32 = -50.0;
    /// Horizontal spawn band
    pub const SPAWN_X_MIN: f32 = 50.0;
    pub const SPAWN_X_MAX: f32 = 750.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_START: Vec2 = Vec2::new(400.0, 500.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(38.0, 38.0);

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 500.0;
    pub const BULLET_SIZE: Vec2 = Vec2::new(6.0, 16.0);
    /// Horizontal velocity of the diagonal spread-shot bullets
    pub const SPREAD_SHOT_X_VEL: f32 = 100.0;

    /// Enemy defaults
    pub const ENEMY_BASE_SPEED: f32 = 150.0;
    pub const SCOUT_SPEED_MULT: f32 = 1.5;
    pub const TANK_SPEED_MULT: f32 = 0.7;
    pub const ZIGZAG_FREQUENCY: f32 = 2.0;
    pub const ZIGZAG_AMPLITUDE: f32 = 100.0;

    /// Power-up defaults
    pub const POWER_UP_FALL_SPEED: f32 = 100.0;
    /// Pickup spin, degrees per second (visual only)
    pub const POWER_UP_SPIN_SPEED: f32 = 90.0;
    pub const POWER_UP_SIZE: Vec2 = Vec2::new(28.0, 28.0);
    /// How long an acquired power-up stays active
    pub const POWER_UP_DURATION: f32 = 10.0;

    /// Shooting cadence
    pub const SHOOT_COOLDOWN: f32 = 0.2;
    pub const RAPID_FIRE_COOLDOWN: f32 = 0.1;

    /// Invincibility window after taking a hit
    pub const GRACE_INVINCIBILITY: f32 = 2.0;

    /// Spawn cadence
    pub const ENEMY_SPAWN_BASE_INTERVAL: f32 = 1.5;
    pub const ENEMY_SPAWN_MIN_INTERVAL: f32 = 0.5;
    pub const ENEMY_SPAWN_STEP_PER_WAVE: f32 = 0.1;
    pub const POWER_UP_SPAWN_INTERVAL: f32 = 15.0;

    /// Score needed per wave: wave advances when score >= wave * this
    pub const WAVE_SCORE_STEP: u32 = 1000;

    /// Screen shake on enemy destruction
    pub const SHAKE_DURATION: f32 = 0.2;
    pub const SHAKE_INTENSITY: f32 = 5.0;
}
