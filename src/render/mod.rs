//! Draw-command production
//!
//! The simulation never draws. Each frame the host asks `build_frame` for
//! a flat list of commands (clear, circles, sprites, text) and hands them
//! to whatever backend it wires up. Screen shake offsets world-space
//! draws only; the HUD stays fixed.

pub mod starfield;

use glam::Vec2;

use crate::assets::{AssetCatalog, FontId, TextureId};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::state::{EnemyKind, GamePhase, GameState, PowerUpKind};
use starfield::Starfield;

/// Background clear color (deep space blue)
pub const CLEAR_COLOR: [u8; 4] = [0, 0, 20, 255];

const WHITE: [u8; 4] = [255, 255, 255, 255];
const RED: [u8; 4] = [255, 0, 0, 255];

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// One drawing request; the core never retains backend results
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear {
        color: [u8; 4],
    },
    Circle {
        pos: Vec2,
        radius: f32,
        color: [u8; 4],
    },
    Sprite {
        texture: TextureId,
        pos: Vec2,
        scale: f32,
        /// Degrees, clockwise
        rotation: f32,
        tint: [u8; 4],
    },
    Text {
        font: FontId,
        pos: Vec2,
        size_px: u32,
        color: [u8; 4],
        align: TextAlign,
        text: String,
    },
}

fn enemy_tint(kind: EnemyKind) -> [u8; 4] {
    match kind {
        EnemyKind::Basic => WHITE,
        EnemyKind::Scout => [150, 255, 150, 255],
        EnemyKind::Tank => [255, 150, 150, 255],
        EnemyKind::Zigzag => [150, 150, 255, 255],
    }
}

fn power_up_tint(kind: PowerUpKind) -> [u8; 4] {
    match kind {
        PowerUpKind::SpreadShot => [255, 255, 0, 255],
        PowerUpKind::RapidFire => [255, 0, 0, 255],
        PowerUpKind::Shield => [0, 0, 255, 255],
    }
}

/// Blink tint while invincible: alpha follows |sin(remaining * 10)|
fn player_tint(state: &GameState) -> [u8; 4] {
    if state.player.is_invincible() {
        let alpha = (state.player.invincible_remaining * 10.0).sin().abs() * 255.0;
        [255, 255, 255, alpha as u8]
    } else {
        WHITE
    }
}

/// Build the full command list for one frame
pub fn build_frame(
    state: &GameState,
    stars: &Starfield,
    assets: &AssetCatalog,
    settings: &Settings,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    let shake = if settings.effective_screen_shake() {
        state.shake_offset
    } else {
        Vec2::ZERO
    };

    commands.push(DrawCommand::Clear { color: CLEAR_COLOR });

    if settings.quality.draws_starfield() {
        for star in stars.iter() {
            commands.push(DrawCommand::Circle {
                pos: star.pos + shake,
                radius: star.size,
                color: star.rgba(),
            });
        }
    }

    for particle in state.particles.iter() {
        commands.push(DrawCommand::Circle {
            pos: particle.pos + shake,
            radius: particle.size,
            color: particle.rgba(),
        });
    }

    commands.push(DrawCommand::Sprite {
        texture: assets.player,
        pos: state.player.pos + shake,
        scale: 0.8,
        rotation: 0.0,
        tint: player_tint(state),
    });

    for bullet in &state.player.bullets {
        commands.push(DrawCommand::Sprite {
            texture: assets.bullet,
            pos: bullet.pos + shake,
            scale: 0.8,
            rotation: 0.0,
            tint: WHITE,
        });
    }

    for enemy in &state.enemies {
        commands.push(DrawCommand::Sprite {
            texture: assets.enemy,
            pos: enemy.pos + shake,
            scale: enemy.kind.sprite_scale(),
            rotation: 0.0,
            tint: enemy_tint(enemy.kind),
        });
    }

    for pickup in &state.power_ups {
        commands.push(DrawCommand::Sprite {
            texture: assets.power_up,
            pos: pickup.pos + shake,
            scale: 0.6,
            rotation: pickup.angle,
            tint: power_up_tint(pickup.kind),
        });
    }

    // HUD is drawn in screen space, unaffected by shake
    let hud = [
        (Vec2::new(10.0, 10.0), format!("Score: {}", state.score)),
        (Vec2::new(10.0, 40.0), format!("Lives: {}", state.player.lives)),
        (Vec2::new(10.0, 70.0), format!("Wave: {}", state.wave)),
    ];
    for (pos, text) in hud {
        commands.push(DrawCommand::Text {
            font: assets.font,
            pos,
            size_px: 24,
            color: WHITE,
            align: TextAlign::Left,
            text,
        });
    }

    if state.phase == GamePhase::GameOver {
        commands.push(DrawCommand::Text {
            font: assets.font,
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            size_px: 48,
            color: RED,
            align: TextAlign::Center,
            text: format!(
                "GAME OVER\nFinal Score: {}\nWaves Survived: {}",
                state.score, state.wave
            ),
        });
    }

    commands
}
