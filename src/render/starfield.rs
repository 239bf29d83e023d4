//! Scrolling starfield background
//!
//! Cosmetic only: three layers of stars fall at different speeds, wrap
//! at the bottom edge, and twinkle on their own timers. The field owns
//! its RNG so simulation determinism does not depend on it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Layer populations: (count, size, speed multiplier)
const LAYERS: [(usize, f32, f32); 3] = [(80, 1.0, 0.5), (40, 2.0, 1.0), (15, 3.0, 1.5)];

const STAR_COLORS: [[u8; 3]; 3] = [
    [255, 255, 255], // white
    [200, 200, 255], // light blue
    [255, 255, 200], // light yellow
];

/// One background star
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    speed: f32,
    base_color: [u8; 3],
    brightness: f32,
    twinkle_timer: f32,
    twinkle_interval: f32,
}

impl Star {
    pub fn rgba(&self) -> [u8; 4] {
        [
            (self.base_color[0] as f32 * self.brightness) as u8,
            (self.base_color[1] as f32 * self.brightness) as u8,
            (self.base_color[2] as f32 * self.brightness) as u8,
            255,
        ]
    }
}

/// The full three-layer field
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    rng: Pcg32,
}

impl Starfield {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut stars = Vec::new();
        for (count, size, speed_mult) in LAYERS {
            for _ in 0..count {
                let pos = Vec2::new(
                    rng.random_range(0.0..CANVAS_WIDTH),
                    rng.random_range(0.0..CANVAS_HEIGHT),
                );
                let speed = rng.random_range(30.0..120.0) * speed_mult;
                stars.push(Star {
                    pos,
                    size,
                    speed,
                    base_color: STAR_COLORS[rng.random_range(0..STAR_COLORS.len())],
                    brightness: 1.0,
                    twinkle_timer: 0.0,
                    twinkle_interval: rng.random_range(0.5..2.0),
                });
            }
        }
        Self { stars, rng }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Star> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Scroll, wrap, and twinkle
    pub fn update(&mut self, dt: f32) {
        for star in &mut self.stars {
            star.pos.y += star.speed * dt;
            if star.pos.y > CANVAS_HEIGHT {
                star.pos.y = -5.0;
            }

            star.twinkle_timer += dt;
            if star.twinkle_timer >= star.twinkle_interval {
                star.twinkle_timer = 0.0;
                star.brightness = self.rng.random_range(0.7..1.0);
            }
        }
    }
}
