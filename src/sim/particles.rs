//! Particle bookkeeping for explosions and the engine trail
//!
//! Particles are purely cosmetic: collision and scoring never read them.
//! Emission has no natural upper bound, so the system enforces a cap by
//! dropping the oldest particles first.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

/// Default particle cap; quality presets may raise or lower it
pub const MAX_PARTICLES: usize = 512;

/// Particles emitted per explosion
const EXPLOSION_COUNT: usize = 20;

/// Engine trail color (warm orange)
const TRAIL_COLOR: [u8; 3] = [255, 150, 50];

/// A single short-lived particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left to live
    pub lifetime: f32,
    pub max_lifetime: f32,
    pub color: [u8; 3],
    pub size: f32,
}

impl Particle {
    /// Alpha fades linearly with remaining lifetime
    pub fn alpha(&self) -> u8 {
        let a = (self.lifetime / self.max_lifetime).clamp(0.0, 1.0) * 255.0;
        a as u8
    }

    pub fn rgba(&self) -> [u8; 4] {
        [self.color[0], self.color[1], self.color[2], self.alpha()]
    }
}

/// Owning multiset of live particles
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    cap: usize,
    trail_enabled: bool,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self {
            particles: Vec::new(),
            cap: MAX_PARTICLES,
            trail_enabled: true,
        }
    }
}

impl ParticleSystem {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            particles: Vec::new(),
            cap: cap.max(1),
            trail_enabled: true,
        }
    }

    pub fn set_trail_enabled(&mut self, enabled: bool) {
        self.trail_enabled = enabled;
    }

    pub fn set_cap(&mut self, cap: usize) {
        self.cap = cap.max(1);
        while self.particles.len() > self.cap {
            self.particles.remove(0);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    fn push(&mut self, particle: Particle) {
        if self.particles.len() >= self.cap {
            // Drop oldest to make room
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Burst of 20 particles scattered in all directions
    pub fn add_explosion(&mut self, pos: Vec2, color: [u8; 3], rng: &mut Pcg32) {
        for _ in 0..EXPLOSION_COUNT {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(50.0..200.0);
            let lifetime = rng.random_range(0.5..1.0);
            self.push(Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                lifetime,
                max_lifetime: lifetime,
                color,
                size: 2.0,
            });
        }
    }

    /// One exhaust particle with slight horizontal jitter
    pub fn add_engine_trail(&mut self, pos: Vec2, rng: &mut Pcg32) {
        if !self.trail_enabled {
            return;
        }
        let jitter = rng.random_range(-10.0..10.0);
        let lifetime = rng.random_range(0.2..0.4);
        self.push(Particle {
            pos: Vec2::new(pos.x + jitter, pos.y),
            vel: Vec2::new(0.0, 50.0),
            lifetime,
            max_lifetime: lifetime,
            color: TRAIL_COLOR,
            size: 1.5,
        });
    }

    /// Advance positions, burn lifetime, drop expired particles
    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.pos += p.vel * dt;
            p.lifetime -= dt;
        }
        self.particles.retain(|p| p.lifetime > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_explosion_emits_twenty_in_range() {
        let mut system = ParticleSystem::default();
        let mut rng = rng();
        system.add_explosion(Vec2::new(100.0, 100.0), [255, 200, 100], &mut rng);
        assert_eq!(system.len(), 20);
        for p in system.iter() {
            let speed = p.vel.length();
            assert!((49.9..200.1).contains(&speed), "speed {speed}");
            assert!((0.5..1.0).contains(&p.lifetime), "lifetime {}", p.lifetime);
        }
    }

    #[test]
    fn test_engine_trail_jitter_and_drift() {
        let mut system = ParticleSystem::default();
        let mut rng = rng();
        for _ in 0..50 {
            system.add_engine_trail(Vec2::new(400.0, 520.0), &mut rng);
        }
        assert_eq!(system.len(), 50);
        for p in system.iter() {
            assert!((p.pos.x - 400.0).abs() <= 10.0);
            assert_eq!(p.vel, Vec2::new(0.0, 50.0));
            assert!((0.2..0.4).contains(&p.lifetime));
        }
    }

    #[test]
    fn test_particles_expire() {
        let mut system = ParticleSystem::default();
        let mut rng = rng();
        system.add_explosion(Vec2::ZERO, [255, 255, 255], &mut rng);
        // Max lifetime is < 1.0 s
        for _ in 0..70 {
            system.update(1.0 / 60.0);
        }
        assert!(system.is_empty());
    }

    #[test]
    fn test_alpha_strictly_decreases_until_removal() {
        let mut system = ParticleSystem::default();
        let mut rng = rng();
        system.add_engine_trail(Vec2::ZERO, &mut rng);

        // 0.02 s against a <= 0.4 s lifetime burns at least 12 alpha
        // steps per update, so the fade is strict until removal
        let mut last_alpha = system.iter().next().map(Particle::alpha).unwrap();
        loop {
            system.update(0.02);
            let Some(alpha) = system.iter().next().map(Particle::alpha) else {
                break;
            };
            assert!(alpha < last_alpha, "alpha {alpha} vs {last_alpha}");
            last_alpha = alpha;
        }
    }

    #[test]
    fn test_trail_disabled_emits_nothing() {
        let mut system = ParticleSystem::default();
        let mut rng = rng();
        system.set_trail_enabled(false);
        system.add_engine_trail(Vec2::new(400.0, 520.0), &mut rng);
        assert!(system.is_empty());
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut system = ParticleSystem::with_cap(25);
        let mut rng = rng();
        system.add_explosion(Vec2::ZERO, [1, 1, 1], &mut rng);
        system.add_explosion(Vec2::ONE, [2, 2, 2], &mut rng);
        assert_eq!(system.len(), 25);
        // The entire second burst survives
        let newest: Vec<_> = system.iter().rev().take(20).collect();
        assert!(newest.iter().all(|p| p.color == [2, 2, 2]));
    }
}
