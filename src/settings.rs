//! Player-facing preferences
//!
//! Everything here is cosmetic; gameplay outcomes never depend on it.
//! Persisted as a JSON file next to the binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Coarse visual fidelity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Name in the same lowercase form the JSON file uses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Particle cap applied to the simulation's pool
    pub fn particle_budget(&self) -> usize {
        match self {
            Self::Low => 96,
            Self::Medium => 512,
            Self::High => 2048,
        }
    }

    /// Low drops the parallax starfield entirely
    pub fn draws_starfield(&self) -> bool {
        !matches!(self, Self::Low)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quality: QualityPreset,
    /// Camera shake on enemy destruction
    pub screen_shake: bool,
    /// Exhaust particles behind the player ship
    pub engine_trail: bool,
    /// Accessibility: suppress shake regardless of the toggle above
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::default(),
            screen_shake: true,
            engine_trail: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Shake toggle with reduced-motion taken into account
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Read preferences from `path`. A missing file means first run and
    /// yields defaults silently; a malformed file is reported and also
    /// falls back to defaults rather than refusing to start.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!("ignoring malformed settings {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, text)
    }
}
