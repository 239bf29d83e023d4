//! Asset handle resolution
//!
//! The core never touches pixel or glyph data; it refers to every asset
//! through an opaque handle issued by a loader the host supplies. A
//! missing primary font is recoverable via the fallback list; anything
//! still missing after that is a fatal startup error surfaced to the
//! caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Texture paths resolved at startup
pub const PLAYER_TEXTURE: &str = "player.png";
pub const ENEMY_TEXTURE: &str = "enemy.png";
pub const BULLET_TEXTURE: &str = "bullet.png";
pub const POWER_UP_TEXTURE: &str = "powerup.png";

/// Font candidates, tried in order
pub const FONT_CANDIDATES: [&str; 2] = [
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// Opaque texture handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Opaque font handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontId(pub u32);

/// Asset loading failures
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    /// The backend could not find or decode the asset
    #[error("asset not found: {0}")]
    NotFound(PathBuf),

    /// Every candidate in a fallback chain failed
    #[error("no usable font among {0:?}")]
    NoUsableFont(Vec<PathBuf>),

    /// IO error from the filesystem
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend-supplied loader the core resolves handles through
pub trait AssetLoader {
    fn load_texture(&mut self, path: &Path) -> Result<TextureId, AssetError>;
    fn load_font(&mut self, path: &Path) -> Result<FontId, AssetError>;
}

/// All handles the renderer needs for a frame
#[derive(Debug, Clone, Copy)]
pub struct AssetCatalog {
    pub player: TextureId,
    pub enemy: TextureId,
    pub bullet: TextureId,
    pub power_up: TextureId,
    pub font: FontId,
}

impl AssetCatalog {
    /// Resolve every texture and a font (with fallback) through `loader`
    pub fn load(loader: &mut impl AssetLoader) -> Result<Self, AssetError> {
        Ok(Self {
            player: loader.load_texture(Path::new(PLAYER_TEXTURE))?,
            enemy: loader.load_texture(Path::new(ENEMY_TEXTURE))?,
            bullet: loader.load_texture(Path::new(BULLET_TEXTURE))?,
            power_up: loader.load_texture(Path::new(POWER_UP_TEXTURE))?,
            font: load_font_with_fallback(loader, &FONT_CANDIDATES)?,
        })
    }
}

/// Try each candidate in order; only fail once all are exhausted
pub fn load_font_with_fallback(
    loader: &mut impl AssetLoader,
    candidates: &[&str],
) -> Result<FontId, AssetError> {
    for (i, candidate) in candidates.iter().enumerate() {
        match loader.load_font(Path::new(candidate)) {
            Ok(font) => {
                if i > 0 {
                    log::warn!("primary font unavailable, using fallback {candidate}");
                }
                return Ok(font);
            }
            Err(e) => log::debug!("font candidate {candidate} failed: {e}"),
        }
    }
    Err(AssetError::NoUsableFont(
        candidates.iter().map(PathBuf::from).collect(),
    ))
}

/// Loader that checks paths against a directory on disk and hands out
/// sequential handles. Useful for headless runs and tests; a real
/// rendering backend would decode the files as well.
#[derive(Debug)]
pub struct DirectoryLoader {
    root: PathBuf,
    next_texture: u32,
    next_font: u32,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next_texture: 0,
            next_font: 0,
        }
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, AssetError> {
        let full = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        if full.is_file() {
            Ok(full)
        } else {
            Err(AssetError::NotFound(full))
        }
    }
}

impl AssetLoader for DirectoryLoader {
    fn load_texture(&mut self, path: &Path) -> Result<TextureId, AssetError> {
        self.resolve(path)?;
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        Ok(id)
    }

    fn load_font(&mut self, path: &Path) -> Result<FontId, AssetError> {
        self.resolve(path)?;
        let id = FontId(self.next_font);
        self.next_font += 1;
        Ok(id)
    }
}
