//! Texture loading without a GPU
//!
//! Registered paths resolve to fixed dimensions; anything else is reported
//! as missing, the same way a real backend fails on a missing file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{TextureInfo, TextureLoader};
use crate::error::AssetError;

/// Texture handle carrying only its size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessTexture {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl TextureInfo for HeadlessTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessTextureLoader {
    known: HashMap<PathBuf, (u32, u32)>,
    loaded: usize,
}

impl HeadlessTextureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader that knows the textures the default mission uses
    pub fn with_default_assets() -> Self {
        Self::new()
            .with_texture("assets/idling_rocket.png", 600, 100)
            .with_texture("assets/thrusting_rocket.png", 600, 100)
            .with_texture("assets/landing_pad.png", 200, 40)
            .with_texture("assets/moving_pad.png", 200, 40)
    }

    pub fn with_texture(mut self, path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        self.known.insert(path.into(), (width, height));
        self
    }

    /// Number of successful loads so far
    pub fn loaded(&self) -> usize {
        self.loaded
    }
}

impl TextureLoader for HeadlessTextureLoader {
    type Texture = HeadlessTexture;

    fn load(&mut self, path: &Path) -> Result<HeadlessTexture, AssetError> {
        let &(width, height) = self
            .known
            .get(path)
            .ok_or_else(|| AssetError::NotFound(path.to_path_buf()))?;
        if width == 0 || height == 0 {
            return Err(AssetError::Decode {
                path: path.to_path_buf(),
                reason: format!("empty image {}x{}", width, height),
            });
        }
        self.loaded += 1;
        log::debug!("Loaded texture {} ({}x{})", path.display(), width, height);
        Ok(HeadlessTexture {
            path: path.to_path_buf(),
            width,
            height,
        })
    }
}
