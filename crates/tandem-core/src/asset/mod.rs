// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Texture assets: CPU-side pixel data, the registry that hands out
//! [`TextureId`]s, and the decoding contract implemented by the infra crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Identifies a texture stored in a [`TextureRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    /// The built-in opaque white texture, always present.
    pub const WHITE: Self = Self(0);
}

/// Decoded RGBA8 pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuTexture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl CpuTexture {
    /// Side length of the built-in white texture.
    pub const WHITE_SIZE: u32 = 16;

    /// Creates a texture filled with a single RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// The 16x16 opaque white texture.
    pub fn white() -> Self {
        Self::solid(Self::WHITE_SIZE, Self::WHITE_SIZE, [255; 4])
    }
}

/// Where a sprite's texture comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextureSource {
    /// The built-in white texture.
    #[default]
    White,
    /// An image file, relative to the asset root.
    Path(PathBuf),
}

/// An error raised while loading a texture.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("failed to read asset '{path}': {source}")]
    Io {
        /// Path of the asset.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The bytes could not be decoded as an image.
    #[error("failed to decode asset '{path}': {reason}")]
    Decode {
        /// Path of the asset.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },
    /// No texture is registered under this id.
    #[error("unknown texture {0:?}")]
    UnknownTexture(TextureId),
}

/// Decodes encoded image bytes into a [`CpuTexture`].
pub trait TextureLoader {
    /// Decodes `bytes`. The error string is wrapped into [`AssetError::Decode`].
    fn decode(&self, bytes: &[u8]) -> Result<CpuTexture, String>;
}

/// Owns every texture used by the scene and caches file loads by path.
#[derive(Debug)]
pub struct TextureRegistry {
    root: PathBuf,
    textures: Vec<CpuTexture>,
    by_path: HashMap<PathBuf, TextureId>,
}

impl TextureRegistry {
    /// Creates a registry resolving relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: vec![CpuTexture::white()],
            by_path: HashMap::new(),
        }
    }

    /// Returns the asset root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stores a texture and returns its id.
    pub fn insert(&mut self, texture: CpuTexture) -> TextureId {
        let id = TextureId(self.textures.len() as u32);
        self.textures.push(texture);
        id
    }

    /// Looks up a texture.
    pub fn get(&self, id: TextureId) -> Result<&CpuTexture, AssetError> {
        self.textures
            .get(id.0 as usize)
            .ok_or(AssetError::UnknownTexture(id))
    }

    /// Number of stored textures, the white texture included.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Always `false`: the white texture is registered on creation.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Resolves a [`TextureSource`] to an id, loading the file on first use.
    pub fn resolve(
        &mut self,
        source: &TextureSource,
        loader: &dyn TextureLoader,
    ) -> Result<TextureId, AssetError> {
        match source {
            TextureSource::White => Ok(TextureId::WHITE),
            TextureSource::Path(path) => self.load_path(path, loader),
        }
    }

    fn load_path(
        &mut self,
        path: &Path,
        loader: &dyn TextureLoader,
    ) -> Result<TextureId, AssetError> {
        if let Some(&id) = self.by_path.get(path) {
            return Ok(id);
        }

        let full_path = self.root.join(path);
        let bytes = std::fs::read(&full_path).map_err(|source| AssetError::Io {
            path: full_path.clone(),
            source,
        })?;
        let texture = loader
            .decode(&bytes)
            .map_err(|reason| AssetError::Decode {
                path: full_path.clone(),
                reason,
            })?;

        log::debug!(
            "Loaded texture '{}' ({}x{})",
            full_path.display(),
            texture.width,
            texture.height
        );
        let id = self.insert(texture);
        self.by_path.insert(path.to_path_buf(), id);
        Ok(id)
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Decodes any input as a 2x1 texture and counts calls.
    struct CountingLoader {
        calls: Cell<usize>,
    }

    impl TextureLoader for CountingLoader {
        fn decode(&self, bytes: &[u8]) -> Result<CpuTexture, String> {
            self.calls.set(self.calls.get() + 1);
            if bytes.is_empty() {
                return Err("empty".to_string());
            }
            Ok(CpuTexture::solid(2, 1, [1, 2, 3, 4]))
        }
    }

    #[test]
    fn test_white_texture_is_preregistered() {
        let registry = TextureRegistry::default();
        let white = registry.get(TextureId::WHITE).unwrap();
        assert_eq!((white.width, white.height), (16, 16));
        assert!(white.pixels.iter().all(|&b| b == 255));
        assert_eq!(white.pixels.len(), 16 * 16 * 4);
    }

    #[test]
    fn test_resolve_white_needs_no_loader_call() {
        let mut registry = TextureRegistry::default();
        let loader = CountingLoader { calls: Cell::new(0) };
        let id = registry.resolve(&TextureSource::White, &loader).unwrap();
        assert_eq!(id, TextureId::WHITE);
        assert_eq!(loader.calls.get(), 0);
    }

    #[test]
    fn test_resolve_path_loads_once() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("crate.png"), b"not-really-a-png").unwrap();

        let mut registry = TextureRegistry::new(dir.path());
        let loader = CountingLoader { calls: Cell::new(0) };
        let source = TextureSource::Path("crate.png".into());

        let first = registry.resolve(&source, &loader).unwrap();
        let second = registry.resolve(&source, &loader).unwrap();
        assert_eq!(first, second);
        assert_ne!(first, TextureId::WHITE);
        assert_eq!(loader.calls.get(), 1);
        assert_eq!(registry.get(first).unwrap().width, 2);
    }

    #[test]
    fn test_resolve_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = TextureRegistry::new(dir.path());
        let loader = CountingLoader { calls: Cell::new(0) };
        let err = registry
            .resolve(&TextureSource::Path("missing.png".into()), &loader)
            .unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn test_resolve_undecodable_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("empty.png"), b"").unwrap();
        let mut registry = TextureRegistry::new(dir.path());
        let loader = CountingLoader { calls: Cell::new(0) };
        let err = registry
            .resolve(&TextureSource::Path("empty.png".into()), &loader)
            .unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn test_unknown_texture() {
        let registry = TextureRegistry::default();
        assert!(matches!(
            registry.get(TextureId(42)),
            Err(AssetError::UnknownTexture(TextureId(42)))
        ));
    }
}
