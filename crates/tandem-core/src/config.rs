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

//! Application configuration.
//!
//! Everything a session needs is described by an [`AppConfig`], normally
//! read from a RON file. Every field has a default, so a file only has to
//! name what it changes; an empty file yields the built-in two-object demo.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::asset::TextureSource;
use crate::math::{LinearRgba, Transform2D, Vec2};
use crate::physics::{BodyType, StepSettings};
use crate::scene::LineStyle;

/// Errors raised while loading or saving an [`AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid RON for an `AppConfig`.
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tandem".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// Visual half of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Texture to draw.
    pub texture: TextureSource,
    /// Normalized anchor, shared by the sprite and the collider footprint.
    pub pivot: Vec2,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            texture: TextureSource::White,
            pivot: Vec2::HALF,
        }
    }
}

/// The collider box and its outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    /// Width in render pixels.
    pub width: f32,
    /// Height in render pixels.
    pub height: f32,
    /// Outline color.
    pub color: LinearRgba,
    /// Outline stroke.
    pub line_style: LineStyle,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            color: LinearRgba::RED,
            line_style: LineStyle::default(),
        }
    }
}

/// Physical half of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// How the body moves.
    pub body_type: BodyType,
    /// Collider density.
    pub density: f32,
}

/// Everything needed to build one synchronized entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Initial transform in render space (rotation in degrees).
    pub transform: Transform2D,
    /// Sprite settings.
    pub sprite: SpriteConfig,
    /// Collider box settings.
    pub collider: BoxConfig,
    /// Body settings.
    pub body: BodyConfig,
}

/// An entity config with the name it is registered under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Unique name.
    pub name: String,
    /// Entity settings.
    #[serde(default)]
    pub entity: EntityConfig,
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings.
    pub window: WindowConfig,
    /// Gravity in physics units per second squared (y points down).
    pub gravity: Vec2,
    /// Fixed step parameters.
    pub simulation: StepSettings,
    /// Directory texture paths are resolved against.
    pub asset_root: PathBuf,
    /// Entities created at startup, in creation order.
    pub objects: Vec<NamedEntity>,
}

impl AppConfig {
    /// Default gravity: 9.81 units/s² towards the bottom of the screen.
    pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 9.81);

    /// Parses a config from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::de::from_str(text)?)
    }

    /// Reads and parses a RON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&text)?;
        log::info!(
            "Loaded config '{}' ({} objects)",
            path.display(),
            config.objects.len()
        );
        Ok(config)
    }

    /// Serializes the config as pretty RON.
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// The two objects of the demo scene: a falling box above a platform.
    pub fn demo_objects() -> Vec<NamedEntity> {
        vec![
            NamedEntity {
                name: "DynamicObject".to_string(),
                entity: EntityConfig {
                    transform: Transform2D::new(Vec2::new(512.0, 120.0), 15.0, Vec2::ONE),
                    collider: BoxConfig {
                        width: 64.0,
                        height: 64.0,
                        color: LinearRgba::GREEN,
                        ..BoxConfig::default()
                    },
                    body: BodyConfig {
                        body_type: BodyType::Dynamic,
                        density: 1.0,
                    },
                    ..EntityConfig::default()
                },
            },
            NamedEntity {
                name: "Platform".to_string(),
                entity: EntityConfig {
                    transform: Transform2D::from_position(Vec2::new(512.0, 600.0)),
                    collider: BoxConfig {
                        width: 640.0,
                        height: 32.0,
                        ..BoxConfig::default()
                    },
                    ..EntityConfig::default()
                },
            },
        ]
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            gravity: Self::DEFAULT_GRAVITY,
            simulation: StepSettings::default(),
            asset_root: PathBuf::from("assets"),
            objects: Self::demo_objects(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_demo_defaults() {
        let config = AppConfig::from_ron_str("()").unwrap();
        assert_eq!(config, AppConfig::default());
        let names: Vec<_> = config.objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["DynamicObject", "Platform"]);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let text = r##"(
            gravity: (x: 0.0, y: 5.0),
            objects: [
                (
                    name: "Ball",
                    entity: (
                        transform: (position: (x: 100.0, y: 50.0)),
                        collider: (width: 20.0, height: 10.0, color: "#00FF00"),
                        body: (body_type: Dynamic, density: 2.0),
                    ),
                ),
                (name: "Ghost"),
            ],
        )"##;
        let config = AppConfig::from_ron_str(text).unwrap();

        assert_eq!(config.gravity, Vec2::new(0.0, 5.0));
        assert_eq!(config.simulation, StepSettings::default());
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.objects.len(), 2);

        let ball = &config.objects[0].entity;
        assert_eq!(ball.transform.position, Vec2::new(100.0, 50.0));
        assert_eq!(ball.transform.scale, Vec2::ONE);
        assert_eq!(ball.sprite.pivot, Vec2::HALF);
        assert_eq!(ball.collider.color.hex_code(), 0x00FF00);
        assert_eq!(ball.collider.line_style, LineStyle::default());
        assert_eq!(ball.body.body_type, BodyType::Dynamic);
        assert_eq!(ball.body.density, 2.0);

        let ghost = &config.objects[1].entity;
        assert_eq!(ghost, &EntityConfig::default());
        assert_eq!(ghost.body.body_type, BodyType::Static);
        assert_eq!(ghost.collider.color, LinearRgba::RED);
    }

    #[test]
    fn test_texture_path_source() {
        let text = r#"(objects: [(name: "Crate", entity: (sprite: (texture: Path("crate.png"))))])"#;
        let config = AppConfig::from_ron_str(text).unwrap();
        assert_eq!(
            config.objects[0].entity.sprite.texture,
            TextureSource::Path(PathBuf::from("crate.png"))
        );
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let text = r#"(objects: [(name: "X", entity: (collider: (color: "nope")))])"#;
        assert!(matches!(
            AppConfig::from_ron_str(text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_to_ron_parses_back() {
        let config = AppConfig::default();
        let text = config.to_ron().unwrap();
        assert_eq!(AppConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.ron");
        std::fs::write(&path, r#"(window: (title: "Test", width: 320, height: 240))"#).unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.window.title, "Test");
        assert_eq!((config.window.width, config.window.height), (320, 240));
    }
}
