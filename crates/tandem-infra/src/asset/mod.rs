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

//! Texture decoding.

use tandem_core::asset::{CpuTexture, TextureLoader};

/// Decodes any image format supported by the `image` crate into RGBA8.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageTextureLoader;

impl TextureLoader for ImageTextureLoader {
    fn decode(&self, bytes: &[u8]) -> Result<CpuTexture, String> {
        let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;

        // Keep the pixels in sRGB space
        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        Ok(CpuTexture {
            width,
            height,
            pixels: rgba_img.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tandem_core::asset::{AssetError, TextureRegistry, TextureSource};

    fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let texture = ImageTextureLoader
            .decode(&png_bytes(3, 2, [10, 20, 30, 255]))
            .unwrap();
        assert_eq!((texture.width, texture.height), (3, 2));
        assert_eq!(texture.pixels.len(), 3 * 2 * 4);
        assert_eq!(&texture.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(ImageTextureLoader.decode(b"not an image").is_err());
    }

    #[test]
    fn test_registry_loads_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("box.png"), png_bytes(8, 4, [0, 255, 0, 255])).unwrap();
        std::fs::write(dir.path().join("broken.png"), b"garbage").unwrap();

        let mut registry = TextureRegistry::new(dir.path());
        let id = registry
            .resolve(&TextureSource::Path("box.png".into()), &ImageTextureLoader)
            .unwrap();
        let texture = registry.get(id).unwrap();
        assert_eq!((texture.width, texture.height), (8, 4));

        let err = registry
            .resolve(&TextureSource::Path("broken.png".into()), &ImageTextureLoader)
            .unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }
}
