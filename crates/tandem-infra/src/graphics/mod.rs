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

//! A renderer that resolves the scene graph into world-space draw commands
//! without touching a GPU.
//!
//! The produced draw list is what a rasterizing backend would submit; it is
//! kept around after each frame so callers (and tests) can inspect it.

use tandem_core::asset::TextureRegistry;
use tandem_core::math::{Affine2, Rect, Vec2};
use tandem_core::renderer::{
    DrawCommand, DrawPrimitive, FrameStats, RenderError, SceneRenderer,
};
use tandem_core::scene::{LineStyle, NodeKind, Outline, SceneGraph, Sprite};

/// Builds a draw list per frame.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    size: (u32, u32),
    frame_count: u64,
    draw_list: Vec<DrawCommand>,
}

impl HeadlessRenderer {
    /// Creates a renderer targeting a `width` x `height` surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Default::default()
        }
    }

    /// Current surface size.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The draw commands of the last frame, in draw order.
    pub fn last_draw_list(&self) -> &[DrawCommand] {
        &self.draw_list
    }

    fn sprite_quad(
        sprite: &Sprite,
        world: &Affine2,
        textures: &TextureRegistry,
    ) -> Result<DrawPrimitive, RenderError> {
        let texture = textures.get(sprite.texture)?;
        let bounds = Rect::from_pivot(texture.width as f32, texture.height as f32, sprite.anchor);
        Ok(DrawPrimitive::TexturedQuad {
            texture: sprite.texture,
            corners: bounds.corners().map(|c| world.transform_point(c)),
        })
    }

    fn outline_stroke(outline: &Outline, world: &Affine2) -> DrawPrimitive {
        let (width, rect) = stroke_path(&outline.rect, &outline.line_style);
        DrawPrimitive::Stroke {
            corners: rect.corners().map(|c| world.transform_point(c)),
            color: outline.color,
            width,
        }
    }
}

/// Returns the effective stroke width and the rectangle its centerline
/// follows, given the edge alignment.
fn stroke_path(rect: &Rect, style: &LineStyle) -> (f32, Rect) {
    if style.native {
        return (1.0, *rect);
    }
    let outset = style.width * (style.alignment - 0.5);
    let size = Vec2::new(
        (rect.width + 2.0 * outset).max(0.0),
        (rect.height + 2.0 * outset).max(0.0),
    );
    let center = rect.center();
    let path = Rect::new(
        center.x - size.x * 0.5,
        center.y - size.y * 0.5,
        size.x,
        size.y,
    );
    (style.width, path)
}

impl SceneRenderer for HeadlessRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("HeadlessRenderer resized to {}x{}", width, height);
        self.size = (width, height);
    }

    fn render(
        &mut self,
        scene: &SceneGraph,
        textures: &TextureRegistry,
    ) -> Result<FrameStats, RenderError> {
        self.draw_list.clear();

        for id in scene.draw_order() {
            let node = scene.node(id)?;
            let primitive = match &node.kind {
                NodeKind::Container => continue,
                NodeKind::Sprite(sprite) => {
                    Self::sprite_quad(sprite, &scene.world_transform(id)?, textures)?
                }
                NodeKind::Outline(outline) => {
                    Self::outline_stroke(outline, &scene.world_transform(id)?)
                }
            };
            self.draw_list.push(DrawCommand {
                node: id,
                primitive,
            });
        }

        self.frame_count += 1;
        log::trace!(
            "Frame {} built {} draw commands",
            self.frame_count,
            self.draw_list.len()
        );
        Ok(FrameStats {
            frame_number: self.frame_count,
            draw_calls: self.draw_list.len(),
        })
    }

    fn shutdown(&mut self) {
        log::info!(
            "HeadlessRenderer shutting down after {} frames",
            self.frame_count
        );
        self.draw_list.clear();
    }
}
