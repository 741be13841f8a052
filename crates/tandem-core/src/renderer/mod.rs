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

//! Rendering contract: turns a [`SceneGraph`] into world-space draw commands.

use thiserror::Error;

use crate::asset::{AssetError, TextureId, TextureRegistry};
use crate::math::{LinearRgba, Vec2};
use crate::scene::{NodeId, SceneError, SceneGraph};

/// A primitive resolved to world (window) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// A textured quad, corners in the texture's winding order.
    TexturedQuad {
        /// Texture to sample.
        texture: TextureId,
        /// Corners: top-left, top-right, bottom-right, bottom-left of the texture.
        corners: [Vec2; 4],
    },
    /// A closed polyline stroke.
    Stroke {
        /// Corners of the stroked rectangle.
        corners: [Vec2; 4],
        /// Stroke color.
        color: LinearRgba,
        /// Stroke width in pixels (1 for hairlines).
        width: f32,
    },
}

/// One draw command, tagged with the node that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Source node.
    pub node: NodeId,
    /// What to draw.
    pub primitive: DrawPrimitive,
}

/// Per-frame statistics returned by [`SceneRenderer::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Monotonic frame counter, starting at 1.
    pub frame_number: u64,
    /// Number of draw commands issued.
    pub draw_calls: usize,
}

/// Errors raised while rendering a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The scene graph was inconsistent.
    #[error(transparent)]
    Scene(#[from] SceneError),
    /// A sprite referenced a missing texture.
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// A high-level interface for a scene renderer.
pub trait SceneRenderer {
    /// Notifies the renderer that the output surface changed size.
    fn resize(&mut self, width: u32, height: u32);

    /// Renders one frame of `scene`.
    fn render(
        &mut self,
        scene: &SceneGraph,
        textures: &TextureRegistry,
    ) -> Result<FrameStats, RenderError>;

    /// Releases renderer resources. Called once before the renderer is dropped.
    fn shutdown(&mut self) {}
}
