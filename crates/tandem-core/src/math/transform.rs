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

//! The position/rotation/scale triple stored on every scene node.

use super::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

/// Describes a node's position, rotation and scale relative to its parent.
///
/// Rotation is in **degrees**. The whole value is replaced each frame for
/// physics-driven nodes, so it stays a plain `Copy` struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform2D {
    /// Translation in render pixels.
    pub position: Vec2,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Non-uniform scale.
    pub scale: Vec2,
}

impl Transform2D {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
    };

    /// Creates a new `Transform2D`.
    pub fn new(position: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Creates a transform at `position` with no rotation and unit scale.
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Builds the affine matrix in `Translate * Rotate * Scale` order.
    pub fn to_affine(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(
            self.scale,
            super::degrees_to_radians(self.rotation),
            self.position,
        )
    }
}

impl Default for Transform2D {
    /// Returns the identity `Transform2D`.
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_is_identity() {
        let t = Transform2D::default();
        assert_eq!(t.position, Vec2::ZERO);
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.scale, Vec2::ONE);
    }

    #[test]
    fn test_to_affine_applies_scale_then_rotation_then_translation() {
        let t = Transform2D::new(Vec2::new(10.0, 0.0), 90.0, Vec2::new(2.0, 1.0));
        let p = t.to_affine().transform_point(Vec2::new(1.0, 0.0));
        // (1,0) -> scale (2,0) -> rotate 90° (0,2) -> translate (10,2)
        assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-5);
    }
}
