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

//! Affine transformations for 2D space.

use super::Vec2;
use std::ops::Mul;

/// Represents a 2D affine transformation (translation, rotation, scale).
///
/// Stored as the two basis columns plus a translation column of a 3x3
/// matrix whose last row is implicitly `[0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    /// Image of the X unit vector.
    pub x_axis: Vec2,
    /// Image of the Y unit vector.
    pub y_axis: Vec2,
    /// Translation applied after the linear part.
    pub translation: Vec2,
}

impl Affine2 {
    /// The identity transform, which results in no change.
    pub const IDENTITY: Self = Self {
        x_axis: Vec2::X,
        y_axis: Vec2::Y,
        translation: Vec2::ZERO,
    };

    /// Creates an `Affine2` from a translation vector.
    #[inline]
    pub fn from_translation(v: Vec2) -> Self {
        Self {
            translation: v,
            ..Self::IDENTITY
        }
    }

    /// Creates an `Affine2` from a non-uniform scale vector.
    #[inline]
    pub fn from_scale(scale: Vec2) -> Self {
        Self {
            x_axis: Vec2::new(scale.x, 0.0),
            y_axis: Vec2::new(0.0, scale.y),
            translation: Vec2::ZERO,
        }
    }

    /// Creates an `Affine2` from a rotation angle in radians.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            x_axis: Vec2::new(c, s),
            y_axis: Vec2::new(-s, c),
            translation: Vec2::ZERO,
        }
    }

    /// Creates the `Translate * Rotate * Scale` composition in one go.
    #[inline]
    pub fn from_scale_angle_translation(scale: Vec2, angle: f32, translation: Vec2) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            x_axis: Vec2::new(c, s) * scale.x,
            y_axis: Vec2::new(-s, c) * scale.y,
            translation,
        }
    }

    /// Transforms a point (translation applies).
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.x_axis * p.x + self.y_axis * p.y + self.translation
    }

    /// Transforms a direction (translation ignored).
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        self.x_axis * v.x + self.y_axis * v.y
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine2 {
    type Output = Self;

    /// Composes two transforms; `a * b` applies `b` first.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            x_axis: self.transform_vector(rhs.x_axis),
            y_axis: self.transform_vector(rhs.y_axis),
            translation: self.transform_point(rhs.translation),
        }
    }
}
