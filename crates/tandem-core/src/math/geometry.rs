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

//! Provides the axis-aligned rectangle used for collider footprints.

use super::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its top-left corner and its size.
///
/// Width and height are expected to be non-negative. A rectangle with a zero
/// width or height is valid and simply has no area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the minimum corner.
    pub x: f32,
    /// Y coordinate of the minimum corner.
    pub y: f32,
    /// Extent along the X axis.
    pub width: f32,
    /// Extent along the Y axis.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its minimum corner and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates the footprint of a `width` x `height` box anchored at `pivot`.
    ///
    /// The pivot is normalized: `(0, 0)` puts the origin on the minimum
    /// corner, `(0.5, 0.5)` centers the box on the origin.
    ///
    /// ```
    /// use tandem_core::math::{Rect, Vec2};
    /// let r = Rect::from_pivot(40.0, 20.0, Vec2::HALF);
    /// assert_eq!(r, Rect::new(-20.0, -10.0, 40.0, 20.0));
    /// ```
    #[inline]
    pub fn from_pivot(width: f32, height: f32, pivot: Vec2) -> Self {
        Self::new(-width * pivot.x, -height * pivot.y, width, height)
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Returns the size as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns the center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min() + self.size() * 0.5
    }

    /// Returns the area. Zero for degenerate rectangles.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Returns `true` if the rectangle encloses no area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }

    /// Returns the four corners, winding min → (max.x, min.y) → max → (min.x, max.y).
    pub fn corners(&self) -> [Vec2; 4] {
        let (min, max) = (self.min(), self.max());
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
