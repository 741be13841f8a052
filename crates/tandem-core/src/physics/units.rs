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

//! Conversions between render pixels and physics units.

use crate::math::{Rect, Vec2};

/// Render pixels per physics unit.
pub const BODY_SCALE: f32 = 10.5;

/// Converts a render-space position to physics units.
#[inline]
pub fn to_physics(render: Vec2) -> Vec2 {
    render / BODY_SCALE
}

/// Converts a physics-space position to render pixels.
#[inline]
pub fn to_render(physics: Vec2) -> Vec2 {
    physics * BODY_SCALE
}

/// Derives the physics polygon of a collider footprint.
///
/// The footprint corners are brought into physics units and multiplied by
/// the node's `scale`, so the collider matches the scaled sprite.
pub fn footprint_polygon(footprint: &Rect, scale: Vec2) -> [Vec2; 4] {
    footprint
        .corners()
        .map(|corner| to_physics(corner).mul_elem(scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_render_physics_round_trip() {
        for p in [
            Vec2::new(0.0, 0.0),
            Vec2::new(400.0, 120.5),
            Vec2::new(-33.3, 1e4),
        ] {
            let back = to_render(to_physics(p));
            assert_relative_eq!(back.x, p.x, max_relative = 1e-6);
            assert_relative_eq!(back.y, p.y, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_footprint_polygon_uses_body_scale() {
        let footprint = Rect::from_pivot(21.0, 42.0, Vec2::HALF);
        let poly = footprint_polygon(&footprint, Vec2::ONE);
        assert_relative_eq!(poly[0].x, -1.0);
        assert_relative_eq!(poly[0].y, -2.0);
        assert_relative_eq!(poly[2].x, 1.0);
        assert_relative_eq!(poly[2].y, 2.0);
    }

    #[test]
    fn test_footprint_polygon_applies_node_scale() {
        let footprint = Rect::from_pivot(21.0, 21.0, Vec2::HALF);
        let poly = footprint_polygon(&footprint, Vec2::new(2.0, 0.5));
        assert_relative_eq!(poly[2].x, 2.0);
        assert_relative_eq!(poly[2].y, 0.5);
    }
}
