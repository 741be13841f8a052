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

//! Entities pairing a physics body with the scene nodes that draw it.
//!
//! A [`SyncedEntity`] owns nothing itself: the body lives in the physics
//! world and the sprite and outline live in the scene graph. It keeps the
//! handles to both sides and, once per frame, copies the body pose onto the
//! two nodes.

use thiserror::Error;

use tandem_core::asset::{AssetError, TextureLoader, TextureRegistry};
use tandem_core::config::EntityConfig;
use tandem_core::math::{degrees_to_radians, radians_to_degrees, Rect, Transform2D, Vec2};
use tandem_core::physics::units::{footprint_polygon, to_physics, to_render};
use tandem_core::physics::{
    BodyType, ColliderDesc, ColliderHandle, ColliderShape, PhysicsError, PhysicsProvider,
    RigidBodyDesc, RigidBodyHandle,
};
use tandem_core::scene::{NodeId, NodeKind, Outline, SceneError, SceneGraph, Sprite};

/// Errors raised while creating an entity.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// The sprite texture could not be loaded.
    #[error(transparent)]
    Asset(#[from] AssetError),
    /// The collider could not be attached.
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    /// The nodes could not be attached.
    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors raised while copying a body pose onto the scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The body is gone from the physics world.
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    /// A node is gone from the scene graph.
    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// A sprite and its collider outline, both driven by one rigid body.
#[derive(Debug, Clone)]
pub struct SyncedEntity {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    body_type: BodyType,
    sprite: NodeId,
    outline: NodeId,
    footprint: Rect,
    polygon: [Vec2; 4],
    transform: Transform2D,
}

impl SyncedEntity {
    /// Builds the body, the collider and both scene nodes from `config`.
    ///
    /// The nodes are attached under `parent`, sprite first. Zero-sized boxes
    /// are accepted and give a collider without area.
    pub fn spawn(
        config: &EntityConfig,
        physics: &mut dyn PhysicsProvider,
        scene: &mut SceneGraph,
        parent: NodeId,
        textures: &mut TextureRegistry,
        loader: &dyn TextureLoader,
    ) -> Result<Self, SpawnError> {
        let pivot = config.sprite.pivot;
        let transform = config.transform;

        let footprint = Rect::from_pivot(config.collider.width, config.collider.height, pivot);
        let polygon = footprint_polygon(&footprint, transform.scale);

        let texture = textures.resolve(&config.sprite.texture, loader)?;

        let body = physics.add_body(RigidBodyDesc {
            position: to_physics(transform.position),
            rotation: degrees_to_radians(transform.rotation),
            body_type: config.body.body_type,
            ..Default::default()
        });
        let collider = physics.add_collider(ColliderDesc {
            parent_body: Some(body),
            shape: ColliderShape::Polygon(polygon.to_vec()),
            density: config.body.density,
        })?;

        let sprite = scene.add_child(
            parent,
            NodeKind::Sprite(Sprite {
                texture,
                anchor: pivot,
            }),
            transform,
        )?;
        let outline = scene.add_child(
            parent,
            NodeKind::Outline(Outline {
                rect: footprint,
                color: config.collider.color,
                line_style: config.collider.line_style,
            }),
            transform,
        )?;

        Ok(Self {
            body,
            collider,
            body_type: config.body.body_type,
            sprite,
            outline,
            footprint,
            polygon,
            transform,
        })
    }

    /// Reads the body pose and writes it to the sprite and the outline.
    ///
    /// Position is scaled from physics units to pixels and rotation from
    /// radians to degrees; the scale is left as configured.
    pub fn sync(
        &mut self,
        physics: &dyn PhysicsProvider,
        scene: &mut SceneGraph,
    ) -> Result<Transform2D, SyncError> {
        let pose = physics.body_pose(self.body)?;
        let transform = Transform2D {
            position: to_render(pose.position),
            rotation: radians_to_degrees(pose.rotation),
            scale: self.transform.scale,
        };

        scene.set_transform(self.sprite, transform)?;
        scene.set_transform(self.outline, transform)?;
        self.transform = transform;
        Ok(transform)
    }

    /// The rigid body.
    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    /// The collider attached to [`Self::body`].
    pub fn collider(&self) -> ColliderHandle {
        self.collider
    }

    /// How the body moves.
    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// The sprite node.
    pub fn sprite_node(&self) -> NodeId {
        self.sprite
    }

    /// The outline node.
    pub fn outline_node(&self) -> NodeId {
        self.outline
    }

    /// The collider footprint, in pixels relative to the node origin.
    pub fn footprint(&self) -> Rect {
        self.footprint
    }

    /// The collider vertices, in physics units.
    pub fn polygon(&self) -> &[Vec2; 4] {
        &self.polygon
    }

    /// The transform written by the last [`Self::sync`], or the initial one.
    pub fn transform(&self) -> Transform2D {
        self.transform
    }
}
