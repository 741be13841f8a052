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

//! # Physics Abstractions
//!
//! Engine-agnostic types and the [`PhysicsProvider`] contract that a 2D
//! rigid-body backend (e.g. Rapier) implements.
//!
//! Everything crossing this boundary is expressed in **physics units** and
//! **radians**. Conversions from and to render pixels live in [`units`].

pub mod units;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::Vec2;

pub use units::BODY_SCALE;

/// Opaque handle to a rigid body in the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RigidBodyHandle(pub u64);

/// Opaque handle to a collider in the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderHandle(pub u64);

/// Defines how a rigid body participates in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BodyType {
    /// Fixed in place, never moves.
    #[default]
    Static,
    /// Moved by its velocity only; ignores forces and collisions.
    Kinematic,
    /// Responds to forces, gravity and collisions.
    Dynamic,
}

/// Description for creating a rigid body.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBodyDesc {
    /// Initial position, in physics units.
    pub position: Vec2,
    /// Initial rotation, in radians.
    pub rotation: f32,
    /// Body type.
    pub body_type: BodyType,
    /// Initial linear velocity, in physics units per second.
    pub linear_velocity: Vec2,
    /// Initial angular velocity, in radians per second.
    pub angular_velocity: f32,
}

impl Default for RigidBodyDesc {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            body_type: BodyType::Static,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
        }
    }
}

/// Supported collider shapes, in the body's local frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ColliderShape {
    /// Convex polygon given by its vertices.
    ///
    /// Backends fall back to the bounding box when the vertices enclose no
    /// area, so degenerate polygons are accepted.
    Polygon(Vec<Vec2>),
    /// Box with half-extents.
    Cuboid(Vec2),
}

/// Description for creating a collider.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderDesc {
    /// Body the collider is attached to.
    pub parent_body: Option<RigidBodyHandle>,
    /// Collision geometry.
    pub shape: ColliderShape,
    /// Mass density of the shape.
    pub density: f32,
}

/// The pose of a rigid body read back after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    /// Position of the body origin, in physics units.
    pub position: Vec2,
    /// Rotation, in radians.
    pub rotation: f32,
}

/// Fixed parameters of a simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSettings {
    /// Duration of one step, in seconds.
    pub timestep: f32,
    /// Constraint solver velocity iterations.
    pub velocity_iterations: usize,
    /// Position (stabilization) iterations.
    pub position_iterations: usize,
}

impl StepSettings {
    /// 60 steps per second.
    pub const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;
    /// Velocity iterations per step.
    pub const DEFAULT_VELOCITY_ITERATIONS: usize = 2;
    /// Position iterations per step.
    pub const DEFAULT_POSITION_ITERATIONS: usize = 6;
}

impl Default for StepSettings {
    fn default() -> Self {
        Self {
            timestep: Self::DEFAULT_TIMESTEP,
            velocity_iterations: Self::DEFAULT_VELOCITY_ITERATIONS,
            position_iterations: Self::DEFAULT_POSITION_ITERATIONS,
        }
    }
}

/// Errors reported by a [`PhysicsProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// The handle does not name a body in this world.
    #[error("unknown rigid body {0:?}")]
    UnknownBody(RigidBodyHandle),
}

/// Interface contract for any 2D physics engine implementation.
pub trait PhysicsProvider: Send + Sync {
    /// Advances the simulation by one step.
    fn step(&mut self, settings: &StepSettings);

    /// Resets the accumulated user forces and torques of every body.
    fn clear_forces(&mut self);

    /// Sets the global gravity vector, in physics units per second squared.
    fn set_gravity(&mut self, gravity: Vec2);

    /// Returns the global gravity vector.
    fn gravity(&self) -> Vec2;

    /// Adds a rigid body to the simulation.
    fn add_body(&mut self, desc: RigidBodyDesc) -> RigidBodyHandle;

    /// Adds a collider, attached to `desc.parent_body` if set.
    fn add_collider(&mut self, desc: ColliderDesc) -> Result<ColliderHandle, PhysicsError>;

    /// Reads the current position and rotation of a body.
    fn body_pose(&self, handle: RigidBodyHandle) -> Result<BodyPose, PhysicsError>;

    /// Reads the current mass of a body.
    fn body_mass(&self, handle: RigidBodyHandle) -> Result<f32, PhysicsError>;

    /// Adds a force applied at the body's center of mass during the next step.
    fn apply_force(&mut self, handle: RigidBodyHandle, force: Vec2) -> Result<(), PhysicsError>;

    /// Number of rigid bodies in the world.
    fn body_count(&self) -> usize;

    /// Number of colliders in the world.
    fn collider_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_settings_defaults() {
        let s = StepSettings::default();
        assert_eq!(s.timestep, 1.0 / 60.0);
        assert_eq!(s.velocity_iterations, 2);
        assert_eq!(s.position_iterations, 6);
    }

    #[test]
    fn test_body_type_defaults_to_static() {
        assert_eq!(BodyType::default(), BodyType::Static);
        assert_eq!(RigidBodyDesc::default().body_type, BodyType::Static);
    }
}
