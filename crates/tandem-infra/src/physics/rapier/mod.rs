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

//! Rapier implementation of the physics provider.

mod conversions;

use std::num::NonZeroUsize;

use conversions::{
    from_rapier_body_handle, from_rapier_collider_handle, from_rapier_vec, to_rapier_body_handle,
    to_rapier_body_type, to_rapier_point, to_rapier_vec,
};
use rapier2d::prelude::{
    CCDSolver, ColliderBuilder, ColliderSet, DefaultBroadPhase, ImpulseJointSet,
    IntegrationParameters, IslandManager, MultibodyJointSet, NarrowPhase, PhysicsPipeline, Point,
    Real, RigidBodyBuilder, RigidBodySet, SharedShape, Vector,
};
use tandem_core::math::{Vec2, EPSILON};
use tandem_core::physics::{
    BodyPose, ColliderDesc, ColliderHandle, ColliderShape, PhysicsError,
    PhysicsProvider, RigidBodyDesc, RigidBodyHandle, StepSettings,
};

/// Mass given to a dynamic body whose colliders carry none.
const FALLBACK_MASS: Real = 1.0;

/// Implementation of the `PhysicsProvider` trait using the Rapier2D physics engine.
pub struct RapierPhysicsWorld {
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl RapierPhysicsWorld {
    /// Creates an empty world with the given gravity.
    pub fn with_gravity(gravity: Vec2) -> Self {
        Self {
            gravity: to_rapier_vec(gravity),
            ..Self::default()
        }
    }
}

impl Default for RapierPhysicsWorld {
    fn default() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            gravity: Vector::new(0.0, 9.81),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }
}

/// Builds the Rapier shape for a collider, along with the offset at which
/// it must be placed in the body frame.
///
/// Polygons enclosing no area cannot be turned into a convex polygon, so
/// they become a (possibly zero-sized) box over their bounds.
fn build_shape(shape: &ColliderShape) -> (SharedShape, Vec2) {
    match shape {
        ColliderShape::Cuboid(half_extents) => (
            SharedShape::cuboid(half_extents.x, half_extents.y),
            Vec2::ZERO,
        ),
        ColliderShape::Polygon(vertices) => {
            if polygon_area(vertices).abs() > EPSILON {
                let points: Vec<Point<Real>> =
                    vertices.iter().map(|&v| to_rapier_point(v)).collect();
                if let Some(hull) = SharedShape::convex_hull(&points) {
                    return (hull, Vec2::ZERO);
                }
            }
            let (min, max) = bounds(vertices);
            let half = (max - min) * 0.5;
            (SharedShape::cuboid(half.x, half.y), min + half)
        }
    }
}

/// Signed area by the shoelace formula.
fn polygon_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| {
            let (a, b) = (vertices[i], vertices[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice * 0.5
}

fn bounds(vertices: &[Vec2]) -> (Vec2, Vec2) {
    if vertices.is_empty() {
        return (Vec2::ZERO, Vec2::ZERO);
    }
    vertices.iter().fold(
        (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
        |(min, max), v| {
            (
                Vec2::new(min.x.min(v.x), min.y.min(v.y)),
                Vec2::new(max.x.max(v.x), max.y.max(v.y)),
            )
        },
    )
}

impl PhysicsProvider for RapierPhysicsWorld {
    fn step(&mut self, settings: &StepSettings) {
        self.integration_parameters.dt = settings.timestep;
        self.integration_parameters.num_solver_iterations =
            NonZeroUsize::new(settings.velocity_iterations).unwrap_or(NonZeroUsize::MIN);
        self.integration_parameters.num_internal_stabilization_iterations =
            settings.position_iterations;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    fn clear_forces(&mut self) {
        for (_, body) in self.rigid_body_set.iter_mut() {
            body.reset_forces(false);
            body.reset_torques(false);
        }
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = to_rapier_vec(gravity);
    }

    fn gravity(&self) -> Vec2 {
        from_rapier_vec(&self.gravity)
    }

    fn add_body(&mut self, desc: RigidBodyDesc) -> RigidBodyHandle {
        let rigid_body = RigidBodyBuilder::new(to_rapier_body_type(desc.body_type))
            .translation(to_rapier_vec(desc.position))
            .rotation(desc.rotation)
            .linvel(to_rapier_vec(desc.linear_velocity))
            .angvel(desc.angular_velocity)
            .build();

        let handle = self.rigid_body_set.insert(rigid_body);
        log::debug!(
            "Added {:?} body {:?} at {:?}",
            desc.body_type,
            handle,
            desc.position
        );
        from_rapier_body_handle(handle)
    }

    fn add_collider(&mut self, desc: ColliderDesc) -> Result<ColliderHandle, PhysicsError> {
        let (shape, offset) = build_shape(&desc.shape);
        let shape_mass = shape.mass_properties(desc.density).mass();
        let collider = ColliderBuilder::new(shape)
            .translation(to_rapier_vec(offset))
            .density(desc.density)
            .build();

        let handle = match desc.parent_body {
            Some(parent) => {
                let rb_handle = to_rapier_body_handle(parent);
                let body = self
                    .rigid_body_set
                    .get_mut(rb_handle)
                    .ok_or(PhysicsError::UnknownBody(parent))?;

                // Mirror Box2D: a dynamic body never ends up massless.
                if body.is_dynamic() && shape_mass <= 0.0 {
                    log::debug!(
                        "Collider on {:?} carries no mass, using {} instead",
                        parent,
                        FALLBACK_MASS
                    );
                    body.set_additional_mass(FALLBACK_MASS, true);
                }

                self.collider_set
                    .insert_with_parent(collider, rb_handle, &mut self.rigid_body_set)
            }
            None => self.collider_set.insert(collider),
        };

        Ok(from_rapier_collider_handle(handle))
    }

    fn body_pose(&self, handle: RigidBodyHandle) -> Result<BodyPose, PhysicsError> {
        let body = self
            .rigid_body_set
            .get(to_rapier_body_handle(handle))
            .ok_or(PhysicsError::UnknownBody(handle))?;
        Ok(BodyPose {
            position: from_rapier_vec(body.translation()),
            rotation: body.rotation().angle(),
        })
    }

    fn body_mass(&self, handle: RigidBodyHandle) -> Result<f32, PhysicsError> {
        self.rigid_body_set
            .get(to_rapier_body_handle(handle))
            .map(|body| body.mass())
            .ok_or(PhysicsError::UnknownBody(handle))
    }

    fn apply_force(&mut self, handle: RigidBodyHandle, force: Vec2) -> Result<(), PhysicsError> {
        let body = self
            .rigid_body_set
            .get_mut(to_rapier_body_handle(handle))
            .ok_or(PhysicsError::UnknownBody(handle))?;
        body.add_force(to_rapier_vec(force), true);
        Ok(())
    }

    fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    fn collider_count(&self) -> usize {
        self.collider_set.len()
    }
}
