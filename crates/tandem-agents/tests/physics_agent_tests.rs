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

use approx::assert_abs_diff_eq;
use tandem_agents::physics_agent::PhysicsAgent;
use tandem_core::math::Vec2;
use tandem_core::physics::{
    BodyType, ColliderDesc, ColliderShape, RigidBodyDesc, RigidBodyHandle, StepSettings,
};
use tandem_infra::physics::rapier::RapierPhysicsWorld;

fn spawn_dynamic_box(agent: &mut PhysicsAgent, position: Vec2) -> RigidBodyHandle {
    let provider = agent.provider_mut();
    let body = provider.add_body(RigidBodyDesc {
        position,
        body_type: BodyType::Dynamic,
        ..Default::default()
    });
    provider
        .add_collider(ColliderDesc {
            parent_body: Some(body),
            shape: ColliderShape::Cuboid(Vec2::ONE),
            density: 1.0,
        })
        .unwrap();
    body
}

#[test]
fn test_physics_gravity_influence() {
    let mut agent = PhysicsAgent::with_default_settings(Box::new(RapierPhysicsWorld::default()));
    let body = spawn_dynamic_box(&mut agent, Vec2::new(0.0, 10.0));

    for _ in 0..10 {
        agent.step();
    }

    // y points down: falling increases y.
    let pose = agent.provider().body_pose(body).unwrap();
    assert!(
        pose.position.y > 10.0,
        "Body should have fallen due to gravity. Current Y: {}",
        pose.position.y
    );
    assert_eq!(agent.step_count(), 10);
}

#[test]
fn test_force_applied_before_step_is_dropped() {
    let mut agent = PhysicsAgent::with_default_settings(Box::new(RapierPhysicsWorld::default()));
    agent.set_gravity(Vec2::ZERO);
    let body = spawn_dynamic_box(&mut agent, Vec2::ZERO);

    agent
        .provider_mut()
        .apply_force(body, Vec2::new(1000.0, 0.0))
        .unwrap();
    for _ in 0..5 {
        agent.step();
    }

    let pose = agent.provider().body_pose(body).unwrap();
    assert_abs_diff_eq!(pose.position.x, 0.0, epsilon = 1e-6);
}

#[test]
fn test_step_count_tracks_simulated_time() {
    let settings = StepSettings {
        timestep: 1.0 / 30.0,
        ..Default::default()
    };
    let mut agent = PhysicsAgent::new(Box::new(RapierPhysicsWorld::default()), settings);
    for _ in 0..30 {
        agent.step();
    }
    assert_abs_diff_eq!(agent.elapsed_time(), 1.0, epsilon = 1e-5);
}
