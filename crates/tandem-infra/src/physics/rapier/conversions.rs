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

use rapier2d::dynamics::RigidBodyType;
use rapier2d::na::{Point2, Vector2};
use rapier2d::prelude::Real;
use tandem_core::math::Vec2;
use tandem_core::physics::{BodyType, ColliderHandle, RigidBodyHandle};

pub fn to_rapier_vec(v: Vec2) -> Vector2<Real> {
    Vector2::new(v.x, v.y)
}

pub fn to_rapier_point(v: Vec2) -> Point2<Real> {
    Point2::new(v.x, v.y)
}

pub fn from_rapier_vec(v: &Vector2<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub fn to_rapier_body_type(body_type: BodyType) -> RigidBodyType {
    match body_type {
        BodyType::Dynamic => RigidBodyType::Dynamic,
        BodyType::Static => RigidBodyType::Fixed,
        BodyType::Kinematic => RigidBodyType::KinematicVelocityBased,
    }
}

// Handles pack the arena index in the low half and the generation in the
// high half so stale handles never alias a reused slot.

fn pack(index: u32, generation: u32) -> u64 {
    index as u64 | (generation as u64) << 32
}

fn unpack(raw: u64) -> (u32, u32) {
    (raw as u32, (raw >> 32) as u32)
}

pub fn from_rapier_body_handle(handle: rapier2d::dynamics::RigidBodyHandle) -> RigidBodyHandle {
    let (index, generation) = handle.into_raw_parts();
    RigidBodyHandle(pack(index, generation))
}

pub fn to_rapier_body_handle(handle: RigidBodyHandle) -> rapier2d::dynamics::RigidBodyHandle {
    let (index, generation) = unpack(handle.0);
    rapier2d::dynamics::RigidBodyHandle::from_raw_parts(index, generation)
}

pub fn from_rapier_collider_handle(handle: rapier2d::geometry::ColliderHandle) -> ColliderHandle {
    let (index, generation) = handle.into_raw_parts();
    ColliderHandle(pack(index, generation))
}
