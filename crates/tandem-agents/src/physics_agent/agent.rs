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

//! Defines the PhysicsAgent, the fixed-step driver of the physics world.

use std::time::{Duration, Instant};

use tandem_core::math::Vec2;
use tandem_core::physics::{PhysicsProvider, StepSettings};

/// The agent responsible for advancing the physics simulation.
pub struct PhysicsAgent {
    /// The concrete physics solver provider.
    provider: Box<dyn PhysicsProvider>,
    /// Fixed step parameters, identical for every step.
    settings: StepSettings,
    step_count: u64,
    last_step_duration: Duration,
}

impl PhysicsAgent {
    /// Creates a new `PhysicsAgent` driving `provider` with `settings`.
    pub fn new(provider: Box<dyn PhysicsProvider>, settings: StepSettings) -> Self {
        log::info!(
            "PhysicsAgent created: dt = {:.4}s, {} velocity / {} position iterations",
            settings.timestep,
            settings.velocity_iterations,
            settings.position_iterations
        );
        Self {
            provider,
            settings,
            step_count: 0,
            last_step_duration: Duration::ZERO,
        }
    }

    /// Creates an agent with the default step settings.
    pub fn with_default_settings(provider: Box<dyn PhysicsProvider>) -> Self {
        Self::new(provider, StepSettings::default())
    }

    /// Advances the simulation by exactly one fixed step.
    ///
    /// Forces and torques are cleared first: a force applied before this call
    /// is dropped, not integrated.
    pub fn step(&mut self) {
        let start = Instant::now();

        self.provider.clear_forces();
        self.provider.step(&self.settings);

        self.step_count += 1;
        self.last_step_duration = start.elapsed();
        log::trace!(
            "Physics step {} took {:.3}ms ({} bodies)",
            self.step_count,
            self.last_step_duration.as_secs_f64() * 1000.0,
            self.provider.body_count()
        );
    }

    /// The step parameters.
    pub fn settings(&self) -> &StepSettings {
        &self.settings
    }

    /// Number of steps taken so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated time elapsed, in seconds.
    pub fn elapsed_time(&self) -> f32 {
        self.step_count as f32 * self.settings.timestep
    }

    /// Wall-clock duration of the last step.
    pub fn last_step_duration(&self) -> Duration {
        self.last_step_duration
    }

    /// Sets the world gravity, in physics units per second squared.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        log::debug!("Gravity set to ({}, {})", gravity.x, gravity.y);
        self.provider.set_gravity(gravity);
    }

    /// Read access to the backend.
    pub fn provider(&self) -> &dyn PhysicsProvider {
        self.provider.as_ref()
    }

    /// Write access to the backend, for creating bodies and applying forces.
    pub fn provider_mut(&mut self) -> &mut dyn PhysicsProvider {
        self.provider.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tandem_core::physics::{
        BodyPose, ColliderDesc, ColliderHandle, PhysicsError, RigidBodyDesc, RigidBodyHandle,
    };

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ClearForces,
        Step(StepSettings),
    }

    /// Records the order in which the agent calls into the backend.
    #[derive(Default)]
    struct RecordingProvider {
        calls: Arc<Mutex<Vec<Call>>>,
        gravity: Vec2,
    }

    impl PhysicsProvider for RecordingProvider {
        fn step(&mut self, settings: &StepSettings) {
            self.calls.lock().unwrap().push(Call::Step(*settings));
        }
        fn clear_forces(&mut self) {
            self.calls.lock().unwrap().push(Call::ClearForces);
        }
        fn set_gravity(&mut self, gravity: Vec2) {
            self.gravity = gravity;
        }
        fn gravity(&self) -> Vec2 {
            self.gravity
        }
        fn add_body(&mut self, _desc: RigidBodyDesc) -> RigidBodyHandle {
            RigidBodyHandle(0)
        }
        fn add_collider(&mut self, _desc: ColliderDesc) -> Result<ColliderHandle, PhysicsError> {
            Ok(ColliderHandle(0))
        }
        fn body_pose(&self, handle: RigidBodyHandle) -> Result<BodyPose, PhysicsError> {
            Err(PhysicsError::UnknownBody(handle))
        }
        fn body_mass(&self, handle: RigidBodyHandle) -> Result<f32, PhysicsError> {
            Err(PhysicsError::UnknownBody(handle))
        }
        fn apply_force(
            &mut self,
            _handle: RigidBodyHandle,
            _force: Vec2,
        ) -> Result<(), PhysicsError> {
            Ok(())
        }
        fn body_count(&self) -> usize {
            0
        }
        fn collider_count(&self) -> usize {
            0
        }
    }

    #[test]
    fn test_forces_are_cleared_before_each_step() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let provider = RecordingProvider {
            calls: Arc::clone(&calls),
            ..Default::default()
        };
        let settings = StepSettings {
            timestep: 0.5,
            velocity_iterations: 3,
            position_iterations: 4,
        };

        let mut agent = PhysicsAgent::new(Box::new(provider), settings);
        agent.step();
        agent.step();

        assert_eq!(
            *calls.lock().unwrap(),
            [
                Call::ClearForces,
                Call::Step(settings),
                Call::ClearForces,
                Call::Step(settings),
            ]
        );
        assert_eq!(agent.step_count(), 2);
        assert_eq!(agent.elapsed_time(), 1.0);
    }

    #[test]
    fn test_gravity_is_forwarded() {
        let mut agent =
            PhysicsAgent::with_default_settings(Box::new(RecordingProvider::default()));
        agent.set_gravity(Vec2::new(0.0, -3.0));
        assert_eq!(agent.provider().gravity(), Vec2::new(0.0, -3.0));
        assert_eq!(agent.settings(), &StepSettings::default());
        assert_eq!(agent.step_count(), 0);
    }
}
