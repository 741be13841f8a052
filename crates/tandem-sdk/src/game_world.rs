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

//! The `GameWorld` facade: the physics driver, the scene graph and the
//! named entities tying them together.

use anyhow::{Context, Result};
use tandem_agents::physics_agent::PhysicsAgent;
use tandem_core::asset::{TextureLoader, TextureRegistry};
use tandem_core::config::{AppConfig, EntityConfig};
use tandem_core::physics::PhysicsProvider;
use tandem_core::scene::SceneGraph;
use tandem_infra::{ImageTextureLoader, RapierPhysicsWorld};

use crate::entity::{SyncError, SyncedEntity};

/// Owns everything a frame touches.
///
/// Entities are kept in creation order and updated in that order. They live
/// as long as the world does.
pub struct GameWorld {
    physics: PhysicsAgent,
    scene: SceneGraph,
    textures: TextureRegistry,
    loader: Box<dyn TextureLoader>,
    entities: Vec<(String, SyncedEntity)>,
}

impl GameWorld {
    /// Creates an empty world over `physics`, loading textures from `textures`.
    pub fn new(physics: PhysicsAgent, textures: TextureRegistry) -> Self {
        Self {
            physics,
            scene: SceneGraph::new(),
            textures,
            loader: Box::new(ImageTextureLoader),
            entities: Vec::new(),
        }
    }

    /// Builds the world described by `config`: a Rapier world with the
    /// configured gravity and step settings, plus every configured object.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut physics = PhysicsAgent::new(
            Box::new(RapierPhysicsWorld::default()),
            config.simulation,
        );
        physics.set_gravity(config.gravity);

        let mut world = Self::new(physics, TextureRegistry::new(&config.asset_root));
        for object in &config.objects {
            world
                .spawn(&object.name, &object.entity)
                .with_context(|| format!("Failed to create object '{}'", object.name))?;
        }

        log::info!("GameWorld ready with {} entities", world.entities.len());
        Ok(world)
    }

    /// Creates an entity and registers it under `name`.
    ///
    /// Names are unique: spawning under a taken name fails without creating
    /// anything.
    pub fn spawn(&mut self, name: &str, config: &EntityConfig) -> Result<&SyncedEntity> {
        if self.entity(name).is_some() {
            anyhow::bail!("An entity named '{}' already exists", name);
        }

        let root = self.scene.root();
        let entity = SyncedEntity::spawn(
            config,
            self.physics.provider_mut(),
            &mut self.scene,
            root,
            &mut self.textures,
            self.loader.as_ref(),
        )?;
        log::debug!(
            "Spawned '{}' ({:?}) at {:?}",
            name,
            entity.body_type(),
            config.transform.position
        );

        self.entities.push((name.to_string(), entity));
        let (_, entity) = &self.entities[self.entities.len() - 1];
        Ok(entity)
    }

    /// Runs one frame: one physics step, then every entity is synced.
    pub fn update(&mut self) -> Result<(), SyncError> {
        self.physics.step();
        let provider = self.physics.provider();
        for (_, entity) in &mut self.entities {
            entity.sync(provider, &mut self.scene)?;
        }
        Ok(())
    }

    /// Looks up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&SyncedEntity> {
        self.entities
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entity)| entity)
    }

    /// Iterates over the entities in creation order.
    pub fn entities(&self) -> impl Iterator<Item = (&str, &SyncedEntity)> {
        self.entities
            .iter()
            .map(|(name, entity)| (name.as_str(), entity))
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The physics driver.
    pub fn physics(&self) -> &PhysicsAgent {
        &self.physics
    }

    /// Mutable access to the physics driver, for applying forces.
    pub fn physics_mut(&mut self) -> &mut PhysicsAgent {
        &mut self.physics
    }

    /// Read access to the physics backend.
    pub fn provider(&self) -> &dyn PhysicsProvider {
        self.physics.provider()
    }

    /// The scene graph.
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// The loaded textures.
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }
}
