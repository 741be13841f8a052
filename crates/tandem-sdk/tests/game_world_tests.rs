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
use tandem_core::config::{AppConfig, BodyConfig, BoxConfig, EntityConfig, NamedEntity};
use tandem_core::math::{Transform2D, Vec2};
use tandem_core::physics::{BodyType, PhysicsProvider, StepSettings, BODY_SCALE};
use tandem_sdk::{Engine, GameWorld};

fn entity(body_type: BodyType, position: Vec2, width: f32, height: f32) -> EntityConfig {
    EntityConfig {
        transform: Transform2D::from_position(position),
        collider: BoxConfig {
            width,
            height,
            ..BoxConfig::default()
        },
        body: BodyConfig {
            body_type,
            density: 1.0,
        },
        ..EntityConfig::default()
    }
}

fn config_with(objects: Vec<(&str, EntityConfig)>) -> AppConfig {
    AppConfig {
        objects: objects
            .into_iter()
            .map(|(name, entity)| NamedEntity {
                name: name.to_string(),
                entity,
            })
            .collect(),
        ..AppConfig::default()
    }
}

#[test]
fn test_default_config_builds_demo_scene() {
    let world = GameWorld::from_config(&AppConfig::default()).unwrap();

    let names: Vec<_> = world.entities().map(|(name, _)| name).collect();
    assert_eq!(names, ["DynamicObject", "Platform"]);
    assert_eq!(world.provider().body_count(), 2);
    assert_eq!(world.provider().gravity(), AppConfig::DEFAULT_GRAVITY);
    // Root plus a sprite and an outline per entity.
    assert_eq!(world.scene().len(), 5);
}

#[test]
fn test_static_entity_keeps_its_position() {
    let config = config_with(vec![(
        "Wall",
        entity(BodyType::Static, Vec2::new(400.0, 300.0), 50.0, 50.0),
    )]);
    let mut world = GameWorld::from_config(&config).unwrap();

    for _ in 0..120 {
        world.update().unwrap();
    }

    let wall = world.entity("Wall").unwrap();
    assert_abs_diff_eq!(wall.transform().position.x, 400.0, epsilon = 1e-3);
    assert_abs_diff_eq!(wall.transform().position.y, 300.0, epsilon = 1e-3);
    assert_eq!(wall.transform().rotation, 0.0);
}

#[test]
fn test_dynamic_entity_falls_like_free_fall() {
    let config = config_with(vec![(
        "Ball",
        entity(BodyType::Dynamic, Vec2::ZERO, 21.0, 21.0),
    )]);
    let mut world = GameWorld::from_config(&config).unwrap();

    let frames = 30;
    for _ in 0..frames {
        world.update().unwrap();
    }

    let g = AppConfig::DEFAULT_GRAVITY.y;
    let dt = StepSettings::DEFAULT_TIMESTEP;
    let t = dt * frames as f32;
    let expected_px = 0.5 * g * t * t * BODY_SCALE;
    let tolerance_px = g * dt * dt * frames as f32 * BODY_SCALE;

    let ball = world.entity("Ball").unwrap();
    assert_abs_diff_eq!(ball.transform().position.y, expected_px, epsilon = tolerance_px);
    assert_eq!(world.physics().step_count(), frames);
}

#[test]
fn test_sprite_and_outline_share_transform_after_update() {
    let mut world = GameWorld::from_config(&AppConfig::default()).unwrap();
    for _ in 0..10 {
        world.update().unwrap();
        for (_, entity) in world.entities() {
            let sprite = world.scene().transform(entity.sprite_node()).unwrap();
            let outline = world.scene().transform(entity.outline_node()).unwrap();
            assert_eq!(sprite, outline);
            assert_eq!(sprite, entity.transform());
        }
    }
}

#[test]
fn test_zero_sized_entity_is_accepted() {
    let config = config_with(vec![("Dot", entity(BodyType::Dynamic, Vec2::ZERO, 0.0, 0.0))]);
    let mut world = GameWorld::from_config(&config).unwrap();
    world.update().unwrap();

    let dot = world.entity("Dot").unwrap();
    assert_eq!(dot.footprint().area(), 0.0);
    assert!(dot.transform().position.y > 0.0);
}

#[test]
fn test_duplicate_names_are_rejected() {
    let config = config_with(vec![
        ("Twin", EntityConfig::default()),
        ("Twin", EntityConfig::default()),
    ]);
    let err = GameWorld::from_config(&config).err().unwrap();
    assert!(format!("{err:#}").contains("Twin"));
}

#[test]
fn test_unknown_name_lookup() {
    let world = GameWorld::from_config(&config_with(Vec::new())).unwrap();
    assert!(world.is_empty());
    assert!(world.entity("Nobody").is_none());
}

#[test]
fn test_config_file_drives_headless_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.ron");
    std::fs::write(
        &path,
        r#"(
            gravity: (x: 0.0, y: 20.0),
            objects: [
                (
                    name: "Crate",
                    entity: (
                        transform: (position: (x: 100.0, y: 0.0)),
                        collider: (width: 32.0, height: 32.0),
                        body: (body_type: Dynamic, density: 1.0),
                    ),
                ),
            ],
        )"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    let world = Engine::run_headless(config, 60).unwrap();

    let crate_entity = world.entity("Crate").unwrap();
    assert_abs_diff_eq!(crate_entity.transform().position.x, 100.0, epsilon = 1e-2);
    assert!(crate_entity.transform().position.y > 50.0);
    assert_eq!(world.physics().step_count(), 60);
}

#[test]
fn test_demo_box_lands_on_platform() {
    let world = Engine::run_headless(AppConfig::default(), 600).unwrap();

    let platform = world.entity("Platform").unwrap().transform();
    let dynamic = world.entity("DynamicObject").unwrap().transform();
    assert_abs_diff_eq!(platform.position.x, 512.0, epsilon = 1e-3);
    assert_abs_diff_eq!(platform.position.y, 600.0, epsilon = 1e-3);
    assert!(dynamic.position.y < platform.position.y);
    assert!(dynamic.position.y > 500.0);
}
