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

//! The public-facing SDK: physics-driven sprites and the loop that runs them.
//!
//! Build an [`AppConfig`] (or load one from RON) and hand it to
//! [`Engine::run`] for a window, or [`Engine::run_headless`] for a fixed
//! number of frames without one.

mod entity;
mod game_world;

pub use entity::{SpawnError, SyncError, SyncedEntity};
pub use game_world::GameWorld;

pub mod prelude {
    //! Types most applications need.
    pub use tandem_core::config::{AppConfig, EntityConfig, NamedEntity};
    pub use tandem_core::math::{LinearRgba, Transform2D, Vec2};
    pub use tandem_core::physics::{BodyType, StepSettings, BODY_SCALE};

    pub use crate::{Engine, GameWorld, SyncedEntity};
}

use anyhow::{Context, Result};
use tandem_core::config::AppConfig;
use tandem_core::renderer::{FrameStats, SceneRenderer};
use tandem_infra::platform::{WinitWindow, WinitWindowBuilder};
use tandem_infra::HeadlessRenderer;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::WindowId;

/// Steps the world once and renders the result.
fn run_frame(world: &mut GameWorld, renderer: &mut dyn SceneRenderer) -> Result<FrameStats> {
    world.update().context("Failed to sync entities")?;
    let stats = renderer
        .render(world.scene(), world.textures())
        .context("Failed to render frame")?;
    Ok(stats)
}

/// The internal state of the running engine, managed by the winit event loop.
struct EngineState {
    config: AppConfig,
    world: Option<GameWorld>,
    window: Option<WinitWindow>,
    renderer: Option<Box<dyn SceneRenderer>>,
    /// First fatal error, returned from [`Engine::run`] once the loop exits.
    error: Option<anyhow::Error>,
}

impl EngineState {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            world: None,
            window: None,
            renderer: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = WinitWindowBuilder::from_config(&self.config.window)
            .build(event_loop)
            .context("Failed to create window")?;
        let world = GameWorld::from_config(&self.config)?;

        let (width, height) = window.inner_size();
        let renderer: Box<dyn SceneRenderer> = Box::new(HeadlessRenderer::new(width, height));

        self.window = Some(window);
        self.world = Some(world);
        self.renderer = Some(renderer);
        Ok(())
    }
}

impl Drop for EngineState {
    fn drop(&mut self) {
        log::info!("EngineState is being dropped. Performing controlled shutdown...");

        if let Some(mut renderer) = self.renderer.take() {
            renderer.shutdown();
        }

        log::info!("Engine systems shutdown complete.");
    }
}

impl ApplicationHandler for EngineState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Avoid re-initializing if the app is resumed multiple times.
        }

        log::info!("Application resumed. Initializing window and engine systems...");
        if let Err(e) = self.initialize(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(WinitWindow::id) != Some(id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Shutdown requested, exiting event loop...");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    log::info!("Window resized to: {}x{}", size.width, size.height);
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let result = match (self.world.as_mut(), self.renderer.as_mut()) {
                    (Some(world), Some(renderer)) => run_frame(world, renderer.as_mut()),
                    _ => return,
                };
                match result {
                    Ok(stats) => log::trace!(
                        "Frame {} rendered ({} draw calls).",
                        stats.frame_number,
                        stats.draw_calls
                    ),
                    Err(e) => self.fail(event_loop, e),
                }
            }
            _ => {}
        }
    }

    /// Requests a redraw each time the loop goes idle, so frames run continuously.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// The public entry point.
pub struct Engine;

impl Engine {
    /// Opens a window and runs the world described by `config` until the
    /// window is closed.
    ///
    /// Blocks the current thread. Each redraw runs one physics step, syncs
    /// every entity and renders the scene.
    pub fn run(config: AppConfig) -> Result<()> {
        log::info!("Tandem SDK: Starting...");
        let event_loop = EventLoop::new()?;

        // The initial state is empty; it will be populated in the `resumed` event.
        let mut state = EngineState::new(config);
        event_loop.run_app(&mut state)?;

        match state.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Runs `frames` frames of the world described by `config` without a
    /// window, and returns the world in its final state.
    pub fn run_headless(config: AppConfig, frames: u64) -> Result<GameWorld> {
        log::info!("Tandem SDK: Starting headless for {} frames...", frames);
        let mut world = GameWorld::from_config(&config)?;
        let mut renderer = HeadlessRenderer::new(config.window.width, config.window.height);

        for _ in 0..frames {
            let stats = run_frame(&mut world, &mut renderer)?;
            log::trace!(
                "Frame {} rendered ({} draw calls).",
                stats.frame_number,
                stats.draw_calls
            );
        }

        for (name, entity) in world.entities() {
            let t = entity.transform();
            log::info!(
                "'{}' at ({:.1}, {:.1}), {:.1}°",
                name,
                t.position.x,
                t.position.y,
                t.rotation
            );
        }
        renderer.shutdown();
        Ok(world)
    }
}
