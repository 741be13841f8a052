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

// Runs the falling-box demo, or any scene described by a RON config.
// Run with: cargo run -- [--config scene.ron] [--headless --frames 600]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tandem_core::config::AppConfig;
use tandem_sdk::Engine;

#[derive(Debug, Parser)]
#[command(version, about = "Physics-driven sprites sandbox")]
struct Args {
    /// RON scene file; the built-in demo is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Number of frames to simulate in headless mode.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Directory texture paths are resolved against.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the effective config as RON and exit.
    #[arg(long)]
    dump_config: bool,
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => {
            log::info!("No config given, running the built-in demo scene");
            AppConfig::default()
        }
    };
    if let Some(assets) = &args.assets {
        config.asset_root = assets.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;

    if args.dump_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    if args.headless {
        let world = Engine::run_headless(config, args.frames)?;
        log::info!(
            "Simulated {} steps ({:.2}s)",
            world.physics().step_count(),
            world.physics().elapsed_time()
        );
    } else {
        Engine::run(config)?;
    }
    Ok(())
}
