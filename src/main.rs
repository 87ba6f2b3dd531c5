use anyhow::Result;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use fireworks_timer::physic_engine::{PhysicConfig, PhysicEngineFireworks};
use fireworks_timer::renderer_engine::{Renderer, RendererConfig};
use fireworks_timer::scheduler::{AlarmClock, AlarmEvent, AlarmSettings, SystemClock};
use fireworks_timer::utils::show_rust_core_dependencies;
use fireworks_timer::window_engine::{GlfwWindowEngine, WindowEngine};
use fireworks_timer::{Countdown, Simulator};

const DEFAULT_CONFIG_DIR: &str = "assets/config";
const SETUP_WINDOW_SIZE: (i32, i32) = (420, 220);

fn load_configs(config_dir: &Path) -> (PhysicConfig, RendererConfig) {
    let physic_config = PhysicConfig::from_file(&config_dir.join("physic.toml").to_string_lossy())
        .unwrap_or_default();
    info!("Physic config loaded:\n{:#?}", physic_config);

    let renderer_config =
        RendererConfig::from_file(&config_dir.join("renderer.toml").to_string_lossy())
            .unwrap_or_default();
    info!("Renderer config loaded:\n{:#?}", renderer_config);

    (physic_config, renderer_config)
}

fn wait_for_enter() -> Result<()> {
    print!("Press Enter to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

/// Main entry point for the Fireworks Timer application.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Fireworks Timer...");

    show_rust_core_dependencies();

    let config_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
    let (physic_config, renderer_config) = load_configs(&config_dir);

    // 1. Window & GL context, alarme en tâche de fond
    let mut window_engine = GlfwWindowEngine::init(
        SETUP_WINDOW_SIZE.0,
        SETUP_WINDOW_SIZE.1,
        "Fireworks Timer",
    )?;
    let settings = AlarmSettings::default();
    let alarm = AlarmClock::start(settings.clone(), SystemClock);

    // 2. Panneau de réglage jusqu'au déclenchement
    let fired = Countdown::new(&mut window_engine, &alarm, &settings).run();
    drop(alarm);

    if let Some(AlarmEvent::Fired { caption, .. }) = fired {
        // 3. Overlay plein écran + spectacle
        let (width, height) = window_engine.enter_overlay_mode(renderer_config.overlay_opacity);
        let renderer_engine = Renderer::new(width, height, &renderer_config)?;
        let physic_engine =
            PhysicEngineFireworks::from_config(&physic_config, width as f32, height as f32);

        let mut simulator = Simulator::new(
            renderer_engine,
            physic_engine,
            window_engine,
            caption,
            renderer_config,
        )
        .with_physic_config_path(config_dir.join("physic.toml"));

        simulator.run()?;
        simulator.close();
    }

    wait_for_enter()
}
