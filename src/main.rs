use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use stress_scene::app::App;
use stress_scene::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    log::info!(
        "Starting with {} objects, {} lights, complexity {}",
        config.objects,
        config.lights,
        config.complexity
    );

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config);

    event_loop
        .run_app(&mut app)
        .context("Event loop terminated with an error")?;

    Ok(())
}
