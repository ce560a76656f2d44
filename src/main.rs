pub mod app;
pub mod error;
pub mod gameplay;
pub mod geom;
pub mod heightfield;
pub mod renderer;
pub mod scene;
pub mod util;
pub mod window;

use anyhow::Context;
use app::{App, AppDesc};
use winit::event_loop::EventLoop;

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let desc = AppDesc::from_env()?;
    log::info!("Starting lab {}", desc.lab);

    let mut app = App::new(desc);
    let event_loop = EventLoop::builder()
        .build()
        .context("failed to create event loop")?;
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")?;

    app.into_result()?;
    log::info!("Application exited successfully");
    Ok(())
}
