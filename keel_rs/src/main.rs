//! Headless demo of keel ECS: blocks falling under gravity

use std::error::Error;

use keel_ecs::{ENGINE_NAME, ENGINE_VERSION};

use crate::app::Application;
use crate::config::Config;
use crate::module::DebugModule;

mod app;
mod components;
mod config;
mod error;
mod logger;
mod module;
mod physics;

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "binary must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "binary must be compiled by Cargo");

/// Entry point of `keel_rs` demo
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let version = APP_VERSION_STR.parse()?;
    let enable_validation = cfg!(debug_assertions);
    let config = Config::new(APP_NAME.to_string(), version, enable_validation);

    let _handle = logger::init(config.log_level()).map_err(error::AppError::from)?;
    log::info!("logger initialized successfully");
    log::info!(
        "starting {} v{} on {} v{}",
        config.name(),
        config.version(),
        ENGINE_NAME,
        *ENGINE_VERSION,
    );

    let mut application = Application::new(config)?;
    application.register_module(DebugModule::new())?;
    application.spawn_entities()?;
    application.run()?;

    log::info!(
        "finished {} after {} ticks with {} entities",
        application.config().name(),
        application.tick(),
        application.world().entity_count(),
    );
    Ok(())
}
