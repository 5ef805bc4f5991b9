//! Utilities for demo application error handling.

use keel_ecs::Entity;
use thiserror::Error;

use crate::logger::LoggerError;
use crate::module::ModuleError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("ECS error: {0}")]
    Ecs(#[from] keel_ecs::Error),

    #[error("logger initialization error: {0}")]
    Logger(#[from] LoggerError),

    #[error("module error: {0}")]
    Module(#[from] ModuleError),

    #[error("validation error: physics membership of entity {0} does not match its signature")]
    Validation(Entity),
}
