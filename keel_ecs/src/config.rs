//! Configuration of ECS limits and identity of the engine.

use semver::Version;

/// Name of this engine.
pub const ENGINE_NAME: &str = env!("CARGO_PKG_NAME", "library must be compiled by Cargo");

const ENGINE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    /// Version of this engine.
    pub static ref ENGINE_VERSION: Version = ENGINE_VERSION_STR
        .parse()
        .expect("package version is always valid semver");
}

/// Default maximum count of entities which can be alive at the same time.
pub const DEFAULT_MAX_ENTITIES: usize = 5000;

/// Default maximum count of systems which can be registered.
pub const DEFAULT_MAX_SYSTEMS: usize = 32;

/// Limits of the [`World`](crate::World).
///
/// All storages are allocated once using these values,
/// so nothing grows beyond them at runtime.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EcsConfig {
    max_entities: usize,
    max_systems: usize,
}

impl EcsConfig {
    /// Creates new configuration with given limits.
    pub const fn new(max_entities: usize, max_systems: usize) -> Self {
        Self {
            max_entities,
            max_systems,
        }
    }

    /// Maximum count of entities alive at the same time.
    pub fn max_entities(&self) -> usize {
        self.max_entities
    }

    /// Maximum count of registered systems.
    pub fn max_systems(&self) -> usize {
        self.max_systems
    }

    pub fn with_max_entities(mut self, max_entities: usize) -> Self {
        self.max_entities = max_entities;
        self
    }

    pub fn with_max_systems(mut self, max_systems: usize) -> Self {
        self.max_systems = max_systems;
        self
    }
}

impl Default for EcsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTITIES, DEFAULT_MAX_SYSTEMS)
    }
}
