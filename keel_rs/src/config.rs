//! Configuration of the demo application.

use std::time::Duration;

use keel_ecs::{DeltaTime, EcsConfig};
use log::LevelFilter;
use semver::Version;

/// Configuration of the demo application.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    enable_validation: bool,
    log_level: LevelFilter,
    entity_count: usize,
    ticks: u64,
    delta_time: DeltaTime,
    seed: u64,
    ecs: EcsConfig,
}

impl Config {
    pub fn new(name: String, version: Version, enable_validation: bool) -> Self {
        Self {
            name,
            version,
            enable_validation,
            log_level: LevelFilter::Debug,
            entity_count: 200,
            ticks: 1000,
            delta_time: Duration::from_secs(1) / 60,
            seed: 0,
            ecs: EcsConfig::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// If enabled, ECS state is checked for consistency after the run.
    pub fn enable_validation(&self) -> bool {
        self.enable_validation
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Count of entities spawned on startup.
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    /// Count of fixed steps to run.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Duration of one fixed step.
    pub fn delta_time(&self) -> DeltaTime {
        self.delta_time
    }

    /// Seed of random generator used to spawn entities.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ecs(&self) -> &EcsConfig {
        &self.ecs
    }

    pub fn with_log_level(mut self, log_level: LevelFilter) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_entity_count(mut self, entity_count: usize) -> Self {
        self.entity_count = entity_count;
        self
    }

    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_delta_time(mut self, delta_time: DeltaTime) -> Self {
        self.delta_time = delta_time;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_ecs(mut self, ecs: EcsConfig) -> Self {
        self.ecs = ecs;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("Hello World".to_string(), Version::new(0, 0, 0), false)
    }
}
