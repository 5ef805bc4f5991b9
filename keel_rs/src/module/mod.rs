//! Extension modules which could be plugged into the application.

use keel_ecs::{DeltaTime, World};
use thiserror::Error;

pub use debug::DebugModule;

mod debug;
mod tests;

/// Maximum count of modules which could be registered.
pub const MAX_MODULES: usize = 32;

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("cannot register module `{name}`: too many modules (capacity {capacity})")]
    ModuleCapacity { name: String, capacity: usize },

    #[error("module `{name}` failed to register: {source}")]
    Registration {
        name: String,
        source: keel_ecs::Error,
    },
}

/// Extension of the application which is updated once per tick.
pub trait Module {
    fn name(&self) -> &str;

    /// Called once when the module is registered.
    fn register(&mut self, world: &mut World) -> keel_ecs::Result<()>;

    fn update(&mut self, world: &World, delta_time: DeltaTime);
}

/// Ordered collection of registered modules.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Box<dyn Module>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            modules: Vec::with_capacity(MAX_MODULES),
        }
    }

    /// Registers the module and lets it register its own parts in the world.
    ///
    /// # Errors
    ///
    /// An error is returned if there are too many modules already
    /// or if the module itself fails to register.
    ///
    pub fn register<M>(&mut self, mut module: M, world: &mut World) -> Result<(), ModuleError>
    where
        M: Module + 'static,
    {
        let name = module.name().to_string();
        if self.modules.len() >= MAX_MODULES {
            return Err(ModuleError::ModuleCapacity {
                name,
                capacity: MAX_MODULES,
            });
        }
        module
            .register(world)
            .map_err(|source| ModuleError::Registration {
                name: name.clone(),
                source,
            })?;
        self.modules.push(Box::new(module));
        log::info!("registered module `{}`", name);
        Ok(())
    }

    /// Updates all modules in order of their registration.
    pub fn update(&mut self, world: &World, delta_time: DeltaTime) {
        for module in self.modules.iter_mut() {
            module.update(world, delta_time);
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Names of all modules in order of their registration.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|module| module.name())
    }
}
