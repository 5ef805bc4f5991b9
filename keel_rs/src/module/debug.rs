use keel_ecs::{DeltaTime, Signature, SystemId, World};

use super::Module;

/// Module which tracks every entity and reports their count on each tick.
#[derive(Debug, Default)]
pub struct DebugModule {
    system: Option<SystemId>,
    last_count: usize,
}

impl DebugModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of entities seen on the last update.
    pub fn last_count(&self) -> usize {
        self.last_count
    }
}

impl Module for DebugModule {
    fn name(&self) -> &str {
        "debug"
    }

    fn register(&mut self, world: &mut World) -> keel_ecs::Result<()> {
        let system = world.register_system(Signature::EMPTY)?;
        self.system = Some(system);
        Ok(())
    }

    fn update(&mut self, world: &World, delta_time: DeltaTime) {
        let entities = match self.system.map(|system| world.system_entities(system)) {
            Some(Ok(entities)) => entities,
            _ => return,
        };
        self.last_count = entities.len();
        log::debug!(
            "tracking {} entities, delta time {:?}",
            self.last_count,
            delta_time,
        );
    }
}
