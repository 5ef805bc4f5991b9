#![cfg(test)]

use std::time::Duration;

use keel_ecs::{EcsConfig, World};

use super::*;

#[derive(Default)]
struct Counter {
    updates: usize,
}

impl Module for Counter {
    fn name(&self) -> &str {
        "counter"
    }

    fn register(&mut self, _world: &mut World) -> keel_ecs::Result<()> {
        Ok(())
    }

    fn update(&mut self, _world: &World, _delta_time: DeltaTime) {
        self.updates += 1;
    }
}

#[test]
fn test_registry_capacity() {
    let mut world = World::default();
    let mut registry = ModuleRegistry::new();
    for _ in 0..MAX_MODULES {
        registry.register(Counter::default(), &mut world).unwrap();
    }

    let result = registry.register(Counter::default(), &mut world);
    assert!(matches!(
        result,
        Err(ModuleError::ModuleCapacity {
            capacity: MAX_MODULES,
            ..
        })
    ));
    assert_eq!(registry.len(), MAX_MODULES);
}

#[test]
fn test_registration_failure() {
    let mut world = World::new(EcsConfig::default().with_max_systems(0));
    let mut registry = ModuleRegistry::new();

    let result = registry.register(DebugModule::new(), &mut world);
    assert!(matches!(
        result,
        Err(ModuleError::Registration {
            source: keel_ecs::Error::SystemCapacity { capacity: 0 },
            ..
        })
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_registration_order() {
    let mut world = World::default();
    let mut registry = ModuleRegistry::new();
    registry.register(DebugModule::new(), &mut world).unwrap();
    registry.register(Counter::default(), &mut world).unwrap();

    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, ["debug", "counter"]);
}

#[test]
fn test_debug_module_counts_entities() {
    let mut world = World::new(EcsConfig::default().with_max_entities(4));
    let first = world.create_entity().unwrap();
    world.create_entity().unwrap();

    let mut module = DebugModule::new();
    module.register(&mut world).unwrap();
    module.update(&world, Duration::ZERO);
    assert_eq!(module.last_count(), 2);

    world.create_entity().unwrap();
    world.destroy_entity(first).unwrap();
    world.create_entity().unwrap();
    module.update(&world, Duration::ZERO);
    assert_eq!(module.last_count(), 3);
}
