#![cfg(test)]

use crate::{ComponentKind, ComponentView, DeltaTime};

use super::*;

#[derive(Debug, Copy, Clone, PartialEq)]
struct Transform(i32, i32, i32);

impl Component for Transform {
    const KIND: ComponentKind = 0;
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Physics(i32);

impl Component for Physics {
    const KIND: ComponentKind = 1;
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Gravity(i32);

impl Component for Gravity {
    const KIND: ComponentKind = 2;
}

#[derive(Debug)]
struct Impostor;

impl Component for Impostor {
    const KIND: ComponentKind = 1;
}

/// Moves transform by physics value each update.
#[derive(Default)]
struct Movement {
    updates: usize,
}

impl System for Movement {
    type Components = (Transform, Physics);

    fn update(
        &mut self,
        entities: &[Entity],
        components: &mut ComponentView,
        _delta_time: DeltaTime,
    ) -> Result<()> {
        for &entity in entities {
            let physics = *components.get::<Physics>(entity)?;
            components.get_mut::<Transform>(entity)?.0 += physics.0;
        }
        self.updates += 1;
        Ok(())
    }
}

type MovementComponents = <Movement as System>::Components;

/// Increases every physics value each update.
struct Accelerate;

impl System for Accelerate {
    type Components = (Physics,);

    fn update(
        &mut self,
        _entities: &[Entity],
        components: &mut ComponentView,
        _delta_time: DeltaTime,
    ) -> Result<()> {
        for physics in components.components_mut::<Physics>()? {
            physics.0 += 1;
        }
        Ok(())
    }
}

fn world() -> World {
    let mut world = World::new(EcsConfig::default().with_max_entities(16));
    world.register_component::<Transform>().unwrap();
    world.register_component::<Physics>().unwrap();
    world.register_component::<Gravity>().unwrap();
    world
}

/// Checks that every system holds exactly the alive entities satisfying its signature.
fn assert_membership(world: &World, systems: &[SystemId]) {
    for &id in systems {
        let system = world.system(id).unwrap();
        for (entity, signature) in world.entities.iter() {
            assert_eq!(system.contains(entity), system.matches(signature));
        }
        for &entity in system.entities() {
            assert!(world.is_alive(entity));
        }
    }
}

#[test]
fn test_scenario() {
    let mut world = world();
    let transform_physics = world
        .register_system_for::<(Transform, Physics)>()
        .unwrap();
    let all = world
        .register_system_for::<(Transform, Physics, Gravity)>()
        .unwrap();

    let entity = world.create_entity().unwrap();
    world.add_component(entity, Transform(1, 2, 3)).unwrap();
    assert_eq!(world.get_component::<Transform>(entity), Ok(&Transform(1, 2, 3)));

    world.add_component(entity, Physics(1)).unwrap();
    assert_eq!(world.system_entities(transform_physics), Ok(&[entity][..]));
    assert_eq!(world.system_entities(all), Ok(&[][..]));

    world.destroy_entity(entity).unwrap();
    assert!(world.system_entities(transform_physics).unwrap().is_empty());
    assert!(world.system_entities(all).unwrap().is_empty());
    assert_eq!(
        world.get_component::<Transform>(entity),
        Err(Error::NotFound {
            entity,
            kind: Transform::KIND
        }),
    );
}

#[test]
fn test_membership_after_every_change() {
    let mut world = world();
    let systems = [
        world.register_system(Signature::EMPTY).unwrap(),
        world.register_system(Signature::from_bits(0b001)).unwrap(),
        world.register_system(Signature::from_bits(0b011)).unwrap(),
        world.register_system(Signature::from_bits(0b110)).unwrap(),
    ];
    let entities: Vec<_> = (0..8).map(|_| world.create_entity().unwrap()).collect();
    assert_membership(&world, &systems);

    for (index, &entity) in entities.iter().enumerate() {
        let value = index as i32;
        if index % 2 == 0 {
            world.add_component(entity, Transform(value, 0, 0)).unwrap();
            assert_membership(&world, &systems);
        }
        if index % 3 != 0 {
            world.add_component(entity, Physics(value)).unwrap();
            assert_membership(&world, &systems);
        }
        if index % 4 == 1 {
            world.add_component(entity, Gravity(value)).unwrap();
            assert_membership(&world, &systems);
        }
    }
    for &entity in entities.iter().step_by(3) {
        if world.has_component::<Transform>(entity) {
            world.remove_component::<Transform>(entity).unwrap();
            assert_membership(&world, &systems);
        }
    }
    for &entity in entities.iter().skip(1).step_by(2) {
        world.destroy_entity(entity).unwrap();
        assert_membership(&world, &systems);
    }
    let recycled = world.create_entity().unwrap();
    world.add_component(recycled, Physics(0)).unwrap();
    assert_membership(&world, &systems);
}

#[test]
fn test_destroy_fan_out() {
    let mut world = world();
    let transform = world.register_system_for::<(Transform,)>().unwrap();
    let physics = world.register_system_for::<(Physics,)>().unwrap();
    let both = world.register_system_for::<(Transform, Physics)>().unwrap();

    let entity = world.create_entity().unwrap();
    let other = world.create_entity().unwrap();
    for &target in &[entity, other] {
        world.add_component(target, Transform(0, 0, 0)).unwrap();
        world.add_component(target, Physics(0)).unwrap();
    }

    world.destroy_entity(entity).unwrap();

    assert_eq!(world.signature(entity), Ok(Signature::EMPTY));
    assert!(!world.is_alive(entity));
    assert!(world.get_component::<Transform>(entity).is_err());
    assert!(world.get_component::<Physics>(entity).is_err());
    assert_eq!(world.storage::<Transform>().unwrap().entities(), &[other]);
    assert_eq!(world.storage::<Physics>().unwrap().entities(), &[other]);
    for id in [transform, physics, both] {
        assert_eq!(world.system_entities(id), Ok(&[other][..]));
    }
}

#[test]
fn test_add_remove_component() {
    let mut world = world();
    let entity = world.create_entity().unwrap();

    world.add_component(entity, Physics(5)).unwrap();
    assert!(world.has_component::<Physics>(entity));
    assert_eq!(
        world.add_component(entity, Physics(6)),
        Err(Error::AlreadyExists {
            entity,
            kind: Physics::KIND
        }),
    );
    assert_eq!(world.get_component::<Physics>(entity), Ok(&Physics(5)));

    world.get_component_mut::<Physics>(entity).unwrap().0 = 7;
    assert_eq!(world.remove_component::<Physics>(entity), Ok(Physics(7)));
    assert!(!world.has_component::<Physics>(entity));
    assert_eq!(world.signature(entity), Ok(Signature::EMPTY));
    assert_eq!(
        world.remove_component::<Physics>(entity),
        Err(Error::NotFound {
            entity,
            kind: Physics::KIND
        }),
    );

    world.add_component(entity, Physics(8)).unwrap();
    assert_eq!(world.get_component::<Physics>(entity), Ok(&Physics(8)));
}

#[test]
fn test_failed_operations_change_nothing() {
    let mut world = World::new(EcsConfig::default().with_max_entities(2));
    world.register_component::<Transform>().unwrap();
    let system = world.register_system_for::<(Transform,)>().unwrap();
    let entity = world.create_entity().unwrap();

    assert_eq!(
        world.add_component(entity, Gravity(0)),
        Err(Error::NotRegistered(Gravity::KIND)),
    );
    assert_eq!(world.signature(entity), Ok(Signature::EMPTY));

    world.destroy_entity(entity).unwrap();
    assert_eq!(
        world.add_component(entity, Transform(0, 0, 0)),
        Err(Error::EntityNotAlive(entity)),
    );
    assert_eq!(world.destroy_entity(entity), Err(Error::EntityNotAlive(entity)));
    assert!(world.storage::<Transform>().unwrap().is_empty());
    assert!(world.system_entities(system).unwrap().is_empty());

    let stranger = Entity::from_raw(7);
    assert!(matches!(
        world.get_component::<Transform>(stranger),
        Err(Error::EntityOutOfRange { .. })
    ));
}

#[test]
fn test_entity_capacity() {
    let mut world = World::new(EcsConfig::default().with_max_entities(2));
    let first = world.create_entity().unwrap();
    world.create_entity().unwrap();

    assert_eq!(world.create_entity(), Err(Error::EntityCapacity { capacity: 2 }));
    world.destroy_entity(first).unwrap();
    assert_eq!(world.create_entity(), Ok(first));
    assert_eq!(world.entity_count(), 2);
}

#[test]
fn test_register_component() {
    let mut world = world();
    world.register_component::<Transform>().unwrap();
    assert_eq!(
        world.register_component::<Impostor>(),
        Err(Error::KindConflict(Impostor::KIND)),
    );
    assert!(world.is_registered(Physics::KIND));
    assert!(!world.is_registered(3));
    assert!(!world.is_registered(32));
}

#[test]
fn test_has_component_checks_type() {
    let mut world = world();
    let entity = world.create_entity().unwrap();
    world.add_component(entity, Physics(1)).unwrap();

    assert!(world.has_component::<Physics>(entity));
    assert!(!world.has_component::<Impostor>(entity));
    assert_eq!(
        world.get_component::<Impostor>(entity).err(),
        Some(Error::TypeMismatch(Impostor::KIND)),
    );
}

#[test]
fn test_late_system_registration() {
    let mut world = world();
    let entity = world.create_entity().unwrap();
    let empty = world.create_entity().unwrap();
    world.add_component(entity, Transform(0, 0, 0)).unwrap();
    world.add_component(entity, Physics(0)).unwrap();

    let system = world.register_system_for::<MovementComponents>().unwrap();
    let everything = world.register_system(Signature::EMPTY).unwrap();

    assert_eq!(world.system_entities(system), Ok(&[entity][..]));
    assert_eq!(world.system_entities(everything), Ok(&[entity, empty][..]));
}

#[test]
fn test_system_capacity() {
    let mut world = World::new(EcsConfig::default().with_max_systems(1));
    world.register_system(Signature::EMPTY).unwrap();
    assert_eq!(
        world.register_system(Signature::EMPTY),
        Err(Error::SystemCapacity { capacity: 1 }),
    );
}

#[test]
fn test_run_system() {
    let mut world = world();
    let id = world.register_system_for::<MovementComponents>().unwrap();
    let moving = world.create_entity().unwrap();
    let still = world.create_entity().unwrap();
    world.add_component(moving, Transform(0, 0, 0)).unwrap();
    world.add_component(moving, Physics(2)).unwrap();
    world.add_component(still, Transform(0, 0, 0)).unwrap();

    let mut movement = Movement::default();
    for _ in 0..3 {
        world
            .run_system(id, &mut movement, DeltaTime::from_millis(16))
            .unwrap();
    }

    assert_eq!(movement.updates, 3);
    assert_eq!(world.get_component::<Transform>(moving), Ok(&Transform(6, 0, 0)));
    assert_eq!(world.get_component::<Transform>(still), Ok(&Transform(0, 0, 0)));
}

#[test]
fn test_default_config() {
    let world = World::default();
    assert_eq!(world.config().max_entities(), crate::config::DEFAULT_MAX_ENTITIES);
    assert_eq!(world.config().max_systems(), crate::config::DEFAULT_MAX_SYSTEMS);
    assert_eq!(world.entity_count(), 0);
    assert_eq!(crate::ENGINE_NAME, "keel_ecs");
    assert!(crate::ENGINE_VERSION.pre.is_empty());
}

#[test]
fn test_systems_keep_membership() {
    let mut world = world();
    let movement_id = world.register_system_for::<MovementComponents>().unwrap();
    let accelerate_id = world
        .register_system_for::<<Accelerate as System>::Components>()
        .unwrap();
    let entity = world.create_entity().unwrap();
    world.add_component(entity, Transform(0, 0, 0)).unwrap();
    world.add_component(entity, Physics(1)).unwrap();

    let delta_time = DeltaTime::from_millis(16);
    world.run_system(accelerate_id, &mut Accelerate, delta_time).unwrap();
    assert_eq!(world.get_component::<Physics>(entity), Ok(&Physics(2)));

    let mut movement = Movement::default();
    world.run_system(movement_id, &mut movement, delta_time).unwrap();
    assert_eq!(world.get_component::<Transform>(entity), Ok(&Transform(2, 0, 0)));

    world.remove_component::<Physics>(entity).unwrap();
    assert_membership(&world, &[movement_id, accelerate_id]);
    assert!(world.system_entities(movement_id).unwrap().is_empty());
    assert!(!world.has_component::<Physics>(entity));

    world.run_system(movement_id, &mut movement, delta_time).unwrap();
    world.run_system(accelerate_id, &mut Accelerate, delta_time).unwrap();
    assert_eq!(world.get_component::<Transform>(entity), Ok(&Transform(2, 0, 0)));
    assert_eq!(movement.updates, 2);
}
