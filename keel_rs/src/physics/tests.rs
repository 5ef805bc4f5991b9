#![cfg(test)]

use std::time::Duration;

use keel_ecs::{EcsConfig, Entity, World};
use ultraviolet::Vec3;

use super::*;

fn world() -> World {
    let mut world = World::new(EcsConfig::default().with_max_entities(8));
    world.register_component::<Transform>().unwrap();
    world.register_component::<RigidBody>().unwrap();
    world.register_component::<Gravity>().unwrap();
    world
}

fn spawn(world: &mut World, position: Vec3, body: RigidBody) -> Entity {
    let entity = world.create_entity().unwrap();
    let transform = Transform {
        position,
        rotation: Vec3::zero(),
        scale: Vec3::one(),
    };
    world.add_component(entity, transform).unwrap();
    world.add_component(entity, body).unwrap();
    world.add_component(entity, Gravity::earth()).unwrap();
    entity
}

#[test]
fn test_single_step() {
    let mut world = world();
    let system = world
        .register_system_for::<<PhysicsSystem as System>::Components>()
        .unwrap();
    let body = RigidBody {
        velocity: Vec3::new(1.0, 0.0, 0.0),
        acceleration: Vec3::new(0.0, 0.0, 2.0),
    };
    let entity = spawn(&mut world, Vec3::zero(), body);

    world
        .run_system(system, &mut PhysicsSystem, Duration::from_millis(500))
        .unwrap();

    let body = world.get_component::<RigidBody>(entity).unwrap();
    assert_eq!(body.velocity, Vec3::new(1.0, -4.9, 1.0));
    let transform = world.get_component::<Transform>(entity).unwrap();
    assert_eq!(transform.position, Vec3::new(0.5, -2.45, 0.5));
}

#[test]
fn test_skips_incomplete_entities() {
    let mut world = world();
    let system = world
        .register_system_for::<<PhysicsSystem as System>::Components>()
        .unwrap();
    let moving = spawn(&mut world, Vec3::zero(), RigidBody::default());
    let still = spawn(&mut world, Vec3::zero(), RigidBody::default());
    world.remove_component::<Gravity>(still).unwrap();

    world
        .run_system(system, &mut PhysicsSystem, Duration::from_secs(1))
        .unwrap();

    let position = world.get_component::<Transform>(moving).unwrap().position;
    assert!(position.y < 0.0);
    let position = world.get_component::<Transform>(still).unwrap().position;
    assert_eq!(position, Vec3::zero());
}

#[test]
fn test_zero_delta_time() {
    let mut world = world();
    let system = world
        .register_system_for::<<PhysicsSystem as System>::Components>()
        .unwrap();
    let entity = spawn(&mut world, Vec3::new(1.0, 2.0, 3.0), RigidBody::default());

    world
        .run_system(system, &mut PhysicsSystem, Duration::ZERO)
        .unwrap();

    let transform = world.get_component::<Transform>(entity).unwrap();
    assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
}
