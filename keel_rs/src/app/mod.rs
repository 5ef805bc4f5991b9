//! Application which drives the world with a fixed tick.

use std::f32::consts::TAU;

use keel_ecs::{ComponentSet, Entity, System, SystemId, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ultraviolet::Vec3;

use crate::components::{Gravity, RigidBody, Transform};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::module::{Module, ModuleRegistry};
use crate::physics::PhysicsSystem;


type PhysicsComponents = <PhysicsSystem as System>::Components;

/// Context of the demo: the world, its systems and extension modules.
pub struct Application {
    config: Config,
    world: World,
    physics: PhysicsSystem,
    physics_id: SystemId,
    modules: ModuleRegistry,
    tick: u64,
}

impl Application {
    /// Creates the world and registers all components and systems in it.
    pub fn new(config: Config) -> Result<Self> {
        let mut world = World::new(*config.ecs());
        world.register_component::<Transform>()?;
        world.register_component::<RigidBody>()?;
        world.register_component::<Gravity>()?;
        let physics_id = world.register_system_for::<PhysicsComponents>()?;

        Ok(Self {
            config,
            world,
            physics: PhysicsSystem,
            physics_id,
            modules: ModuleRegistry::new(),
            tick: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Count of steps done so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Entities currently moved by physics.
    pub fn physics_entities(&self) -> Result<&[Entity]> {
        Ok(self.world.system_entities(self.physics_id)?)
    }

    pub fn register_module<M>(&mut self, module: M) -> Result<()>
    where
        M: Module + 'static,
    {
        self.modules.register(module, &mut self.world)?;
        Ok(())
    }

    /// Spawns configured count of blocks at random places.
    pub fn spawn_entities(&mut self) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed());
        for _ in 0..self.config.entity_count() {
            let entity = self.world.create_entity()?;
            self.world.add_component(entity, Gravity::earth())?;
            self.world.add_component(entity, RigidBody::default())?;

            let transform = Transform {
                position: Vec3::new(
                    rng.gen_range(-150.0..150.0),
                    rng.gen_range(-150.0..150.0),
                    rng.gen_range(50.0..150.0),
                ),
                rotation: Vec3::new(
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(0.0..TAU),
                ),
                scale: Vec3::broadcast(5.0),
            };
            self.world.add_component(entity, transform)?;
        }
        log::info!("spawned {} entities", self.config.entity_count());
        Ok(())
    }

    /// Does one fixed step: runs physics, then updates all modules.
    pub fn update(&mut self) -> Result<()> {
        let delta_time = self.config.delta_time();
        self.world
            .run_system(self.physics_id, &mut self.physics, delta_time)?;
        self.modules.update(&self.world, delta_time);
        self.tick += 1;
        Ok(())
    }

    /// Runs configured count of steps.
    pub fn run(&mut self) -> Result<()> {
        let ticks = self.config.ticks();
        log::info!("running {} ticks of {:?}", ticks, self.config.delta_time());
        for _ in 0..ticks {
            self.update()?;
            if self.tick % 100 == 0 {
                log::info!("tick {}/{}", self.tick, ticks);
            }
        }
        if self.config.enable_validation() {
            self.validate()?;
            log::debug!("world state is consistent");
        }
        Ok(())
    }

    /// Checks that physics tracks exactly those entities which have all its components.
    pub fn validate(&self) -> Result<()> {
        let signature = PhysicsComponents::signature()?;
        let tracked = self.physics_entities()?;
        for &entity in tracked {
            let matches = self
                .world
                .signature(entity)
                .map_or(false, |entity_signature| entity_signature.contains(signature));
            if !matches {
                return Err(AppError::Validation(entity));
            }
        }

        let transforms = self.world.storage::<Transform>()?;
        for entity in transforms.entities() {
            let complete = self.world.has_component::<RigidBody>(*entity)
                && self.world.has_component::<Gravity>(*entity);
            if complete && !tracked.contains(entity) {
                return Err(AppError::Validation(*entity));
            }
        }
        Ok(())
    }
}
