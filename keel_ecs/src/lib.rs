//! Entity Component System (ECS) utilities for game engine.
//!
//! Entities are plain identifiers, components are kept in dense storages,
//! and each system tracks exactly those entities whose signature
//! contains all the components it requires.

pub use component::{Component, ComponentArray, ComponentKind, ComponentStorage, ComponentView};
pub use config::{EcsConfig, ENGINE_NAME, ENGINE_VERSION};
pub use entity::{Entity, EntityManager};
pub use error::{Error, Result};
pub use system::{
    ComponentSet, DeltaTime, Signature, System, SystemEntities, SystemId, SystemManager,
    MAX_COMPONENT_KINDS,
};
pub use world::World;

use component::ComponentManager;

pub mod config;
pub mod error;

mod component;
mod entity;
mod system;
mod world;
