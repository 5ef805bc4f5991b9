//! Utilities for storage of ECS.

use crate::entity::EntityManager;
use crate::{
    Component, ComponentKind, ComponentManager, ComponentSet, ComponentStorage, ComponentView, DeltaTime,
    EcsConfig, Entity, Error, Result, Signature, System, SystemEntities, SystemId, SystemManager,
};

mod tests;

/// Storage for entities, components and systems of ECS.
///
/// Keeps entity signatures, component storages and system entity sets
/// consistent with each other on every change.
/// Each operation checks all its preconditions first,
/// so on error nothing is changed.
///
/// Component storages are never handed out mutably,
/// so they cannot get out of sync with entity signatures:
///
/// ```compile_fail
/// use keel_ecs::{Component, ComponentKind, World};
///
/// struct Health(u32);
///
/// impl Component for Health {
///     const KIND: ComponentKind = 0;
/// }
///
/// let mut world = World::default();
/// world.register_component::<Health>().unwrap();
/// let entity = world.create_entity().unwrap();
/// world.storage_mut::<Health>().unwrap().insert(entity, Health(1)).unwrap();
/// ```
///
pub struct World {
    config: EcsConfig,
    /// Identifiers and signatures of all entities.
    entities: EntityManager,
    /// Storages of all component kinds.
    components: ComponentManager,
    /// Entity sets of all systems.
    systems: SystemManager,
}

impl World {
    /// Creates new world with limits from given configuration.
    pub fn new(config: EcsConfig) -> Self {
        Self {
            config,
            entities: EntityManager::new(config.max_entities()),
            components: ComponentManager::new(),
            systems: SystemManager::new(config.max_systems(), config.max_entities()),
        }
    }

    pub fn config(&self) -> &EcsConfig {
        &self.config
    }

    /// Creates new entity without any components.
    pub fn create_entity(&mut self) -> Result<Entity> {
        let entity = self.entities.create()?;
        self.systems
            .entity_signature_changed(entity, Signature::EMPTY)?;
        log::trace!("created entity {}", entity);
        Ok(entity)
    }

    /// Destroys the entity with all its components.
    ///
    /// Identifier of the entity will be reused by later created entities.
    ///
    pub fn destroy_entity(&mut self, entity: Entity) -> Result<()> {
        self.entities.destroy(entity)?;
        self.components.entity_destroyed(entity);
        self.systems.entity_destroyed(entity);
        log::trace!("destroyed entity {}", entity);
        Ok(())
    }

    /// Returns `true` if the entity was created and not destroyed yet.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Count of alive entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Current signature of the entity.
    pub fn signature(&self, entity: Entity) -> Result<Signature> {
        self.entities.signature(entity)
    }

    /// Registers storage for components of type `T`.
    ///
    /// Does nothing if such storage was already registered.
    ///
    /// # Errors
    ///
    /// An error is returned if kind of `T` is out of range
    /// or if it is already owned by another component type.
    ///
    pub fn register_component<T>(&mut self) -> Result<()>
    where
        T: Component,
    {
        Signature::of(T::KIND)?;
        match self.components.storage::<T>() {
            Ok(_) => return Ok(()),
            Err(Error::NotRegistered(_)) => {}
            Err(Error::TypeMismatch(kind)) => return Err(Error::KindConflict(kind)),
            Err(error) => return Err(error),
        }
        let storage = ComponentStorage::<T>::with_capacity(self.config.max_entities());
        self.components.register(T::KIND, Box::new(storage))?;
        Ok(())
    }

    /// Returns `true` if any component storage is registered for given kind.
    pub fn is_registered(&self, kind: ComponentKind) -> bool {
        self.components.is_registered(kind)
    }

    /// Attaches component to the entity.
    ///
    /// # Errors
    ///
    /// An error is returned if the entity is not alive, if storage of `T` is not registered
    /// or if component of type `T` was already attached to the entity.
    ///
    pub fn add_component<T>(&mut self, entity: Entity, component: T) -> Result<()>
    where
        T: Component,
    {
        self.entities.check_alive(entity)?;
        let signature = self.entities.signature(entity)? | Signature::of(T::KIND)?;

        self.components.storage_mut::<T>()?.insert(entity, component)?;
        self.entities.set_signature(entity, signature)?;
        self.systems.entity_signature_changed(entity, signature)?;
        log::trace!("attached component of kind {} to entity {}", T::KIND, entity);
        Ok(())
    }

    /// Detaches component from the entity.
    ///
    /// Returns component that was attached to the entity.
    ///
    pub fn remove_component<T>(&mut self, entity: Entity) -> Result<T>
    where
        T: Component,
    {
        self.entities.check_alive(entity)?;
        let signature = self
            .entities
            .signature(entity)?
            .difference(Signature::of(T::KIND)?);

        let component = self.components.storage_mut::<T>()?.remove(entity)?;
        self.entities.set_signature(entity, signature)?;
        self.systems.entity_signature_changed(entity, signature)?;
        log::trace!("detached component of kind {} from entity {}", T::KIND, entity);
        Ok(component)
    }

    /// Returns `true` if component of type `T` is attached to the entity.
    ///
    /// Another type sharing the kind of `T` is not reported as `T`.
    ///
    pub fn has_component<T>(&self, entity: Entity) -> bool
    where
        T: Component,
    {
        self.components
            .storage::<T>()
            .map_or(false, |storage| storage.attached(entity))
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get_component<T>(&self, entity: Entity) -> Result<&T>
    where
        T: Component,
    {
        self.entities.check_range(entity)?;
        self.components.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_component_mut<T>(&mut self, entity: Entity) -> Result<&mut T>
    where
        T: Component,
    {
        self.entities.check_range(entity)?;
        self.components.get_mut(entity)
    }

    /// Retrieves storage of all components of type `T`.
    pub fn storage<T>(&self) -> Result<&ComponentStorage<T>>
    where
        T: Component,
    {
        self.components.storage()
    }

    /// Registers new system which requires components of given signature.
    ///
    /// Alive entities which already satisfy the signature are added immediately,
    /// so systems could be registered at any moment.
    ///
    pub fn register_system(&mut self, signature: Signature) -> Result<SystemId> {
        let id = self.systems.register(signature)?;
        let system = self.systems.get_mut(id)?;
        for (entity, entity_signature) in self.entities.iter() {
            if system.matches(entity_signature) {
                system.insert(entity)?;
            }
        }
        Ok(id)
    }

    /// Registers new system which requires components of the set `C`.
    ///
    /// For [systems](System) use their [components](System::Components) as `C`.
    ///
    pub fn register_system_for<C>(&mut self) -> Result<SystemId>
    where
        C: ComponentSet,
    {
        self.register_system(C::signature()?)
    }

    /// Entity set of the system.
    pub fn system(&self, id: SystemId) -> Result<&SystemEntities> {
        self.systems.get(id)
    }

    /// Entities which currently satisfy signature of the system.
    pub fn system_entities(&self, id: SystemId) -> Result<&[Entity]> {
        Ok(self.systems.get(id)?.entities())
    }

    /// Runs the system over its current entities.
    pub fn run_system<S>(&mut self, id: SystemId, system: &mut S, delta_time: DeltaTime) -> Result<()>
    where
        S: System,
    {
        let entities = self.systems.get(id)?.entities();
        let mut components = ComponentView::new(&mut self.components);
        system.update(entities, &mut components, delta_time)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(EcsConfig::default())
    }
}
