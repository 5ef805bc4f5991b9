//! Utilities for managing entity sets of all *systems*.

use slotmap::{new_key_type, SlotMap};

use crate::{Entity, Error, Result, Signature};

use super::SystemEntities;

new_key_type! {
    /// Unique identifier of the *system* of ECS.
    pub struct SystemId;
}

/// Manager of entity sets of all registered systems.
///
/// Systems are never unregistered, so they are always
/// visited in the order of their registration.
///
pub struct SystemManager {
    systems: SlotMap<SystemId, SystemEntities>,
    max_systems: usize,
    max_entities: usize,
}

impl SystemManager {
    /// Creates new system manager.
    ///
    /// At most `max_systems` could be registered,
    /// each of them could hold at most `max_entities`.
    ///
    pub fn new(max_systems: usize, max_entities: usize) -> Self {
        Self {
            systems: SlotMap::with_capacity_and_key(max_systems),
            max_systems,
            max_entities,
        }
    }

    /// Registers new system with given required signature.
    ///
    /// # Errors
    ///
    /// An error is returned if the count of systems has reached the capacity.
    ///
    pub fn register(&mut self, signature: Signature) -> Result<SystemId> {
        if self.systems.len() >= self.max_systems {
            let capacity = self.max_systems;
            return Err(Error::SystemCapacity { capacity });
        }
        let entities = SystemEntities::new(signature, self.max_entities);
        let id = self.systems.insert(entities);
        log::debug!("registered system {:?} with signature {}", id, signature);
        Ok(id)
    }

    /// Retrieves entity set of the system.
    pub fn get(&self, id: SystemId) -> Result<&SystemEntities> {
        self.systems.get(id).ok_or(Error::UnknownSystem)
    }

    /// Returns iterator over all systems in the order of their registration.
    pub fn iter(&self) -> impl Iterator<Item = (SystemId, &SystemEntities)> {
        self.systems.iter()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Updates all entity sets after signature of the entity was changed.
    pub fn entity_signature_changed(&mut self, entity: Entity, signature: Signature) -> Result<()> {
        for entities in self.systems.values_mut() {
            if entities.matches(signature) {
                entities.insert(entity)?;
            } else {
                entities.remove(entity);
            }
        }
        Ok(())
    }

    /// Removes destroyed entity from all entity sets.
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for entities in self.systems.values_mut() {
            entities.remove(entity);
        }
    }

    pub(crate) fn get_mut(&mut self, id: SystemId) -> Result<&mut SystemEntities> {
        self.systems.get_mut(id).ok_or(Error::UnknownSystem)
    }
}
