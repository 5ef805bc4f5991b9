//! Utilities for managing component storages.

use crate::{Entity, Error, Result, MAX_COMPONENT_KINDS};

use super::{Component, ComponentArray, ComponentKind, ComponentStorage};

type Slot = Option<Box<dyn ComponentArray>>;

/// Manager of all component storages of ECS.
///
/// Holds a fixed-size table indexed by [component kind](ComponentKind).
///
pub struct ComponentManager {
    arrays: [Slot; MAX_COMPONENT_KINDS],
}

impl ComponentManager {
    /// Creates new component manager without any registered storage.
    pub fn new() -> Self {
        Self {
            arrays: std::array::from_fn(|_| None),
        }
    }

    /// Installs storage for given component kind.
    ///
    /// If a storage was already registered for this kind, it will be replaced.
    /// Returns previously registered storage, if any.
    ///
    /// # Errors
    ///
    /// An error is returned if kind is out of range.
    ///
    pub fn register(
        &mut self,
        kind: ComponentKind,
        array: Box<dyn ComponentArray>,
    ) -> Result<Option<Box<dyn ComponentArray>>> {
        let slot = self.slot_mut(kind)?;
        let name = array.component_name();
        let previous = slot.replace(array);
        match &previous {
            Some(previous) => log::warn!(
                "storage of kind {} ({}) was replaced by {}",
                kind,
                previous.component_name(),
                name,
            ),
            None => log::debug!("registered storage of kind {} ({})", kind, name),
        }
        Ok(previous)
    }

    /// Returns `true` if any storage is registered for given kind.
    pub fn is_registered(&self, kind: ComponentKind) -> bool {
        matches!(self.slot(kind), Ok(Some(_)))
    }

    /// Notifies all registered storages that the entity was destroyed.
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for array in self.arrays.iter_mut().flatten() {
            array.entity_destroyed(entity);
        }
    }

    /// Retrieves storage for components of type `T`.
    pub fn storage<T>(&self) -> Result<&ComponentStorage<T>>
    where
        T: Component,
    {
        let array = self
            .slot(T::KIND)?
            .as_deref()
            .ok_or(Error::NotRegistered(T::KIND))?;
        array
            .as_any()
            .downcast_ref()
            .ok_or(Error::TypeMismatch(T::KIND))
    }

    /// Retrieves mutable storage for components of type `T`.
    pub fn storage_mut<T>(&mut self) -> Result<&mut ComponentStorage<T>>
    where
        T: Component,
    {
        let array = self
            .slot_mut(T::KIND)?
            .as_deref_mut()
            .ok_or(Error::NotRegistered(T::KIND))?;
        array
            .as_any_mut()
            .downcast_mut()
            .ok_or(Error::TypeMismatch(T::KIND))
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get<T>(&self, entity: Entity) -> Result<&T>
    where
        T: Component,
    {
        self.storage::<T>()?.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_mut<T>(&mut self, entity: Entity) -> Result<&mut T>
    where
        T: Component,
    {
        self.storage_mut::<T>()?.get_mut(entity)
    }

    fn slot(&self, kind: ComponentKind) -> Result<&Slot> {
        self.arrays
            .get(usize::from(kind))
            .ok_or(Error::KindOutOfRange(kind))
    }

    fn slot_mut(&mut self, kind: ComponentKind) -> Result<&mut Slot> {
        self.arrays
            .get_mut(usize::from(kind))
            .ok_or(Error::KindOutOfRange(kind))
    }
}

impl Default for ComponentManager {
    fn default() -> Self {
        Self::new()
    }
}
