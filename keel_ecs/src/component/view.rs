//! Access to components given to *systems* during update.

use crate::{Entity, Result};

use super::{Component, ComponentManager, ComponentStorage};

/// Components of the world as seen by a running *system*.
///
/// Values of attached components can be read and changed,
/// but components can be neither attached nor detached here:
/// that goes through [`World`](crate::World) only, which keeps
/// signatures and entity sets of systems up to date.
///
/// ```compile_fail
/// use keel_ecs::{Component, ComponentKind, ComponentView, Entity};
///
/// struct Health(u32);
///
/// impl Component for Health {
///     const KIND: ComponentKind = 0;
/// }
///
/// fn detach(view: &mut ComponentView, entity: Entity) {
///     view.storage_mut::<Health>().unwrap().remove(entity).unwrap();
/// }
/// ```
///
pub struct ComponentView<'a> {
    manager: &'a mut ComponentManager,
}

impl<'a> ComponentView<'a> {
    pub(crate) fn new(manager: &'a mut ComponentManager) -> Self {
        Self { manager }
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get<T>(&self, entity: Entity) -> Result<&T>
    where
        T: Component,
    {
        self.manager.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_mut<T>(&mut self, entity: Entity) -> Result<&mut T>
    where
        T: Component,
    {
        self.manager.get_mut(entity)
    }

    /// Retrieves storage of all components of type `T`.
    pub fn storage<T>(&self) -> Result<&ComponentStorage<T>>
    where
        T: Component,
    {
        self.manager.storage()
    }

    /// All components of type `T` packed together,
    /// in the order of [entities of the storage](ComponentStorage::entities).
    pub fn components_mut<T>(&mut self) -> Result<&mut [T]>
    where
        T: Component,
    {
        Ok(self.manager.storage_mut::<T>()?.components_mut())
    }
}
