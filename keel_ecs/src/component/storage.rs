//! Dense storage for **components** of ECS.

use std::any::Any;
use std::ops::{Index, IndexMut};

use crate::config::DEFAULT_MAX_ENTITIES;
use crate::{Entity, Error, Result};

use super::{Component, ComponentArray};

/// Storage for statically typed components of ECS.
///
/// Components are packed into a contiguous array without holes,
/// while sparse table maps each entity to the position of its component.
/// Both insertion and removal are O(1).
///
pub struct ComponentStorage<T>
where
    T: Component,
{
    /// Components are actually stored here.
    components: Vec<T>,
    entity_to_index: Box<[Option<usize>]>,
    index_to_entity: Vec<Entity>,
}

impl<T> ComponentStorage<T>
where
    T: Component,
{
    /// Creates an empty component storage for entities in range `0..max_entities`.
    pub fn with_capacity(max_entities: usize) -> Self {
        Self {
            components: Vec::with_capacity(max_entities),
            entity_to_index: vec![None; max_entities].into_boxed_slice(),
            index_to_entity: Vec::with_capacity(max_entities),
        }
    }

    /// Inserts component and attaches it to the entity.
    ///
    /// # Errors
    ///
    /// An error is returned if component was already attached to the entity
    /// or if the entity is out of range of this storage.
    ///
    pub fn insert(&mut self, entity: Entity, component: T) -> Result<()> {
        let capacity = self.entity_to_index.len();
        let slot = self
            .entity_to_index
            .get_mut(entity.index())
            .ok_or(Error::EntityOutOfRange { entity, capacity })?;
        if slot.is_some() {
            return Err(Error::AlreadyExists {
                entity,
                kind: T::KIND,
            });
        }
        *slot = Some(self.components.len());
        self.index_to_entity.push(entity);
        self.components.push(component);
        Ok(())
    }

    /// Removes component and detaches it from the entity.
    ///
    /// Last component of the storage is moved into the freed position,
    /// so positions of other components may change.
    ///
    /// Returns component that was attached to the entity.
    ///
    pub fn remove(&mut self, entity: Entity) -> Result<T> {
        let index = self.index_of(entity)?;
        Ok(self.remove_at(entity, index))
    }

    /// Returns `true` if component was already attached to the entity.
    pub fn attached(&self, entity: Entity) -> bool {
        self.index_of(entity).is_ok()
    }

    /// Retrieves an immutable reference to component attached to the entity.
    pub fn get(&self, entity: Entity) -> Result<&T> {
        let index = self.index_of(entity)?;
        Ok(&self.components[index])
    }

    /// Retrieves a mutable reference to component attached to the entity.
    pub fn get_mut(&mut self, entity: Entity) -> Result<&mut T> {
        let index = self.index_of(entity)?;
        Ok(&mut self.components[index])
    }

    /// Count of components in this storage.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns immutable iterator over all components with their entities.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.index_to_entity
            .iter()
            .copied()
            .zip(self.components.iter())
    }

    /// Returns mutable iterator over all components with their entities.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.index_to_entity
            .iter()
            .copied()
            .zip(self.components.iter_mut())
    }

    /// Entities which have component of this type, in the order of their components.
    pub fn entities(&self) -> &[Entity] {
        &self.index_to_entity
    }

    /// All components of this storage packed together.
    pub fn components(&self) -> &[T] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }

    /// Entity must own the component at `index`.
    fn remove_at(&mut self, entity: Entity, index: usize) -> T {
        let component = self.components.swap_remove(index);
        self.index_to_entity.swap_remove(index);
        if let Some(moved) = self.index_to_entity.get(index) {
            self.entity_to_index[moved.index()] = Some(index);
        }
        self.entity_to_index[entity.index()] = None;
        component
    }

    fn index_of(&self, entity: Entity) -> Result<usize> {
        self.entity_to_index
            .get(entity.index())
            .copied()
            .flatten()
            .ok_or(Error::NotFound {
                entity,
                kind: T::KIND,
            })
    }
}

impl<T> Default for ComponentStorage<T>
where
    T: Component,
{
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTITIES)
    }
}

impl<T> ComponentArray for ComponentStorage<T>
where
    T: Component,
{
    fn entity_destroyed(&mut self, entity: Entity) {
        if let Ok(index) = self.index_of(entity) {
            self.remove_at(entity, index);
        }
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    fn component_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T> IntoIterator for ComponentStorage<T>
where
    T: Component,
{
    type Item = (Entity, T);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<Entity>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.index_to_entity.into_iter().zip(self.components)
    }
}

impl<T> Index<Entity> for ComponentStorage<T>
where
    T: Component,
{
    type Output = T;

    fn index(&self, entity: Entity) -> &Self::Output {
        self.get(entity)
            .expect("there is no component attached to the entity")
    }
}

impl<T> IndexMut<Entity> for ComponentStorage<T>
where
    T: Component,
{
    fn index_mut(&mut self, entity: Entity) -> &mut Self::Output {
        self.get_mut(entity)
            .expect("there is no component attached to the entity")
    }
}
