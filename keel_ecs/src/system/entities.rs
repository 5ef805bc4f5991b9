//! Set of entities which satisfy signature of the *system*.

use crate::{Entity, Error, Result, Signature};

/// Entities which currently have all the components required by the *system*.
///
/// Entity is inside of this set if and only if its signature
/// contains [required signature](SystemEntities::signature).
///
#[derive(Debug, Clone)]
pub struct SystemEntities {
    signature: Signature,
    entities: Vec<Entity>,
    capacity: usize,
}

impl SystemEntities {
    /// Creates an empty set for given required signature.
    pub fn new(signature: Signature, capacity: usize) -> Self {
        Self {
            signature,
            entities: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Signature required by the system.
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Returns `true` if entity with such signature belongs to this set.
    pub fn matches(&self, signature: Signature) -> bool {
        signature.contains(self.signature)
    }

    /// Entities of this set in the order of their addition.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Adds the entity if it is not present yet.
    ///
    /// Returns `true` if the entity was added.
    ///
    /// # Errors
    ///
    /// An error is returned if the set is full.
    ///
    pub fn insert(&mut self, entity: Entity) -> Result<bool> {
        if self.contains(entity) {
            return Ok(false);
        }
        if self.entities.len() >= self.capacity {
            let capacity = self.capacity;
            return Err(Error::MembershipCapacity { capacity });
        }
        self.entities.push(entity);
        Ok(true)
    }

    /// Removes the entity if it is present, keeping the order of the rest.
    ///
    /// Returns `true` if the entity was removed.
    ///
    pub fn remove(&mut self, entity: Entity) -> bool {
        match self.entities.iter().position(|&other| other == entity) {
            Some(index) => {
                self.entities.remove(index);
                true
            }
            None => false,
        }
    }
}
