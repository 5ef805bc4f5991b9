//! Utilities for *entities* in ECS.

use std::collections::VecDeque;
use std::fmt;

use crate::{Error, Result, Signature};


/// Unique identifier of the *entity* of ECS.
///
/// Identifier is an index into all entity-sized tables of ECS.
/// It is unique among alive entities and can be reused after destruction.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Entity(u32);

impl Entity {
    /// Creates entity from raw identifier.
    ///
    /// Such entity is not guaranteed to be alive in any world.
    ///
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Raw identifier of this entity.
    pub const fn id(self) -> u32 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Manager of all entities of ECS.
///
/// Issues identifiers from a FIFO queue, so destroyed identifiers
/// are reused in the same order they were freed.
/// Also owns [signature](Signature) of each entity.
///
pub struct EntityManager {
    available: VecDeque<Entity>,
    signatures: Box<[Signature]>,
    alive: Box<[bool]>,
    living_count: usize,
}

impl EntityManager {
    /// Creates new entity manager which can hold at most `max_entities` alive entities.
    pub fn new(max_entities: usize) -> Self {
        let capacity = max_entities.min(u32::MAX as usize);
        let available = (0..capacity as u32).map(Entity).collect();
        Self {
            available,
            signatures: vec![Signature::EMPTY; capacity].into_boxed_slice(),
            alive: vec![false; capacity].into_boxed_slice(),
            living_count: 0,
        }
    }

    /// Takes next available identifier and creates new entity with empty signature.
    ///
    /// # Errors
    ///
    /// An error is returned if the count of alive entities has reached the capacity.
    ///
    pub fn create(&mut self) -> Result<Entity> {
        let capacity = self.capacity();
        if self.living_count >= capacity {
            return Err(Error::EntityCapacity { capacity });
        }
        let entity = self
            .available
            .pop_front()
            .ok_or(Error::EntityCapacity { capacity })?;
        self.signatures[entity.index()] = Signature::EMPTY;
        self.alive[entity.index()] = true;
        self.living_count += 1;
        Ok(entity)
    }

    /// Destroys the entity: clears its signature and queues its identifier for reuse.
    ///
    /// # Errors
    ///
    /// An error is returned if the entity is out of range or is not alive.
    ///
    pub fn destroy(&mut self, entity: Entity) -> Result<()> {
        self.check_alive(entity)?;
        let index = entity.index();
        self.signatures[index] = Signature::EMPTY;
        self.alive[index] = false;
        self.available.push_back(entity);
        self.living_count -= 1;
        Ok(())
    }

    /// Replaces signature of the entity.
    pub fn set_signature(&mut self, entity: Entity, signature: Signature) -> Result<()> {
        self.check_range(entity)?;
        self.signatures[entity.index()] = signature;
        Ok(())
    }

    /// Returns current signature of the entity.
    pub fn signature(&self, entity: Entity) -> Result<Signature> {
        self.check_range(entity)?;
        Ok(self.signatures[entity.index()])
    }

    /// Returns `true` if the entity was created and not destroyed yet.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.get(entity.index()).copied().unwrap_or(false)
    }

    /// Returns iterator over all alive entities with their signatures.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, Signature)> + '_ {
        self.alive
            .iter()
            .zip(self.signatures.iter())
            .enumerate()
            .filter(|(_, (alive, _))| **alive)
            .map(|(index, (_, signature))| (Entity(index as u32), *signature))
    }

    /// Count of alive entities.
    pub fn len(&self) -> usize {
        self.living_count
    }

    pub fn is_empty(&self) -> bool {
        self.living_count == 0
    }

    /// Maximum count of alive entities.
    pub fn capacity(&self) -> usize {
        self.signatures.len()
    }

    pub(crate) fn check_range(&self, entity: Entity) -> Result<()> {
        let capacity = self.capacity();
        if entity.index() >= capacity {
            return Err(Error::EntityOutOfRange { entity, capacity });
        }
        Ok(())
    }

    pub(crate) fn check_alive(&self, entity: Entity) -> Result<()> {
        self.check_range(entity)?;
        if !self.is_alive(entity) {
            return Err(Error::EntityNotAlive(entity));
        }
        Ok(())
    }
}
