//! Error types of ECS.

use thiserror::Error;

use crate::{ComponentKind, Entity};

/// Result of any ECS operation which can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Error that can happen when ECS precondition is violated.
///
/// Nothing is changed in ECS state when any of these is returned.
///
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("too many entities in existence (capacity {capacity})")]
    EntityCapacity { capacity: usize },

    #[error("system manager is full (capacity {capacity})")]
    SystemCapacity { capacity: usize },

    #[error("system entity list is full (capacity {capacity})")]
    MembershipCapacity { capacity: usize },

    #[error("entity {entity} out of range (capacity {capacity})")]
    EntityOutOfRange { entity: Entity, capacity: usize },

    #[error("entity {0} is not alive")]
    EntityNotAlive(Entity),

    #[error("component kind {0} out of range")]
    KindOutOfRange(ComponentKind),

    #[error("component of kind {kind} already exists for entity {entity}")]
    AlreadyExists { entity: Entity, kind: ComponentKind },

    #[error("component of kind {kind} does not exist for entity {entity}")]
    NotFound { entity: Entity, kind: ComponentKind },

    #[error("component kind {0} is not registered")]
    NotRegistered(ComponentKind),

    #[error("component kind {0} is registered with another component type")]
    TypeMismatch(ComponentKind),

    #[error("component kind {0} is already owned by another component type")]
    KindConflict(ComponentKind),

    #[error("there is no system with such identifier")]
    UnknownSystem,
}
