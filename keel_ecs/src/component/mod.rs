//! Utilities for *components* in ECS.

use std::any::Any;

pub use manager::*;
pub use storage::*;
pub use view::ComponentView;

use crate::Entity;

mod manager;
mod storage;
mod view;

/// Small integer which identifies kind of the *component*.
///
/// Must be less than [`MAX_COMPONENT_KINDS`](crate::MAX_COMPONENT_KINDS).
///
pub type ComponentKind = u8;

/// Objects of this trait represent *component* of ECS.
///
/// Components should be just POD (plain old data).
/// Each component type owns a distinct kind fixed at compile time.
///
pub trait Component: Any {
    /// Kind of this component type.
    const KIND: ComponentKind;
}

/// Type-erased handle of a [component storage](ComponentStorage).
///
/// Lets the world notify storages about destroyed entities
/// without knowing their concrete component types.
///
pub trait ComponentArray: Any {
    /// Removes component attached to the destroyed entity, if any.
    fn entity_destroyed(&mut self, entity: Entity);

    /// Count of components in this storage.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the component type stored in this storage.
    fn component_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
