//! Utilities for *systems* in ECS.

use std::time::Duration;

pub use entities::SystemEntities;
pub use manager::{SystemId, SystemManager};
pub use signature::{ComponentSet, Signature, MAX_COMPONENT_KINDS};

use crate::{ComponentView, Entity, Result};

mod entities;
mod manager;
mod signature;

/// Type which represents duration between two updates.
pub type DeltaTime = Duration;

/// Objects of this trait represent *system* of ECS.
pub trait System {
    /// Component types required by this system.
    type Components: ComponentSet;

    /// Handles state of the current system.
    ///
    /// `entities` are exactly those which have all required components.
    /// Components cannot be attached or detached through `components`,
    /// so `entities` stay valid during the whole update.
    ///
    fn update(
        &mut self,
        entities: &[Entity],
        components: &mut ComponentView,
        delta_time: DeltaTime,
    ) -> Result<()>;
}
