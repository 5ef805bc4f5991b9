//! Components of falling blocks.

use keel_ecs::{Component, ComponentKind};
use ultraviolet::Vec3;

/// Placement of the entity in the world.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Component for Transform {
    const KIND: ComponentKind = 0;
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RigidBody {
    pub velocity: Vec3,
    pub acceleration: Vec3,
}

impl Component for RigidBody {
    const KIND: ComponentKind = 1;
}

/// Constant force applied to the entity on every step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gravity {
    pub force: Vec3,
}

impl Gravity {
    /// Gravity of the Earth directed along negative `y` axis.
    pub fn earth() -> Self {
        Self {
            force: Vec3::new(0.0, -9.8, 0.0),
        }
    }
}

impl Component for Gravity {
    const KIND: ComponentKind = 2;
}
