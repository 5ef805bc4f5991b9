//! Simple physics of falling blocks.

use keel_ecs::{ComponentView, DeltaTime, Entity, Result, System};

use crate::components::{Gravity, RigidBody, Transform};

mod tests;

/// Integrates motion of entities with semi-implicit Euler method.
#[derive(Debug, Default)]
pub struct PhysicsSystem;

impl System for PhysicsSystem {
    type Components = (Transform, RigidBody, Gravity);

    fn update(
        &mut self,
        entities: &[Entity],
        components: &mut ComponentView,
        delta_time: DeltaTime,
    ) -> Result<()> {
        let dt = delta_time.as_secs_f32();
        for &entity in entities {
            let gravity = components.get::<Gravity>(entity)?.force;

            let body = components.get_mut::<RigidBody>(entity)?;
            body.velocity += (body.acceleration + gravity) * dt;
            let velocity = body.velocity;

            components.get_mut::<Transform>(entity)?.position += velocity * dt;
        }
        Ok(())
    }
}
