//! Kinematic helper for Velocity-Verlet style time stepping.
//!
//! The driving integrator owns the velocity half-steps:
//! 1. v(t + dt/2) = v(t) + (dt/2) * a(t)
//! 2. y(t + dt) = x + u(t) + dt * v(t + dt/2)   <- [`update_geometry`]
//! 3. force evaluation at y(t + dt)
//! 4. v(t + dt) = v(t + dt/2) + (dt/2) * a(t + dt)
//!
//! Only step 2 lives here. It runs over the whole overlap so ghost geometry
//! is predicted with the same rule as owned geometry.

use glam::DVec3;

use crate::error::{check_len, Result};

/// `Y = X + U + V dt` elementwise.
///
/// `displacement` is the displacement at the start of the step and
/// `velocity` the half-step velocity, so `current` receives the predicted
/// end-of-step configuration. Passing `dt = 0` yields `Y = X + U`.
pub fn update_geometry(
    reference: &[DVec3],
    displacement: &[DVec3],
    velocity: &[DVec3],
    dt: f64,
    current: &mut [DVec3],
) -> Result<()> {
    check_len("displacement", reference.len(), displacement.len())?;
    check_len("velocity", reference.len(), velocity.len())?;
    check_len("current positions", reference.len(), current.len())?;

    for (((y, x), u), v) in current.iter_mut().zip(reference).zip(displacement).zip(velocity) {
        *y = *x + *u + *v * dt;
    }
    Ok(())
}
