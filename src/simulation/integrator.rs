//! Fixed-step time integration of the reduced two-body state
//!
//! Classical 4-stage Runge-Kutta on
//! x' = vx, y' = vy, vx' = ax(x, y), vy' = ay(x, y).
//! No error estimate, no step control: `dt` comes straight from the config.

use super::error::{SimError, SimResult};
use super::forces::{Acceleration, KeplerGravity};
use super::states::{NVec2, OrbitState};

/// One stage increment: (dv, dr) = (a(r + dr_prev) dt, (v + dv_prev) dt)
fn stage(
    state: &OrbitState,
    dv: NVec2,
    dr: NVec2,
    dt: f64,
    force: &impl Acceleration,
) -> SimResult<(NVec2, NVec2)> {
    let a = force.acceleration(&(state.r + dr))?;
    Ok((a * dt, (state.v + dv) * dt))
}

/// Advance `state` by one step `dt` under `force`
pub fn rk4_step(state: &OrbitState, dt: f64, force: &impl Acceleration) -> SimResult<OrbitState> {
    let (kv1, kr1) = stage(state, NVec2::zeros(), NVec2::zeros(), dt, force)?;
    let (kv2, kr2) = stage(state, kv1 * 0.5, kr1 * 0.5, dt, force)?;
    let (kv3, kr3) = stage(state, kv2 * 0.5, kr2 * 0.5, dt, force)?;
    let (kv4, kr4) = stage(state, kv3, kr3, dt, force)?;

    let next = OrbitState {
        v: state.v + (kv1 + 2.0 * kv2 + 2.0 * kv3 + kv4) / 6.0,
        r: state.r + (kr1 + 2.0 * kr2 + 2.0 * kr3 + kr4) / 6.0,
    };

    // a huge dt can still blow up without ever hitting r = 0 exactly
    if !next.is_finite() || next.separation() == 0.0 {
        return Err(SimError::Singularity {
            separation: next.separation(),
        });
    }
    Ok(next)
}

/// Advance the Keplerian relative state with gravitational parameter `mu`
pub fn step(state: &OrbitState, dt: f64, mu: f64) -> SimResult<OrbitState> {
    if !mu.is_finite() || mu <= 0.0 {
        return Err(SimError::Configuration(format!(
            "gravitational parameter must be positive, got {mu}"
        )));
    }
    rk4_step(state, dt, &KeplerGravity { mu })
}
