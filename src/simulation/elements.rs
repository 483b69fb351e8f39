//! Orbital parameterizations
//!
//! Exactly one of three inputs is authoritative at a time:
//! - `SemiMajorAxis`: (a, e)
//! - `Period`: (p, e)
//! - `InitialValues`: (r12, v0x, v0y), the relative state at t = 0
//!
//! `OrbitParams::derive` turns the authoritative variant into a full,
//! mutually consistent `OrbitalElements`. In the (a, e) and (p, e) modes the
//! run starts at periapsis on the +x axis.

use std::f64::consts::PI;

use log::debug;

use super::error::{SimError, SimResult};
use super::states::OrbitState;

/// Authoritative orbit input. Lengths in metres, times in days,
/// velocities in metres per day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitParams {
    SemiMajorAxis { a: f64, e: f64 },
    Period { p: f64, e: f64 },
    InitialValues { r12: f64, v0x: f64, v0y: f64 },
}

/// Fully derived orbit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub a: f64,   // semi-major axis
    pub e: f64,   // eccentricity
    pub p: f64,   // period
    pub r12: f64, // initial separation
    pub v0x: f64, // initial relative velocity
    pub v0y: f64,
}

impl OrbitalElements {
    /// Relative state at t = 0: position (r12, 0), velocity (v0x, v0y)
    pub fn initial_state(&self) -> OrbitState {
        OrbitState::new(self.v0x, self.v0y, self.r12, 0.0)
    }
}

/// p = 2 pi sqrt(a^3 / mu)
pub fn period_from_axis(a: f64, mu: f64) -> f64 {
    2.0 * PI * (a.powi(3) / mu).sqrt()
}

/// a = cbrt(mu (p / pi)^2 / 4)
pub fn axis_from_period(p: f64, mu: f64) -> f64 {
    (mu * (p / PI).powi(2) / 4.0).cbrt()
}

/// Periapsis start: r12 = (1 - e) a, v0 = (0, sqrt(mu / a (1 + e) / (1 - e)))
pub fn initial_values(a: f64, e: f64, mu: f64) -> (f64, f64, f64) {
    let r12 = (1.0 - e) * a;
    let v0y = (mu / a * (1.0 + e) / (1.0 - e)).sqrt();
    (r12, 0.0, v0y)
}

/// Recover (a, e) from a relative state via the vis-viva and
/// angular-momentum relations
pub fn elements_from_state(state: &OrbitState, mu: f64) -> SimResult<(f64, f64)> {
    let r = state.separation();
    if !(r > 0.0) || !state.is_finite() {
        return Err(SimError::config("initial separation must be positive"));
    }
    let energy = state.specific_energy(mu);
    if energy >= 0.0 {
        return Err(SimError::config(format!(
            "initial values give an unbound orbit (specific energy {energy:e})"
        )));
    }
    let h = state.angular_momentum();
    if h == 0.0 {
        return Err(SimError::config("initial values give a radial (degenerate) orbit"));
    }

    let a = -mu / (2.0 * energy);
    let e = (1.0 + 2.0 * energy * h * h / (mu * mu)).max(0.0).sqrt();
    Ok((a, e))
}

fn check_eccentricity(e: f64) -> SimResult<()> {
    if !(0.0..1.0).contains(&e) {
        return Err(SimError::config(format!("eccentricity {e} outside [0, 1)")));
    }
    Ok(())
}

fn check_positive(name: &str, value: f64) -> SimResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimError::config(format!("{name} must be positive and finite, got {value}")));
    }
    Ok(())
}

impl OrbitParams {
    /// Short label of the authoritative mode
    pub fn mode(&self) -> &'static str {
        match self {
            OrbitParams::SemiMajorAxis { .. } => "a",
            OrbitParams::Period { .. } => "p",
            OrbitParams::InitialValues { .. } => "initial-values",
        }
    }

    /// Derive the complete element set for gravitational parameter `mu`
    pub fn derive(&self, mu: f64) -> SimResult<OrbitalElements> {
        check_positive("gravitational parameter", mu)?;

        let elements = match *self {
            OrbitParams::SemiMajorAxis { a, e } => {
                check_positive("semi-major axis", a)?;
                check_eccentricity(e)?;
                let (r12, v0x, v0y) = initial_values(a, e, mu);
                OrbitalElements { a, e, p: period_from_axis(a, mu), r12, v0x, v0y }
            }
            OrbitParams::Period { p, e } => {
                check_positive("period", p)?;
                check_eccentricity(e)?;
                let a = axis_from_period(p, mu);
                let (r12, v0x, v0y) = initial_values(a, e, mu);
                OrbitalElements { a, e, p, r12, v0x, v0y }
            }
            OrbitParams::InitialValues { r12, v0x, v0y } => {
                check_positive("initial separation", r12)?;
                let state = OrbitState::new(v0x, v0y, r12, 0.0);
                let (a, e) = elements_from_state(&state, mu)?;
                check_eccentricity(e)?;
                OrbitalElements { a, e, p: period_from_axis(a, mu), r12, v0x, v0y }
            }
        };

        debug!(
            "derived elements ({} mode): a = {:e} m, e = {}, p = {} day, r12 = {:e} m, v0 = ({:e}, {:e}) m/day",
            self.mode(), elements.a, elements.e, elements.p, elements.r12, elements.v0x, elements.v0y
        );
        Ok(elements)
    }

    /// Replace the eccentricity. Initial-values mode has no free e, so it
    /// falls back to (a, e) with the currently derived a.
    pub fn with_eccentricity(self, e: f64, mu: f64) -> SimResult<OrbitParams> {
        Ok(match self {
            OrbitParams::SemiMajorAxis { a, .. } => OrbitParams::SemiMajorAxis { a, e },
            OrbitParams::Period { p, .. } => OrbitParams::Period { p, e },
            OrbitParams::InitialValues { .. } => {
                let a = self.derive(mu)?.a;
                OrbitParams::SemiMajorAxis { a, e }
            }
        })
    }
}
