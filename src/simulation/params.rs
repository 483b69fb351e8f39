//! Runtime configuration of a run
//!
//! `SimConfig` is the validated, SI-unit counterpart of the YAML-facing
//! `ScenarioConfig`:
//! - the two stars' physical constants,
//! - the authoritative orbit parameterization,
//! - the observer orientation,
//! - integration step and the trail / flux window lengths

use super::constants::{G, MAX_WINDOW_LEN};
use super::elements::OrbitParams;
use super::error::{SimError, SimResult};
use super::projection::Orientation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarParams {
    pub mass: f64,        // [kg]
    pub radius: f64,      // [m]
    pub temperature: f64, // [K]
    pub luminosity: f64,  // [W]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub stars: [StarParams; 2],
    pub orbit: OrbitParams,
    pub orientation: Orientation,
    pub dt: f64,            // integration step [day]
    pub trail_periods: f64, // trail window [orbital periods]
    pub flux_periods: f64,  // flux window [orbital periods]
}

fn positive(name: &str, value: f64) -> SimResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimError::config(format!("{name} must be positive and finite, got {value}")));
    }
    Ok(())
}

impl SimConfig {
    /// mu = G (m1 + m2)
    pub fn mu(&self) -> f64 {
        G * (self.stars[0].mass + self.stars[1].mass)
    }

    /// Barycentric coefficients: pos_i = coef_i * relative position
    pub fn coefs(&self) -> [f64; 2] {
        let (m1, m2) = (self.stars[0].mass, self.stars[1].mass);
        [-m2 / (m1 + m2), m1 / (m1 + m2)]
    }

    /// Input-boundary checks that do not need the derived orbit
    pub fn validate(&self) -> SimResult<()> {
        for (i, star) in self.stars.iter().enumerate() {
            positive(&format!("star {} mass", i + 1), star.mass)?;
            positive(&format!("star {} radius", i + 1), star.radius)?;
            positive(&format!("star {} luminosity", i + 1), star.luminosity)?;
            if !star.temperature.is_finite() || star.temperature < 0.0 {
                return Err(SimError::config(format!(
                    "star {} temperature must be non-negative, got {}",
                    i + 1,
                    star.temperature
                )));
            }
        }
        positive("time step dt", self.dt)?;
        positive("trail window", self.trail_periods)?;
        positive("flux window", self.flux_periods)?;
        if !self.orientation.is_finite() {
            return Err(SimError::config("orientation angles must be finite"));
        }
        Ok(())
    }
}

/// Sample count covering `periods` orbital periods: ceil(periods * p / dt).
/// Ratios within rounding of a whole number are not bumped to the next one.
pub fn window_len(periods: f64, p: f64, dt: f64) -> SimResult<usize> {
    let ratio = periods * p / dt;
    let samples = if (ratio - ratio.round()).abs() <= 1e-9 * ratio.abs() {
        ratio.round()
    } else {
        ratio.ceil()
    };
    if !samples.is_finite() || samples < 1.0 || samples > MAX_WINDOW_LEN as f64 {
        return Err(SimError::config(format!(
            "window of {periods} periods is {samples} samples at dt = {dt} day, limit is {MAX_WINDOW_LEN}"
        )));
    }
    Ok(samples as usize)
}

/// Explicit window lengths must hold 1..=MAX_WINDOW_LEN samples
pub fn check_window_len(name: &str, len: usize) -> SimResult<()> {
    if len == 0 || len > MAX_WINDOW_LEN {
        return Err(SimError::config(format!(
            "{name} window of {len} samples outside 1..={MAX_WINDOW_LEN}"
        )));
    }
    Ok(())
}
