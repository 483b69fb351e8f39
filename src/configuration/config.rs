//! Configuration types for loading binary-star scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]      – step size, window lengths and viewer pacing
//! - [`StarConfig`]        – physical constants of each of the two stars
//! - [`OrbitConfig`]       – exactly one orbit parameterization
//! - [`OrientationConfig`] – observer orientation in degrees
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Values are in "human" units: solar mass / radius / luminosity, AU, km/s,
//! days and degrees.
//!
//! ```yaml
//! engine:
//!   dt: 0.002               # integration step [day]
//!   trail_periods: 1.0      # trail window [orbital periods]
//!   flux_periods: 2.0       # light-curve window [orbital periods]
//!   tick_interval_ms: 50    # viewer tick cadence
//!   scale_base: 50.0        # viewer zoom
//!
//! stars:
//!   - { mass: 1.0, radius: 1.0, temperature: 6000.0, luminosity: 1.0 }
//!   - { mass: 1.0, radius: 1.0, temperature: 6000.0, luminosity: 1.0 }
//!
//! orbit:
//!   semi_major_axis: { a: 0.05, e: 0.0 }
//!   # period: { p: 2.9, e: 0.1 }
//!   # initial_values: { r12: 0.05, v0x: 0.0, v0y: 150.0 }
//!
//! orientation: { raan: 0.0, inc: 0.0, argp: 0.0 }
//! ```
//!
//! The scenario builder converts this into SI units and validates it.

use serde::Deserialize;

fn default_tick_interval() -> u64 {
    50
}

fn default_scale_base() -> f32 {
    50.0
}

/// Engine-level numerical settings
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub dt: f64,            // integration step [day]
    pub trail_periods: f64, // trail window [orbital periods]
    pub flux_periods: f64,  // flux window [orbital periods]
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64, // wall-clock cadence of the viewer's tick source
    #[serde(default = "default_scale_base")]
    pub scale_base: f32, // viewer: pixels spanned by r1 + r2
}

/// One star, solar units
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct StarConfig {
    pub mass: f64,        // [M_sun]
    pub radius: f64,      // [R_sun]
    pub temperature: f64, // [K]
    pub luminosity: f64,  // [L_sun]
}

/// Which quantities are authoritative for the orbit
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum OrbitConfig {
    SemiMajorAxis { a: f64, e: f64 },             // a [AU]
    Period { p: f64, e: f64 },                    // p [day]
    InitialValues { r12: f64, v0x: f64, v0y: f64 }, // r12 [AU], v0 [km/s]
}

/// Observer orientation, degrees
#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct OrientationConfig {
    #[serde(default)]
    pub raan: f64,
    #[serde(default)]
    pub inc: f64,
    #[serde(default)]
    pub argp: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub stars: Vec<StarConfig>, // must hold exactly two stars
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub orbit: OrbitConfig, // one-key map, e.g. `semi_major_axis: { a, e }`
    #[serde(default)]
    pub orientation: OrientationConfig,
}
