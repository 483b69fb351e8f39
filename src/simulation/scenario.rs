//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing, human units) and produces:
//! - a validated `SimConfig` in SI units / days / radians
//! - a `Scenario` runtime bundle holding the running `Simulation` and the
//!   viewer settings
//!
//! `Scenario` is inserted into Bevy as a `Resource` and driven by the
//! viewer's fixed-timestep systems.

use bevy::prelude::Resource;

use crate::configuration::config::{OrbitConfig, ScenarioConfig, StarConfig};
use crate::simulation::constants::{AU, KM_PER_S, SOLAR_LUMINOSITY, SOLAR_MASS, SOLAR_RADIUS};
use crate::simulation::driver::Simulation;
use crate::simulation::elements::OrbitParams;
use crate::simulation::error::{SimError, SimResult};
use crate::simulation::params::{SimConfig, StarParams};
use crate::simulation::projection::Orientation;

/// Viewer-only settings carried next to the simulation
#[derive(Debug, Clone, Copy)]
pub struct ViewSettings {
    pub tick_interval_ms: u64,
    pub scale_base: f32,
}

/// Bevy resource representing a running scenario
#[derive(Resource)]
pub struct Scenario {
    pub sim: Simulation,
    pub view: ViewSettings,
}

impl StarConfig {
    fn to_params(self) -> StarParams {
        StarParams {
            mass: self.mass * SOLAR_MASS,
            radius: self.radius * SOLAR_RADIUS,
            temperature: self.temperature,
            luminosity: self.luminosity * SOLAR_LUMINOSITY,
        }
    }
}

impl OrbitConfig {
    fn to_params(self) -> OrbitParams {
        match self {
            OrbitConfig::SemiMajorAxis { a, e } => OrbitParams::SemiMajorAxis { a: a * AU, e },
            OrbitConfig::Period { p, e } => OrbitParams::Period { p, e },
            OrbitConfig::InitialValues { r12, v0x, v0y } => OrbitParams::InitialValues {
                r12: r12 * AU,
                v0x: v0x * KM_PER_S,
                v0y: v0y * KM_PER_S,
            },
        }
    }
}

impl SimConfig {
    /// Convert a YAML scenario into runtime units
    pub fn from_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        let [s1, s2] = cfg.stars.as_slice() else {
            return Err(SimError::Configuration(format!(
                "a scenario needs exactly two stars, got {}",
                cfg.stars.len()
            )));
        };

        let o = cfg.orientation;
        let config = SimConfig {
            stars: [s1.to_params(), s2.to_params()],
            orbit: cfg.orbit.to_params(),
            orientation: Orientation::from_degrees(o.raan, o.inc, o.argp),
            dt: cfg.engine.dt,
            trail_periods: cfg.engine.trail_periods,
            flux_periods: cfg.engine.flux_periods,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let config = SimConfig::from_scenario(&cfg)?;
        let sim = Simulation::new(config)?;

        let view = ViewSettings {
            tick_interval_ms: cfg.engine.tick_interval_ms.max(1),
            scale_base: cfg.engine.scale_base,
        };

        Ok(Self { sim, view })
    }
}
