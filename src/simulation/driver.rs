//! The per-tick simulation driver
//!
//! `Simulation` owns the canonical state of a run: the reduced orbit state,
//! both stars (with their bounded trails) and the bounded light curve. One
//! `tick` integrates one step, maps the relative state to both stars through
//! the barycentric coefficients, projects them, appends trail samples and
//! appends one relative-flux sample.
//!
//! Every configuration change goes through `&mut self` between ticks, so a
//! tick always sees either the old or the complete new configuration.

use log::{info, warn};

use super::constants::MAX_ELAPSED;
use super::eclipse::{max_flux, relative_flux, visible_areas};
use super::elements::OrbitalElements;
use super::error::{SimError, SimResult};
use super::integrator::step;
use super::params::{check_window_len, window_len, SimConfig};
use super::projection::Orientation;
use super::ring::RingBuffer;
use super::states::{NVec3, OrbitState, StarBody, StarId};
use super::trail::{paint_order, resolve_segments, DepthPlanes, PaintOp, TrailSegment};

/// Whether the external tick source should be calling `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,    // freshly reset, never started
    Running,
    Paused,
}

/// Render-facing state of one star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSnapshot {
    pub star: StarId,
    pub img: NVec3,
    pub radius: f64,
    pub temperature: f64,
    pub visible_area: f64,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSample {
    pub tick: u64,
    pub t: f64, // elapsed [day]
    pub stars: [StarSnapshot; 2],
    pub rel_flux: f64,
}

/// Immutable copy of everything a renderer needs, safe to hand to another task
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub t: f64,
    pub elapsed_periods: f64,
    pub stars: [StarSnapshot; 2],
    pub paint: Vec<PaintOp>,
    pub fluxes: Vec<f64>,
    pub flux_window_full: bool,
    pub basis: [NVec3; 3],
}

#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,          // last committed, valid configuration
    elements: OrbitalElements,  // derived from `config.orbit`
    mu: f64,                    // G (m1 + m2)
    coefs: [f64; 2],            // barycentric coefficients
    state: OrbitState,          // relative state
    stars: [StarBody; 2],
    fluxes: RingBuffer<f64>,
    max_flux: f64,              // fixed at reset
    tick: u64,
    t: f64,                     // elapsed [day]
    run_state: RunState,
}

impl Simulation {
    /// Validate `config` and build a run at t = 0
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let mu = config.mu();
        let elements = config.orbit.derive(mu)?;
        let trail_len = window_len(config.trail_periods, elements.p, config.dt)?;
        let flux_len = window_len(config.flux_periods, elements.p, config.dt)?;

        let stars = config
            .stars
            .map(|s| StarBody::new(s.mass, s.radius, s.temperature, s.luminosity, trail_len));

        let mut sim = Self {
            coefs: config.coefs(),
            max_flux: max_flux(config.stars[0].luminosity, config.stars[1].luminosity),
            config,
            elements,
            mu,
            state: elements.initial_state(),
            stars,
            fluxes: RingBuffer::with_capacity(flux_len),
            tick: 0,
            t: 0.0,
            run_state: RunState::Idle,
        };
        sim.rewind();

        info!(
            "reset: {} mode, a = {:.6e} m, e = {:.6}, p = {:.6} day, dt = {} day, trail = {} samples, flux = {} samples",
            sim.config.orbit.mode(), elements.a, elements.e, elements.p, sim.config.dt, trail_len, flux_len
        );
        Ok(sim)
    }

    /// Replace the configuration. On error nothing changes and the current
    /// run stays active.
    pub fn reset(&mut self, config: SimConfig) -> SimResult<()> {
        match Self::new(config) {
            Ok(fresh) => {
                *self = fresh;
                Ok(())
            }
            Err(err) => {
                warn!("reset rejected, keeping previous configuration: {err}");
                Err(err)
            }
        }
    }

    /// Restart the committed configuration from t = 0
    pub fn restart(&mut self) {
        self.rewind();
    }

    /// Reinitialise all derived state from the already-derived elements
    fn rewind(&mut self) {
        self.tick = 0;
        self.t = 0.0;
        self.state = self.elements.initial_state();
        self.run_state = RunState::Idle;

        for star in self.stars.iter_mut() {
            star.clear_trails();
        }
        self.fluxes.clear();
        self.apply_state();
        self.push_flux();
    }

    /// Map the relative state onto both stars and project them
    fn apply_state(&mut self) {
        for (star, coef) in self.stars.iter_mut().zip(self.coefs) {
            star.set_state(self.state.v * coef, self.state.r * coef);
            star.img = self.config.orientation.project(&star.position());
            star.img_trail.push(star.img);
        }
    }

    /// Recompute visible areas and append one light-curve sample
    fn push_flux(&mut self) -> f64 {
        let [s1, s2] = &self.stars;
        let d = (s1.img.x - s2.img.x).hypot(s1.img.y - s2.img.y);
        let (area1, area2) = visible_areas(s1.radius, s2.radius, d, s1.img.z, s2.img.z);
        self.stars[0].visible_area = area1;
        self.stars[1].visible_area = area2;

        let flux = relative_flux(
            [self.stars[0].flux, self.stars[1].flux],
            [area1, area2],
            self.max_flux,
        );
        self.fluxes.push(flux);
        flux
    }

    /// Advance one step of `dt`
    pub fn tick(&mut self) -> SimResult<TickSample> {
        let t_next = self.t + self.config.dt;
        let tick_next = self.tick.checked_add(1);
        let Some(tick_next) = tick_next.filter(|_| t_next.is_finite() && t_next < MAX_ELAPSED) else {
            let err = SimError::Overflow { tick: self.tick };
            warn!("{err}, restarting run");
            self.restart();
            return Err(err);
        };

        self.state = match step(&self.state, self.config.dt, self.mu) {
            Ok(next) => next,
            Err(err) => {
                warn!("tick {} failed: {err}, restarting run", tick_next);
                self.restart();
                return Err(err);
            }
        };

        self.tick = tick_next;
        self.t = t_next;
        self.apply_state();
        let rel_flux = self.push_flux();

        Ok(TickSample {
            tick: self.tick,
            t: self.t,
            stars: self.star_snapshots(),
            rel_flux,
        })
    }

    /// Re-orient the observer without re-integrating: image positions and
    /// image trails are rebuilt from the orbital-plane history, and the light
    /// curve starts over from the current state. Non-finite angles are
    /// rejected and leave everything as it was.
    pub fn set_orientation(&mut self, orientation: Orientation) -> SimResult<()> {
        if !orientation.is_finite() {
            let err = SimError::config("orientation angles must be finite");
            warn!("orientation change rejected: {err}");
            return Err(err);
        }
        self.config.orientation = orientation;
        for star in self.stars.iter_mut() {
            star.img = orientation.project(&star.position());
            star.img_trail.clear();
            for p in star.trail.iter() {
                star.img_trail.push(orientation.project(p));
            }
        }
        self.fluxes.clear();
        self.push_flux();
        info!(
            "orientation set to ({:.3}, {:.3}, {:.3}) deg",
            orientation.raan.to_degrees(),
            orientation.inc.to_degrees(),
            orientation.argp.to_degrees()
        );
        Ok(())
    }

    /// Resize the light-curve window, keeping the newest samples
    pub fn rescale_flux_window(&mut self, new_len: usize) -> SimResult<()> {
        check_window_len("flux", new_len)?;
        self.fluxes.set_capacity(new_len);
        info!("flux window set to {new_len} samples");
        Ok(())
    }

    /// Resize both trail windows, keeping the newest samples
    pub fn set_trail_len(&mut self, new_len: usize) -> SimResult<()> {
        check_window_len("trail", new_len)?;
        for star in self.stars.iter_mut() {
            star.trail.set_capacity(new_len);
            star.img_trail.set_capacity(new_len);
        }
        info!("trail window set to {new_len} samples");
        Ok(())
    }

    /// Sample count covering `periods` orbital periods of the current orbit
    pub fn window_samples(&self, periods: f64) -> SimResult<usize> {
        window_len(periods, self.elements.p, self.config.dt)
    }

    pub fn start(&mut self) {
        self.run_state = RunState::Running;
    }

    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn orbit_state(&self) -> &OrbitState {
        &self.state
    }

    pub fn stars(&self) -> &[StarBody; 2] {
        &self.stars
    }

    pub fn star(&self, id: StarId) -> &StarBody {
        &self.stars[id.index()]
    }

    pub fn fluxes(&self) -> &RingBuffer<f64> {
        &self.fluxes
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Elapsed simulation time [day]
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    /// Elapsed simulation time in orbital periods
    pub fn elapsed_periods(&self) -> f64 {
        self.t / self.elements.p
    }

    /// Projected orbital-frame axes for the orientation display
    pub fn basis(&self) -> [NVec3; 3] {
        self.config.orientation.basis()
    }

    /// m1 pos1 + m2 pos2, zero up to rounding
    pub fn barycenter_offset(&self) -> NVec3 {
        self.stars
            .iter()
            .map(|s| s.position() * s.mass)
            .fold(NVec3::zeros(), |acc, p| acc + p)
    }

    fn planes(&self) -> DepthPlanes {
        let [s1, s2] = &self.stars;
        DepthPlanes::new([s1.img.z, s2.img.z], [s1.radius, s2.radius])
    }

    fn img_trails(&self) -> [&RingBuffer<NVec3>; 2] {
        [&self.stars[0].img_trail, &self.stars[1].img_trail]
    }

    /// Depth-zoned trail segments of the current frame
    pub fn segments(&self) -> Vec<TrailSegment> {
        resolve_segments(self.img_trails(), &self.planes())
    }

    /// Paint list of the current frame
    pub fn paint_ops(&self) -> Vec<PaintOp> {
        paint_order(self.img_trails(), &self.planes())
    }

    fn star_snapshots(&self) -> [StarSnapshot; 2] {
        StarId::BOTH.map(|id| {
            let s = &self.stars[id.index()];
            StarSnapshot {
                star: id,
                img: s.img,
                radius: s.radius,
                temperature: s.temperature,
                visible_area: s.visible_area,
            }
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            t: self.t,
            elapsed_periods: self.elapsed_periods(),
            stars: self.star_snapshots(),
            paint: self.paint_ops(),
            fluxes: self.fluxes.to_vec(),
            flux_window_full: self.fluxes.is_full(),
            basis: self.basis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::constants::{AU, SOLAR_LUMINOSITY, SOLAR_MASS, SOLAR_RADIUS};
    use crate::simulation::elements::OrbitParams;
    use crate::simulation::params::StarParams;

    fn sun_pair() -> SimConfig {
        let sun = StarParams {
            mass: SOLAR_MASS,
            radius: SOLAR_RADIUS,
            temperature: 5_800.0,
            luminosity: SOLAR_LUMINOSITY,
        };
        SimConfig {
            stars: [sun, sun],
            orbit: OrbitParams::SemiMajorAxis { a: 0.05 * AU, e: 0.0 },
            orientation: Orientation::default(),
            dt: 0.01,
            trail_periods: 1.0,
            flux_periods: 1.0,
        }
    }

    #[test]
    fn collision_rewinds_and_reports_singularity() {
        let mut sim = Simulation::new(sun_pair()).unwrap();
        sim.start();
        for _ in 0..5 {
            sim.tick().unwrap();
        }

        // stars on top of each other
        sim.state = OrbitState::new(0.0, 0.0, 0.0, 0.0);
        let result = sim.tick();
        assert!(matches!(result, Err(SimError::Singularity { .. })), "got {result:?}");

        assert_eq!(sim.tick_count(), 0);
        assert_eq!(sim.elapsed(), 0.0);
        assert_eq!(sim.run_state(), RunState::Idle);
        assert_eq!(*sim.orbit_state(), sim.elements().initial_state());
        assert_eq!(sim.fluxes().len(), 1);
        assert_eq!(sim.star(StarId::Primary).trail.len(), 1);

        // the rewound run integrates normally again
        assert!(sim.tick().is_ok());
    }
}
