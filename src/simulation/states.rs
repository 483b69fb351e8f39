//! Core state types for the binary simulation.
//!
//! - `OrbitState` is the reduced (star2 - star1) state, the only quantity
//!   the integrator advances
//! - `StarBody` holds one star's physical constants, its derived kinematics
//!   and its bounded position histories
//!
//! Positions are metres, velocities metres per day.

use std::f64::consts::PI;

use nalgebra::{Vector2, Vector3};

use super::ring::RingBuffer;

pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Which of the two stars a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarId {
    Primary,
    Secondary,
}

impl StarId {
    pub const BOTH: [StarId; 2] = [StarId::Primary, StarId::Secondary];

    pub fn index(self) -> usize {
        match self {
            StarId::Primary => 0,
            StarId::Secondary => 1,
        }
    }

    pub fn other(self) -> StarId {
        match self {
            StarId::Primary => StarId::Secondary,
            StarId::Secondary => StarId::Primary,
        }
    }
}

/// Relative velocity and position in the orbital plane (z = 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub v: NVec2, // relative velocity (vx, vy)
    pub r: NVec2, // relative position (x, y)
}

impl OrbitState {
    pub fn new(vx: f64, vy: f64, x: f64, y: f64) -> Self {
        Self {
            v: NVec2::new(vx, vy),
            r: NVec2::new(x, y),
        }
    }

    pub fn separation(&self) -> f64 {
        self.r.x.hypot(self.r.y)
    }

    /// E = |v|^2 / 2 - mu / |r|
    pub fn specific_energy(&self, mu: f64) -> f64 {
        0.5 * self.v.norm_squared() - mu / self.separation()
    }

    /// L = x vy - y vx
    pub fn angular_momentum(&self) -> f64 {
        self.r.x * self.v.y - self.r.y * self.v.x
    }

    pub fn is_finite(&self) -> bool {
        self.v.iter().chain(self.r.iter()).all(|c| c.is_finite())
    }
}

/// One star of the pair
#[derive(Debug, Clone)]
pub struct StarBody {
    pub mass: f64,        // [kg]
    pub radius: f64,      // [m]
    pub temperature: f64, // [K], only consumed by colour mapping outside the core
    pub luminosity: f64,  // [W]
    pub flux: f64,        // surface flux L / (4 pi R^2)

    pub v: NVec3,                  // barycentric velocity
    pub trail: RingBuffer<NVec3>,  // orbital-plane positions, old to new
    pub img: NVec3,                // current image-space position
    pub img_trail: RingBuffer<NVec3>, // image-space positions, old to new
    pub visible_area: f64,         // unoccluded projected area
}

impl StarBody {
    pub fn new(mass: f64, radius: f64, temperature: f64, luminosity: f64, trail_len: usize) -> Self {
        Self {
            mass,
            radius,
            temperature,
            luminosity,
            flux: luminosity / (4.0 * PI * radius * radius),
            v: NVec3::zeros(),
            trail: RingBuffer::with_capacity(trail_len),
            img: NVec3::zeros(),
            img_trail: RingBuffer::with_capacity(trail_len),
            visible_area: PI * radius * radius,
        }
    }

    /// Projected disk area with nothing in front
    pub fn disk_area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Current orbital-plane position (newest trail sample)
    pub fn position(&self) -> NVec3 {
        self.trail.latest().copied().unwrap_or_else(NVec3::zeros)
    }

    /// Record a new orbital-plane state, z is always 0
    pub fn set_state(&mut self, v: NVec2, x: NVec2) {
        self.v = NVec3::new(v.x, v.y, 0.0);
        self.trail.push(NVec3::new(x.x, x.y, 0.0));
    }

    pub fn clear_trails(&mut self) {
        self.trail.clear();
        self.img_trail.clear();
    }
}
