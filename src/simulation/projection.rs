//! Orbital plane -> observer image space
//!
//! A 3-1-3 (node, inclination, periapsis) rotation whose result is
//! `(-imx, imy, -imz)`: image x and y span the sky plane, image z is the
//! line-of-sight depth and grows away from the observer.
//!
//! The orbit normal (0, 0, 1) lands at depth `cos(raan) sin(inc)`, so the
//! all-zero orientation is edge-on and (0, 90 deg, 0) is face-on.

use super::states::NVec3;

/// Observer orientation, radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub raan: f64, // longitude of ascending node
    pub inc: f64,  // inclination
    pub argp: f64, // argument of periapsis
}

impl Orientation {
    pub fn new(raan: f64, inc: f64, argp: f64) -> Self {
        Self { raan, inc, argp }
    }

    pub fn from_degrees(raan: f64, inc: f64, argp: f64) -> Self {
        Self::new(raan.to_radians(), inc.to_radians(), argp.to_radians())
    }

    pub fn is_finite(&self) -> bool {
        self.raan.is_finite() && self.inc.is_finite() && self.argp.is_finite()
    }

    /// Image-space position of an orbital-plane point
    pub fn project(&self, p: &NVec3) -> NVec3 {
        project(p.x, p.y, p.z, self.raan, self.inc, self.argp)
    }

    /// The orbital frame's unit axes seen by the observer (orientation gizmo)
    pub fn basis(&self) -> [NVec3; 3] {
        [NVec3::x(), NVec3::y(), NVec3::z()].map(|axis| self.project(&axis))
    }
}

pub fn project(x: f64, y: f64, z: f64, raan: f64, inc: f64, argp: f64) -> NVec3 {
    let (sin_raan, cos_raan) = (raan.sin(), raan.cos());
    let (sin_inc, cos_inc) = (inc.sin(), inc.cos());
    let (sin_argp, cos_argp) = (argp.sin(), argp.cos());

    let imx = x * (cos_raan * cos_argp - sin_raan * cos_inc * sin_argp)
        - y * (cos_raan * sin_argp + sin_raan * cos_inc * cos_argp)
        + z * sin_raan * sin_inc;
    let imz = x * (sin_raan * cos_argp + cos_raan * cos_inc * sin_argp)
        - y * (sin_raan * sin_argp - cos_raan * cos_inc * cos_argp)
        - z * cos_raan * sin_inc;
    let imy = x * sin_inc * sin_argp + y * sin_inc * cos_argp + z * cos_inc;

    NVec3::new(-imx, imy, -imz)
}
