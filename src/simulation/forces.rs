//! Acceleration of the relative two-body state
//!
//! The integrator only ever sees the reduced problem, so a force term maps
//! a relative position to a relative acceleration.

use super::error::{SimError, SimResult};
use super::states::NVec2;

/// Acceleration sources acting on the relative position
pub trait Acceleration {
    /// Relative acceleration at relative position `r`
    fn acceleration(&self, r: &NVec2) -> SimResult<NVec2>;
}

/// Inverse-square attraction, a = -mu r / |r|^3
/// No softening: coincident stars are a hard error
#[derive(Debug, Clone, Copy)]
pub struct KeplerGravity {
    pub mu: f64, // G (m1 + m2)
}

impl Acceleration for KeplerGravity {
    fn acceleration(&self, r: &NVec2) -> SimResult<NVec2> {
        let dist = r.x.hypot(r.y);
        if dist == 0.0 || !dist.is_finite() {
            return Err(SimError::Singularity { separation: dist });
        }
        let dist3 = dist.powi(3);
        Ok(NVec2::new(-self.mu * r.x / dist3, -self.mu * r.y / dist3))
    }
}
