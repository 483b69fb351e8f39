pub mod constants;
pub mod error;
pub mod ring;
pub mod states;
pub mod params;
pub mod elements;
pub mod forces;
pub mod integrator;
pub mod projection;
pub mod eclipse;
pub mod trail;
pub mod driver;
pub mod scenario;
