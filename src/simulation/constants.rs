//! Physical constants and unit conversions.
//!
//! Internal units are metres, kilograms, watts and days. Everything that
//! enters through a scenario file is converted with the factors below.

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------
pub const DAY: f64 = 86_400.0; // [s]

// ---------------------------------------------------------------------------
// Physical constants (time measured in days)
// ---------------------------------------------------------------------------
pub const G: f64 = 6.674_30e-11 * DAY * DAY; // [m^3 kg^-1 day^-2]

// ---------------------------------------------------------------------------
// Astronomical units
// ---------------------------------------------------------------------------
pub const AU: f64 = 149_597_870_700.0; // [m]
pub const SOLAR_MASS: f64 = 1.9884e30; // [kg]
pub const SOLAR_RADIUS: f64 = 6.960e8; // [m]
pub const SOLAR_LUMINOSITY: f64 = 3.839e26; // [W]

/// km/s expressed in m/day
pub const KM_PER_S: f64 = 1_000.0 * DAY;

// ---------------------------------------------------------------------------
// Numerical limits
// ---------------------------------------------------------------------------

/// Largest elapsed time [day] the accumulator may reach. Past 2^53 - 1 an
/// f64 no longer resolves whole days.
pub const MAX_ELAPSED: f64 = 9_007_199_254_740_991.0;

/// Largest trail or flux window [samples]
pub const MAX_WINDOW_LEN: usize = 1 << 24;
