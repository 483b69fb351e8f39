use std::time::Instant;

use crate::simulation::constants::{AU, SOLAR_LUMINOSITY, SOLAR_MASS, SOLAR_RADIUS};
use crate::simulation::driver::Simulation;
use crate::simulation::elements::OrbitParams;
use crate::simulation::error::SimResult;
use crate::simulation::params::{SimConfig, StarParams};
use crate::simulation::projection::Orientation;

/// Helper to build a sun-like pair on a 0.05 AU circular orbit, edge-on
fn make_config(dt: f64, trail_periods: f64) -> SimConfig {
    let sun = StarParams {
        mass: SOLAR_MASS,
        radius: SOLAR_RADIUS,
        temperature: 5_800.0,
        luminosity: SOLAR_LUMINOSITY,
    };
    SimConfig {
        stars: [sun, sun],
        orbit: OrbitParams::SemiMajorAxis { a: 0.05 * AU, e: 0.2 },
        orientation: Orientation::from_degrees(10.0, 5.0, 30.0),
        dt,
        trail_periods,
        flux_periods: 1.0,
    }
}

/// Time raw tick throughput for a few step sizes
pub fn bench_tick() -> SimResult<()> {
    println!("dt_day,ticks,us_per_tick");

    for dt in [1e-2, 1e-3, 1e-4] {
        let mut sim = Simulation::new(make_config(dt, 1.0))?;
        let ticks = 20_000;

        // warm-up
        for _ in 0..100 {
            sim.tick()?;
        }

        let t0 = Instant::now();
        for _ in 0..ticks {
            sim.tick()?;
        }
        let us = t0.elapsed().as_secs_f64() * 1e6 / ticks as f64;

        println!("{dt},{ticks},{us:.4}");
    }
    Ok(())
}

/// Time the paint-order resolution against trail length
/// Paste output directly into a spreadsheet to graph
pub fn bench_paint_order() -> SimResult<()> {
    println!("trail_len,ops,ms");

    for periods in [0.25, 0.5, 1.0, 2.0, 4.0] {
        let mut sim = Simulation::new(make_config(1e-3, periods))?;
        let trail_len = sim.window_samples(periods)?;

        // fill the trail window completely
        for _ in 0..trail_len {
            sim.tick()?;
        }

        let repeats = 20;
        let t0 = Instant::now();
        let mut ops = 0;
        for _ in 0..repeats {
            ops = sim.paint_ops().len();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

        println!("{trail_len},{ops},{ms:.6}");
    }
    Ok(())
}
