pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, NVec3, OrbitState, StarBody, StarId};
pub use simulation::error::{SimError, SimResult};
pub use simulation::ring::RingBuffer;
pub use simulation::params::{SimConfig, StarParams};
pub use simulation::elements::{OrbitParams, OrbitalElements};
pub use simulation::forces::{Acceleration, KeplerGravity};
pub use simulation::integrator::{rk4_step, step};
pub use simulation::projection::{project, Orientation};
pub use simulation::eclipse::{overlap_area, relative_flux, visible_areas};
pub use simulation::trail::{paint_order, resolve_segments, DepthPlanes, DepthZone, PaintOp, TrailSegment};
pub use simulation::driver::{RunState, Simulation, Snapshot, TickSample};
pub use simulation::scenario::{Scenario, ViewSettings};

pub use configuration::config::{EngineConfig, OrbitConfig, OrientationConfig, ScenarioConfig, StarConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_paint_order, bench_tick};
