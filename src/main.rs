use ebsim::{bench_paint_order, bench_tick, run_2d, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "equal_suns.yaml")]
    file_name: String,

    /// Run without a window and print the light curve as CSV
    #[arg(long)]
    headless: bool,

    /// Number of ticks in headless mode
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Print timing tables instead of simulating
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, ticks: u64) -> Result<()> {
    let sim = &mut scenario.sim;
    println!("tick,t_day,phase,rel_flux");
    for _ in 0..ticks {
        let sample = sim.tick()?;
        println!("{},{:.6},{:.6},{:.8}", sample.tick, sample.t, sim.elapsed_periods(), sample.rel_flux);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        env_logger::init();
        bench_tick()?;
        bench_paint_order()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    if args.headless {
        env_logger::init();
        let scenario = Scenario::build_scenario(scenario_cfg)?;
        run_headless(scenario, args.ticks)?;
    } else {
        // bevy's LogPlugin picks up `log` records in the viewer
        let scenario = Scenario::build_scenario(scenario_cfg)?;
        run_2d(scenario);
    }

    Ok(())
}
