use solsim::{bench_step, run_2d, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Real-time simulation of the Sun and eight planets")]
struct Args {
    /// Scenario file under `scenarios/`, the built-in solar system when absent
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run the headless benchmark for this many frames instead of opening a window
    #[arg(long)]
    bench: Option<usize>,
}

// load here to keep main clean
fn load_scenario(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let scenario_cfg = ScenarioConfig::from_yaml(&text)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(frames) = args.bench {
        bench_step(frames)?;
        return Ok(());
    }

    let scenario = match &args.file_name {
        Some(name) => Scenario::build_scenario(load_scenario(name)?)?,
        None => Scenario::solar_system()?,
    };

    run_2d(scenario);

    Ok(())
}
