use solsim::{GnuplotSink, NullSink, FrameSink, Scenario, ScenarioConfig, Simulation};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file; bare names are looked up in the bundled `scenarios/` directory
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: PathBuf,

    /// Override the gif written by gnuplot
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Simulate without launching gnuplot
    #[arg(long)]
    no_render: bool,
}

fn scenario_path(file_name: PathBuf) -> PathBuf {
    if file_name.exists() {
        return file_name;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let config_path = scenario_path(args.file_name.clone());
    let mut scenario_cfg = ScenarioConfig::from_yaml_file(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    if let Some(output) = &args.output {
        scenario_cfg.render.output = output.clone();
    }

    Ok(Scenario::build_scenario(scenario_cfg)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let scenario = load_scenario(&args)?;

    // A missing gnuplot is not fatal; the run still happens
    let mut sink: Box<dyn FrameSink> = if args.no_render {
        Box::new(NullSink)
    } else {
        match GnuplotSink::spawn(&scenario.render, scenario.parameters.size) {
            Ok(sink) => Box::new(sink),
            Err(err) => {
                warn!("{err}; running without output");
                Box::new(NullSink)
            }
        }
    };

    let mut simulation = Simulation::new(scenario);
    let summary = simulation.run(sink.as_mut());

    if summary.sink_failed {
        warn!("animation output is incomplete");
    }

    Ok(())
}
