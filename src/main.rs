use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;

use grid_traffic::simulation::{DriverConfig, SimCity, SimulationDriver, TerminalSink};

#[derive(Parser)]
#[command(name = "grid_traffic")]
#[command(about = "Grid city traffic simulation rendered in the terminal")]
struct Cli {
    /// City width in cells
    #[arg(long, default_value = "51")]
    width: i32,

    /// City height in cells
    #[arg(long, default_value = "21")]
    height: i32,

    /// Number of vehicles to spawn before the first tick
    #[arg(long, default_value = "10")]
    vehicles: u32,

    /// Stop after this many ticks (runs until interrupted when omitted)
    #[arg(long)]
    ticks: Option<u64>,

    /// Delay between ticks in milliseconds
    #[arg(long, default_value = "500")]
    delay_ms: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Don't clear the terminal before each frame
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,grid_traffic=info"),
    )
    .init();

    let cli = Cli::parse();

    let mut city = match cli.seed {
        Some(seed) => SimCity::new_with_seed(cli.width, cli.height, seed),
        None => SimCity::new(cli.width, cli.height),
    }
    .context("Failed to build city")?;

    for _ in 0..cli.vehicles {
        city.spawn_vehicle().context("Failed to spawn vehicle")?;
    }

    let config = DriverConfig {
        tick_delay: Duration::from_millis(cli.delay_ms),
        max_ticks: cli.ticks,
    };
    let mut driver = SimulationDriver::new(city, config);
    let mut sink = TerminalSink::new(std::io::stdout().lock(), !cli.no_clear);

    driver.run(&mut sink)?;
    Ok(())
}
