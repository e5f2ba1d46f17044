//! Command-line configuration.

use clap::Parser;

use nova_sim::engine::SimConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "nova-defense", about = "Headless missile defense simulation")]
pub struct Cli {
    /// RNG seed; the same seed and commands replay the same game.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Ticks to run in synchronous mode.
    #[arg(long, default_value_t = 3_600)]
    pub ticks: u64,

    /// Run the threaded 60Hz loop instead of the synchronous runner.
    #[arg(long)]
    pub realtime: bool,

    /// Wall-clock duration of a realtime run.
    #[arg(long, default_value_t = 10.0)]
    pub seconds: f64,

    /// Print the final snapshot as JSON.
    #[arg(long)]
    pub json: bool,

    /// Start the game but issue no further commands.
    #[arg(long)]
    pub no_autopilot: bool,

    /// Log filter, overrides RUST_LOG (e.g. `debug`, `nova_sim=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn sim_config(&self) -> SimConfig {
        SimConfig { seed: self.seed }
    }
}
