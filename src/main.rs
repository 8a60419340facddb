//! Flappy Cat headless runner
//!
//! Plays a few demo runs with the autopilot through the same input and
//! fixed-step path a windowed host would use, then prints the session
//! leaderboard and the final game snapshot.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use flappy_cat::GameConfig;
    use flappy_cat::platform::demo::{self, DEMO_RUNS};

    #[derive(Debug, Parser)]
    #[command(name = "flappy-cat")]
    #[command(about = "Play Flappy Cat headless with the autopilot")]
    struct Args {
        /// JSON game config; built-in defaults when omitted
        config: Option<PathBuf>,
        /// Seed for pipe gap placement
        #[arg(long, default_value_t = 0x5eed_ca75)]
        seed: u64,
        /// Runs to play before exiting
        #[arg(long, default_value_t = DEMO_RUNS)]
        runs: u32,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();
        let config = match &args.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        let report = demo::play(config, args.seed, args.runs)?;

        println!("Session best: {}", report.state.high_score());
        for (i, entry) in report.leaderboard.entries.iter().enumerate() {
            println!(
                "{:>2}. {:>4} pipes  {:>6} ticks  (run {})",
                i + 1,
                entry.score,
                entry.ticks,
                entry.run
            );
        }
        println!("{}", serde_json::to_string_pretty(&report.state.snapshot())?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Cat (headless) starting...");

    if let Err(e) = headless::run() {
        log::error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive the library directly
}
