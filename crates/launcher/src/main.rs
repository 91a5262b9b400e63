// crates/launcher/src/main.rs

mod telemetry;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use engine_core::{App, InputTape, RunOptions};
use engine_shared::GameLogic;
use swarm_game::{PlaneDemo, SwarmConfig, SwarmGame};
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Demo {
    /// Survive the offscreen-spawning swarm.
    Swarm,
    /// Fly an image around the window.
    Plane,
}

#[derive(Parser, Debug)]
#[command(name = "swarm", about = "Top-down pixel demos")]
struct Cli {
    #[arg(value_enum, default_value_t = Demo::Swarm)]
    demo: Demo,

    /// Override the spawn generator seed.
    #[arg(long)]
    seed: Option<u32>,

    /// TOML file overriding any subset of the swarm tunables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding `Resources/`.
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Write the run's per-tick input to this file.
    #[arg(long)]
    record: Option<PathBuf>,

    /// Drive the run from a recorded input tape.
    #[arg(long, conflicts_with = "record")]
    replay: Option<PathBuf>,

    /// Run without a window or audio.
    #[arg(long)]
    headless: bool,

    /// Ticks to simulate when headless; defaults to the replay length.
    #[arg(long, requires = "headless")]
    ticks: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    telemetry::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SwarmConfig::load(path)?,
        None => SwarmConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let replay = cli.replay.as_ref().map(InputTape::load).transpose()?;
    if let Some(tape) = &replay {
        if cli.seed.is_some_and(|seed| seed != tape.seed) {
            warn!(tape_seed = tape.seed, "--seed ignored, replaying with the tape's seed");
        }
        config.seed = tape.seed;
    }
    if cli.headless && cli.ticks.is_none() && replay.is_none() {
        return Err("--headless needs --ticks or --replay".into());
    }

    info!(demo = ?cli.demo, seed = config.seed, "starting");
    let options = RunOptions {
        asset_root: cli.assets.clone(),
        replay,
        record: cli.record.clone().map(|path| (config.seed, path)),
    };

    let game: Box<dyn GameLogic> = match cli.demo {
        Demo::Swarm => Box::new(SwarmGame::new(config)),
        Demo::Plane => Box::new(PlaneDemo::default()),
    };
    let app = App::new(game, options);

    if cli.headless {
        let report = app.run_headless(cli.ticks)?;
        println!("ticks: {}", report.ticks);
        for (key, value) in &report.summary {
            println!("{key}: {value}");
        }
    } else {
        app.run()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_headless_seeded_run() {
        let cli = Cli::try_parse_from(["swarm", "--seed", "99", "--headless", "--ticks", "600"]).unwrap();
        assert_eq!(cli.demo, Demo::Swarm);
        assert_eq!(cli.seed, Some(99));
        assert_eq!(cli.ticks, Some(600));
        assert!(cli.headless);
    }

    #[test]
    fn record_and_replay_are_exclusive() {
        assert!(Cli::try_parse_from(["swarm", "--record", "a.tape", "--replay", "b.tape"]).is_err());
        assert!(Cli::try_parse_from(["swarm", "plane", "--ticks", "5"]).is_err());
    }
}
