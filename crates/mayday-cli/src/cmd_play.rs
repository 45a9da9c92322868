use anyhow::{Context, Result};
use clap::Args;
use mayday::{Script, Sequencer, ThreadPacer};
use rand::SeedableRng;
use rand::rngs::StdRng;

const MAX_PACE: f64 = 100.0;

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Seed for the commit tokens and log lines (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay multiplier (0 to 100); 0 plays the script without waiting
    #[arg(long, default_value_t = 1.0, value_parser = parse_pace)]
    pub pace: f64,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    tracing::debug!(seed = ?args.seed, pace = args.pace, "starting playback");

    let stdout = std::io::stdout();
    let mut sequencer = Sequencer::new(stdout.lock(), ThreadPacer::new(args.pace), rng);
    sequencer
        .play(&Script::recovery())
        .context("Failed to play recovery script")?;
    Ok(())
}

fn parse_pace(s: &str) -> std::result::Result<f64, String> {
    let pace: f64 = s
        .parse()
        .map_err(|e| format!("invalid pace {:?}: {}", s, e))?;
    if !pace.is_finite() || pace < 0.0 {
        return Err(format!(
            "pace must be a finite, non-negative number, got {}",
            s
        ));
    }
    if pace > MAX_PACE {
        return Err(format!("pace must be at most {}, got {}", MAX_PACE, s));
    }
    Ok(pace)
}
