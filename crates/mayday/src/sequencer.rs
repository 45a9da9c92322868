use std::io::Write;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::script::{Script, ScriptStep};

/// Blocks the calling thread between steps.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Sleeps on the current thread, scaling every delay by a fixed factor.
#[derive(Debug, Clone, Copy)]
pub struct ThreadPacer {
    scale: f64,
}

impl ThreadPacer {
    /// A scale of `1.0` is real time and `0.0` skips waiting entirely.
    /// Negative or non-finite scales are treated as `0.0`.
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            0.0
        };
        Self { scale }
    }

    pub fn real_time() -> Self {
        Self::new(1.0)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn scaled(&self, delay: Duration) -> Duration {
        if self.scale == 1.0 {
            return delay;
        }
        match Duration::try_from_secs_f64(delay.as_secs_f64() * self.scale) {
            Ok(scaled) => scaled,
            Err(e) => {
                warn!(?delay, scale = self.scale, error = %e, "scaled delay out of range, saturating");
                Duration::MAX
            }
        }
    }
}

impl Default for ThreadPacer {
    fn default() -> Self {
        Self::real_time()
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if delay.is_zero() || self.scale == 0.0 {
            return;
        }
        std::thread::sleep(self.scaled(delay));
    }
}

/// Totals reported after a full playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    pub actions: usize,
    pub steps: usize,
    /// Sum of the delays the script asked for, before any pacing scale.
    pub scripted_delay: Duration,
}

/// Plays a [`Script`] to a writer, one step at a time, in order.
pub struct Sequencer<W, P, R> {
    out: W,
    pacer: P,
    rng: R,
}

impl<W: Write, P: Pacer, R: Rng> Sequencer<W, P, R> {
    pub fn new(out: W, pacer: P, rng: R) -> Self {
        Self { out, pacer, rng }
    }

    /// Run every action of `script` exactly once. Stops at the first
    /// output failure.
    pub fn play(&mut self, script: &Script) -> Result<PlaybackSummary> {
        info!(actions = script.actions().len(), "playing recovery script");

        let mut summary = PlaybackSummary {
            actions: 0,
            steps: 0,
            scripted_delay: Duration::ZERO,
        };

        for (index, action) in script.actions().iter().enumerate() {
            debug!(index, kind = action.kind(), "action");
            for step in action.expand(&mut self.rng) {
                self.play_step(&step)?;
                summary.steps += 1;
                summary.scripted_delay += step.delay;
            }
            summary.actions += 1;
        }

        info!(
            steps = summary.steps,
            scripted_ms = summary.scripted_delay.as_millis() as u64,
            "recovery script finished"
        );
        Ok(summary)
    }

    /// Write one step, flush so partial lines show up, then wait.
    pub fn play_step(&mut self, step: &ScriptStep) -> Result<()> {
        self.out.write_all(step.text.as_bytes())?;
        self.out.write_all(step.trailing.terminator().as_bytes())?;
        self.out.flush()?;
        self.pacer.pause(step.delay);
        Ok(())
    }

    pub fn into_inner(self) -> (W, P, R) {
        (self.out, self.pacer, self.rng)
    }
}
