use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Files the recovery pretends to remove, in display order.
pub const FILES: [&str; 5] = [
    "main.py",
    "config.yaml",
    "credentials.json",
    ".env",
    "db_dump.sql",
];

/// Log lines picked at random during the reconstruction burst.
pub const LOG_POOL: [&str; 4] = [
    "[2198] index checksum mismatch",
    "[3321] dangling head reference",
    "[9012] null pointer in revision tree",
    "[1004] unresolved submodule binding",
];

/// Range the fake commit tokens are drawn from.
pub const TOKEN_RANGE: RangeInclusive<u32> = 10_000..=99_999;

/// What is written after a step's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    /// End the line.
    Newline,
    /// Return to the start of the line so the next step draws over it.
    Overwrite,
    /// Nothing; the next step continues on the same line.
    Inline,
}

impl Trailing {
    pub fn terminator(self) -> &'static str {
        match self {
            Trailing::Newline => "\n",
            Trailing::Overwrite => "\r",
            Trailing::Inline => "",
        }
    }
}

/// A single atomic write followed by a pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub text: String,
    pub delay: Duration,
    pub trailing: Trailing,
}

impl ScriptStep {
    pub fn line(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
            trailing: Trailing::Newline,
        }
    }

    pub fn inline(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
            trailing: Trailing::Inline,
        }
    }

    pub fn overwrite(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
            trailing: Trailing::Overwrite,
        }
    }

    /// A step that writes nothing and only waits.
    pub fn pause(delay: Duration) -> Self {
        Self::inline(String::new(), delay)
    }

    /// Everything this step puts on the wire, terminator included.
    pub fn rendered(&self) -> String {
        format!("{}{}", self.text, self.trailing.terminator())
    }
}

/// One entry of the script. Randomized content is only resolved in
/// [`Action::expand`], so a [`Script`] itself is fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print a line, then wait.
    Say { text: &'static str, delay: Duration },
    /// Wait without printing.
    Pause(Duration),
    /// "Processing <file> ..." then " removed" once per file.
    Purge {
        files: &'static [&'static str],
        interval: Duration,
    },
    /// Commit lines carrying random hex tokens.
    Reassign { count: usize, interval: Duration },
    /// Lines drawn uniformly from a fixed pool.
    LogBurst {
        pool: &'static [&'static str],
        count: usize,
        interval: Duration,
    },
    /// A label followed by dots printed one at a time, then a suffix.
    Progress {
        label: &'static str,
        dots: usize,
        interval: Duration,
        suffix: &'static str,
    },
    /// "Unlocking in N seconds..." redrawn in place from `from` down to 1.
    Countdown { from: u32, interval: Duration },
}

impl Action {
    /// Short name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Say { .. } => "say",
            Action::Pause(_) => "pause",
            Action::Purge { .. } => "purge",
            Action::Reassign { .. } => "reassign",
            Action::LogBurst { .. } => "log-burst",
            Action::Progress { .. } => "progress",
            Action::Countdown { .. } => "countdown",
        }
    }

    /// Turn this action into the concrete steps to play.
    pub fn expand<R: Rng>(&self, rng: &mut R) -> Vec<ScriptStep> {
        match *self {
            Action::Say { text, delay } => vec![ScriptStep::line(text, delay)],
            Action::Pause(delay) => vec![ScriptStep::pause(delay)],
            Action::Purge { files, interval } => files
                .iter()
                .flat_map(|file| {
                    [
                        ScriptStep::inline(format!("Processing {} ...", file), interval),
                        ScriptStep::line(" removed", Duration::ZERO),
                    ]
                })
                .collect(),
            Action::Reassign { count, interval } => (0..count)
                .map(|_| {
                    let token = format_token(rng.random_range(TOKEN_RANGE));
                    ScriptStep::line(
                        format!("Reassigning commit {}  ->  discarded", token),
                        interval,
                    )
                })
                .collect(),
            Action::LogBurst {
                pool,
                count,
                interval,
            } => (0..count)
                .filter_map(|_| pool.choose(&mut *rng))
                .map(|line| ScriptStep::line(*line, interval))
                .collect(),
            Action::Progress {
                label,
                dots,
                interval,
                suffix,
            } => {
                let mut steps = Vec::with_capacity(dots + 2);
                steps.push(ScriptStep::inline(label, Duration::ZERO));
                steps.extend((0..dots).map(|_| ScriptStep::inline(".", interval)));
                steps.push(ScriptStep::line(suffix, Duration::ZERO));
                steps
            }
            Action::Countdown { from, interval } => (1..=from)
                .rev()
                .map(|i| {
                    ScriptStep::overwrite(format!("Unlocking in {} seconds...", i), interval)
                })
                .collect(),
        }
    }
}

/// Render a token the way commit ids are shown: `0x`-prefixed lowercase hex.
pub fn format_token(value: u32) -> String {
    format!("{:#x}", value)
}

/// A fixed, ordered list of actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    actions: Vec<Action>,
}

impl Script {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// The emergency recovery sequence, start to closing banner.
    pub fn recovery() -> Self {
        let say = |text, millis| Action::Say {
            text,
            delay: Duration::from_millis(millis),
        };

        Self::new(vec![
            say("Initializing emergency maintenance protocol...\n", 1200),
            say("Scanning repository state...", 1500),
            say("\n❗ Anomalies found in commit chain!", 1200),
            say("Attempting automated recovery...", 1500),
            Action::Purge {
                files: &FILES,
                interval: Duration::from_millis(700),
            },
            Action::Pause(Duration::from_millis(1200)),
            say("\n⚠️  Commit ledger rewrite initiated...", 1500),
            Action::Reassign {
                count: 5,
                interval: Duration::from_millis(600),
            },
            say("\n⚠️  Repository reconstruction in progress...", 2000),
            Action::LogBurst {
                pool: &LOG_POOL,
                count: 10,
                interval: Duration::from_millis(150),
            },
            Action::Progress {
                label: "\nFilesystem regeneration sequence...",
                dots: 15,
                interval: Duration::from_millis(250),
                suffix: " completed",
            },
            say("\n\nInteraction locked to prevent interruptions.", 0),
            Action::Countdown {
                from: 5,
                interval: Duration::from_secs(1),
            },
            say("\n\nIntegrity check in progress...", 1500),
            say("Restoring data snapshots...", 1300),
            say("Rebuilding version timeline...", 1200),
            say("Recovering configuration states...", 1500),
            say("\n🟢 All systems returned to expected state.", 800),
            say("🟢 Repository integrity verified.", 800),
            say("🟢 Project structure confirmed intact.", 1200),
            say("\n-------------------------------------------------", 0),
            say("Everything shown above was simulated.", 0),
            say("No content was modified, removed, or altered.", 0),
            say("-------------------------------------------------\n", 0),
        ])
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Expand every action, in order.
    pub fn steps<R: Rng>(&self, rng: &mut R) -> Vec<ScriptStep> {
        self.actions
            .iter()
            .flat_map(|action| action.expand(rng))
            .collect()
    }
}
