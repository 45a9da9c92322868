//! A scripted, purely cosmetic "repository recovery" for the terminal.
//!
//! The [`Script`] is a fixed, ordered list of [`Action`]s. Each action
//! expands into one or more [`ScriptStep`]s, and a [`Sequencer`] plays those
//! steps to any [`std::io::Write`] sink, pausing through a [`Pacer`] between
//! them. Nothing outside the writer is read or modified, whatever the text
//! claims.
//!
//! # Example
//!
//! ```
//! use mayday::{Script, Sequencer, ThreadPacer};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut out = Vec::new();
//! let mut sequencer = Sequencer::new(&mut out, ThreadPacer::new(0.0), StdRng::seed_from_u64(7));
//! let summary = sequencer.play(&Script::recovery()).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Processing credentials.json ... removed"));
//! assert!(text.contains("No content was modified, removed, or altered."));
//! assert_eq!(summary.actions, Script::recovery().actions().len());
//! ```
//!
//! Run it for real with the CLI:
//!
//! ```bash
//! mayday              # real time, about 35 seconds
//! mayday --pace 0.2   # five times faster
//! ```

mod error;
mod script;
mod sequencer;

pub use error::{Error, Result};
pub use script::{
    Action, FILES, LOG_POOL, Script, ScriptStep, TOKEN_RANGE, Trailing, format_token,
};
pub use sequencer::{Pacer, PlaybackSummary, Sequencer, ThreadPacer};
