//! # CLI Behavior
//!
//! This is **one possible UI client** for studyspace, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! ## Session
//!
//! `studyspace` starts a session over the in-memory workspace and reads one
//! command per line from stdin, interactive or piped:
//!
//! ```text
//! go notes
//! new
//! set title Thermodynamics
//! set content Entropy never decreases
//! save
//! search thermo
//! rm 1
//! ```
//!
//! Records are addressed by their 1-based position in the visible list, the
//! same numbers `show` prints. Positions are resolved to ids before anything
//! is dispatched.
//!
//! A failing line prints its error and the session carries on. The process
//! only exits non-zero when setup or stdin fails.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, session line grammar
//! - `commands`: Session loop and per-command handlers
//! - `print`: Output formatting (lists, forms, stats, messages)

mod commands;
mod print;
mod setup;

pub use commands::run;
