//! # Studyspace Terminal Client
//!
//! The binary is intentionally thin: the client lives in `cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic. The client owns every
//! user-facing concern: argument parsing, logging setup, reading action
//! lines, error reporting and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
