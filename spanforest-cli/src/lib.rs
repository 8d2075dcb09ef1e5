//! Support library for the spanforest CLI binary.
//!
//! Exposes argument parsing, command execution, and rendering so tests can
//! drive the command pipeline without spawning a subprocess.

pub mod cli;
pub mod logging;
