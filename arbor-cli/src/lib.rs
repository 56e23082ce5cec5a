//! Support library for the arbor CLI binary.
//!
//! Exposes the CLI and logging modules so doctests and integration tests can
//! exercise the benchmark pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
