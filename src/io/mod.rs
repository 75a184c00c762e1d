//! Process-facing helpers for the binary

pub mod exit_code;

pub use exit_code::ExitCode;
