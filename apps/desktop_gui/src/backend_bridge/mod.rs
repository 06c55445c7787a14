//! Backend worker: owns the tokio runtime and the roster source.

pub mod commands;
pub mod runtime;
