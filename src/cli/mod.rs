//! Command implementations for the `egm` binary.

pub mod commands;
