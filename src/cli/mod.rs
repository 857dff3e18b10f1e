//! Command implementations behind the `kgraph` binary.

pub mod commands;
