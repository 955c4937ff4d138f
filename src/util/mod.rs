// irclogparse - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.
// No dependencies on the core or CLI layers.

pub mod constants;
pub mod error;
pub mod logging;
