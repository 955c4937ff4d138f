// irclogparse - lib.rs
//
// Library entry point, exposing the classification core and utility
// modules for integration testing and programmatic use.
//
// The CLI-specific demo loop lives in `main.rs` and is not part of the
// library surface.

pub mod core;
pub mod util;
