// irclogparse - core/mod.rs
//
// Core classification logic.
// Dependencies: standard library, regex, encoding_rs only.
// Must NOT depend on the CLI layer or perform any file I/O directly.

pub mod classify;
pub mod decode;
pub mod export;
pub mod model;
pub mod parser;
pub mod timestamp;
