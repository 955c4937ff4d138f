// irclogparse - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "irclogparse";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Classification defaults
// =============================================================================

/// Keywords marking a `***`/`-->` server line as a join event.
///
/// The keyword sets are deliberately configurable (`ClassifyConfig`):
/// different servers and loggers phrase these events differently, and
/// the defaults cover only the phrasings seen in the reference corpus.
pub const DEFAULT_JOIN_KEYWORDS: &[&str] = &["joined"];

/// Keywords marking a `***`/`<--` server line as a departure event.
pub const DEFAULT_PART_KEYWORDS: &[&str] = &["quit", "left"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
