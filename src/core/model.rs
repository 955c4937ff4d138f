// irclogparse - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// pattern-matching logic.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;

// =============================================================================
// Category
// =============================================================================

/// Closed set of semantic categories a transcript line can fall into.
///
/// Every non-empty line maps to exactly one of these; `Other` is the
/// catch-all for lines no pattern recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Comment,
    Action,
    Join,
    Part,
    NickChange,
    Server,
    Other,
}

impl Category {
    /// Returns all variants in classification priority order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Comment,
            Category::Action,
            Category::Join,
            Category::Part,
            Category::NickChange,
            Category::Server,
            Category::Other,
        ]
    }

    /// Canonical uppercase tag for display and export.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Comment => "COMMENT",
            Category::Action => "ACTION",
            Category::Join => "JOIN",
            Category::Part => "PART",
            Category::NickChange => "NICKCHANGE",
            Category::Server => "SERVER",
            Category::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Event (category-specific payload)
// =============================================================================

/// Category-specific data extracted from a classified line.
///
/// `Comment` and `NickChange` carry structured fields; every other
/// variant carries the line remainder verbatim (after timestamp removal,
/// before any category-specific trimming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    /// A channel message: speaker nickname (metadata stripped) and the
    /// message text.
    Comment { nick: String, message: String },

    /// A `/me` action line, star included.
    Action(String),

    /// Someone joined a channel.
    Join(String),

    /// Someone quit or left a channel.
    Part(String),

    /// A nickname change: full line text plus the old and new nicks.
    NickChange {
        text: String,
        old_nick: String,
        new_nick: String,
    },

    /// Informational server message (catch-all for `***`/`---` lines).
    Server(String),

    /// Anything no other pattern recognised.
    Other(String),
}

impl Event {
    /// The category tag for this payload.
    pub fn category(&self) -> Category {
        match self {
            Event::Comment { .. } => Category::Comment,
            Event::Action(_) => Category::Action,
            Event::Join(_) => Category::Join,
            Event::Part(_) => Category::Part,
            Event::NickChange { .. } => Category::NickChange,
            Event::Server(_) => Category::Server,
            Event::Other(_) => Category::Other,
        }
    }
}

// =============================================================================
// Record (one classified line)
// =============================================================================

/// One classified transcript line.
///
/// Exactly one `Record` is produced per non-empty input line; empty lines
/// produce none. Records are independent of each other — classification
/// never looks at neighbouring lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// The verbatim timestamp substring recognised at the start of the
    /// line (brackets excluded), or `None` if no format matched. Never
    /// reformatted or parsed into a structured date/time.
    pub timestamp: Option<String>,

    /// The category-specific payload.
    pub event: Event,
}

impl Record {
    /// Convenience accessor for the category tag.
    pub fn category(&self) -> Category {
        self.event.category()
    }
}
