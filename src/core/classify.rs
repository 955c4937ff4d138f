// irclogparse - core/classify.rs
//
// Category classification of a (timestamp-stripped) line remainder.
// An ordered list of pattern rules is applied; the first rule whose
// pattern matches wins and no later rule is considered. Classification
// never fails: a line no rule recognises is reported as Other.

use crate::core::model::Event;
use regex::Regex;
use std::sync::OnceLock;

/// Configuration for classification.
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Dircproxy prefixes comment messages with `+` (said through the
    /// proxy) or `-` (replayed). When enabled, exactly one such leading
    /// character is stripped from each comment message.
    pub dircproxy: bool,

    /// Keywords that mark a `***`/`-->` server line as a join event.
    pub join_keywords: Vec<String>,

    /// Keywords that mark a `***`/`<--` server line as a departure event.
    pub part_keywords: Vec<String>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        use crate::util::constants;
        Self {
            dircproxy: false,
            join_keywords: constants::DEFAULT_JOIN_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            part_keywords: constants::DEFAULT_PART_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Classify a line remainder into its category-specific payload.
///
/// Rule priority: Comment, Action, Join, Part, NickChange, Server, Other.
/// Join/Part/NickChange are more specific than the Server catch-all and
/// share its leading markers, so a `***` line failing all three still
/// lands on Server rather than Other.
pub fn classify(remainder: &str, config: &ClassifyConfig) -> Event {
    static COMMENT: OnceLock<Regex> = OnceLock::new();
    static ACTION: OnceLock<Regex> = OnceLock::new();
    static JOIN_MARKER: OnceLock<Regex> = OnceLock::new();
    static PART_MARKER: OnceLock<Regex> = OnceLock::new();
    static SERVER_MARKER: OnceLock<Regex> = OnceLock::new();
    static NICK_CHANGE: OnceLock<Regex> = OnceLock::new();

    fn re(cell: &'static OnceLock<Regex>, pat: &str) -> &'static Regex {
        cell.get_or_init(|| Regex::new(pat).expect("classify: invalid regex"))
    }

    // Rule 1: COMMENT — "<nick> message". The nick field may carry
    // user/host metadata after `!`; only the part before the first `!`
    // is the nickname.
    if let Some(caps) = re(&COMMENT, r"^<([^>]*)> (.*)$").captures(remainder) {
        let nick = caps[1].split('!').next().unwrap_or("").to_string();
        let mut message = caps[2].to_string();
        if config.dircproxy && (message.starts_with('+') || message.starts_with('-')) {
            // Strip at most one flag character, never more.
            message.remove(0);
        }
        return Event::Comment { nick, message };
    }

    // Rule 2: ACTION — exactly one `*` followed directly by whitespace.
    // Two or more consecutive stars belong to the server-style rules below.
    if re(&ACTION, r"^\*[ \t]").is_match(remainder) {
        return Event::Action(remainder.to_string());
    }

    let contains_any = |keywords: &[String]| keywords.iter().any(|kw| remainder.contains(kw.as_str()));

    // Rule 3: JOIN — `***` or `-->` marker plus a join keyword.
    if re(&JOIN_MARKER, r"^(?:\*\*\*|-->)\s").is_match(remainder)
        && contains_any(&config.join_keywords)
    {
        return Event::Join(remainder.to_string());
    }

    // Rule 4: PART — `***` or `<--` marker plus a quit/leave keyword.
    if re(&PART_MARKER, r"^(?:\*\*\*|<--)\s").is_match(remainder)
        && contains_any(&config.part_keywords)
    {
        return Event::Part(remainder.to_string());
    }

    // Rules 5 and 6 share the `***`/`---` markers; the nick-change phrase
    // is checked first, everything else is an informational server line.
    if re(&SERVER_MARKER, r"^(?:\*\*\*|---)\s").is_match(remainder) {
        // Rule 5: NICKCHANGE — "<old> is/are now known as <new>".
        if let Some(caps) = re(
            &NICK_CHANGE,
            r"^(?:\*\*\*|---)\s+(\S+) (?:is|are) now known as (\S+)",
        )
        .captures(remainder)
        {
            return Event::NickChange {
                text: remainder.to_string(),
                old_nick: caps[1].to_string(),
                new_nick: caps[2].to_string(),
            };
        }

        // Rule 6: SERVER catch-all.
        return Event::Server(remainder.to_string());
    }

    // Rule 7: OTHER — nothing matched.
    Event::Other(remainder.to_string())
}
