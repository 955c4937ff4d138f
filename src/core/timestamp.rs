// irclogparse - core/timestamp.rs
//
// Leading-timestamp recognition. Different IRC clients and loggers stamp
// lines in different formats; an ordered list of patterns is tried and
// the first match wins. The matched substring is reported verbatim —
// timestamp VALUES are never parsed or validated (no timezone math, no
// date arithmetic).

use regex::Regex;
use std::sync::OnceLock;

/// Attempt to split a leading timestamp off a normalised line.
///
/// Formats are tried in a fixed priority order; once one matches there is
/// no backtracking across formats. Supported formats:
///
///   1. Bare `HH:MM` at line start          (`14:18`)
///   2. Bracketed `[HH:MM]`
///   3. Bracketed `[HH:MM:SS]`
///   4. Bracketed `[YYYY-MM-DDTHH:MM:SS]`
///   5. Bracketed `[DD-Mon-YYYY HH:MM:SS]`  (three-letter month)
///   6. Bracketed `[DD Mon HH:MM]`          (three-letter month, no year)
///
/// On a match, the captured value excludes the brackets and exactly one
/// following space is consumed if present. On no match the full line is
/// returned unchanged — a timestamp appearing mid-line is never reported.
pub fn split_timestamp(line: &str) -> (Option<&str>, &str) {
    static FORMATS: OnceLock<Vec<Regex>> = OnceLock::new();

    let formats = FORMATS.get_or_init(|| {
        // Patterns are exercised by the unit tests below, so a mistake
        // here shows up as a failing test rather than a runtime panic.
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("split_timestamp: invalid regex")
        }

        vec![
            re(r"^(\d\d:\d\d)"),
            re(r"^\[(\d\d:\d\d)\]"),
            re(r"^\[(\d\d:\d\d:\d\d)\]"),
            re(r"^\[(\d{4}-\d\d-\d\dT\d\d:\d\d:\d\d)\]"),
            re(r"^\[(\d\d-[A-Za-z]{3}-\d{4} \d\d:\d\d:\d\d)\]"),
            re(r"^\[(\d\d [A-Za-z]{3} \d\d:\d\d)\]"),
        ]
    });

    for format in formats {
        if let Some(caps) = format.captures(line) {
            let timestamp = caps.get(1).map(|m| m.as_str());
            let mut rest = &line[caps.get(0).map_or(0, |m| m.end())..];
            rest = rest.strip_prefix(' ').unwrap_or(rest);
            return (timestamp, rest);
        }
    }

    (None, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> (Option<&str>, &str) {
        split_timestamp(line)
    }

    #[test]
    fn test_bare_hh_mm() {
        assert_eq!(split("14:18 <mg> Hello!"), (Some("14:18"), "<mg> Hello!"));
    }

    #[test]
    fn test_bracketed_hh_mm() {
        assert_eq!(split("[14:18] <mg> Hello!"), (Some("14:18"), "<mg> Hello!"));
    }

    #[test]
    fn test_bracketed_hh_mm_ss() {
        assert_eq!(
            split("[14:18:55] <mg> Hello!"),
            (Some("14:18:55"), "<mg> Hello!")
        );
    }

    #[test]
    fn test_bracketed_iso_datetime() {
        assert_eq!(
            split("[2004-02-04T14:18:55] <mg> Hello!"),
            (Some("2004-02-04T14:18:55"), "<mg> Hello!")
        );
    }

    #[test]
    fn test_bracketed_dd_mon_yyyy() {
        assert_eq!(
            split("[02-Feb-2004 14:18:55] <mg> Hello!"),
            (Some("02-Feb-2004 14:18:55"), "<mg> Hello!")
        );
    }

    #[test]
    fn test_bracketed_dd_mon_no_year() {
        assert_eq!(
            split("[15 Jan 08:42] <mg> Hello!"),
            (Some("15 Jan 08:42"), "<mg> Hello!")
        );
    }

    /// The captured value never includes the enclosing brackets.
    #[test]
    fn test_brackets_excluded_from_capture() {
        let (ts, _) = split("[08:42] hi");
        assert_eq!(ts, Some("08:42"));
    }

    /// Only one trailing space is consumed after the timestamp.
    #[test]
    fn test_consumes_exactly_one_space() {
        assert_eq!(split("14:18  * mg waves"), (Some("14:18"), " * mg waves"));
    }

    /// A timestamp with no following character at all still matches.
    #[test]
    fn test_timestamp_at_end_of_line() {
        assert_eq!(split("14:18"), (Some("14:18"), ""));
    }

    #[test]
    fn test_no_timestamp_passes_line_through() {
        assert_eq!(split("* mg says Hello"), (None, "* mg says Hello"));
        assert_eq!(split("<nick> text"), (None, "<nick> text"));
    }

    /// A timestamp mid-line is never reported.
    #[test]
    fn test_mid_line_timestamp_ignored() {
        assert_eq!(
            split("meeting at 14:18 tomorrow"),
            (None, "meeting at 14:18 tomorrow")
        );
    }

    /// Malformed bracket forms fall through to no-timestamp.
    #[test]
    fn test_unclosed_bracket_is_not_a_timestamp() {
        assert_eq!(split("[14:18 <mg> hi"), (None, "[14:18 <mg> hi"));
    }
}
