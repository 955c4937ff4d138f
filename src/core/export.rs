// irclogparse - core/export.rs
//
// CSV and JSON export of classified records.
// Core layer: writes to any Write trait object.

use crate::core::model::{Event, Record};
use crate::util::error::ExportError;
use std::io::Write;

/// Export records to CSV format.
///
/// Writes: timestamp, category, nick, old_nick, new_nick, text.
/// The structured columns are filled only for the categories that carry
/// them; `text` holds the message for comments and the verbatim line
/// remainder for everything else.
pub fn export_csv<W: Write>(records: &[Record], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["timestamp", "category", "nick", "old_nick", "new_nick", "text"])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for record in records {
        let timestamp = record.timestamp.as_deref().unwrap_or("");
        let category = record.category().label();

        let (nick, old_nick, new_nick, text) = match &record.event {
            Event::Comment { nick, message } => (nick.as_str(), "", "", message.as_str()),
            Event::NickChange {
                text,
                old_nick,
                new_nick,
            } => ("", old_nick.as_str(), new_nick.as_str(), text.as_str()),
            Event::Action(text)
            | Event::Join(text)
            | Event::Part(text)
            | Event::Server(text)
            | Event::Other(text) => ("", "", "", text.as_str()),
        };

        csv_writer
            .write_record([timestamp, category, nick, old_nick, new_nick, text])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export records to JSON format (array of objects).
pub fn export_json<W: Write>(records: &[Record], writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json { source: e })?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_records() -> Vec<Record> {
        vec![
            Record {
                timestamp: Some("14:18".into()),
                event: Event::Comment {
                    nick: "mg".into(),
                    message: "Hello!".into(),
                },
            },
            Record {
                timestamp: None,
                event: Event::NickChange {
                    text: "*** X is now known as Y".into(),
                    old_nick: "X".into(),
                    new_nick: "Y".into(),
                },
            },
            Record {
                timestamp: None,
                event: Event::Server("*** welcome to irc.example.org".into()),
            },
        ]
    }

    #[test]
    fn test_csv_export() {
        let mut buf = Vec::new();
        let count = export_csv(&make_records(), &mut buf).unwrap();
        assert_eq!(count, 3);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("timestamp,category,"));
        assert!(output.contains("14:18,COMMENT,mg,,,Hello!"));
        assert!(output.contains(",NICKCHANGE,,X,Y,*** X is now known as Y"));
        assert!(output.contains(",SERVER,,,,*** welcome to irc.example.org"));
    }

    #[test]
    fn test_json_export() {
        let mut buf = Vec::new();
        let count = export_json(&make_records(), &mut buf).unwrap();
        assert_eq!(count, 3);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"Hello!\""));
        assert!(output.contains("\"14:18\""));
    }
}
