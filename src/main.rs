// irclogparse - main.rs
//
// CLI entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Feeding raw byte lines from a file or stdin through the classifier
// 4. Printing or exporting the classified records
//
// The classification core never opens files itself; this layer owns the
// input's lifetime and hands the core an iterator of raw lines.

use clap::{Parser, ValueEnum};
use irclogparse::core::classify::ClassifyConfig;
use irclogparse::core::export::{export_csv, export_json};
use irclogparse::core::model::{Event, Record};
use irclogparse::core::parser::LogParser;
use irclogparse::util;
use irclogparse::util::error::{DecodeError, IrcLogError, Result};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// How classified records are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One tab-separated line per record: timestamp, category, data.
    Text,
    /// JSON array of record objects.
    Json,
    /// CSV with one row per record.
    Csv,
}

/// irclogparse - IRC chat transcript classifier.
///
/// Reads a raw IRC log and emits one classified record per non-empty
/// line: an optional timestamp, a category tag, and the extracted data.
#[derive(Parser, Debug)]
#[command(name = "irclogparse", version, about)]
struct Cli {
    /// Log file to classify (reads stdin if omitted).
    path: Option<PathBuf>,

    /// Enable dircproxy handling (strip one leading +/- from messages).
    #[arg(long)]
    dircproxy: bool,

    /// Output format.
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::debug!(
        version = util::constants::APP_VERSION,
        dircproxy = cli.dircproxy,
        "irclogparse starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "irclogparse failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ClassifyConfig {
        dircproxy: cli.dircproxy,
        ..ClassifyConfig::default()
    };

    let input_label = cli
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from("<stdin>"));
    let reader = open_input(cli.path.as_deref())?;

    // Lines are fed to the core as raw bytes; decoding (strict UTF-8 with
    // a windows-1252 fallback) happens inside the pipeline. A read error
    // ends the line stream and is reported after the records seen so far.
    let mut read_error: Option<io::Error> = None;
    let emit_result = {
        let lines = reader.split(b'\n').map_while(|chunk| match chunk {
            Ok(line) => Some(line),
            Err(e) => {
                read_error = Some(e);
                None
            }
        });
        emit(LogParser::with_config(lines, config), cli.output)
    };
    emit_result?;

    if let Some(source) = read_error {
        return Err(IrcLogError::Io {
            path: input_label,
            operation: "read",
            source,
        });
    }
    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path).map_err(|e| IrcLogError::Io {
                path: path.to_path_buf(),
                operation: "open",
                source: e,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn emit<I>(parser: I, format: OutputFormat) -> Result<()>
where
    I: Iterator<Item = std::result::Result<Record, DecodeError>>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let count = match format {
        OutputFormat::Text => {
            let mut count = 0;
            for record in parser {
                print_text(&mut out, &record?).map_err(stdout_error)?;
                count += 1;
            }
            count
        }
        OutputFormat::Json => {
            let records = collect_records(parser)?;
            export_json(&records, &mut out)?
        }
        OutputFormat::Csv => {
            let records = collect_records(parser)?;
            export_csv(&records, &mut out)?
        }
    };

    tracing::info!(records = count, "Classification complete");
    Ok(())
}

fn collect_records<I>(parser: I) -> Result<Vec<Record>>
where
    I: Iterator<Item = std::result::Result<Record, DecodeError>>,
{
    parser
        .collect::<std::result::Result<Vec<Record>, DecodeError>>()
        .map_err(IrcLogError::from)
}

fn print_text<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    let timestamp = record.timestamp.as_deref().unwrap_or("-");
    let category = record.category();
    match &record.event {
        Event::Comment { nick, message } => {
            writeln!(out, "{timestamp}\t{category}\t<{nick}> {message}")
        }
        Event::NickChange {
            old_nick, new_nick, ..
        } => writeln!(out, "{timestamp}\t{category}\t{old_nick} -> {new_nick}"),
        Event::Action(text)
        | Event::Join(text)
        | Event::Part(text)
        | Event::Server(text)
        | Event::Other(text) => writeln!(out, "{timestamp}\t{category}\t{text}"),
    }
}

fn stdout_error(source: io::Error) -> IrcLogError {
    IrcLogError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "write",
        source,
    }
}
