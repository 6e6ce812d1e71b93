//! Record parsing: turn raw tab-separated log lines into quest reports.
//!
//! Parsing is best-effort. A row that is missing a column or carries a
//! non-numeric value in an integer column produces no report at all; the
//! batch keeps going and the row is counted as dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::model::{Field, QuestReport};

/// Why a row produced no report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("missing {field} (row has {found} of 17 fields)")]
    MissingField { field: Field, found: usize },

    #[error("{field} is not an integer: {value:?}")]
    InvalidInteger { field: Field, value: String },

    #[error("row is not valid UTF-8")]
    InvalidEncoding,
}

/// Reports read from a log, plus how many data rows were discarded.
#[derive(Debug, Default)]
pub struct ParsedLog {
    pub reports: Vec<QuestReport>,
    pub dropped: usize,
}

/// Parse one row of positional fields.
///
/// Fields past the seventeenth are ignored.
pub fn parse_row(fields: &[&str]) -> Result<QuestReport, RowError> {
    let text = |field: Field| -> Result<String, RowError> {
        fields
            .get(field.position())
            .map(|s| (*s).to_string())
            .ok_or(RowError::MissingField {
                field,
                found: fields.len(),
            })
    };
    let int = |field: Field| -> Result<i64, RowError> {
        let raw = fields.get(field.position()).ok_or(RowError::MissingField {
            field,
            found: fields.len(),
        })?;
        parse_int(field, raw)
    };

    Ok(QuestReport {
        uid: int(Field::Uid)?,
        version: text(Field::Version)?,
        date: text(Field::Date)?,
        player: text(Field::Player)?,
        character: text(Field::Character)?,
        party: text(Field::Party)?,
        depth: int(Field::Depth)?,
        dive: int(Field::Dive)?,
        days: int(Field::Days)?,
        hp: parse_hp(&text(Field::Hp)?)?,
        karma: text(Field::Karma)?,
        wc: int(Field::Wc)?,
        url: text(Field::Url)?,
        last_context: text(Field::LastContext)?,
        next_roll: text(Field::NextRoll)?,
        next_dmg: text(Field::NextDmg)?,
        next_context: text(Field::NextContext)?,
    })
}

/// Parse one raw log line.
///
/// Only the line terminator is removed; every other character,
/// including trailing tabs, belongs to the fields.
pub fn parse_line(line: &str) -> Result<QuestReport, RowError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split('\t').collect();
    parse_row(&fields)
}

/// Current hit points from a `cur/max` (or bare `cur`) value.
fn parse_hp(raw: &str) -> Result<i64, RowError> {
    let current = raw.split('/').next().unwrap_or(raw);
    parse_int(Field::Hp, current).map_err(|_| RowError::InvalidInteger {
        field: Field::Hp,
        value: raw.to_string(),
    })
}

/// Integers may carry surrounding whitespace; nothing else is tolerated.
fn parse_int(field: Field, raw: &str) -> Result<i64, RowError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| RowError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}

/// Parse one raw log line as read from disk, before any decoding.
pub fn parse_bytes(line: &[u8]) -> Result<QuestReport, RowError> {
    let line = std::str::from_utf8(line).map_err(|_| RowError::InvalidEncoding)?;
    parse_line(line)
}

/// Read a whole log: skip the header line, parse the rest.
///
/// Only I/O failures abort the read. Undecodable rows are dropped like
/// any other malformed row.
pub fn read_reports(reader: impl BufRead) -> io::Result<ParsedLog> {
    let mut log = ParsedLog::default();

    for (index, line) in reader.split(b'\n').enumerate().skip(1) {
        let line = line?;
        match parse_bytes(&line) {
            Ok(report) => log.reports.push(report),
            Err(e) => {
                debug!(line = index + 1, error = %e, "dropping malformed row");
                log.dropped += 1;
            }
        }
    }

    if log.dropped > 0 {
        warn!(
            dropped = log.dropped,
            kept = log.reports.len(),
            "skipped malformed rows"
        );
    }

    Ok(log)
}

/// Open and read a log file.
pub fn read_reports_from_path(path: &Path) -> io::Result<ParsedLog> {
    let file = File::open(path)?;
    read_reports(BufReader::new(file))
}
