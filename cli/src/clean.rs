//! Parenthetical stripping for selected CSV columns.
//!
//! DESIGN
//! ======
//! The file is parsed header-less and flexible so that every row, including
//! ragged ones, is written back in order with untouched columns equal in
//! value. Quoting is normalized: a field is quoted only when it needs to be,
//! so `"ACME"` comes back as `ACME`. Only the named columns are rewritten, and only when they
//! contain a matched `(..)` pair; cleaning its own output is a no-op.

#[cfg(test)]
#[path = "clean_test.rs"]
mod clean_test;

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

/// Vendor columns of the purchase export.
pub const DEFAULT_COLUMNS: [&str; 2] = ["구매업체", "판매업체"];

const BOM: char = '\u{feff}';

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("input has no header row")]
    EmptyInput,

    #[error("none of the columns {0:?} appear in the header")]
    MissingColumns(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Data rows, header excluded.
    pub rows: usize,
    pub cells_changed: usize,
    /// Requested columns absent from the header.
    pub missing: Vec<String>,
}

/// Remove every `(..)` group (ASCII or full-width parentheses) together with
/// the whitespace directly before it, innermost first, then trim.
///
/// Values without a matched pair are returned unchanged.
#[must_use]
pub fn strip_parentheticals(value: &str) -> Cow<'_, str> {
    let Some(first) = innermost_pair(value) else {
        return Cow::Borrowed(value);
    };
    let mut out = value.to_owned();
    let mut pair = Some(first);
    while let Some((open, close_end)) = pair {
        let start = out[..open].trim_end().len();
        out.replace_range(start..close_end, "");
        pair = innermost_pair(&out);
    }
    Cow::Owned(out.trim().to_owned())
}

/// Byte range start of the opening paren and byte end of its closing paren.
fn innermost_pair(s: &str) -> Option<(usize, usize)> {
    let mut open = None;
    for (i, c) in s.char_indices() {
        match c {
            '(' | '（' => open = Some(i),
            ')' | '）' => {
                if let Some(start) = open {
                    return Some((start, i + c.len_utf8()));
                }
            }
            _ => {}
        }
    }
    None
}

/// Clean `columns` of an in-memory CSV document.
///
/// A leading BOM, the line terminator style and the presence of a final
/// newline are carried over from the input. The terminator style is taken
/// from the header line, since quoted fields may hold either kind of break.
/// Field values are preserved; quoting is rewritten as needed.
///
/// # Errors
///
/// Returns an error for malformed CSV, an empty document, or when none of
/// `columns` is in the header.
pub fn clean_csv(input: &str, columns: &[String]) -> Result<(String, CleanReport), CleanError> {
    let (bom, body) = match input.strip_prefix(BOM) {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let crlf = body.find('\n').is_some_and(|end| body[..end].ends_with('\r'));

    let mut reader = ReaderBuilder::new().has_headers(false).flexible(true).from_reader(body.as_bytes());
    let mut records = reader.records();
    let header = records.next().ok_or(CleanError::EmptyInput)??;

    let targets: Vec<usize> = header
        .iter()
        .enumerate()
        .filter(|(_, name)| columns.iter().any(|c| c.trim() == name.trim()))
        .map(|(i, _)| i)
        .collect();
    let missing: Vec<String> = columns
        .iter()
        .filter(|c| !header.iter().any(|name| name.trim() == c.trim()))
        .cloned()
        .collect();
    if targets.is_empty() {
        return Err(CleanError::MissingColumns(columns.to_vec()));
    }
    for column in &missing {
        tracing::warn!(column = %column, "column not in header; left as is");
    }

    let terminator = if crlf { Terminator::CRLF } else { Terminator::Any(b'\n') };
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(terminator)
        .from_writer(Vec::new());
    writer.write_record(&header)?;

    let mut report = CleanReport { missing, ..CleanReport::default() };
    for record in records {
        let record = record?;
        let mut cleaned = StringRecord::with_capacity(record.as_slice().len(), record.len());
        for (i, field) in record.iter().enumerate() {
            if targets.contains(&i) {
                let value = strip_parentheticals(field);
                if value != field {
                    report.cells_changed += 1;
                }
                cleaned.push_field(&value);
            } else {
                cleaned.push_field(field);
            }
        }
        writer.write_record(&cleaned)?;
        report.rows += 1;
    }

    let bytes = writer.into_inner().map_err(|e| CleanError::Csv(e.into_error().into()))?;
    let mut out = String::with_capacity(bytes.len() + BOM.len_utf8());
    if bom {
        out.push(BOM);
    }
    out.push_str(&String::from_utf8_lossy(&bytes));
    if !body.ends_with('\n') {
        let trimmed = out.trim_end_matches(['\r', '\n']).len();
        out.truncate(trimmed);
    }
    Ok((out, report))
}

/// Clean `input` into `output`.
///
/// The result is written to a temporary sibling first and renamed into place,
/// so a failed run never leaves a partial `output`. `input` and `output` may
/// be the same file.
///
/// # Errors
///
/// Returns an error if `input` cannot be read, is not cleanable (see
/// [`clean_csv`]), or `output` cannot be written.
pub fn clean_file(input: &Path, output: &Path, columns: &[String]) -> Result<CleanReport, CleanError> {
    let raw = fs::read_to_string(input).map_err(|source| CleanError::Read { path: input.to_owned(), source })?;
    let (cleaned, report) = clean_csv(&raw, columns)?;

    let tmp = temp_sibling(output);
    let write_err = |source| CleanError::Write { path: output.to_owned(), source };
    if let Err(e) = fs::write(&tmp, cleaned) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    if let Err(e) = fs::rename(&tmp, output) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    tracing::debug!(input = %input.display(), output = %output.display(), "output replaced");
    Ok(report)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().map_or_else(|| "output".into(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.tmp"))
}
