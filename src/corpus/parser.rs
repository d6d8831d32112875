//! Delimited-text parsing for the poem corpus.
//!
//! This module handles:
//! - Splitting raw CSV text into header and data rows
//! - Scanning each row with the minimal quoting dialect
//! - Cleaning and validating fields into admitted [`Poem`] records
//!
//! The dialect is deliberately small: fields are comma-separated, may be
//! quoted with `"`, an embedded quote is escaped by doubling (`""`), and a
//! quoted field may contain literal commas. Quotes do not span physical
//! lines — rows are split on line feeds before field scanning, so an
//! embedded newline inside quotes is not supported.

use log::{debug, info, warn};

use super::types::error::{CorpusError, Result};
use super::types::models::Poem;

/// Parses raw delimited text into the ordered sequence of admitted records.
///
/// The first line names the fields; every following line is a data row.
/// Malformed rows never abort the parse: a row whose field count differs
/// from the header's, or whose required fields are empty after cleaning,
/// is dropped with a warning and scanning continues.
///
/// # Errors
/// Returns [`CorpusError::EmptyInput`] when the input contains no header
/// line at all. Individual bad rows are not errors.
pub fn parse(raw: &str) -> Result<Vec<Poem>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CorpusError::EmptyInput);
    }

    // Rows are physical lines; the quoting dialect never spans them.
    let mut lines = trimmed.split('\n');
    let header_line = lines.next().ok_or(CorpusError::EmptyInput)?;
    let headers = scan_row(header_line);
    debug!("Header declares {} columns: {:?}", headers.len(), headers);

    let mut poems = Vec::new();
    let mut dropped = 0usize;
    for (idx, line) in lines.enumerate() {
        // 1-based source line number, counting the header as line 1.
        let line_number = idx + 2;
        let values = scan_row(line);
        if values.len() != headers.len() {
            warn!(
                "Dropping line {}: {} fields, header has {}",
                line_number,
                values.len(),
                headers.len()
            );
            dropped += 1;
            continue;
        }
        match build_record(&headers, values) {
            Some(poem) => poems.push(poem),
            None => {
                warn!("Dropping line {}: required field empty after cleaning", line_number);
                dropped += 1;
            }
        }
    }

    info!("Parsed {} poems ({} rows dropped)", poems.len(), dropped);
    Ok(poems)
}

/// Scans one physical line into its fields.
///
/// Left-to-right scan with an inside-quotes flag: a comma is a field
/// boundary only when the flag is clear; an unescaped `"` toggles the flag
/// and is consumed; `""` inside quotes yields one literal `"`. The final
/// field is flushed at end of line. Every field is trimmed of surrounding
/// whitespace after extraction.
fn scan_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote: keep one, skip its twin.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Pairs header names with row values and applies the admission invariant.
///
/// The i-th header becomes the key for the i-th value. The five named
/// columns land in the record's typed fields; anything else is preserved in
/// `extra`. Returns `None` when any of `title`, `author`, `content` or
/// `dynasty` is empty after cleaning.
fn build_record(headers: &[String], values: Vec<String>) -> Option<Poem> {
    let mut poem = Poem {
        id: String::new(),
        title: String::new(),
        author: String::new(),
        content: String::new(),
        dynasty: String::new(),
        extra: Default::default(),
    };

    for (header, value) in headers.iter().zip(values) {
        let value = value.trim().to_string();
        match header.as_str() {
            "id" => poem.id = value,
            "title" => poem.title = value,
            "author" => poem.author = value,
            "content" => poem.content = value,
            "dynasty" => poem.dynasty = value,
            other => {
                poem.extra.insert(other.to_string(), value);
            }
        }
    }

    let admitted = !poem.title.is_empty()
        && !poem.author.is_empty()
        && !poem.content.is_empty()
        && !poem.dynasty.is_empty();
    admitted.then_some(poem)
}
