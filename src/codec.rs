//! Record-level encoding and decoding.
//!
//! A line is the concatenation of every field's padded slot, with no
//! separators. Several records are joined with `\n` and no trailing newline.
//!
//! Decoding slices the line field by field with a running cursor. The line
//! length is never checked upfront: a short line fails with
//! [`PositionalError::LineTooShort`] once the first overrunning field is
//! reached, leaving earlier fields populated, and characters past the last
//! slot are ignored.

use crate::error::{PositionalError, Result};
use crate::pad::fit;
use crate::schema::{Positional, Schema};
use crate::value::render;

/// Separator between encoded records.
pub const LINE_SEPARATOR: char = '\n';

impl<R> Schema<R> {
    /// Encode one record as a single fixed-width line.
    pub fn encode_line(&self, record: &R) -> String {
        let mut line = String::with_capacity(self.layout().total_width());
        for (field, accessor) in self.layout().fields.iter().zip(self.accessors()) {
            let text = render(&accessor.read(record), field);
            let slot = fit(&text, field.width, field.fill(), field.side());
            tracing::trace!(field = %field.name, width = field.width, slot = %slot, "encoded slot");
            line.push_str(&slot);
        }
        line
    }

    /// Decode one line into `record`, field by field.
    pub fn decode_line(&self, line: &str, record: &mut R) -> Result<()> {
        let len = line.chars().count();
        let mut rest = line;
        for ((field, slot), accessor) in self.layout().slots().zip(self.accessors()) {
            let (text, tail) =
                split_chars(rest, field.width).ok_or_else(|| PositionalError::LineTooShort {
                    field: field.name.clone(),
                    start: slot.start,
                    end: slot.end(),
                    len,
                })?;
            tracing::trace!(field = %field.name, start = slot.start, text, "decoding slot");
            accessor.write(&field.name, record, text)?;
            rest = tail;
        }
        Ok(())
    }
}

/// Split off the first `n` characters, or `None` if there are fewer.
fn split_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    match s.char_indices().nth(n) {
        Some((idx, _)) => Some(s.split_at(idx)),
        None if s.chars().count() == n => Some((s, "")),
        None => None,
    }
}

/// Encode a single record as one line.
pub fn encode<R: Positional>(record: &R) -> Result<String> {
    let schema = R::schema()?;
    let line = schema.encode_line(record);
    tracing::debug!(type_name = %schema.layout().type_name, "encoded record");
    Ok(line)
}

/// Encode a sequence of records, one line each, joined by `\n`.
pub fn encode_all<R: Positional>(records: &[R]) -> Result<String> {
    let schema = R::schema()?;
    let mut out = String::with_capacity(records.len() * (schema.layout().total_width() + 1));
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push(LINE_SEPARATOR);
        }
        out.push_str(&schema.encode_line(record));
    }
    tracing::debug!(
        type_name = %schema.layout().type_name,
        records = records.len(),
        "encoded records"
    );
    Ok(out)
}

/// Decode text holding exactly one line into `record`.
///
/// On a field error, fields before the failing one keep their decoded values.
pub fn decode_into<R: Positional>(text: &str, record: &mut R) -> Result<()> {
    let schema = R::schema()?;
    let count = text.split(LINE_SEPARATOR).count();
    if count != 1 {
        return Err(PositionalError::UnexpectedLineCount { count });
    }
    schema.decode_line(text, record)?;
    tracing::debug!(type_name = %schema.layout().type_name, "decoded record");
    Ok(())
}

/// Decode text holding exactly one line into a fresh record.
pub fn decode<R: Positional + Default>(text: &str) -> Result<R> {
    let mut record = R::default();
    decode_into(text, &mut record)?;
    Ok(record)
}

/// Decode every `\n`-separated line into `records`, replacing its contents.
///
/// On failure `records` holds the records decoded before the failing line.
pub fn decode_all_into<R: Positional + Default>(text: &str, records: &mut Vec<R>) -> Result<()> {
    let schema = R::schema()?;
    records.clear();
    for (line_num, line) in text.split(LINE_SEPARATOR).enumerate() {
        let mut record = R::default();
        schema.decode_line(line, &mut record).inspect_err(|e| {
            tracing::debug!(line = line_num + 1, error = %e, "failed to decode line");
        })?;
        records.push(record);
    }
    tracing::debug!(
        type_name = %schema.layout().type_name,
        records = records.len(),
        "decoded records"
    );
    Ok(())
}

/// Decode every `\n`-separated line into a new vector.
pub fn decode_all<R: Positional + Default>(text: &str) -> Result<Vec<R>> {
    let mut records = Vec::new();
    decode_all_into(text, &mut records)?;
    Ok(records)
}
