//! Width-exact padding and truncation.
//!
//! Widths are counted in characters (codepoints), never bytes, so multi-byte
//! text keeps its columns aligned.

use crate::error::{PositionalError, Result};

/// Which side of the text receives the fill characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Fill is prepended; the value ends up right-justified.
    Left,
    /// Fill is appended; the value ends up left-justified.
    Right,
}

/// Fit `text` into `width` characters.
///
/// Text longer than `width` keeps its first `width` characters regardless of
/// `side`. Shorter text is padded with `fill` repeated once per missing
/// character, so a multi-character fill produces a result longer than
/// `width`.
///
/// Fails with [`PositionalError::InvalidPaddingConfig`] when `width` is
/// negative or `fill` is empty.
pub fn justify(text: &str, width: isize, fill: &str, side: Side) -> Result<String> {
    let width = usize::try_from(width)
        .map_err(|_| PositionalError::InvalidPaddingConfig("size must be non-negative"))?;
    if fill.is_empty() {
        return Err(PositionalError::InvalidPaddingConfig("pad must not be empty"));
    }
    Ok(fit(text, width, fill, side))
}

/// Pad on the left (right-justify). See [`justify`].
pub fn pad_left(text: &str, width: isize, fill: &str) -> Result<String> {
    justify(text, width, fill, Side::Left)
}

/// Pad on the right (left-justify). See [`justify`].
pub fn pad_right(text: &str, width: isize, fill: &str) -> Result<String> {
    justify(text, width, fill, Side::Right)
}

/// Unchecked core of [`justify`] for callers whose width and fill are
/// already known to be valid.
pub(crate) fn fit(text: &str, width: usize, fill: &str, side: Side) -> String {
    let content = match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    };
    let missing = width - content.chars().count();
    if missing == 0 {
        return content.to_string();
    }

    let padding = fill.repeat(missing);
    match side {
        Side::Left => padding + content,
        Side::Right => content.to_string() + &padding,
    }
}
