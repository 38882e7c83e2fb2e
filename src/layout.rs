//! Field layout metadata and annotation parsing.
//!
//! An annotation is `"<width>[,<modifier>]*"`, for example
//! `"10,zerofill,leftpad"`. Token 0 is the slot width; the remaining tokens
//! are modifiers. Unknown modifiers are ignored and repeats are harmless.
//!
//! Slots are laid out back to back in declaration order:
//!
//! ```text
//! name(10)  amount(7) flag(1)
//! |---------|------|-|
//! 0         10     17 18
//! ```

use std::collections::HashMap;

use crate::error::{PositionalError, Result};
use crate::pad::Side;

/// Modifier: pad with `'0'` instead of a space.
pub const MODIFIER_ZEROFILL: &str = "zerofill";
/// Modifier: pad on the left, right-justifying the value.
pub const MODIFIER_LEFTPAD: &str = "leftpad";
/// Modifier: strip the decimal point from rendered floats.
pub const MODIFIER_NOFLOAT: &str = "nofloat";

/// Fill used when `zerofill` is set.
pub const ZERO_FILL: &str = "0";
/// Fill used otherwise.
pub const SPACE_FILL: &str = " ";

/// Layout of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldLayout {
    pub name: String,
    pub width: usize,
    pub left_align: bool,
    pub zero_fill: bool,
    pub no_float_point: bool,
}

impl FieldLayout {
    /// Parse an annotation for the field called `name`.
    pub fn parse(name: &str, annotation: &str) -> Result<Self> {
        let mut tokens = annotation.split(',');
        let width = tokens
            .next()
            .unwrap_or_default()
            .parse::<usize>()
            .map_err(|_| PositionalError::InvalidSize {
                field: name.to_string(),
                annotation: annotation.to_string(),
            })?;

        let mut layout = FieldLayout {
            name: name.to_string(),
            width,
            ..Default::default()
        };
        for modifier in tokens {
            match modifier {
                MODIFIER_ZEROFILL => layout.zero_fill = true,
                MODIFIER_LEFTPAD => layout.left_align = true,
                MODIFIER_NOFLOAT => layout.no_float_point = true,
                _ => {}
            }
        }
        Ok(layout)
    }

    /// Fill string for this field's padding.
    pub fn fill(&self) -> &'static str {
        if self.zero_fill { ZERO_FILL } else { SPACE_FILL }
    }

    /// Side that receives the padding.
    pub fn side(&self) -> Side {
        if self.left_align { Side::Left } else { Side::Right }
    }
}

/// Character range `[start, start + width)` of a field within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: usize,
    pub width: usize,
}

impl Slot {
    pub fn end(&self) -> usize {
        self.start + self.width
    }
}

/// Ordered field layouts of one record type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordLayout {
    pub type_name: String,
    pub fields: Vec<FieldLayout>,
}

impl RecordLayout {
    /// Build a layout from the declared fields of `type_name`, in order.
    ///
    /// Fields with no annotation are left out. The first malformed width
    /// aborts the whole derivation.
    pub fn derive<'a, I>(type_name: &str, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let fields = fields
            .into_iter()
            .filter_map(|(name, annotation)| annotation.map(|a| FieldLayout::parse(name, a)))
            .collect::<Result<Vec<_>>>()?;

        Ok(RecordLayout {
            type_name: type_name.to_string(),
            fields,
        })
    }

    /// Look up a field layout by name.
    pub fn get(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Map of field name to layout.
    pub fn by_name(&self) -> HashMap<&str, &FieldLayout> {
        self.fields.iter().map(|f| (f.name.as_str(), f)).collect()
    }

    /// Each field paired with its slot, in column order.
    pub fn slots(&self) -> impl Iterator<Item = (&FieldLayout, Slot)> + '_ {
        self.fields.iter().scan(0usize, |start, field| {
            let slot = Slot {
                start: *start,
                width: field.width,
            };
            *start += field.width;
            Some((field, slot))
        })
    }

    /// Sum of all field widths.
    pub fn total_width(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_skips_unannotated() {
        let layout = RecordLayout::derive(
            "TestParseTagsStruct",
            [
                ("field1", Some("10,zerofill,leftpad")),
                ("field2", Some("7,nofloat")),
                ("field3", None),
            ],
        )
        .unwrap();

        assert_eq!(layout.type_name, "TestParseTagsStruct");
        assert_eq!(layout.fields.len(), 2);

        let f1 = &layout.fields[0];
        assert_eq!(f1.name, "field1");
        assert_eq!(f1.width, 10);
        assert!(f1.zero_fill && f1.left_align && !f1.no_float_point);

        let f2 = &layout.fields[1];
        assert_eq!(f2.name, "field2");
        assert_eq!(f2.width, 7);
        assert!(!f2.zero_fill && !f2.left_align && f2.no_float_point);
    }

    #[test]
    fn test_invalid_size_aborts() {
        let err = RecordLayout::derive("Bad", [("ok", Some("3")), ("bad", Some("ten,leftpad"))])
            .unwrap_err();
        match err {
            PositionalError::InvalidSize { field, annotation } => {
                assert_eq!(field, "bad");
                assert_eq!(annotation, "ten,leftpad");
            }
            other => panic!("Expected InvalidSize, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_and_empty_widths_rejected() {
        assert!(FieldLayout::parse("f", "-5").is_err());
        assert!(FieldLayout::parse("f", "").is_err());
        assert!(FieldLayout::parse("f", ",zerofill").is_err());
    }

    #[test]
    fn test_modifiers_order_independent_and_unknown_ignored() {
        let a = FieldLayout::parse("f", "4,nofloat,leftpad,zerofill").unwrap();
        let b = FieldLayout::parse("f", "4,zerofill,bogus,leftpad,nofloat,nofloat").unwrap();
        assert_eq!(a, b);

        let spaced = FieldLayout::parse("f", "4, zerofill").unwrap();
        assert!(!spaced.zero_fill);
    }

    #[test]
    fn test_fill_and_side() {
        let plain = FieldLayout::parse("f", "1").unwrap();
        assert_eq!(plain.fill(), " ");
        assert_eq!(plain.side(), Side::Right);

        let padded = FieldLayout::parse("f", "1,zerofill,leftpad").unwrap();
        assert_eq!(padded.fill(), "0");
        assert_eq!(padded.side(), Side::Left);
    }

    #[test]
    fn test_slots_are_contiguous() {
        let layout =
            RecordLayout::derive("R", [("a", Some("10")), ("b", Some("0")), ("c", Some("7"))])
                .unwrap();
        let slots: Vec<_> = layout.slots().map(|(f, s)| (f.name.as_str(), s)).collect();
        assert_eq!(
            slots,
            vec![
                ("a", Slot { start: 0, width: 10 }),
                ("b", Slot { start: 10, width: 0 }),
                ("c", Slot { start: 10, width: 7 }),
            ]
        );
        assert_eq!(slots[2].1.end(), 17);
        assert_eq!(layout.total_width(), 17);
    }

    #[test]
    fn test_lookup_by_name() {
        let layout = RecordLayout::derive(
            "R",
            [("field1", Some("10,zerofill,leftpad")), ("field2", Some("5,nofloat"))],
        )
        .unwrap();

        let map = layout.by_name();
        assert_eq!(map.len(), 2);
        assert_eq!(map["field2"].width, 5);
        assert!(layout.get("field1").unwrap().zero_fill);
        assert!(layout.get("field3").is_none());
    }
}
