//! Explicit record schemas: field layouts bound to typed accessors.
//!
//! A record type describes itself once through a [`SchemaBuilder`], listing
//! each positional field in column order together with its annotation and a
//! getter/setter pair. Fields that should not appear in the line are simply
//! not bound.
//!
//! ```
//! use positional_line::{Accessor, Positional, Result, Schema};
//!
//! #[derive(Default)]
//! struct Payment {
//!     payee: String,
//!     amount: f64,
//!     memo: String,
//! }
//!
//! impl Positional for Payment {
//!     fn schema() -> Result<Schema<Self>> {
//!         Schema::builder("Payment")
//!             .field("payee", "10", Accessor::Text {
//!                 get: |r: &Payment| r.payee.clone(),
//!                 set: |r: &mut Payment, v| r.payee = v,
//!             })
//!             .field("amount", "7,nofloat,leftpad,zerofill", Accessor::Float {
//!                 get: |r: &Payment| r.amount,
//!                 set: |r: &mut Payment, v| r.amount = v,
//!             })
//!             .build()
//!     }
//! }
//!
//! let line = positional_line::encode(&Payment {
//!     payee: "ACME".into(),
//!     amount: 12.5,
//!     memo: "not encoded".into(),
//! })
//! .unwrap();
//! assert_eq!(line, "ACME      0001250");
//! ```

use std::fmt;
use std::num::TryFromIntError;

use crate::error::Result;
use crate::layout::RecordLayout;
use crate::value::{
    Value, ValueKind, invalid_number, parse_bool, parse_f64, parse_i64, parse_text, parse_u64,
};

/// Typed getter/setter pair for one field of `R`.
///
/// Integer setters are fallible so narrower field types can reject values
/// that do not fit.
pub enum Accessor<R> {
    Text {
        get: fn(&R) -> String,
        set: fn(&mut R, String),
    },
    SignedInt {
        get: fn(&R) -> i64,
        set: fn(&mut R, i64) -> std::result::Result<(), TryFromIntError>,
    },
    UnsignedInt {
        get: fn(&R) -> u64,
        set: fn(&mut R, u64) -> std::result::Result<(), TryFromIntError>,
    },
    Float {
        get: fn(&R) -> f64,
        set: fn(&mut R, f64),
    },
    Bool {
        get: fn(&R) -> bool,
        set: fn(&mut R, bool),
    },
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Accessor<R> {}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accessor({})", self.kind())
    }
}

impl<R> Accessor<R> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Accessor::Text { .. } => ValueKind::Text,
            Accessor::SignedInt { .. } => ValueKind::SignedInt,
            Accessor::UnsignedInt { .. } => ValueKind::UnsignedInt,
            Accessor::Float { .. } => ValueKind::Float,
            Accessor::Bool { .. } => ValueKind::Bool,
        }
    }

    /// Read the field from `record`.
    pub fn read(&self, record: &R) -> Value {
        match self {
            Accessor::Text { get, .. } => Value::Text(get(record)),
            Accessor::SignedInt { get, .. } => Value::SignedInt(get(record)),
            Accessor::UnsignedInt { get, .. } => Value::UnsignedInt(get(record)),
            Accessor::Float { get, .. } => Value::Float(get(record)),
            Accessor::Bool { get, .. } => Value::Bool(get(record)),
        }
    }

    /// Parse slot text and store it into `record`.
    pub fn write(&self, field: &str, record: &mut R, text: &str) -> Result<()> {
        match self {
            Accessor::Text { set, .. } => set(record, parse_text(text)),
            Accessor::SignedInt { set, .. } => set(record, parse_i64(field, text)?)
                .map_err(|e| invalid_number(field, text.trim(), e))?,
            Accessor::UnsignedInt { set, .. } => set(record, parse_u64(field, text)?)
                .map_err(|e| invalid_number(field, text.trim(), e))?,
            Accessor::Float { set, .. } => set(record, parse_f64(field, text)?),
            Accessor::Bool { set, .. } => set(record, parse_bool(field, text)?),
        }
        Ok(())
    }
}

/// Field types the [`positional!`](crate::positional) macro can bind.
///
/// `Cell` is the wire representation carried by the matching [`Accessor`]
/// variant; `store` reports integers that do not fit the field type.
pub trait Column: sealed::Sealed {
    type Cell;
    type Stored;

    fn load(&self) -> Self::Cell;

    fn store(&mut self, cell: Self::Cell) -> Self::Stored;

    fn accessor<R>(
        get: fn(&R) -> Self::Cell,
        set: fn(&mut R, Self::Cell) -> Self::Stored,
    ) -> Accessor<R>;
}

mod sealed {
    pub trait Sealed {}
}

impl sealed::Sealed for String {}

impl Column for String {
    type Cell = String;
    type Stored = ();

    fn load(&self) -> String {
        self.clone()
    }

    fn store(&mut self, cell: String) {
        *self = cell;
    }

    fn accessor<R>(get: fn(&R) -> String, set: fn(&mut R, String)) -> Accessor<R> {
        Accessor::Text { get, set }
    }
}

impl sealed::Sealed for bool {}

impl Column for bool {
    type Cell = bool;
    type Stored = ();

    fn load(&self) -> bool {
        *self
    }

    fn store(&mut self, cell: bool) {
        *self = cell;
    }

    fn accessor<R>(get: fn(&R) -> bool, set: fn(&mut R, bool)) -> Accessor<R> {
        Accessor::Bool { get, set }
    }
}

macro_rules! float_column {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Column for $t {
                type Cell = f64;
                type Stored = ();

                fn load(&self) -> f64 {
                    f64::from(*self)
                }

                fn store(&mut self, cell: f64) {
                    *self = cell as $t;
                }

                fn accessor<R>(get: fn(&R) -> f64, set: fn(&mut R, f64)) -> Accessor<R> {
                    Accessor::Float { get, set }
                }
            }
        )*
    };
}

macro_rules! int_column {
    ($variant:ident, $cell:ty => $($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Column for $t {
                type Cell = $cell;
                type Stored = std::result::Result<(), TryFromIntError>;

                fn load(&self) -> $cell {
                    *self as $cell
                }

                fn store(&mut self, cell: $cell) -> Self::Stored {
                    *self = <$t>::try_from(cell)?;
                    Ok(())
                }

                fn accessor<R>(get: fn(&R) -> $cell, set: fn(&mut R, $cell) -> Self::Stored) -> Accessor<R> {
                    Accessor::$variant { get, set }
                }
            }
        )*
    };
}

float_column!(f32, f64);
int_column!(SignedInt, i64 => i8, i16, i32, i64, isize);
int_column!(UnsignedInt, u64 => u8, u16, u32, u64, usize);

/// Layout of a record type bound to accessors for each laid-out field.
///
/// `accessors[i]` belongs to `layout.fields[i]`.
#[derive(Debug, Clone)]
pub struct Schema<R> {
    layout: RecordLayout,
    accessors: Vec<Accessor<R>>,
}

impl<R> Schema<R> {
    pub fn builder(type_name: impl Into<String>) -> SchemaBuilder<R> {
        SchemaBuilder {
            type_name: type_name.into(),
            bindings: Vec::new(),
        }
    }

    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    pub(crate) fn accessors(&self) -> &[Accessor<R>] {
        &self.accessors
    }
}

struct Binding<R> {
    name: String,
    annotation: String,
    accessor: Accessor<R>,
}

/// Collects field bindings in column order.
pub struct SchemaBuilder<R> {
    type_name: String,
    bindings: Vec<Binding<R>>,
}

impl<R> SchemaBuilder<R> {
    /// Bind the next column: `annotation` is `"<width>[,<modifier>]*"`.
    pub fn field(
        mut self,
        name: impl Into<String>,
        annotation: impl Into<String>,
        accessor: Accessor<R>,
    ) -> Self {
        self.bindings.push(Binding {
            name: name.into(),
            annotation: annotation.into(),
            accessor,
        });
        self
    }

    /// Parse every annotation; the first malformed width fails the build.
    pub fn build(self) -> Result<Schema<R>> {
        let layout = RecordLayout::derive(
            &self.type_name,
            self.bindings
                .iter()
                .map(|b| (b.name.as_str(), Some(b.annotation.as_str()))),
        )?;
        let accessors = self.bindings.into_iter().map(|b| b.accessor).collect();

        tracing::debug!(
            type_name = %layout.type_name,
            fields = layout.fields.len(),
            width = layout.total_width(),
            "built positional schema"
        );

        Ok(Schema { layout, accessors })
    }
}

/// A record type with a fixed-width line representation.
pub trait Positional: Sized {
    /// Describe the record's columns.
    ///
    /// Called on every encode/decode entry point; build the schema here and
    /// keep it free of side effects.
    fn schema() -> Result<Schema<Self>>;
}
