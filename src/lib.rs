//! # positional-line
//!
//! Fixed-width positional record encoding for mainframe-style flat files.
//!
//! Legacy batch interchange files carry one record per line, with every field
//! occupying a fixed column range rather than being delimited. This library
//! converts typed records to and from such lines.
//!
//! ## Overview
//!
//! - **Layout**: each field declares a width and optional modifiers
//!   (`zerofill`, `leftpad`, `nofloat`) in a short annotation such as
//!   `"10,zerofill,leftpad"`.
//! - **Encoding**: each field is rendered, then padded or truncated to its
//!   width; slots are concatenated with no separators.
//! - **Decoding**: the line is sliced slot by slot, trimmed, and parsed back
//!   into the field's type.
//! - **Batches**: records are joined and split on `\n`.
//!
//! ## Example
//!
//! ```
//! use positional_line::{decode_all, encode_all, positional};
//!
//! // Record layout: Last(8) First(10) Dept(10) Salary(8)
//! #[derive(Debug, Default, PartialEq)]
//! struct Employee {
//!     last: String,
//!     first: String,
//!     dept: String,
//!     salary: u32,
//! }
//!
//! positional!(Employee {
//!     last: String = "8",
//!     first: String = "10",
//!     dept: String = "10",
//!     salary: u32 = "8,zerofill,leftpad",
//! });
//!
//! let staff = vec![
//!     Employee { last: "SMITH".into(), first: "JOHN".into(), dept: "SALES".into(), salary: 50000 },
//!     Employee { last: "JONES".into(), first: "MARY".into(), dept: "ENGINEER".into(), salary: 75000 },
//! ];
//!
//! let text = encode_all(&staff).unwrap();
//! assert_eq!(
//!     text,
//!     "SMITH   JOHN      SALES     00050000\nJONES   MARY      ENGINEER  00075000"
//! );
//! assert_eq!(decode_all::<Employee>(&text).unwrap(), staff);
//! ```

pub mod codec;
pub mod error;
pub mod layout;
mod macros;
pub mod pad;
pub mod schema;
pub mod value;

pub use codec::{
    LINE_SEPARATOR, decode, decode_all, decode_all_into, decode_into, encode, encode_all,
};
pub use error::{PositionalError, Result};
pub use layout::{FieldLayout, RecordLayout, Slot};
pub use pad::{Side, justify, pad_left, pad_right};
pub use schema::{Accessor, Column, Positional, Schema, SchemaBuilder};
pub use value::{FLOAT_DECIMALS, Value, ValueKind, parse_slot, render};
