//! # Schema Macros
//!
//! ## positional!
//!
//! Generates a [`Positional`](crate::Positional) impl from a field list.
//! Each entry is `name: Type` optionally followed by `= "annotation"`;
//! entries without an annotation are left out of the line.
//!
//! ```
//! use positional_line::positional;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Employee {
//!     last: String,
//!     salary: u32,
//!     notes: String,
//! }
//!
//! positional!(Employee {
//!     last: String = "8",
//!     salary: u32 = "8,zerofill,leftpad",
//!     notes: String,
//! });
//!
//! let line = positional_line::encode(&Employee {
//!     last: "SMITH".into(),
//!     salary: 50000,
//!     notes: "skipped".into(),
//! })
//! .unwrap();
//! assert_eq!(line, "SMITH   00050000");
//! ```
//!
//! Annotated fields must have a type implementing [`Column`](crate::Column):
//! `String`, `i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32`, `f64`, `bool`.
//! Fields without an annotation may have any type. Decoding an integer that
//! does not fit the field type fails with `InvalidNumber`.

/// Implements [`Positional`](crate::Positional) for a struct.
#[macro_export]
macro_rules! positional {
    ($ty:ident { $($field:ident : $fty:ty $(= $annotation:literal)?),* $(,)? }) => {
        impl $crate::Positional for $ty {
            fn schema() -> $crate::Result<$crate::Schema<Self>> {
                let builder = $crate::Schema::builder(stringify!($ty));
                $(
                    $(
                        let builder = builder.field(
                            stringify!($field),
                            $annotation,
                            <$fty as $crate::Column>::accessor::<$ty>(
                                |r: &$ty| <$fty as $crate::Column>::load(&r.$field),
                                |r: &mut $ty, cell| <$fty as $crate::Column>::store(&mut r.$field, cell),
                            ),
                        );
                    )?
                )*
                builder.build()
            }
        }
    };
}
