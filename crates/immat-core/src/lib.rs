//! Validation and canonical formatting of French vehicle registration numbers.
//!
//! Two numbering schemes are recognised:
//!
//! - **SIV** (since 2009): letters, digits, letters (`AB-123-CD`), plus the
//!   W garage, WW and moped (cyclomoteur) series.
//! - **FNI** (before 2009): digits, letters, department code (`123 AB 75`),
//!   plus the W garage and WW series.
//!
//! Everything here is a pure function of the input string. Validation only
//! answers whether a string is *shaped* like a plate; it never checks that
//! the plate was actually issued.
//!
//! ```
//! use immat_core::{Matriculation, PlateCategory};
//!
//! let plate = Matriculation::from("ab123cd");
//! assert!(plate.is_siv());
//! assert!(plate.matches(PlateCategory::SivNormal));
//! assert_eq!(plate.to_string(), "AB-123-CD");
//! ```

pub mod category;
pub mod classification;
pub mod error;
pub mod format;
pub mod matriculation;
pub mod rules;

pub use category::{PlateCategory, PlateScheme};
pub use classification::Classification;
pub use error::ParseError;
pub use format::format_matriculation;
pub use matriculation::Matriculation;
