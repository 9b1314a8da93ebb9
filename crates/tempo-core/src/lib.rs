//! Core library for the tempo time conversion tool.
//!
//! This crate implements the conversion engine: the catalog of named
//! time formats, the custom layout pattern language, timezone
//! resolution, and the parse → adjust → format pipeline. The CLI crate
//! handles flags, config defaults, and output routing, then hands a
//! [`ConvertRequest`] to [`convert`].
//!
//! # Quick Start
//!
//! ```rust
//! use tempo_core::{convert, ConvertRequest};
//!
//! let request = ConvertRequest {
//!     value: "1620404116".to_string(),
//!     input_format: "UnixSecs".to_string(),
//!     output_format: "RFC3339".to_string(),
//!     ..Default::default()
//! };
//!
//! let formatted = convert(&request)?;
//! assert_eq!(formatted, "2021-05-07T15:35:16+00:00");
//! # Ok::<(), tempo_core::ConvertError>(())
//! ```

pub mod catalog;
pub mod convert;
pub mod error;
pub mod layout;
pub mod timezone;

// Re-export commonly used types
pub use catalog::{FormatKind, LayoutSource, UnixUnit, DEFAULT_FORMAT};
pub use convert::{convert, ConvertRequest};
pub use error::{ConvertError, Result};
