//! objx Value - Core primitives for dynamic values
//!
//! This crate provides the untyped value model that `objx` navigates, with no
//! path or selector logic. It includes:
//!
//! - The closed `Value` union (null, booleans, every integer and float width,
//!   complex numbers, strings, arrays, string-keyed maps, callables)
//! - `Kind` classification tokens and exact-width type predicates
//! - Callable handles (`Func`) and complex number pairs (`Complex`)
//! - Default textual formatting
//! - Conversions from Rust scalars, collections and `serde_json::Value`

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod complex;
pub mod convert;
pub mod fmt;
pub mod func;
pub mod kind;
pub mod value;

// Re-export commonly used types
pub use complex::{Complex, Complex128, Complex64};
pub use func::Func;
pub use kind::Kind;
pub use value::{Map, Value};
