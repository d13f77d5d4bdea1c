//! objx - Wrapped dynamic values with path selectors
//!
//! `objx` wraps an untyped nested value (typically decoded JSON) in an [`Obj`]
//! and navigates it with dotted selectors:
//!
//! - `a.b.c` looks up nested mapping keys
//! - `a.list[1]` takes element 1 of the array stored under `list`
//! - an integer selector indexes a root array directly
//!
//! # Traversal policy
//!
//! Resolution is best effort. A plain key missing from a mapping yields null.
//! A segment that cannot be applied at all (key lookup on a non-mapping,
//! indexed access on a missing key or a non-array) is skipped and the walk
//! continues from the same value. Against `{"a": {}}`, `a.missing[0].deeper[1]`
//! yields `{}`, while `a.missing.deeper` yields null: `missing` is a plain key
//! and resolves to null before `deeper` is skipped.
//!
//! Out-of-range indices, integer selectors on non-arrays and selector values
//! of the wrong kind are caller bugs: [`Obj::get`] panics on them, while
//! [`Obj::try_get`] returns an [`ObjxError`].
//!
//! # Example
//!
//! ```
//! use objx::Obj;
//! use serde_json::json;
//!
//! let doc = Obj::from(json!({"user": {"emails": ["a@example.com", "b@example.com"]}}));
//! assert_eq!(doc.get("user.emails[1]").render(), "•b@example.com•");
//! assert!(doc.get("user.phone").is_nil());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod limits;
pub mod obj;
pub mod resolve;
pub mod selector;

// Re-export commonly used types
pub use error::{ObjxError, Result};
pub use limits::Limits;
pub use obj::{Obj, RENDER_MARKER};
pub use objx_value::{Complex, Complex128, Complex64, Func, Kind, Map, Value};
pub use resolve::Resolver;
pub use selector::{Path, Segment, Selector};
