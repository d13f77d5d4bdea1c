//! Selectors and path segments
//!
//! A string selector is split on `.` into segments. A segment of the form
//! `name[index]` addresses an element of the array stored under `name`; any
//! other segment is a plain mapping key. Splitting is literal: the empty
//! selector is a single empty key, and `a..b` contains an empty key between
//! `a` and `b`.

use crate::error::{ObjxError, Result};
use objx_value::Value;
use regex::Regex;
use smallvec::SmallVec;
use std::fmt;
use std::sync::LazyLock;

/// Array access segment: greedy name, then `[digits]`, anchored both ends
const ARRAY_ACCESS_PATTERN: &str = r"^(.+)\[([0-9]+)\]$";

static ARRAY_ACCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ARRAY_ACCESS_PATTERN).expect("array access pattern is a valid regex")
});

/// What to resolve against a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Dotted path such as `address.lines[0]`
    Path(String),
    /// Index into a root array
    Index(u64),
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Selector::Path(s.to_string())
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        Selector::Path(s)
    }
}

impl From<&String> for Selector {
    fn from(s: &String) -> Self {
        Selector::Path(s.clone())
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Selector {
                fn from(i: $ty) -> Self {
                    Selector::Index(i as u64)
                }
            }
        )*
    };
}

// Signed indices are reinterpreted as two's-complement u64, so a negative
// index lands far past the end of any array.
macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Selector {
                fn from(i: $ty) -> Self {
                    Selector::Index(i as i64 as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl TryFrom<&Value> for Selector {
    type Error = ObjxError;

    fn try_from(value: &Value) -> Result<Self> {
        let selector = match value {
            Value::String(s) => Selector::Path(s.clone()),
            Value::Int(i) => Selector::from(*i),
            Value::I8(i) => Selector::from(*i),
            Value::I16(i) => Selector::from(*i),
            Value::I32(i) => Selector::from(*i),
            Value::I64(i) => Selector::from(*i),
            Value::Uint(i) => Selector::from(*i),
            Value::U8(i) => Selector::from(*i),
            Value::U16(i) => Selector::from(*i),
            Value::U32(i) => Selector::from(*i),
            Value::U64(i) => Selector::from(*i),
            other => {
                return Err(ObjxError::InvalidSelectorKind { kind: other.kind() });
            }
        };
        Ok(selector)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Path(path) => f.write_str(path),
            Selector::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// One dot-delimited unit of a string selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain mapping key
    Key(String),
    /// `key[index]`: element `index` of the array stored under `key`
    Indexed {
        /// Mapping key holding the array
        key: String,
        /// Zero-based element index
        index: usize,
    },
    /// `key[digits]` where the digits overflow a platform index
    Malformed {
        /// Mapping key holding the array
        key: String,
        /// Bracketed digit string as written
        digits: String,
    },
}

impl Segment {
    /// Classify one raw segment
    pub fn parse(raw: &str) -> Self {
        let Some(caps) = ARRAY_ACCESS.captures(raw) else {
            return Segment::Key(raw.to_string());
        };

        // Both groups are mandatory in the pattern
        let key = caps.get(1).map_or("", |m| m.as_str()).to_string();
        let digits = caps.get(2).map_or("", |m| m.as_str());

        match digits.parse::<usize>() {
            Ok(index) => Segment::Indexed { key, index },
            Err(_) => Segment::Malformed {
                key,
                digits: digits.to_string(),
            },
        }
    }

    /// Mapping key this segment looks up
    pub fn key(&self) -> &str {
        match self {
            Segment::Key(key) => key,
            Segment::Indexed { key, .. } => key,
            Segment::Malformed { key, .. } => key,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Indexed { key, index } => write!(f, "{}[{}]", key, index),
            Segment::Malformed { key, digits } => write!(f, "{}[{}]", key, digits),
        }
    }
}

/// Parsed string selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: SmallVec<[Segment; 4]>,
}

impl Path {
    /// Split a selector on `.` and classify each segment
    pub fn parse(selector: &str) -> Self {
        Self {
            segments: selector.split('.').map(Segment::parse).collect(),
        }
    }

    /// Segments in walk order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments (at least one for any parsed selector)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for Path {
    fn from(selector: &str) -> Self {
        Path::parse(selector)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
