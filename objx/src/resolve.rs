//! Selector resolution against nested values
//!
//! The walk is permissive. A segment that cannot be applied (the current value
//! is not a map, the key is missing for an indexed segment, the stored value is
//! not an array) leaves the current value where it is and moves on to the next
//! segment. Only a plain key looked up in a map can produce null. The walk never
//! mutates the tree and borrows into it; callers clone the result.

use crate::error::{ObjxError, Result};
use crate::limits::Limits;
use crate::selector::{Path, Segment, Selector};
use objx_value::Value;
use tracing::{debug, trace};

static NULL: Value = Value::Null;

/// Outcome of applying one segment
#[derive(Debug)]
enum Step<'a> {
    /// Segment applied; continue from this value
    Advance(&'a Value),
    /// Soft miss; continue from the unchanged value
    Unchanged(&'static str),
}

/// Resolves selectors, optionally enforcing `Limits` on string selectors
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    limits: Option<Limits>,
}

impl Resolver {
    /// Resolver with no limits on selector size
    pub fn new() -> Self {
        Self { limits: None }
    }

    /// Resolver that rejects selectors beyond `limits`
    pub fn with_limits(limits: Limits) -> Result<Self> {
        limits.validate()?;
        Ok(Self {
            limits: Some(limits),
        })
    }

    /// Configured limits, if any
    pub fn limits(&self) -> Option<&Limits> {
        self.limits.as_ref()
    }

    /// Resolve any selector against `root`
    pub fn resolve<'a>(&self, root: &'a Value, selector: &Selector) -> Result<&'a Value> {
        let result = match selector {
            Selector::Path(path) => self.resolve_str(root, path),
            Selector::Index(index) => self.resolve_index(root, *index),
        };

        result.inspect_err(|err| debug!(%selector, error = %err, "selector resolution failed"))
    }

    /// Parse and resolve a string selector
    pub fn resolve_str<'a>(&self, root: &'a Value, selector: &str) -> Result<&'a Value> {
        if let Some(limits) = &self.limits {
            if selector.len() > limits.max_selector_length {
                return Err(ObjxError::SelectorTooLong {
                    length: selector.len(),
                    max_length: limits.max_selector_length,
                });
            }
        }

        self.resolve_path(root, &Path::parse(selector))
    }

    /// Walk a parsed path from `root`
    pub fn resolve_path<'a>(&self, root: &'a Value, path: &Path) -> Result<&'a Value> {
        if let Some(limits) = &self.limits {
            if path.len() > limits.max_segments {
                return Err(ObjxError::TooManySegments {
                    count: path.len(),
                    max_segments: limits.max_segments,
                });
            }
        }

        let mut current = root;
        for segment in path.segments() {
            match step(current, segment)? {
                Step::Advance(next) => current = next,
                Step::Unchanged(reason) => {
                    trace!(%segment, reason, "soft miss, keeping current value");
                }
            }
        }

        Ok(current)
    }

    /// Index into a root array
    pub fn resolve_index<'a>(&self, root: &'a Value, index: u64) -> Result<&'a Value> {
        match root {
            Value::Array(items) => {
                element(items, index).ok_or_else(|| ObjxError::IndexOutOfRange {
                    index,
                    len: items.len(),
                    segment: format!("[{}]", index),
                })
            }
            other => Err(ObjxError::NotASequence {
                index,
                found: other.kind(),
            }),
        }
    }
}

/// Apply one segment to the current value
fn step<'a>(current: &'a Value, segment: &Segment) -> Result<Step<'a>> {
    match segment {
        Segment::Key(key) => match current {
            Value::Object(map) => Ok(Step::Advance(map.get(key).unwrap_or(&NULL))),
            _ => Ok(Step::Unchanged("current value is not a map")),
        },
        Segment::Indexed { key, index } => {
            let Value::Object(map) = current else {
                return Ok(Step::Unchanged("current value is not a map"));
            };
            match map.get(key) {
                Some(Value::Array(items)) => items
                    .get(*index)
                    .map(Step::Advance)
                    .ok_or_else(|| ObjxError::IndexOutOfRange {
                        index: *index as u64,
                        len: items.len(),
                        segment: segment.to_string(),
                    }),
                Some(_) => Ok(Step::Unchanged("value under key is not an array")),
                None => Ok(Step::Unchanged("key not found")),
            }
        }
        Segment::Malformed { .. } => Err(ObjxError::InvalidIndex {
            segment: segment.to_string(),
        }),
    }
}

fn element(items: &[Value], index: u64) -> Option<&Value> {
    usize::try_from(index).ok().and_then(|idx| items.get(idx))
}
