//! Wrapped dynamic values

use crate::error::Result;
use crate::resolve::Resolver;
use crate::selector::Selector;
use objx_value::{Kind, Value};
use std::fmt;

/// Glyph written on both sides of a rendered value
pub const RENDER_MARKER: char = '•';

/// Immutable wrapper around one dynamic value
///
/// Navigation never modifies the wrapped value; every `get` returns a new
/// `Obj` holding a copy of the addressed subtree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Obj {
    value: Value,
}

impl Obj {
    /// Wrap any value, including null
    pub fn new(raw: impl Into<Value>) -> Self {
        Self { value: raw.into() }
    }

    /// Wrap null
    pub fn nil() -> Self {
        Self { value: Value::Null }
    }

    /// The wrapped value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Unwrap into the underlying value
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Delimited textual form for diagnostics, e.g. `•hi•`
    ///
    /// Not intended to be parsed back.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Resolve `selector`, panicking on a broken precondition
    ///
    /// Soft misses never panic: a missing key yields null or leaves the walk on
    /// the last value reached.
    ///
    /// # Panics
    ///
    /// Panics when an array index is out of range, when an integer selector is
    /// applied to a non-array, or when bracketed digits overflow an index. Use
    /// [`Obj::try_get`] to receive these as errors instead.
    pub fn get(&self, selector: impl Into<Selector>) -> Obj {
        self.get_with(&Resolver::new(), selector)
    }

    /// Resolve `selector`, returning broken preconditions as errors
    pub fn try_get(&self, selector: impl Into<Selector>) -> Result<Obj> {
        self.try_get_with(&Resolver::new(), selector)
    }

    /// Resolve a selector held in a dynamic value
    ///
    /// # Panics
    ///
    /// Panics when `selector` is neither a string nor an integer, and in every
    /// case where [`Obj::get`] panics.
    pub fn get_dyn(&self, selector: &Value) -> Obj {
        let selector = Selector::try_from(selector)
            .unwrap_or_else(|err| panic!("objx: Get with invalid selector: {}", err));
        self.get(selector)
    }

    /// Resolve a selector held in a dynamic value, returning errors
    pub fn try_get_dyn(&self, selector: &Value) -> Result<Obj> {
        let selector = Selector::try_from(selector)?;
        self.try_get(selector)
    }

    /// Resolve with a configured resolver, panicking on errors
    ///
    /// # Panics
    ///
    /// Panics on any error [`Obj::try_get_with`] would return.
    pub fn get_with(&self, resolver: &Resolver, selector: impl Into<Selector>) -> Obj {
        let selector = selector.into();
        self.try_get_with(resolver, selector.clone())
            .unwrap_or_else(|err| panic!("objx: Get '{}' failed: {}", selector, err))
    }

    /// Resolve with a configured resolver
    pub fn try_get_with(&self, resolver: &Resolver, selector: impl Into<Selector>) -> Result<Obj> {
        let selector = selector.into();
        let found = resolver.resolve(&self.value, &selector)?;
        Ok(Obj::new(found.clone()))
    }

    /// Classification tag of the wrapped value
    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// Whether the wrapped value is classified as `kind`
    pub fn is_kind(&self, kind: Kind) -> bool {
        self.value.is_kind(kind)
    }

    /// Whether the wrapped value is null
    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }
}

// Exact-width predicates, one per `Kind`; see the matching methods on `Value`.
#[allow(missing_docs)]
impl Obj {
    pub fn is_bool(&self) -> bool {
        self.value.is_bool()
    }

    pub fn is_str(&self) -> bool {
        self.value.is_str()
    }

    pub fn is_int(&self) -> bool {
        self.value.is_int()
    }

    pub fn is_int8(&self) -> bool {
        self.value.is_int8()
    }

    pub fn is_int16(&self) -> bool {
        self.value.is_int16()
    }

    pub fn is_int32(&self) -> bool {
        self.value.is_int32()
    }

    pub fn is_int64(&self) -> bool {
        self.value.is_int64()
    }

    pub fn is_uint(&self) -> bool {
        self.value.is_uint()
    }

    pub fn is_uint8(&self) -> bool {
        self.value.is_uint8()
    }

    pub fn is_uint16(&self) -> bool {
        self.value.is_uint16()
    }

    pub fn is_uint32(&self) -> bool {
        self.value.is_uint32()
    }

    pub fn is_uint64(&self) -> bool {
        self.value.is_uint64()
    }

    pub fn is_uintptr(&self) -> bool {
        self.value.is_uintptr()
    }

    pub fn is_float32(&self) -> bool {
        self.value.is_float32()
    }

    pub fn is_float64(&self) -> bool {
        self.value.is_float64()
    }

    pub fn is_complex64(&self) -> bool {
        self.value.is_complex64()
    }

    pub fn is_complex128(&self) -> bool {
        self.value.is_complex128()
    }

    pub fn is_func(&self) -> bool {
        self.value.is_func()
    }
}

impl From<Value> for Obj {
    fn from(value: Value) -> Self {
        Self { value }
    }
}

impl From<serde_json::Value> for Obj {
    fn from(value: serde_json::Value) -> Self {
        Self {
            value: Value::from(value),
        }
    }
}

impl fmt::Display for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", RENDER_MARKER, self.value, RENDER_MARKER)
    }
}
