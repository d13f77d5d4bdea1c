//! Dynamic value union

use crate::complex::{Complex128, Complex64};
use crate::func::Func;
use std::collections::BTreeMap;

/// String-keyed mapping of values, ordered by key
pub type Map = BTreeMap<String, Value>;

/// Untyped value of any supported shape
///
/// Every integer and float width is its own variant so classification never
/// coerces across widths. `UintPtr` shares its payload type with `Uint` but is
/// classified separately.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Platform-width signed integer
    Int(isize),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// Platform-width unsigned integer
    Uint(usize),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// Pointer-sized unsigned integer
    UintPtr(usize),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// Complex number with `f32` parts
    C64(Complex64),
    /// Complex number with `f64` parts
    C128(Complex128),
    /// UTF-8 string
    String(String),
    /// Ordered sequence
    Array(Vec<Value>),
    /// String-keyed mapping
    Object(Map),
    /// Callable
    Func(Func),
}

impl Value {
    /// Build a pointer-sized unsigned integer value
    pub fn uintptr(addr: usize) -> Self {
        Value::UintPtr(addr)
    }

    /// Borrow the string payload
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Copy the boolean payload
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the sequence payload
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the mapping payload
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the callable payload
    pub fn as_func(&self) -> Option<&Func> {
        match self {
            Value::Func(func) => Some(func),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping
    ///
    /// Returns `None` both for a missing key and for a non-mapping value.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}
