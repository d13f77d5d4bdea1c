//! Kind classification and exact-width type predicates

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Runtime classification of a `Value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Kind {
    /// Absence of a value
    Null = 0,
    /// Boolean
    Bool = 1,
    /// Platform-width signed integer
    Int = 2,
    /// 8-bit signed integer
    Int8 = 3,
    /// 16-bit signed integer
    Int16 = 4,
    /// 32-bit signed integer
    Int32 = 5,
    /// 64-bit signed integer
    Int64 = 6,
    /// Platform-width unsigned integer
    Uint = 7,
    /// 8-bit unsigned integer
    Uint8 = 8,
    /// 16-bit unsigned integer
    Uint16 = 9,
    /// 32-bit unsigned integer
    Uint32 = 10,
    /// 64-bit unsigned integer
    Uint64 = 11,
    /// Pointer-sized unsigned integer
    Uintptr = 12,
    /// 32-bit float
    Float32 = 13,
    /// 64-bit float
    Float64 = 14,
    /// Complex number with `f32` parts
    Complex64 = 15,
    /// Complex number with `f64` parts
    Complex128 = 16,
    /// String
    String = 17,
    /// Ordered sequence
    Array = 18,
    /// String-keyed mapping
    Object = 19,
    /// Callable
    Func = 20,
}

impl Kind {
    /// Every classification, in tag order
    pub const ALL: [Kind; 21] = [
        Kind::Null,
        Kind::Bool,
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Uint,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Uintptr,
        Kind::Float32,
        Kind::Float64,
        Kind::Complex64,
        Kind::Complex128,
        Kind::String,
        Kind::Array,
        Kind::Object,
        Kind::Func,
    ];

    /// Lowercase name of the classification
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Uintptr => "uintptr",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Complex64 => "complex64",
            Kind::Complex128 => "complex128",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Func => "func",
        }
    }

    /// Whether this kind is one of the signed or unsigned integer kinds
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Kind::Int
                | Kind::Int8
                | Kind::Int16
                | Kind::Int32
                | Kind::Int64
                | Kind::Uint
                | Kind::Uint8
                | Kind::Uint16
                | Kind::Uint32
                | Kind::Uint64
                | Kind::Uintptr
        )
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Classification tag of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::I8(_) => Kind::Int8,
            Value::I16(_) => Kind::Int16,
            Value::I32(_) => Kind::Int32,
            Value::I64(_) => Kind::Int64,
            Value::Uint(_) => Kind::Uint,
            Value::U8(_) => Kind::Uint8,
            Value::U16(_) => Kind::Uint16,
            Value::U32(_) => Kind::Uint32,
            Value::U64(_) => Kind::Uint64,
            Value::UintPtr(_) => Kind::Uintptr,
            Value::F32(_) => Kind::Float32,
            Value::F64(_) => Kind::Float64,
            Value::C64(_) => Kind::Complex64,
            Value::C128(_) => Kind::Complex128,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Func(_) => Kind::Func,
        }
    }

    /// Whether this value is classified as `kind`
    pub fn is_kind(&self, kind: Kind) -> bool {
        self.kind() == kind
    }

    /// Whether this value is null
    pub fn is_nil(&self) -> bool {
        self.is_kind(Kind::Null)
    }

    /// Whether this value is a boolean
    pub fn is_bool(&self) -> bool {
        self.is_kind(Kind::Bool)
    }

    /// Whether this value is a string
    pub fn is_str(&self) -> bool {
        self.is_kind(Kind::String)
    }

    /// Whether this value is a platform-width signed integer
    pub fn is_int(&self) -> bool {
        self.is_kind(Kind::Int)
    }

    /// Whether this value is an 8-bit signed integer
    pub fn is_int8(&self) -> bool {
        self.is_kind(Kind::Int8)
    }

    /// Whether this value is a 16-bit signed integer
    pub fn is_int16(&self) -> bool {
        self.is_kind(Kind::Int16)
    }

    /// Whether this value is a 32-bit signed integer
    pub fn is_int32(&self) -> bool {
        self.is_kind(Kind::Int32)
    }

    /// Whether this value is a 64-bit signed integer
    pub fn is_int64(&self) -> bool {
        self.is_kind(Kind::Int64)
    }

    /// Whether this value is a platform-width unsigned integer
    pub fn is_uint(&self) -> bool {
        self.is_kind(Kind::Uint)
    }

    /// Whether this value is an 8-bit unsigned integer
    pub fn is_uint8(&self) -> bool {
        self.is_kind(Kind::Uint8)
    }

    /// Whether this value is a 16-bit unsigned integer
    pub fn is_uint16(&self) -> bool {
        self.is_kind(Kind::Uint16)
    }

    /// Whether this value is a 32-bit unsigned integer
    pub fn is_uint32(&self) -> bool {
        self.is_kind(Kind::Uint32)
    }

    /// Whether this value is a 64-bit unsigned integer
    pub fn is_uint64(&self) -> bool {
        self.is_kind(Kind::Uint64)
    }

    /// Whether this value is a pointer-sized unsigned integer
    pub fn is_uintptr(&self) -> bool {
        self.is_kind(Kind::Uintptr)
    }

    /// Whether this value is a 32-bit float
    pub fn is_float32(&self) -> bool {
        self.is_kind(Kind::Float32)
    }

    /// Whether this value is a 64-bit float
    pub fn is_float64(&self) -> bool {
        self.is_kind(Kind::Float64)
    }

    /// Whether this value is a complex number with `f32` parts
    pub fn is_complex64(&self) -> bool {
        self.is_kind(Kind::Complex64)
    }

    /// Whether this value is a complex number with `f64` parts
    pub fn is_complex128(&self) -> bool {
        self.is_kind(Kind::Complex128)
    }

    /// Whether this value is a callable
    pub fn is_func(&self) -> bool {
        self.is_kind(Kind::Func)
    }
}
