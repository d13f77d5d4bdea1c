//! Default textual formatting
//!
//! Values format the way a diagnostic dump would show them: `<nil>` for null,
//! strings verbatim, arrays as `[a b c]` and maps as `map[k:v k2:v2]` in key
//! order. A named callable uses its name as its custom textual form.

use crate::value::Value;
use std::fmt::{self, Display, Formatter, Write};

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::I8(n) => write!(f, "{}", n),
            Value::I16(n) => write!(f, "{}", n),
            Value::I32(n) => write!(f, "{}", n),
            Value::I64(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::U8(n) => write!(f, "{}", n),
            Value::U16(n) => write!(f, "{}", n),
            Value::U32(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}", n),
            Value::UintPtr(n) => write!(f, "{}", n),
            Value::F32(n) => write!(f, "{}", n),
            Value::F64(n) => write!(f, "{}", n),
            Value::C64(c) => write!(f, "{}", c),
            Value::C128(c) => write!(f, "{}", c),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_char('[')?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_str("map[")?;
                for (idx, (key, item)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{}:{}", key, item)?;
                }
                f.write_char(']')
            }
            Value::Func(func) => match func.name() {
                Some(name) => f.write_str(name),
                None => f.write_str("<func>"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Complex128, Func, Map};

    #[test]
    fn test_scalar_formatting() {
        assert_eq!(Value::Null.to_string(), "<nil>");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::I8(-5).to_string(), "-5");
        assert_eq!(Value::U64(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Value::F64(2.5).to_string(), "2.5");
        assert_eq!(Value::C128(Complex128::new(1.0, -1.0)).to_string(), "(1-1i)");
        assert_eq!(Value::String("hi".to_string()).to_string(), "hi");
    }

    #[test]
    fn test_array_formatting() {
        let v = Value::Array(vec![
            Value::I64(1),
            Value::String("two".to_string()),
            Value::Null,
        ]);
        assert_eq!(v.to_string(), "[1 two <nil>]");
        assert_eq!(Value::Array(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn test_map_formatting_is_key_ordered() {
        let mut map = Map::new();
        map.insert("b".to_string(), Value::I64(2));
        map.insert("a".to_string(), Value::Array(vec![Value::I64(1)]));
        assert_eq!(Value::Object(map).to_string(), "map[a:[1] b:2]");
        assert_eq!(Value::Object(Map::new()).to_string(), "map[]");
    }

    #[test]
    fn test_func_formatting() {
        assert_eq!(Value::Func(Func::new(|_| Value::Null)).to_string(), "<func>");
        assert_eq!(
            Value::Func(Func::named("handler", |_| Value::Null)).to_string(),
            "handler"
        );
    }
}
