//! Values passed to and returned from a [crate::Structure].

use core::fmt;

/// A field value.
///
/// Integers are carried as `i64` so that callers can pass any primitive; the
/// codec wraps them to 16 bits on write.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Text(String),
    Integer(i64),
}

impl Value {
    /// Returns the kind of value, for error reporting.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
        }
    }

    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Integer(_) => None,
        }
    }

    /// Returns the integer, if this is an integer value.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Text(_) => None,
            Value::Integer(n) => Some(*n),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text:?}"),
            Value::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

// Only the low 16 bits are ever stored, so reinterpreting wide unsigned
// values as `i64` loses nothing.
macro_rules! impl_from_integer {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Value {
                #[inline]
                fn from(n: $type) -> Self {
                    Value::Integer(n as i64)
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from("Jack"), Value::Text("Jack".into()));
        assert_eq!(Value::from(String::from("Black")), Value::Text("Black".into()));
        assert_eq!(Value::from(53u16), Value::Integer(53));
        assert_eq!(Value::from(-1i32), Value::Integer(-1));
        assert_eq!(Value::from(u64::MAX), Value::Integer(-1));
    }

    #[test]
    fn test_accessors() {
        let text = Value::from("Jack");
        assert_eq!(text.as_text(), Some("Jack"));
        assert_eq!(text.as_integer(), None);
        assert_eq!(text.kind(), "text");

        let n = Value::from(53);
        assert_eq!(n.as_text(), None);
        assert_eq!(n.as_integer(), Some(53));
        assert_eq!(n.kind(), "integer");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("a\0").to_string(), "\"a\\0\"");
        assert_eq!(Value::from(7).to_string(), "7");
    }
}
