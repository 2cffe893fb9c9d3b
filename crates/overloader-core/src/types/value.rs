//! The opaque value model passed across the proxy boundary.
//!
//! Arguments, return values, field contents, and property overrides are all
//! carried as [`Value`]. Object instances travel as shared single-threaded
//! handles ([`ObjectRef`]) so that code outside the proxy can keep direct
//! access to the same instance.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::introspect::Introspect;

/// Shared handle to a wrapped object instance.
pub type ObjectRef = Rc<RefCell<dyn Introspect>>;

/// A value that can cross the proxy boundary.
#[derive(Clone)]
pub enum Value {
    /// Void/empty (the return of a method that yields nothing).
    Void,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value (owned).
    Str(String),
    /// Object instance, held by shared handle.
    Object(ObjectRef),
}

impl Value {
    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Object(_) => "object",
        }
    }

    /// Check if this value is void.
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Check if this value is an object handle.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Get the boolean content, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer content, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the floating point content, if any. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the string content, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the object handle, if any.
    pub fn as_object(&self) -> Option<ObjectRef> {
        match self {
            Value::Object(obj) => Some(Rc::clone(obj)),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "Void"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Int(i) => write!(f, "Int({})", i),
            Value::Float(v) => write!(f, "Float({})", v),
            Value::Str(s) => write!(f, "Str({:?})", s),
            Value::Object(obj) => match obj.try_borrow() {
                Ok(inner) => write!(f, "Object({})", inner.type_name()),
                Err(_) => write!(f, "Object(<borrowed>)"),
            },
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            // Object equality is reference identity, never structural.
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Void
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MemberKind, Visibility};

    struct Dummy;

    impl Introspect for Dummy {
        fn type_name(&self) -> &'static str {
            "Dummy"
        }

        fn member(&self, _kind: MemberKind, _name: &str) -> Option<Visibility> {
            None
        }

        fn raw_get(&self, _field: &str) -> Option<Value> {
            None
        }

        fn raw_set(&mut self, _field: &str, _value: Value) -> bool {
            false
        }

        fn method(&self, _name: &str) -> Option<crate::introspect::MethodFn> {
            None
        }
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Void.type_name(), "void");
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::Int(0).type_name(), "int");
        assert_eq!(Value::Float(0.0).type_name(), "float");
        assert_eq!(Value::Str("".into()).type_name(), "string");
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Int(42).as_float(), Some(42.0));
        assert_eq!(Value::Str("hi".into()).as_str(), Some("hi"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Str("hi".into()).as_int(), None);
        assert!(Value::Void.is_void());
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from(5i64), Value::Int(5));
        assert_eq!(Value::from(5i32), Value::Int(5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("x"), Value::Str("x".into()));
        assert_eq!(Value::from(()), Value::Void);
    }

    #[test]
    fn object_equality_is_identity() {
        let a: ObjectRef = Rc::new(RefCell::new(Dummy));
        let b: ObjectRef = Rc::new(RefCell::new(Dummy));
        assert_eq!(Value::Object(Rc::clone(&a)), Value::Object(Rc::clone(&a)));
        assert_ne!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn object_debug_names_the_type() {
        let obj: ObjectRef = Rc::new(RefCell::new(Dummy));
        let value = Value::Object(obj);
        assert_eq!(format!("{:?}", value), "Object(Dummy)");
        assert!(value.is_object());
        assert!(value.as_object().is_some());
    }
}
