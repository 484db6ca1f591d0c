//! Tagged value model for script-facing call arguments.
//!
//! Covers the shapes a load-test script runtime traffics in: text, numbers,
//! booleans, lists, attribute-bearing objects, and an explicit "no value".
//! Objects have shared-reference identity: mutation through one handle is
//! visible through every other handle, matching the host runtime's object
//! semantics. The whole model is single-threaded (`Rc`/`RefCell`), like the
//! script runtime it stands in for.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Attribute map backing a [`Value::Object`].
pub type Attrs = BTreeMap<String, Value>;

/// A single script-level value.
///
/// `Missing` is the null/undefined equivalent. An attribute explicitly set
/// to `Missing` is distinct from one that was never set; both are treated as
/// "no value" by consumers that only care about presence of content.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Missing,
    Bool(bool),
    Int(i64),
    Num(f64),
    Str(String),
    List(Vec<Value>),
    Object(Rc<RefCell<Attrs>>),
}

impl Value {
    /// Builds an empty attribute-bearing object.
    pub fn object() -> Self {
        Value::Object(Rc::new(RefCell::new(Attrs::new())))
    }

    /// Builds an object from an existing attribute map.
    pub fn object_from(attrs: Attrs) -> Self {
        Value::Object(Rc::new(RefCell::new(attrs)))
    }

    /// Borrows the text content when this value is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// True when this value supports attribute access.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Reads an attribute from an object value.
    ///
    /// Returns `None` when the value is not an object or the attribute was
    /// never set. An attribute explicitly set to `Missing` reads as
    /// `Some(Value::Missing)`.
    pub fn get_attr(&self, name: &str) -> Option<Value> {
        match self {
            Value::Object(attrs) => attrs.borrow().get(name).cloned(),
            _ => None,
        }
    }

    /// Writes an attribute on an object value. Returns whether the write
    /// was applied; any non-object target ignores the write.
    pub fn set_attr(&self, name: &str, value: Value) -> bool {
        match self {
            Value::Object(attrs) => {
                attrs.borrow_mut().insert(name.to_string(), value);
                true
            }
            _ => false,
        }
    }

    /// True when `self` and `other` are handles to the same object.
    ///
    /// Structural equality (`==`) compares object contents; this compares
    /// identity.
    pub fn same_object(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "<missing>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Num(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(attrs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in attrs.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// JSON bridge, used by trace replay: JSON null maps to `Missing`, numbers
/// prefer `Int` when they are integral, objects become attribute maps.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Missing,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Num(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let attrs = map
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Attrs>();
                Value::object_from(attrs)
            }
        }
    }
}
