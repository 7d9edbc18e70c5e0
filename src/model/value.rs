use crate::model::constant::PhpConstant;
use serde::Serialize;
use std::fmt;

/// A literal default value as PHP source can express it.
///
/// Only the kinds accepted in a parameter default position are modeled:
/// scalars, `null`, and references to named constants. Anything else (array
/// literals, `new` expressions, enum cases) is carried as a raw source
/// expression by the owning model instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Reference to a named constant entity, e.g. `PHP_EOL` or `Foo::BAR`.
    Constant(Box<PhpConstant>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Constant(_) => "constant",
        }
    }
}

/// Renders the literal as valid PHP source text.
///
/// Floats keep a decimal point so the emitted literal stays a float
/// (`1.0`, not `1`). Strings are single-quoted with `\` and `'` escaped,
/// which is sufficient since single-quoted PHP strings interpolate nothing.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(true) => write!(f, "true"),
            Value::Bool(false) => write!(f, "false"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => {
                if x.is_nan() {
                    write!(f, "NAN")
                } else if x.is_infinite() {
                    write!(f, "{}", if *x < 0.0 { "-INF" } else { "INF" })
                } else if x.fract() == 0.0 {
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
            Value::Str(s) => {
                write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            Value::Constant(c) => write!(f, "{}", c.name().unwrap_or_default()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
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

impl From<PhpConstant> for Value {
    fn from(c: PhpConstant) -> Self {
        Value::Constant(Box::new(c))
    }
}
