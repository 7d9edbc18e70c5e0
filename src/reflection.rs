//! Structured parameter signatures, as reported by runtime introspection.
//!
//! Reference: $PHP_SRC_PATH/ext/reflection/php_reflection.c - ReflectionParameter
//!
//! The model never inspects a live function itself. Callers walk their own
//! source of truth (a parsed AST, a reflection dump) and hand over one
//! [`ParameterSignature`] per formal parameter; [`Parameter::from_reflection`]
//! turns it into a model object.
//!
//! [`Parameter::from_reflection`]: crate::model::parameter::Parameter::from_reflection

use serde::Serialize;

/// What introspection reports for a parameter's default value.
///
/// The literal kinds map straight onto [`Value`](crate::model::value::Value).
/// `Expr` carries the verbatim source text of a default that reflection
/// cannot express as a simple literal, e.g. an array literal or a `new`
/// expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReflectedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// The name of a constant the default refers to.
    Constant(String),
    /// Verbatim source text of a non-literal default.
    Expr(String),
}

/// One formal parameter as seen by the caller's introspection layer.
///
/// Built fluently, or with struct-literal syntax over [`Default`]:
///
/// ```
/// use php_codegen::ParameterSignature;
///
/// let sig = ParameterSignature::new("options").array_hint(true);
/// assert!(!sig.by_ref);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterSignature {
    pub name: String,
    /// ReflectionParameter::isPassedByReference(): bool
    pub by_ref: bool,
    /// `None` when no default exists (the parameter is required).
    pub default_value: Option<ReflectedValue>,
    /// The declaration carries an `array` type hint.
    pub array_hint: bool,
    /// The declaration names a class or interface type.
    pub class_hint: Option<String>,
    /// The declaration carries a `callable` type hint.
    pub is_callable: bool,
}

impl ParameterSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn by_ref(mut self, flag: bool) -> Self {
        self.by_ref = flag;
        self
    }

    pub fn default_value(mut self, value: ReflectedValue) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn array_hint(mut self, flag: bool) -> Self {
        self.array_hint = flag;
        self
    }

    pub fn class_hint(mut self, class: impl Into<String>) -> Self {
        self.class_hint = Some(class.into());
        self
    }

    pub fn is_callable(mut self, flag: bool) -> Self {
        self.is_callable = flag;
        self
    }
}
