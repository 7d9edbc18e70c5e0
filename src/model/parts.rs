//! Capability parts shared by the model types.
//!
//! Each part is a small value struct embedded by value in the concrete
//! models (`Parameter`, `PhpConstant`). The models expose delegating
//! accessors so callers never touch the parts directly, but the parts stay
//! public for reuse by further model types (properties, methods).

use crate::model::value::Value;
use serde::Serialize;

/// Holds an identifier string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamePart {
    name: Option<String>,
}

impl NamePart {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Holds an optional type name and an optional human-readable description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypePart {
    type_name: Option<String>,
    description: Option<String>,
}

impl TypePart {
    pub fn set_type(&mut self, type_name: impl Into<String>) {
        self.type_name = Some(type_name.into());
    }

    /// Sets the type and its description in one call.
    pub fn set_type_with_description(
        &mut self,
        type_name: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.type_name = Some(type_name.into());
        self.description = Some(description.into());
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Holds a default: either a literal [`Value`] or a raw source expression.
///
/// At most one of the two is set at any time. Setting one clears the other;
/// this invariant is owned here, not by the embedding model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValuePart {
    value: Option<Value>,
    expression: Option<String>,
}

impl ValuePart {
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
        self.expression = None;
    }

    pub fn unset_value(&mut self) {
        self.value = None;
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn set_expression(&mut self, expression: impl Into<String>) {
        self.expression = Some(expression.into());
        self.value = None;
    }

    pub fn unset_expression(&mut self) {
        self.expression = None;
    }

    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    /// True if the part holds an expression rather than a literal.
    pub fn is_expression(&self) -> bool {
        self.expression.is_some()
    }

    /// True if either a literal or an expression is set.
    pub fn has_value(&self) -> bool {
        self.value.is_some() || self.expression.is_some()
    }
}
