use crate::model::parts::{NamePart, ValuePart};
use crate::model::value::Value;
use serde::Serialize;

/// A named constant entity.
///
/// Parameter defaults may refer to one of these instead of a literal
/// (`function f($x = PHP_EOL)`), so the constant itself is modeled with a
/// name plus its own value or defining expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhpConstant {
    name: NamePart,
    value: ValuePart,
}

impl PhpConstant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(name: impl Into<String>) -> Self {
        let mut constant = Self::default();
        constant.name.set_name(name);
        constant
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name.set_name(name);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.name()
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value.set_value(value);
        self
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.value()
    }

    pub fn set_expression(&mut self, expression: impl Into<String>) -> &mut Self {
        self.value.set_expression(expression);
        self
    }

    pub fn expression(&self) -> Option<&str> {
        self.value.expression()
    }

    pub fn has_value(&self) -> bool {
        self.value.has_value()
    }
}
