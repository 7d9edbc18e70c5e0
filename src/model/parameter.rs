//! The parameter model.
//!
//! Reference: $PHP_SRC_PATH/Zend/zend_compile.h - zend_arg_info

use crate::docblock::Docblock;
use crate::docblock::tags::ParamTag;
use crate::model::constant::PhpConstant;
use crate::model::parts::{NamePart, TypePart, ValuePart};
use crate::model::value::Value;
use crate::reflection::{ParameterSignature, ReflectedValue};
use serde::Serialize;

/// One formal parameter of a function or method.
///
/// A mutable value object: name, optional type with description, optional
/// default (literal or raw expression, never both), and the by-reference
/// flag. Setters are fluent:
///
/// ```
/// use php_codegen::{Parameter, Value};
///
/// let mut param = Parameter::create("options");
/// param.set_type("array").set_value(Value::Null).set_passed_by_reference(true);
/// assert!(param.is_passed_by_reference());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parameter {
    name: NamePart,
    ty: TypePart,
    value: ValuePart,
    passed_by_reference: bool,
}

impl Parameter {
    /// A parameter with no name yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A parameter named `name`.
    pub fn create(name: impl Into<String>) -> Self {
        let mut parameter = Self::default();
        parameter.name.set_name(name);
        parameter
    }

    /// Rebuilds a parameter from an introspected signature and the parsed
    /// doc comment of its owning function.
    ///
    /// The default value is stored as a literal when the signature reports
    /// one of the literal kinds, otherwise as a raw expression. The type
    /// comes from a matching `@param $<name>` tag when present; failing
    /// that, from the signature's own hints (array, then class, then
    /// callable).
    pub fn from_reflection(sig: &ParameterSignature, docblock: &Docblock) -> Self {
        let mut parameter = Parameter::create(&sig.name);
        parameter.set_passed_by_reference(sig.by_ref);

        if let Some(default) = &sig.default_value {
            match default {
                ReflectedValue::Null => parameter.set_value(Value::Null),
                ReflectedValue::Bool(b) => parameter.set_value(*b),
                ReflectedValue::Int(i) => parameter.set_value(*i),
                ReflectedValue::Float(x) => parameter.set_value(*x),
                ReflectedValue::Str(s) => parameter.set_value(s.clone()),
                ReflectedValue::Constant(name) => {
                    parameter.set_value(PhpConstant::create(name.clone()))
                }
                ReflectedValue::Expr(text) => parameter.set_expression(text.clone()),
            };
        }

        if let Some(tag) = docblock.find_param(&sig.name) {
            match (tag.type_name(), tag.description()) {
                (Some(type_name), Some(description)) => {
                    parameter.ty.set_type_with_description(type_name, description);
                }
                (Some(type_name), None) => {
                    parameter.set_type(type_name);
                }
                (None, Some(description)) => {
                    parameter.set_type_description(description);
                }
                (None, None) => {}
            }
        }

        // No type in the doc comment; fall back to the signature's hints.
        if parameter.type_name().is_none() {
            if sig.array_hint {
                parameter.set_type("array");
            } else if let Some(class) = &sig.class_hint {
                parameter.set_type(class.clone());
            } else if sig.is_callable {
                parameter.set_type("callable");
            }
        }

        parameter
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name.set_name(name);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.name()
    }

    pub fn set_type(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.ty.set_type(type_name);
        self
    }

    pub fn type_name(&self) -> Option<&str> {
        self.ty.type_name()
    }

    pub fn set_type_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.ty.set_description(description);
        self
    }

    pub fn type_description(&self) -> Option<&str> {
        self.ty.description()
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value.set_value(value);
        self
    }

    pub fn unset_value(&mut self) -> &mut Self {
        self.value.unset_value();
        self
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.value()
    }

    pub fn set_expression(&mut self, expression: impl Into<String>) -> &mut Self {
        self.value.set_expression(expression);
        self
    }

    pub fn unset_expression(&mut self) -> &mut Self {
        self.value.unset_expression();
        self
    }

    pub fn expression(&self) -> Option<&str> {
        self.value.expression()
    }

    pub fn has_value(&self) -> bool {
        self.value.has_value()
    }

    pub fn set_passed_by_reference(&mut self, flag: bool) -> &mut Self {
        self.passed_by_reference = flag;
        self
    }

    /// ReflectionParameter::isPassedByReference(): bool
    pub fn is_passed_by_reference(&self) -> bool {
        self.passed_by_reference
    }

    /// Projects the parameter into a `@param` tag from its current type,
    /// name, and description. Pure; mutating the parameter afterwards
    /// changes the next projection, not this one.
    pub fn docblock_tag(&self) -> ParamTag {
        let mut tag = ParamTag::create();
        if let Some(type_name) = self.type_name() {
            tag.set_type(type_name);
        }
        if let Some(name) = self.name() {
            tag.set_variable(name);
        }
        if let Some(description) = self.type_description() {
            tag.set_description(description);
        }
        tag
    }
}
