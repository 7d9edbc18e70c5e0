//! In-memory code model for generating PHP source text.
//!
//! The model is an object graph a generator fills in and later renders to
//! source. This crate covers the parameter leaf of that graph: the
//! [`Parameter`] value object, the named-constant entity its defaults may
//! reference, the `/** ... */` doc comments that describe parameters, and
//! the introspected signatures parameters can be rebuilt from.

pub mod docblock;
pub mod model;
pub mod reflection;

pub use docblock::tags::{ParamTag, Tag};
pub use docblock::{Docblock, DocblockError};
pub use model::constant::PhpConstant;
pub use model::parameter::Parameter;
pub use model::value::Value;
pub use reflection::{ParameterSignature, ReflectedValue};
