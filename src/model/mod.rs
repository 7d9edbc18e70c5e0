pub mod constant;
pub mod parameter;
pub mod parts;
pub mod value;

pub use constant::PhpConstant;
pub use parameter::Parameter;
pub use value::Value;
