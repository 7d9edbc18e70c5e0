use serde::Serialize;
use std::fmt;

/// A `@param` documentation tag: variable name, type, description.
///
/// The variable is stored without its `$` sigil; rendering adds it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParamTag {
    type_name: Option<String>,
    variable: Option<String>,
    description: Option<String>,
}

impl ParamTag {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn set_type(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Sets the variable name. A leading `$` is stripped so both spellings
    /// are accepted.
    pub fn set_variable(&mut self, variable: impl Into<String>) -> &mut Self {
        let variable = variable.into();
        let variable = variable.strip_prefix('$').unwrap_or(&variable).to_string();
        self.variable = Some(variable);
        self
    }

    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for ParamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@param")?;
        if let Some(type_name) = &self.type_name {
            write!(f, " {}", type_name)?;
        }
        write!(f, " ${}", self.variable.as_deref().unwrap_or_default())?;
        if let Some(description) = &self.description {
            write!(f, " {}", description)?;
        }
        Ok(())
    }
}

/// Any tag other than `@param`, kept verbatim so a parsed docblock
/// round-trips tags this crate does not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,
    pub content: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.content.is_empty() {
            write!(f, " {}", self.content)?;
        }
        Ok(())
    }
}
