//! Parsed documentation comments (`/** ... */`).
//!
//! A docblock is a short description, an optional long description, and a
//! sequence of `@` tags. `@param` tags are parsed into structured
//! [`ParamTag`]s; every other tag is kept verbatim. Tags are grouped by name
//! in source order so lookups like "all param tags" stay cheap.

pub mod tags;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use self::tags::{ParamTag, Tag};

lazy_static! {
    /// Content after `@param`: optional type, `$variable`, rest is description.
    static ref PARAM_CONTENT: Regex = Regex::new(r"^(?:(\S+)\s+)?\$(\w+)\s*(.*)$").unwrap();
    /// A tag line: `@name` followed by arbitrary content.
    static ref TAG_LINE: Regex = Regex::new(r"^@([A-Za-z][\w-]*)\s*(.*)$").unwrap();
}

#[derive(Debug)]
pub enum DocblockError {
    MissingOpening,
    MissingClosing,
}

impl fmt::Display for DocblockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocblockError::MissingOpening => write!(f, "doc comment must start with /**"),
            DocblockError::MissingClosing => write!(f, "doc comment must end with */"),
        }
    }
}

impl std::error::Error for DocblockError {}

/// One parsed tag, structured where this crate understands the tag name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DocTag {
    Param(ParamTag),
    Other(Tag),
}

impl fmt::Display for DocTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocTag::Param(tag) => tag.fmt(f),
            DocTag::Other(tag) => tag.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Docblock {
    short_description: Option<String>,
    long_description: Option<String>,
    tags: IndexMap<String, Vec<DocTag>>,
}

impl Docblock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the raw text of a `/** ... */` comment.
    ///
    /// Leading `*` gutters are stripped per line. The first paragraph before
    /// any tag becomes the short description, remaining paragraphs the long
    /// description. A tag's content continues across following lines until
    /// the next `@` line.
    pub fn parse(text: &str) -> Result<Self, DocblockError> {
        let trimmed = text.trim();
        let inner = trimmed
            .strip_prefix("/**")
            .ok_or(DocblockError::MissingOpening)?;
        let inner = inner
            .strip_suffix("*/")
            .ok_or(DocblockError::MissingClosing)?;

        let mut docblock = Docblock::new();
        let mut description_lines: Vec<String> = Vec::new();
        let mut pending: Option<(String, String)> = None;

        for raw_line in inner.lines() {
            let line = strip_gutter(raw_line);

            if let Some(caps) = TAG_LINE.captures(line) {
                if let Some((name, content)) = pending.take() {
                    docblock.push_tag(&name, &content);
                }
                pending = Some((caps[1].to_string(), caps[2].trim().to_string()));
            } else if let Some((_, content)) = pending.as_mut() {
                // Continuation of the previous tag's content.
                if !line.is_empty() {
                    if !content.is_empty() {
                        content.push(' ');
                    }
                    content.push_str(line);
                }
            } else {
                description_lines.push(line.to_string());
            }
        }
        if let Some((name, content)) = pending.take() {
            docblock.push_tag(&name, &content);
        }

        let description = description_lines.join("\n");
        let description = description.trim();
        if !description.is_empty() {
            match description.split_once("\n\n") {
                Some((short, long)) => {
                    docblock.short_description = Some(short.trim().to_string());
                    docblock.long_description = Some(long.trim().to_string());
                }
                None => docblock.short_description = Some(description.to_string()),
            }
        }

        Ok(docblock)
    }

    fn push_tag(&mut self, name: &str, content: &str) {
        let tag = if name == "param" {
            match PARAM_CONTENT.captures(content) {
                Some(caps) => {
                    let mut param = ParamTag::create();
                    if let Some(type_name) = caps.get(1) {
                        param.set_type(type_name.as_str());
                    }
                    param.set_variable(&caps[2]);
                    let description = caps[3].trim();
                    if !description.is_empty() {
                        param.set_description(description);
                    }
                    DocTag::Param(param)
                }
                // No $variable to anchor on; keep the line verbatim.
                None => DocTag::Other(Tag::new(name, content)),
            }
        } else {
            DocTag::Other(Tag::new(name, content))
        };
        self.append_tag(name, tag);
    }

    pub fn append_tag(&mut self, name: &str, tag: DocTag) {
        self.tags.entry(name.to_string()).or_default().push(tag);
    }

    pub fn short_description(&self) -> Option<&str> {
        self.short_description.as_deref()
    }

    pub fn set_short_description(&mut self, text: impl Into<String>) -> &mut Self {
        self.short_description = Some(text.into());
        self
    }

    pub fn long_description(&self) -> Option<&str> {
        self.long_description.as_deref()
    }

    pub fn set_long_description(&mut self, text: impl Into<String>) -> &mut Self {
        self.long_description = Some(text.into());
        self
    }

    /// All tags with the given name, in source order.
    pub fn tags_named(&self, name: &str) -> &[DocTag] {
        self.tags.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn param_tags(&self) -> impl Iterator<Item = &ParamTag> {
        self.tags_named("param").iter().filter_map(|tag| match tag {
            DocTag::Param(param) => Some(param),
            DocTag::Other(_) => None,
        })
    }

    /// The `@param` tag describing `$<name>`, if any.
    pub fn find_param(&self, name: &str) -> Option<&ParamTag> {
        self.param_tags().find(|tag| tag.variable() == Some(name))
    }

    pub fn is_empty(&self) -> bool {
        self.short_description.is_none() && self.long_description.is_none() && self.tags.is_empty()
    }
}

fn strip_gutter(line: &str) -> &str {
    let line = line.trim_start();
    let line = line.strip_prefix('*').unwrap_or(line);
    let line = line.strip_prefix(' ').unwrap_or(line);
    line.trim_end()
}

impl fmt::Display for Docblock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/**")?;
        let mut wrote_section = false;

        if let Some(short) = &self.short_description {
            for line in short.lines() {
                writeln!(f, " * {}", line)?;
            }
            wrote_section = true;
        }
        if let Some(long) = &self.long_description {
            if wrote_section {
                writeln!(f, " *")?;
            }
            for line in long.lines() {
                writeln!(f, " * {}", line)?;
            }
            wrote_section = true;
        }
        if !self.tags.is_empty() {
            if wrote_section {
                writeln!(f, " *")?;
            }
            for tags in self.tags.values() {
                for tag in tags {
                    writeln!(f, " * {}", tag)?;
                }
            }
        }
        write!(f, " */")
    }
}
