//! Annotation records: the mapper's input.
//!
//! One record per documentation comment, reduced to an ordered tag list. The
//! serde shape follows the doctrine JSON format so records produced by other
//! JSDoc tooling can be fed in directly.

use crate::mapper::tags;
use serde::Deserialize;

/// A single documentation comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnnotationRecord {
    /// Free text before the first tag.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// One `@title` entry of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// The identifier the tag is about (parameter, referenced module, ...).
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeExpression>,
    /// `[name=default]` value of an optional parameter.
    #[serde(default)]
    pub default: Option<String>,
}

/// Structured type attached to a tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum TypeExpression {
    NameExpression {
        name: String,
    },
    OptionalType {
        #[serde(rename = "expression")]
        inner: Box<TypeExpression>,
    },
    TypeApplication {
        #[serde(rename = "expression")]
        base: Box<TypeExpression>,
        applications: Vec<TypeExpression>,
    },
    /// Unions, records, function types, `*` and anything else.
    #[serde(other)]
    Unknown,
}

impl AnnotationRecord {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self {
            description: String::new(),
            tags,
        }
    }

    /// First tag satisfying `pred`.
    pub fn find(&self, pred: impl Fn(&Tag) -> bool) -> Option<&Tag> {
        self.tags.iter().find(|&tag| pred(tag))
    }

    /// Whether any tag satisfies `pred`.
    pub fn has(&self, pred: impl Fn(&Tag) -> bool) -> bool {
        self.tags.iter().any(pred)
    }

    /// Something human-readable to point at this record in error messages.
    pub fn context(&self) -> Option<String> {
        let text = if !self.description.is_empty() {
            Some(self.description.as_str())
        } else {
            self.find(tags::is_description)
                .or_else(|| self.tags.first())
                .and_then(|t| t.description.as_deref())
        }?;
        let first_line = text.lines().find(|l| !l.trim().is_empty())?.trim();
        Some(first_line.chars().take(60).collect())
    }
}

impl Tag {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            name: None,
            ty: None,
            default: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn ty(mut self, ty: TypeExpression) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl TypeExpression {
    pub fn name(name: impl Into<String>) -> Self {
        TypeExpression::NameExpression { name: name.into() }
    }

    pub fn optional(inner: TypeExpression) -> Self {
        TypeExpression::OptionalType {
            inner: Box::new(inner),
        }
    }

    /// `Array.<T, ...>`
    pub fn array_of(applications: Vec<TypeExpression>) -> Self {
        TypeExpression::TypeApplication {
            base: Box::new(TypeExpression::name("Array")),
            applications,
        }
    }
}
