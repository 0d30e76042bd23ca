// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Declarative field and record schemas.
//!
//! Schemas are plain immutable data. They carry no validation code of their own;
//! [`crate::logic::validation::validate`] interprets them.

use crate::utils::sanitize;

/// Accepted shape of a field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form string, trimmed before checks.
    Text,
    /// String that must equal one of the listed values exactly.
    OneOf(Vec<String>),
}

/// A single check applied to a present, trimmed field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    /// Address must parse as an email with a top-level domain.
    Email { message: String },
    /// Whole value must match the regular expression.
    Pattern { regex: String, message: String },
}

/// Post-validation normalization step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Run [`crate::utils::sanitize()`].
    Sanitize,
    Lowercase,
}

impl Transform {
    /// Apply the transform to an already validated value.
    pub fn apply(self, value: &str) -> String {
        match self {
            Transform::Sanitize => sanitize(value),
            Transform::Lowercase => value.to_lowercase(),
        }
    }
}

/// Accepted shape, checks, and normalization for one record field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSchema {
    name: String,
    kind: FieldKind,
    required: bool,
    required_message: Option<String>,
    constraints: Vec<Constraint>,
    transforms: Vec<Transform>,
}

impl FieldSchema {
    /// Required free-form text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Text)
    }

    /// Required field restricted to `values`.
    pub fn one_of(name: impl Into<String>, values: &[&str]) -> Self {
        let values = values.iter().map(|v| v.to_string()).collect();
        Self::with_kind(name, FieldKind::OneOf(values))
    }

    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            required_message: None,
            constraints: Vec::new(),
            transforms: Vec::new(),
        }
    }

    /// Allow the field to be absent; absent values are left out of the output.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Message reported when a required field is absent.
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.constraint(Constraint::MinLength {
            min,
            message: message.into(),
        })
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.constraint(Constraint::MaxLength {
            max,
            message: message.into(),
        })
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.constraint(Constraint::Email {
            message: message.into(),
        })
    }

    /// Require the whole value to match `regex`. The expression is compiled
    /// when validation runs; an invalid expression is reported as an internal
    /// fault, not a field error.
    pub fn pattern(self, regex: impl Into<String>, message: impl Into<String>) -> Self {
        self.constraint(Constraint::Pattern {
            regex: regex.into(),
            message: message.into(),
        })
    }

    /// Append a constraint; constraints are checked in the order added.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Append a transform; transforms run in the order added.
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Error reported when the field is required but absent.
    pub fn required_error(&self) -> String {
        self.required_message
            .clone()
            .unwrap_or_else(|| format!("{} is required", self.name))
    }

    /// Run every transform over `value` in declaration order.
    pub fn normalize(&self, value: &str) -> String {
        self.transforms
            .iter()
            .fold(value.to_string(), |acc, t| t.apply(&acc))
    }
}

/// Named, ordered collection of field schemas with unique field names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldSchema>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field. A field with the same name is replaced in place, keeping
    /// its original position.
    pub fn field(mut self, field: FieldSchema) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field_named(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}
