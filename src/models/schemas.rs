// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Built-in record schemas for chat messages, projects, email sign-ups, and
//! the contact form.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::{Error, anyhow};

use super::schema::{FieldSchema, RecordSchema, Transform};

const INVALID_EMAIL: &str = "Invalid email address";
const EMAIL_TOO_LONG: &str = "Email must be less than 255 characters";

static MESSAGE: LazyLock<RecordSchema> = LazyLock::new(message_schema);
static PROJECT: LazyLock<RecordSchema> = LazyLock::new(project_schema);
static EMAIL: LazyLock<RecordSchema> = LazyLock::new(email_schema);
static CONTACT: LazyLock<RecordSchema> = LazyLock::new(contact_schema);

/// Identifier of a built-in record schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemaId {
    Message,
    Project,
    Email,
    Contact,
}

impl SchemaId {
    pub const ALL: [SchemaId; 4] = [
        SchemaId::Message,
        SchemaId::Project,
        SchemaId::Email,
        SchemaId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaId::Message => "message",
            SchemaId::Project => "project",
            SchemaId::Email => "email",
            SchemaId::Contact => "contact",
        }
    }

    /// Shared descriptor for this schema, built on first use.
    pub fn schema(self) -> &'static RecordSchema {
        match self {
            SchemaId::Message => &*MESSAGE,
            SchemaId::Project => &*PROJECT,
            SchemaId::Email => &*EMAIL,
            SchemaId::Contact => &*CONTACT,
        }
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaId {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        SchemaId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| {
                anyhow!("Unknown schema '{raw}' (expected message, project, email, or contact)")
            })
    }
}

/// Chat message: non-empty content up to 10,000 characters and a known role.
pub fn message_schema() -> RecordSchema {
    RecordSchema::new("message")
        .field(
            FieldSchema::text("content")
                .min_length(1, "Message cannot be empty")
                .max_length(10_000, "Message is too long (max 10,000 characters)")
                .transform(Transform::Sanitize),
        )
        .field(FieldSchema::one_of("role", &["user", "assistant", "system"]))
}

/// Project creation/update: a name and an optional description.
pub fn project_schema() -> RecordSchema {
    RecordSchema::new("project")
        .field(
            FieldSchema::text("name")
                .required_message("Project name is required")
                .min_length(1, "Project name is required")
                .max_length(100, "Project name must be less than 100 characters")
                .transform(Transform::Sanitize),
        )
        .field(
            FieldSchema::text("description")
                .optional()
                .max_length(500, "Description must be less than 500 characters")
                .transform(Transform::Sanitize),
        )
}

/// Single email address, normalized to lower case.
pub fn email_schema() -> RecordSchema {
    RecordSchema::new("email").field(
        email_field()
            .transform(Transform::Sanitize)
            .transform(Transform::Lowercase),
    )
}

/// Contact form submission.
pub fn contact_schema() -> RecordSchema {
    RecordSchema::new("contact")
        .field(
            FieldSchema::text("name")
                .required_message("Name is required")
                .min_length(1, "Name is required")
                .max_length(100, "Name must be less than 100 characters")
                .transform(Transform::Sanitize),
        )
        .field(email_field().transform(Transform::Lowercase))
        .field(
            FieldSchema::text("subject")
                .required_message("Subject is required")
                .min_length(1, "Subject is required")
                .max_length(200, "Subject must be less than 200 characters")
                .transform(Transform::Sanitize),
        )
        .field(
            FieldSchema::text("message")
                .min_length(10, "Message must be at least 10 characters")
                .max_length(2000, "Message must be less than 2,000 characters")
                .transform(Transform::Sanitize),
        )
}

fn email_field() -> FieldSchema {
    FieldSchema::text("email")
        .max_length(255, EMAIL_TOO_LONG)
        .email(INVALID_EMAIL)
}
