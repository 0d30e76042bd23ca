// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Generic interpreter that checks candidate records against [`RecordSchema`]s.
//!
//! Responsibilities:
//! - Walk the schema's fields in declaration order and collect every violation.
//! - Produce normalized, sanitized values for accepted records.
//! - Convert internal faults into a single generic error instead of panicking.

use std::any::type_name;

use anyhow::{Context, Result, bail};
use email_address::{EmailAddress, Options};
use log::{debug, error, warn};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};

use crate::models::schema::{Constraint, FieldKind, FieldSchema, RecordSchema};
use crate::models::schemas::SchemaId;

/// Error reported when validation itself breaks down.
pub const UNEXPECTED_FAILURE: &str = "Validation failed unexpectedly";

/// Normalized field values keyed by field name.
pub type Record = Map<String, Value>;

/// Outcome of validating one candidate record.
///
/// `Invalid` always carries at least one message, ordered by field
/// declaration order and then by constraint order within each field.
#[derive(Clone, Debug, PartialEq)]
pub enum Validation<T = Record> {
    Valid(T),
    Invalid(Vec<String>),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// Error messages; empty for a valid result.
    pub fn errors(&self) -> &[String] {
        match self {
            Validation::Valid(_) => &[],
            Validation::Invalid(errors) => errors,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Validation::Valid(data) => Some(data),
            Validation::Invalid(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U> {
        match self {
            Validation::Valid(data) => Validation::Valid(f(data)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Convert into a `Result`, joining error messages with `"; "`.
    pub fn into_result(self) -> Result<T> {
        match self {
            Validation::Valid(data) => Ok(data),
            Validation::Invalid(errors) => bail!("{}", errors.join("; ")),
        }
    }
}

/// Serialized as `{"success": true, "data": ...}` or
/// `{"success": false, "errors": [...]}`.
impl<T: Serialize> Serialize for Validation<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Validation", 2)?;
        match self {
            Validation::Valid(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Validation::Invalid(errors) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

/// Validate `candidate` against `schema`.
///
/// Every field is checked, even after an earlier field fails. A candidate that
/// is not a JSON object is treated as having every field absent. This function
/// never panics on malformed input and never returns an error; internal faults
/// become a single [`UNEXPECTED_FAILURE`] entry.
///
/// # Examples
///
/// ```
/// use creator_input::logic::validation::{Validation, validate};
/// use creator_input::models::schemas::SchemaId;
/// use serde_json::json;
///
/// let result = validate(SchemaId::Email.schema(), &json!({"email": "TEST@EXAMPLE.COM"}));
/// match result {
///     Validation::Valid(data) => assert_eq!(data["email"], "test@example.com"),
///     Validation::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
/// }
/// ```
pub fn validate(schema: &RecordSchema, candidate: &Value) -> Validation {
    match try_validate(schema, candidate) {
        Ok(result) => {
            debug!(
                "Validated '{}' record: {} error(s)",
                schema.name(),
                result.errors().len()
            );
            result
        }
        Err(err) => fault(schema, err),
    }
}

/// Validate against a built-in schema by id.
pub fn validate_id(id: SchemaId, candidate: &Value) -> Validation {
    validate(id.schema(), candidate)
}

/// Validate and deserialize accepted data into a typed record.
///
/// A record that passes the schema but does not fit `T` is an internal fault.
pub fn validate_as<T: DeserializeOwned>(
    schema: &RecordSchema,
    candidate: &Value,
) -> Validation<T> {
    match validate(schema, candidate) {
        Validation::Valid(data) => match serde_json::from_value::<T>(Value::Object(data))
            .with_context(|| {
                format!(
                    "Validated '{}' record does not fit {}",
                    schema.name(),
                    type_name::<T>()
                )
            }) {
            Ok(typed) => Validation::Valid(typed),
            Err(err) => fault(schema, err),
        },
        Validation::Invalid(errors) => Validation::Invalid(errors),
    }
}

fn fault<T>(schema: &RecordSchema, err: anyhow::Error) -> Validation<T> {
    error!("Validation of '{}' record failed: {err:#}", schema.name());
    Validation::Invalid(vec![UNEXPECTED_FAILURE.to_string()])
}

fn try_validate(schema: &RecordSchema, candidate: &Value) -> Result<Validation> {
    let empty = Map::new();
    let fields = match candidate.as_object() {
        Some(object) => object,
        None => {
            warn!(
                "Candidate for '{}' is not an object; treating all fields as absent",
                schema.name()
            );
            &empty
        }
    };

    let mut errors = Vec::new();
    let mut data = Record::new();

    for field in schema.fields() {
        match check_field(field, fields.get(field.name()))? {
            FieldOutcome::Accepted(value) => {
                data.insert(field.name().to_string(), Value::String(value));
            }
            FieldOutcome::Absent => {}
            FieldOutcome::Rejected(field_errors) => errors.extend(field_errors),
        }
    }

    if errors.is_empty() {
        Ok(Validation::Valid(data))
    } else {
        Ok(Validation::Invalid(errors))
    }
}

enum FieldOutcome {
    Accepted(String),
    Absent,
    Rejected(Vec<String>),
}

fn check_field(field: &FieldSchema, raw: Option<&Value>) -> Result<FieldOutcome> {
    let raw = match raw {
        None | Some(Value::Null) if field.is_required() => {
            return Ok(FieldOutcome::Rejected(vec![field.required_error()]));
        }
        None | Some(Value::Null) => return Ok(FieldOutcome::Absent),
        Some(raw) => raw,
    };

    let Some(text) = raw.as_str() else {
        return Ok(FieldOutcome::Rejected(vec![format!(
            "{} must be a string",
            field.name()
        )]));
    };

    // Enum values are compared verbatim.
    let value = match field.kind() {
        FieldKind::Text => text.trim(),
        FieldKind::OneOf(_) => text,
    };

    let mut errors = Vec::new();
    for constraint in field.constraints() {
        if let Some(message) = check_constraint(field.name(), constraint, value)? {
            errors.push(message);
        }
    }

    if let FieldKind::OneOf(allowed) = field.kind()
        && !allowed.iter().any(|candidate| candidate == value)
    {
        errors.push(enum_error(allowed, value));
    }

    if errors.is_empty() {
        Ok(FieldOutcome::Accepted(field.normalize(value)))
    } else {
        Ok(FieldOutcome::Rejected(errors))
    }
}

/// Return the constraint's message when `value` violates it.
fn check_constraint(field: &str, constraint: &Constraint, value: &str) -> Result<Option<String>> {
    let violated = match constraint {
        Constraint::MinLength { min, .. } => value.chars().count() < *min,
        Constraint::MaxLength { max, .. } => value.chars().count() > *max,
        Constraint::Email { .. } => !is_email(value),
        Constraint::Pattern { regex, .. } => {
            let re = Regex::new(&format!("^(?:{regex})$"))
                .with_context(|| format!("Invalid pattern for field '{field}': {regex}"))?;
            !re.is_match(value)
        }
    };

    let message = match constraint {
        Constraint::MinLength { message, .. }
        | Constraint::MaxLength { message, .. }
        | Constraint::Email { message }
        | Constraint::Pattern { message, .. } => message,
    };

    Ok(violated.then(|| message.clone()))
}

/// Plain `local@domain.tld` addresses only: no display text, no IP literals.
fn is_email(value: &str) -> bool {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();
    EmailAddress::parse_with_options(value, options).is_ok()
}

fn enum_error(allowed: &[String], received: &str) -> String {
    let expected = allowed
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Invalid enum value. Expected {expected}, received '{received}'")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::forms::{
        ValidatedContact, ValidatedEmail, ValidatedMessage, ValidatedProject,
    };
    use crate::models::message::MessageRole;
    use crate::models::schema::Transform;

    fn contact(message: &str) -> Value {
        json!({
            "name": "John Doe",
            "email": "john@example.com",
            "subject": "Question",
            "message": message,
        })
    }

    #[test]
    fn message_accepts_valid_input() {
        let result = validate_id(SchemaId::Message, &json!({"content": "Hello, AI!", "role": "user"}));
        let data = result.data().expect("valid message");
        assert_eq!(data["content"], "Hello, AI!");
        assert_eq!(data["role"], "user");
    }

    #[test]
    fn message_rejects_empty_content() {
        let result = validate_id(SchemaId::Message, &json!({"content": "", "role": "user"}));
        assert_eq!(result, Validation::Invalid(vec!["Message cannot be empty".into()]));
    }

    // Whitespace-only content is empty once trimmed.
    #[test]
    fn message_rejects_blank_content() {
        let result = validate_id(SchemaId::Message, &json!({"content": "   \t", "role": "user"}));
        assert_eq!(result.errors(), ["Message cannot be empty"]);
    }

    #[test]
    fn message_rejects_overlong_content() {
        let result = validate_id(
            SchemaId::Message,
            &json!({"content": "a".repeat(10_001), "role": "user"}),
        );
        assert_eq!(
            result.errors(),
            ["Message is too long (max 10,000 characters)"]
        );
    }

    #[test]
    fn message_content_is_sanitized() {
        let result = validate_id(
            SchemaId::Message,
            &json!({"content": "  Hello <script>  ", "role": "user"}),
        );
        let data = result.data().expect("valid message");
        assert_eq!(data["content"], "Hello script");
    }

    #[test]
    fn message_role_must_be_known() {
        let result = validate_id(SchemaId::Message, &json!({"content": "hi", "role": "admin"}));
        assert_eq!(
            result.errors(),
            ["Invalid enum value. Expected 'user' | 'assistant' | 'system', received 'admin'"]
        );
    }

    // Roles are not trimmed before comparison.
    #[test]
    fn message_role_is_compared_verbatim() {
        let result = validate_id(SchemaId::Message, &json!({"content": "hi", "role": " user"}));
        assert!(!result.is_valid());
    }

    #[test]
    fn project_accepts_name_with_optional_description() {
        let with = validate_id(
            SchemaId::Project,
            &json!({"name": "My App", "description": "A great app"}),
        );
        assert_eq!(with.data().unwrap()["description"], "A great app");

        let without = validate_id(SchemaId::Project, &json!({"name": "My App"}));
        let data = without.data().expect("description is optional");
        assert_eq!(data["name"], "My App");
        assert!(!data.contains_key("description"));
    }

    // A null description counts as absent.
    #[test]
    fn project_treats_null_description_as_absent() {
        let result = validate_id(SchemaId::Project, &json!({"name": "App", "description": null}));
        assert!(!result.data().unwrap().contains_key("description"));
    }

    #[test]
    fn project_rejects_empty_and_long_names() {
        let empty = validate_id(SchemaId::Project, &json!({"name": "", "description": "Test"}));
        assert_eq!(empty.errors(), ["Project name is required"]);

        let long = validate_id(SchemaId::Project, &json!({"name": "a".repeat(101)}));
        assert_eq!(long.errors(), ["Project name must be less than 100 characters"]);

        let missing = validate_id(SchemaId::Project, &json!({}));
        assert_eq!(missing.errors(), ["Project name is required"]);
    }

    #[test]
    fn email_is_lowercased() {
        let result = validate_id(SchemaId::Email, &json!({"email": "TEST@EXAMPLE.COM"}));
        assert_eq!(result.data().unwrap()["email"], "test@example.com");
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["not-an-email", "a@b", "John <john@example.com>", "user@[127.0.0.1]", ""] {
            let result = validate_id(SchemaId::Email, &json!({ "email": bad }));
            assert_eq!(result.errors(), ["Invalid email address"], "input: {bad}");
        }
    }

    // Length is checked before shape, and both violations are reported.
    #[test]
    fn email_reports_length_then_shape() {
        let long = format!("{}@", "a".repeat(260));
        let result = validate_id(SchemaId::Email, &json!({ "email": long }));
        assert_eq!(
            result.errors(),
            ["Email must be less than 255 characters", "Invalid email address"]
        );
    }

    #[test]
    fn contact_accepts_complete_form() {
        let result = validate_id(SchemaId::Contact, &contact("I have a question about the product."));
        assert!(result.is_valid());
    }

    #[test]
    fn contact_rejects_short_message() {
        let result = validate_id(SchemaId::Contact, &contact("Short"));
        assert_eq!(result.errors(), ["Message must be at least 10 characters"]);
    }

    // Errors follow field declaration order.
    #[test]
    fn contact_reports_missing_fields_in_order() {
        let result = validate_id(
            SchemaId::Contact,
            &json!({"name": "John Doe", "email": "john@example.com"}),
        );
        assert_eq!(result.errors(), ["Subject is required", "message is required"]);

        let empty = validate_id(SchemaId::Contact, &json!({}));
        assert_eq!(
            empty.errors(),
            [
                "Name is required",
                "email is required",
                "Subject is required",
                "message is required"
            ]
        );
    }

    #[test]
    fn contact_sanitizes_all_fields() {
        let result = validate_id(
            SchemaId::Contact,
            &json!({
                "name": "  John<script> ",
                "email": " JOHN@EXAMPLE.COM ",
                "subject": " Test<>Subject ",
                "message": "This is a test message that is long enough.",
            }),
        );
        let data = result.data().expect("valid contact");
        assert_eq!(data["name"], "Johnscript");
        assert_eq!(data["subject"], "TestSubject");
        assert_eq!(data["email"], "john@example.com");
    }

    #[test]
    fn non_object_candidate_reports_every_required_field() {
        for candidate in [Value::Null, json!("content"), json!([1, 2])] {
            let result = validate_id(SchemaId::Message, &candidate);
            assert_eq!(result.errors(), ["content is required", "role is required"]);
        }
    }

    #[test]
    fn non_string_values_are_rejected() {
        let result = validate_id(SchemaId::Message, &json!({"content": 42, "role": "user"}));
        assert_eq!(result.errors(), ["content must be a string"]);
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let result = validate_id(
            SchemaId::Email,
            &json!({"email": "a@example.com", "admin": true}),
        );
        let data = result.data().unwrap();
        assert_eq!(data.len(), 1);
        assert!(!data.contains_key("admin"));
    }

    #[test]
    fn custom_pattern_matches_whole_value() {
        let schema = RecordSchema::new("slug").field(
            FieldSchema::text("slug")
                .pattern("[a-z0-9-]+", "Slug may only contain a-z, 0-9 and dashes")
                .transform(Transform::Lowercase),
        );
        assert!(validate(&schema, &json!({"slug": "my-app-2"})).is_valid());
        assert_eq!(
            validate(&schema, &json!({"slug": "my app"})).errors(),
            ["Slug may only contain a-z, 0-9 and dashes"]
        );
    }

    // A broken pattern is a fault of the schema, not of the input.
    #[test]
    fn invalid_pattern_becomes_generic_error() {
        let schema = RecordSchema::new("broken")
            .field(FieldSchema::text("code").pattern("([a-z", "unused"))
            .field(FieldSchema::text("other"));
        let result = validate(&schema, &json!({"code": "abc"}));
        assert_eq!(result, Validation::Invalid(vec![UNEXPECTED_FAILURE.into()]));
    }

    #[test]
    fn validate_as_builds_typed_records() {
        let message: Validation<ValidatedMessage> = validate_as(
            SchemaId::Message.schema(),
            &json!({"content": " <b>hi</b> ", "role": "assistant"}),
        );
        assert_eq!(
            message,
            Validation::Valid(ValidatedMessage {
                content: "bhi/b".into(),
                role: MessageRole::Assistant,
            })
        );

        let project: Validation<ValidatedProject> =
            validate_as(SchemaId::Project.schema(), &json!({"name": "App"}));
        assert_eq!(project.data().unwrap().description, None);

        let email: Validation<ValidatedEmail> = validate_as(
            SchemaId::Email.schema(),
            &json!({"email": " Ada@Example.COM "}),
        );
        assert_eq!(
            email,
            Validation::Valid(ValidatedEmail {
                email: "ada@example.com".into(),
            })
        );
    }

    #[test]
    fn validate_as_passes_through_field_errors() {
        let result: Validation<ValidatedContact> =
            validate_as(SchemaId::Contact.schema(), &contact("Short"));
        assert_eq!(result.errors(), ["Message must be at least 10 characters"]);
    }

    // Accepted data that cannot become the requested type is a fault.
    #[test]
    fn validate_as_mismatched_type_becomes_generic_error() {
        let result: Validation<ValidatedContact> =
            validate_as(SchemaId::Email.schema(), &json!({"email": "a@example.com"}));
        assert_eq!(result.errors(), [UNEXPECTED_FAILURE]);
    }

    #[test]
    fn results_serialize_with_success_tag() {
        let ok = validate_id(SchemaId::Email, &json!({"email": "a@example.com"}));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"success": true, "data": {"email": "a@example.com"}})
        );

        let failed = validate_id(SchemaId::Email, &json!({}));
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"success": false, "errors": ["email is required"]})
        );
    }

    #[test]
    fn into_result_joins_errors() {
        let failed = validate_id(SchemaId::Contact, &json!({"name": "J", "email": "x"}));
        let err = failed.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid email address; Subject is required; message is required"
        );
    }

    #[test]
    fn map_only_touches_valid_data() {
        let ok = validate_id(SchemaId::Email, &json!({"email": "a@example.com"})).map(|d| d.len());
        assert_eq!(ok, Validation::Valid(1));
        let failed = validate_id(SchemaId::Email, &json!({})).map(|d| d.len());
        assert_eq!(failed.errors(), ["email is required"]);
    }
}
