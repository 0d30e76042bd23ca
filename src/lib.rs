// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Input normalization for the AI Creator workspace.
//!
//! - [`utils`]: sanitizer and display formatters.
//! - [`models`]: declarative schemas, typed form records, and domain types.
//! - [`logic`]: the schema interpreter producing [`logic::Validation`] results.
//! - [`app`]: command-line front end.

pub mod app;
pub mod logic;
pub mod models;
pub mod utils;

pub use logic::{Validation, validate, validate_as, validate_id};
pub use models::schemas::SchemaId;
pub use utils::sanitize;
