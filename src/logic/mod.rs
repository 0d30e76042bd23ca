// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: schema interpretation and result handling.

pub mod validation;

pub use validation::{Record, UNEXPECTED_FAILURE, Validation, validate, validate_as, validate_id};
