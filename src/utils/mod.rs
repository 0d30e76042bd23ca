// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pure helpers shared by validation, domain types, and the command line.

pub mod file_types;
pub mod formatters;
pub mod sanitize;

/// Classify a project file path.
pub use file_types::file_type_for;
/// Human-readable timestamps, sizes, and labels.
pub use formatters::{
    capitalize, format_date, format_file_size, format_relative_time, format_relative_time_at,
    format_time, to_title_case, truncate_string,
};
/// Strip angle brackets and bound user input.
pub use sanitize::{MAX_INPUT_CHARS, sanitize};
