// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Strip markup brackets and bound the length of free-form user input.

/// Upper bound (in characters) for any sanitized value.
pub const MAX_INPUT_CHARS: usize = 10_000;

/// Sanitize free-form user input.
///
/// # Steps
/// - Trim leading/trailing whitespace.
/// - Drop every `<` and `>` wherever it occurs.
/// - Keep at most [`MAX_INPUT_CHARS`] characters of what remains.
///
/// Only the two bracket characters are removed. Text between them survives, so
/// `<script>alert(1)</script>` becomes `scriptalert(1)/script`. The output is not
/// safe to interpret as markup; escape it before rendering as HTML.
pub fn sanitize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '<' | '>'))
        .take(MAX_INPUT_CHARS)
        .collect()
}
