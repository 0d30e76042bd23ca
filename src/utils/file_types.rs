// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges
//! Classify project files by extension and MIME type.
//!
//! Extensions are checked before MIME guesses because `mime_guess` maps some
//! source extensions to unrelated media types (`.ts` is MPEG transport stream).

use std::path::Path;

use crate::models::project_file::FileType;

/// Return the [`FileType`] matching the path's extension or guessed MIME type.
pub fn file_type_for(path: &Path) -> FileType {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jsx" | "tsx" => return FileType::React,
        "ts" | "mts" | "cts" => return FileType::Typescript,
        "js" | "mjs" | "cjs" => return FileType::Javascript,
        "css" => return FileType::Css,
        "json" => return FileType::Json,
        _ => {}
    }

    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("")
        .to_ascii_lowercase();

    if mime.starts_with("image/") {
        return FileType::Image;
    }
    match mime.as_str() {
        "text/css" => FileType::Css,
        "application/json" => FileType::Json,
        "application/javascript" | "text/javascript" => FileType::Javascript,
        _ => FileType::Other,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::file_type_for;
    use crate::models::project_file::FileType;

    // Component sources map to the React bucket regardless of case.
    #[test]
    fn component_extensions_are_react() {
        assert_eq!(file_type_for(Path::new("src/App.tsx")), FileType::React);
        assert_eq!(file_type_for(Path::new("Button.JSX")), FileType::React);
    }

    // `.ts` must not fall through to the video MIME guess.
    #[test]
    fn typescript_wins_over_mime_guess() {
        assert_eq!(file_type_for(Path::new("lib/util.ts")), FileType::Typescript);
    }

    #[test]
    fn scripts_styles_and_data() {
        assert_eq!(file_type_for(Path::new("index.js")), FileType::Javascript);
        assert_eq!(file_type_for(Path::new("theme.css")), FileType::Css);
        assert_eq!(file_type_for(Path::new("package.json")), FileType::Json);
    }

    #[test]
    fn images_are_detected_by_mime() {
        assert_eq!(file_type_for(Path::new("logo.png")), FileType::Image);
        assert_eq!(file_type_for(Path::new("hero.svg")), FileType::Image);
        assert_eq!(file_type_for(Path::new("photo.JPEG")), FileType::Image);
    }

    #[test]
    fn unknown_files_are_other() {
        assert_eq!(file_type_for(Path::new("README.md")), FileType::Other);
        assert_eq!(file_type_for(Path::new("Makefile")), FileType::Other);
    }
}
