// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Files belonging to a project.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::{file_type_for, format_file_size};

/// Coarse file classification used for icons and previews.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    React,
    Typescript,
    Javascript,
    Css,
    Json,
    Image,
    #[default]
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectFile {
    /// Describe a file at `path`; the name and type are derived from the path.
    pub fn new(project_id: Uuid, path: &str, size: u64) -> Self {
        let as_path = Path::new(path);
        let name = as_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
            .to_string();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            name,
            path: path.to_string(),
            file_type: file_type_for(as_path),
            content: None,
            size,
            created_at: now,
            updated_at: now,
        }
    }

    /// e.g. "1.5 KB".
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}
