// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Project domain model and lifecycle status.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::forms::ValidatedProject;
use crate::utils::{format_date, format_relative_time};

/// Lifecycle of a generated project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Generating,
    Ready,
    Error,
    Archived,
}

/// Optional context describing what a project is built with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_generated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProjectMetadata>,
}

impl Project {
    /// Start a draft project from validated form input.
    pub fn from_validated(input: ValidatedProject) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description.unwrap_or_default(),
            status: ProjectStatus::Draft,
            user_id: None,
            created_at: now,
            updated_at: now,
            last_generated: None,
            metadata: None,
        }
    }

    /// Apply an edit from validated form input. A missing description keeps
    /// the current one.
    pub fn apply(&mut self, input: ValidatedProject) {
        self.name = input.name;
        if let Some(description) = input.description {
            self.description = description;
        }
        self.touch();
    }

    /// Record a modification at the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn set_status(&mut self, status: ProjectStatus) {
        if status == ProjectStatus::Ready {
            self.last_generated = Some(Utc::now());
        }
        self.status = status;
        self.touch();
    }

    /// e.g. "Updated 2 days ago".
    pub fn updated_label(&self) -> String {
        format!("Updated {}", format_relative_time(&self.updated_at))
    }

    /// Creation date in the user's local zone, e.g. "Jan 15, 2024".
    pub fn created_label(&self) -> String {
        format_date(&self.created_at.with_timezone(&Local))
    }
}
