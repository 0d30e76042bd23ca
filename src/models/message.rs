// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Chat message domain model (UI-agnostic).

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::forms::ValidatedMessage;
use crate::utils::{format_relative_time, format_time};

/// Author of a message in a conversation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    #[default]
    User,
    Assistant,
    System,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::System => "system",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            "system" => Ok(MessageRole::System),
            other => Err(anyhow!("Unknown message role: {other}")),
        }
    }
}

/// Delivery/generation state of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    Sent,
    Error,
    Generating,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub role: MessageRole,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Message {
    /// Build a fresh message from validated input, stamped with a new id and
    /// the current time.
    pub fn from_validated(input: ValidatedMessage) -> Self {
        Self::from_validated_at(input, Utc::now())
    }

    pub fn from_validated_at(input: ValidatedMessage, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: input.content,
            role: input.role,
            timestamp,
            status: Some(MessageStatus::Sent),
            error: None,
        }
    }

    /// Mark the message as failed with a user-facing reason.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.status = Some(MessageStatus::Error);
        self.error = Some(reason.into());
    }

    /// e.g. "5 minutes ago".
    pub fn relative_time(&self) -> String {
        format_relative_time(&self.timestamp)
    }

    /// Clock time in the user's local zone, e.g. "2:30 PM".
    pub fn display_time(&self) -> String {
        format_time(&self.timestamp.with_timezone(&Local))
    }
}
