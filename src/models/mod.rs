// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: schema descriptors, typed form records, and the message/project
//! types validated input ends up in.

pub mod forms;
pub mod message;
pub mod project;
pub mod project_file;
pub mod schema;
pub mod schemas;
