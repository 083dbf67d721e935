//! # Command Layer
//!
//! This module contains the **core business logic** of EduConnect. Each
//! command lives in its own submodule and implements pure functions over
//! the domain types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Run the listing pipeline (filter, search, sort, paginate) per the
//!   active [`QueryState`](crate::query::QueryState)
//! - Validate form-style drafts, collecting every failing field at once
//! - Return structured results, never strings
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O**: No stdout, stderr, file formatting, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **User interaction**: No prompts or confirmations
//!
//! ## Structured Returns
//!
//! Listing commands return typed row structs (`ResourceListing`,
//! `TutorListing`, `ForumListing`) carrying the rows plus everything a
//! client needs to render filter bars and pagination controls. Mutating
//! and simulated commands return receipt structs carrying [`CmdMessage`]s
//! with levels (info, success, warning, error). Everything serializes, so
//! a client can emit JSON instead of rendering.
//!
//! The UI layer (CLI, web, etc.) then decides how to render this data.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.**
//!
//! Command tests build small record sets with factory helpers and drive
//! the commands directly; no filesystem or terminal involved.
//!
//! ## Command Modules
//!
//! - [`resources`]: Browse the resource catalog
//! - [`tutors`]: Browse tutors, send contact requests
//! - [`forum`]: Browse, view, create, and like forum posts
//! - [`account`]: Simulated login and registration
//! - [`upload`]: Simulated resource upload
//! - [`pricing`]: Plan listing and Pro upgrade

use serde::Serialize;

pub mod account;
pub mod forum;
pub mod pricing;
pub mod resources;
pub mod tutors;
pub mod upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}
