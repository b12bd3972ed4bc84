//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate storage and catalog access into use-case level APIs.
//! - Keep frontend layers decoupled from persistence and timing details.

pub mod compliment_service;
pub mod journal_service;
