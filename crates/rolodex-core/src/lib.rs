//! # rolodex-core
//!
//! Core types and error taxonomy for the rolodex contact service.
//!
//! This crate provides the `Contact` entity, the create/update payload with
//! its field-level validation rules, and the error type shared by the
//! storage and HTTP layers.

pub mod error;
pub mod models;

// Re-export commonly used types at crate root
pub use error::{Error, FieldErrors, Result};
pub use models::{email_eq_ignore_case, max_id, Contact, ContactPayload};
