//! Core data models for the rolodex contact service.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, FieldErrors, Result};

/// Basic email syntax: one `@`, non-empty local part, dotted domain,
/// no whitespace anywhere.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// =============================================================================
// CONTACT
// =============================================================================

/// A contact record as persisted in the backing store and returned over HTTP.
///
/// Soft-deleted contacts stay in storage with `is_active = false` and are
/// invisible to every read and mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Server-assigned, unique, never reused or mutated.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

/// Request body for creating or updating a contact.
///
/// Fields default to empty strings so a missing field surfaces as a
/// field-level validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl ContactPayload {
    /// Validate all fields, collecting every violation.
    ///
    /// Returns `Error::Validation` carrying one message list per offending
    /// field; field names match the wire format (`firstName`, `lastName`,
    /// `email`).
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();

        if self.first_name.trim().is_empty() {
            errors.push("firstName", "First Name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.push("lastName", "Last Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push("email", "Email is required");
        } else if !EMAIL_REGEX.is_match(email) {
            errors.push("email", "Invalid Email Address");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }

    /// Build a new active contact from this payload with the given id.
    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            is_active: true,
        }
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Highest id across the whole collection, active or not; 0 when empty.
///
/// The next id to assign is `max_id(contacts) + 1`, derived from the freshly
/// loaded collection on every create. Ids of soft-deleted contacts still
/// count, so an id is never reused after a delete.
pub fn max_id(contacts: &[Contact]) -> i64 {
    contacts.iter().map(|c| c.id).max().unwrap_or(0)
}

/// Case-insensitive email equality, used for the active-email uniqueness
/// invariant at create and update.
pub fn email_eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(first: &str, last: &str, email: &str) -> ContactPayload {
        ContactPayload {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
        }
    }

    fn contact(id: i64, email: &str, active: bool) -> Contact {
        Contact {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            is_active: active,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(payload("Ada", "Lovelace", "ada@example.com").validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_violations() {
        let err = payload("", "Lovelace", "not-an-email").validate().unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(
                    errors.get("firstName"),
                    Some(&["First Name is required".to_string()][..])
                );
                assert_eq!(
                    errors.get("email"),
                    Some(&["Invalid Email Address".to_string()][..])
                );
                assert!(errors.get("lastName").is_none());
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_missing_email_is_required_not_invalid() {
        let err = payload("Ada", "Lovelace", "   ").validate().unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(
                    errors.get("email"),
                    Some(&["Email is required".to_string()][..])
                );
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_email_without_domain_dot() {
        assert!(payload("Ada", "Lovelace", "ada@localhost").validate().is_err());
        assert!(payload("Ada", "Lovelace", "ada example@b.com").validate().is_err());
        assert!(payload("Ada", "Lovelace", "@b.com").validate().is_err());
    }

    #[test]
    fn test_max_id_empty_is_zero() {
        assert_eq!(max_id(&[]), 0);
    }

    #[test]
    fn test_max_id_counts_inactive_records() {
        let contacts = vec![
            contact(1, "a@example.com", true),
            contact(7, "b@example.com", false),
            contact(3, "c@example.com", true),
        ];
        assert_eq!(max_id(&contacts), 7);
    }

    #[test]
    fn test_email_eq_ignore_case() {
        assert!(email_eq_ignore_case("Ada@Example.COM", "ada@example.com"));
        assert!(!email_eq_ignore_case("ada@example.com", "ada@example.org"));
    }

    #[test]
    fn test_contact_wire_format_is_camel_case() {
        let json = serde_json::to_value(contact(1, "ada@example.com", true)).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_payload_missing_fields_deserialize_to_empty() {
        let payload: ContactPayload = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(payload.first_name, "");
        assert_eq!(payload.last_name, "");
        assert_eq!(payload.email, "a@b.com");
    }
}
