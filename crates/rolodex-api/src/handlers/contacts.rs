//! Contact CRUD HTTP handlers.
//!
//! Each handler loads the full collection from the store, applies a linear
//! filter or mutation, and (for mutations) writes the full collection back.
//! Only active contacts (`isActive == true`) are visible; soft-deleted
//! records stay in the file but never match a read, update, or delete.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use rolodex_core::{email_eq_ignore_case, max_id, Contact, ContactPayload};

use crate::{ApiError, AppState};

/// Query parameters for listing contacts.
#[derive(Debug, Default, Deserialize)]
pub struct ListContactsQuery {
    /// Case-insensitive substring match over firstName, lastName, and email.
    pub search: Option<String>,
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// List active contacts, optionally filtered by a search string.
///
/// An empty or whitespace-only `search` behaves like no search at all.
/// Results keep storage order; an empty array is a valid 200 response.
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<ListContactsQuery>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.load().await?;

    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .unwrap_or("")
        .to_lowercase();

    let matching: Vec<Contact> = contacts
        .into_iter()
        .filter(|c| c.is_active)
        .filter(|c| {
            needle.is_empty()
                || c.first_name.to_lowercase().contains(&needle)
                || c.last_name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
        })
        .collect();

    debug!(result_count = matching.len(), search = %needle, "list contacts");
    Ok(Json(matching))
}

/// Fetch a single active contact by id.
///
/// # Returns
/// - 200 OK with the contact
/// - 404 Not Found if no active contact has this id
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, ApiError> {
    let contacts = state.store.load().await?;
    let contact = contacts
        .into_iter()
        .find(|c| c.id == id && c.is_active)
        .ok_or_else(|| rolodex_core::Error::contact_not_found(id))?;
    Ok(Json(contact))
}

/// Create a contact.
///
/// Assigns the next id (max existing id across active and soft-deleted
/// records, plus one), marks the contact active, appends it, and persists.
///
/// # Returns
/// - 201 Created with the contact and a Location header for GET-by-id
/// - 400 Bad Request on field validation failure or duplicate active email
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let mut contacts = state.store.load().await?;
    if contacts
        .iter()
        .any(|c| c.is_active && email_eq_ignore_case(&c.email, &payload.email))
    {
        return Err(ApiError::DuplicateEmail);
    }

    let contact = payload.into_contact(max_id(&contacts) + 1);
    contacts.push(contact.clone());
    state.store.save(&contacts).await?;

    info!(contact_id = contact.id, "contact created");
    let location = format!("/api/contacts/{}", contact.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(contact),
    ))
}

/// Update an active contact's firstName, lastName, and email in place.
///
/// The id and active flag are untouched. The new email must not belong to
/// a *different* active contact (case-insensitive); keeping one's own email
/// is allowed.
///
/// # Returns
/// - 200 OK with a confirmation message
/// - 400 Bad Request on validation failure or duplicate active email
/// - 404 Not Found if no active contact has this id
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
    payload.validate()?;

    let mut contacts = state.store.load().await?;
    let pos = contacts
        .iter()
        .position(|c| c.id == id && c.is_active)
        .ok_or_else(|| rolodex_core::Error::contact_not_found(id))?;

    if contacts
        .iter()
        .any(|c| c.is_active && c.id != id && email_eq_ignore_case(&c.email, &payload.email))
    {
        return Err(ApiError::DuplicateEmail);
    }

    let contact = &mut contacts[pos];
    contact.first_name = payload.first_name;
    contact.last_name = payload.last_name;
    contact.email = payload.email;
    state.store.save(&contacts).await?;

    info!(contact_id = id, "contact updated");
    Ok(Json(serde_json::json!({
        "message": "Contact updated successfully."
    })))
}

/// Soft-delete an active contact.
///
/// Flips `isActive` to false and persists; the record stays in storage and
/// its id is never reassigned. There is no path back to active.
///
/// # Returns
/// - 200 OK with a confirmation message
/// - 404 Not Found if no active contact has this id
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut contacts = state.store.load().await?;
    let pos = contacts
        .iter()
        .position(|c| c.id == id && c.is_active)
        .ok_or_else(|| rolodex_core::Error::contact_not_found(id))?;

    contacts[pos].is_active = false;
    state.store.save(&contacts).await?;

    info!(contact_id = id, "contact soft-deleted");
    Ok(Json(serde_json::json!({
        "message": "Contact deleted successfully."
    })))
}
