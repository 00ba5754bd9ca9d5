//! Contact routes: public form submission and back-office triage

use crate::contacts::{Contact, ContactDraft, ContactFilter, StatusFilter};
use crate::core::error::{ContactError, VitrineError};
use crate::server::host::ServerHost;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<ServerHost>> {
    Router::new()
        .route("/contacts", get(list_contacts).post(submit_contact))
        .route("/contacts/{id}/read", put(toggle_read))
        .route("/contacts/{id}/archive", put(toggle_archived))
        .route("/contacts/{id}", delete(delete_contact))
}

/// Query parameters of the triage list
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContactListParams {
    search: Option<String>,
    status: Option<String>,
}

impl ContactListParams {
    fn filter(&self) -> Result<ContactFilter, VitrineError> {
        let status = match &self.status {
            Some(value) => value.parse::<StatusFilter>()?,
            None => StatusFilter::default(),
        };

        Ok(ContactFilter {
            search_term: self.search.clone().unwrap_or_default(),
            status,
        })
    }
}

/// GET /api/contacts — newest first, filtered
async fn list_contacts(
    State(host): State<Arc<ServerHost>>,
    Query(params): Query<ContactListParams>,
) -> Result<Json<Vec<Contact>>, VitrineError> {
    let filter = params.filter()?;
    let snapshot = host.contacts.list().await?;
    Ok(Json(filter.filter(&snapshot)))
}

/// POST /api/contacts — storefront form submission
async fn submit_contact(
    State(host): State<Arc<ServerHost>>,
    Json(draft): Json<ContactDraft>,
) -> Result<(StatusCode, Json<Contact>), VitrineError> {
    draft.ensure_valid()?;
    let contact = host.contacts.create(draft).await?;
    tracing::info!(id = contact.id, source = ?contact.source, "contact received");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /api/contacts/{id}/read — flip the read flag
async fn toggle_read(
    State(host): State<Arc<ServerHost>>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, VitrineError> {
    let contact = host
        .contacts
        .toggle_read(id)
        .await?
        .ok_or(ContactError::NotFound { id })?;

    Ok(Json(contact))
}

/// PUT /api/contacts/{id}/archive — flip the archived flag
async fn toggle_archived(
    State(host): State<Arc<ServerHost>>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, VitrineError> {
    let contact = host
        .contacts
        .toggle_archived(id)
        .await?
        .ok_or(ContactError::NotFound { id })?;

    Ok(Json(contact))
}

/// DELETE /api/contacts/{id}
async fn delete_contact(
    State(host): State<Arc<ServerHost>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, VitrineError> {
    if !host.contacts.delete(id).await? {
        return Err(ContactError::NotFound { id }.into());
    }

    tracing::info!(id, "contact deleted");
    Ok(StatusCode::NO_CONTENT)
}
