//! Pieces shared by the three admin list pages: query parameters, deletion
//! tickets, and the lookup-or-404 helper.

use std::sync::Arc;

use axum::{Json, http::StatusCode};
use nexus_core::{
  EntityListManager, FilterKey, Record, RecordId,
  manager::{Decision, DeleteTicket},
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::ApiError;

/// A collection owned by one admin page for the lifetime of the process.
pub type Shared<T> = Arc<Mutex<EntityListManager<T>>>;

// ─── Query ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  /// Case-insensitive substring; empty matches everything.
  #[serde(default)]
  pub search: String,
  /// `"all"`, or a category/status value.
  #[serde(alias = "category", alias = "status")]
  pub filter: Option<String>,
}

impl ListParams {
  /// Install this query as the page's view state.
  pub fn apply<T: Record>(&self, manager: &mut EntityListManager<T>) -> Result<(), ApiError> {
    let key = match &self.filter {
      Some(raw) => raw.parse::<FilterKey<T::Filter>>()?,
      None => FilterKey::All,
    };
    manager.set_search_term(self.search.as_str());
    manager.set_filter(key);
    Ok(())
  }
}

/// Apply `params` and return the resulting view.
pub async fn filtered<T: Record>(shared: &Shared<T>, params: &ListParams) -> Result<Vec<T>, ApiError> {
  let mut manager = shared.lock().await;
  params.apply(&mut manager)?;
  Ok(manager.filtered_view().cloned().collect())
}

pub fn found<T>(record: Option<T>, kind: &str, id: RecordId) -> Result<T, ApiError> {
  record.ok_or_else(|| ApiError::NotFound(format!("{kind} {id} not found")))
}

// ─── Deletion ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DeletionBody {
  pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct Resolution<T> {
  /// The removed record; `None` when cancelled.
  pub deleted: Option<T>,
}

/// First step of a delete: nothing is removed until the ticket is resolved.
pub fn request_deletion<T: Record>(
  manager: &mut EntityListManager<T>,
  kind: &str,
  id: RecordId,
) -> Result<(StatusCode, Json<DeleteTicket>), ApiError> {
  let ticket = found(manager.request_delete(id), kind, id)?;
  tracing::info!(%id, token = %ticket.token, "{kind} deletion requested");
  Ok((StatusCode::ACCEPTED, Json(ticket)))
}

pub fn resolve_deletion<T: Record>(
  manager: &mut EntityListManager<T>,
  kind: &str,
  token: Uuid,
  body: DeletionBody,
) -> Result<Json<Resolution<T>>, ApiError> {
  let decision = Decision::from(body.confirm);
  let deleted = manager.resolve_delete(token, decision)?;
  match &deleted {
    Some(record) => tracing::info!(id = %record.id(), "{kind} deleted"),
    None => tracing::info!(%token, ?decision, "{kind} deletion closed without removal"),
  }
  Ok(Json(Resolution { deleted }))
}
