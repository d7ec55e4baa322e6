//! Handlers for `/admin/services`.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/admin/services` | `?search=&filter=` (`category` alias) |
//! | `GET`    | `/admin/services/categories` | Suggested categories |
//! | `POST`   | `/admin/services` | Body: [`ServiceForm`]; 201 |
//! | `PUT`    | `/admin/services/{id}` | Full replace |
//! | `DELETE` | `/admin/services/{id}` | 202 + deletion ticket |
//! | `POST`   | `/admin/services/{id}/popular` | Toggle |
//! | `POST`   | `/admin/services/{id}/status` | `active` <-> `draft` |
//! | `POST`   | `/admin/services/deletions/{token}` | `{"confirm":bool}` |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use nexus_core::{
  RecordId,
  manager::DeleteTicket,
  service::{SERVICE_CATEGORIES, Service, ServiceForm},
};
use uuid::Uuid;

use crate::{
  AppState,
  error::ApiError,
  list::{self, DeletionBody, ListParams, Resolution, found},
};

const KIND: &str = "service";

fn validate(form: &ServiceForm) -> Result<(), ApiError> {
  ApiError::require(&[
    ("title", form.title.as_str()),
    ("description", form.description.as_str()),
  ])
}

/// `GET /admin/services`
pub async fn list(
  State(state): State<AppState>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Service>>, ApiError> {
  let services = list::filtered(&state.services, &params).await?;
  tracing::debug!(count = services.len(), search = %params.search, "listed services");
  Ok(Json(services))
}

/// `GET /admin/services/categories`
pub async fn categories() -> Json<[&'static str; 4]> { Json(SERVICE_CATEGORIES) }

/// `POST /admin/services`
pub async fn create(
  State(state): State<AppState>,
  Json(form): Json<ServiceForm>,
) -> Result<impl IntoResponse, ApiError> {
  validate(&form)?;
  let service = state.services.lock().await.create(form);
  tracing::info!(id = %service.id, title = %service.title, "service created");
  Ok((StatusCode::CREATED, Json(service)))
}

/// `PUT /admin/services/{id}`
pub async fn update(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
  Json(form): Json<ServiceForm>,
) -> Result<Json<Service>, ApiError> {
  validate(&form)?;
  let service = found(state.services.lock().await.update(id, form), KIND, id)?;
  tracing::info!(%id, "service updated");
  Ok(Json(service))
}

/// `POST /admin/services/{id}/popular`
pub async fn toggle_popular(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
) -> Result<Json<Service>, ApiError> {
  let service = found(state.services.lock().await.toggle_popular(id), KIND, id)?;
  tracing::info!(%id, popular = service.popular, "service popular toggled");
  Ok(Json(service))
}

/// `POST /admin/services/{id}/status`
pub async fn cycle_status(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
) -> Result<Json<Service>, ApiError> {
  let service = found(state.services.lock().await.cycle_status(id), KIND, id)?;
  tracing::info!(%id, status = %service.status, "service status cycled");
  Ok(Json(service))
}

/// `DELETE /admin/services/{id}`
pub async fn request_delete(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
) -> Result<(StatusCode, Json<DeleteTicket>), ApiError> {
  list::request_deletion(&mut *state.services.lock().await, KIND, id)
}

/// `POST /admin/services/deletions/{token}`
pub async fn resolve_delete(
  State(state): State<AppState>,
  Path(token): Path<Uuid>,
  Json(body): Json<DeletionBody>,
) -> Result<Json<Resolution<Service>>, ApiError> {
  list::resolve_deletion(&mut *state.services.lock().await, KIND, token, body)
}
