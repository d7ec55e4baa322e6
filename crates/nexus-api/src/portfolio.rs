//! Handlers for `/admin/portfolio`.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/admin/portfolio` | `?search=&filter=` (`category` alias) |
//! | `GET`    | `/admin/portfolio/categories` | Picker options |
//! | `POST`   | `/admin/portfolio` | Body: [`ProjectForm`]; 201 |
//! | `PUT`    | `/admin/portfolio/{id}` | Full replace |
//! | `DELETE` | `/admin/portfolio/{id}` | 202 + deletion ticket |
//! | `POST`   | `/admin/portfolio/{id}/featured` | Toggle |
//! | `POST`   | `/admin/portfolio/deletions/{token}` | `{"confirm":bool}` |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use nexus_core::{
  RecordId,
  manager::DeleteTicket,
  project::{Project, ProjectCategory, ProjectForm},
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
  AppState,
  error::ApiError,
  list::{self, DeletionBody, ListParams, Resolution, found},
};

const KIND: &str = "project";

fn validate(form: &ProjectForm) -> Result<(), ApiError> {
  ApiError::require(&[
    ("title", form.title.as_str()),
    ("description", form.description.as_str()),
  ])
}

/// `GET /admin/portfolio`
pub async fn list(
  State(state): State<AppState>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Project>>, ApiError> {
  let projects = list::filtered(&state.portfolio, &params).await?;
  tracing::debug!(count = projects.len(), search = %params.search, "listed projects");
  Ok(Json(projects))
}

#[derive(Debug, Serialize)]
pub struct CategoryOption {
  /// The filter key and stored value.
  pub value: ProjectCategory,
  pub label: &'static str,
}

/// `GET /admin/portfolio/categories`
pub async fn categories() -> Json<Vec<CategoryOption>> {
  Json(
    ProjectCategory::ALL
      .into_iter()
      .map(|value| CategoryOption { value, label: value.label() })
      .collect(),
  )
}

/// `POST /admin/portfolio`
pub async fn create(
  State(state): State<AppState>,
  Json(form): Json<ProjectForm>,
) -> Result<impl IntoResponse, ApiError> {
  validate(&form)?;
  let project = state.portfolio.lock().await.create(form);
  tracing::info!(id = %project.id, title = %project.title, "project created");
  Ok((StatusCode::CREATED, Json(project)))
}

/// `PUT /admin/portfolio/{id}`
pub async fn update(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
  Json(form): Json<ProjectForm>,
) -> Result<Json<Project>, ApiError> {
  validate(&form)?;
  let project = found(state.portfolio.lock().await.update(id, form), KIND, id)?;
  tracing::info!(%id, "project updated");
  Ok(Json(project))
}

/// `POST /admin/portfolio/{id}/featured`
pub async fn toggle_featured(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
) -> Result<Json<Project>, ApiError> {
  let project = found(state.portfolio.lock().await.toggle_featured(id), KIND, id)?;
  tracing::info!(%id, featured = project.featured, "project featured toggled");
  Ok(Json(project))
}

/// `DELETE /admin/portfolio/{id}`
pub async fn request_delete(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
) -> Result<(StatusCode, Json<DeleteTicket>), ApiError> {
  list::request_deletion(&mut *state.portfolio.lock().await, KIND, id)
}

/// `POST /admin/portfolio/deletions/{token}`
pub async fn resolve_delete(
  State(state): State<AppState>,
  Path(token): Path<Uuid>,
  Json(body): Json<DeletionBody>,
) -> Result<Json<Resolution<Project>>, ApiError> {
  list::resolve_deletion(&mut *state.portfolio.lock().await, KIND, token, body)
}
