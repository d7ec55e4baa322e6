//! The public page, the contact form, and the read-only admin overviews.

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
};
use nexus_core::{
  FilterKey,
  contact::{ContactForm, ContactReceipt},
  project::ProjectCategory,
  site::{self, Analytics, Dashboard, HomePage},
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
  /// Portfolio category tab; `"all"` when absent.
  pub category: Option<String>,
}

/// `GET /[?category=<category>]`
pub async fn home(
  State(state): State<AppState>,
  Query(params): Query<HomeParams>,
) -> Result<Json<HomePage>, ApiError> {
  let category = match params.category.as_deref() {
    Some(raw) => raw.parse::<FilterKey<ProjectCategory>>()?,
    None => FilterKey::All,
  };
  let mut showcase = state.showcase.lock().await;
  showcase.set_filter(category);
  let portfolio: Vec<_> = showcase.filtered_view().cloned().collect();
  tracing::debug!(shown = portfolio.len(), "rendered home page");
  Ok(Json(HomePage::new(portfolio)))
}

/// `POST /contact`. Resolves once the simulated delivery delay has passed.
pub async fn contact(
  State(state): State<AppState>,
  Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactReceipt>), ApiError> {
  ApiError::require(&[
    ("name", form.name.as_str()),
    ("email", form.email.as_str()),
    ("message", form.message.as_str()),
  ])?;
  let receipt = state.contact.submit(form).await?;
  tracing::info!(email = %receipt.email, "contact form submitted");
  Ok((StatusCode::ACCEPTED, Json(receipt)))
}

/// `GET /admin`
pub async fn dashboard() -> Json<Dashboard> { Json(site::dashboard()) }

/// `GET /admin/analytics`
pub async fn analytics() -> Json<Analytics> { Json(site::analytics()) }

/// Catch-all for unknown routes.
pub async fn not_found() -> ApiError { ApiError::NotFound("not found".to_owned()) }
