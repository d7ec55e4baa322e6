//! JSON HTTP surface for the NexusForge site and its admin dashboard.
//!
//! Each admin page owns its collection for the lifetime of the process; edits
//! on one page are not seen by another. The public showcase is a separate
//! collection from the admin portfolio.
//!
//! Request tracing layers and transport are the caller's responsibility.

pub mod error;
pub mod list;
pub mod messages;
pub mod portfolio;
pub mod services;
pub mod site;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use nexus_core::{
  EntityListManager,
  contact::{ContactDesk, DeskTiming},
  project::Project,
  reply::ReplyComposer,
  seed,
  service::Service,
};
use tokio::sync::Mutex;

pub use error::ApiError;
use list::Shared;
use messages::Inbox;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub showcase:  Shared<Project>,
  pub portfolio: Shared<Project>,
  pub services:  Shared<Service>,
  pub inbox:     Arc<Mutex<Inbox>>,
  pub contact:   ContactDesk,
}

impl AppState {
  /// Every page starts from its sample data.
  pub fn seeded(timing: DeskTiming) -> Self {
    Self {
      showcase:  Arc::new(Mutex::new(EntityListManager::new(seed::showcase_projects()))),
      portfolio: Arc::new(Mutex::new(EntityListManager::new(seed::admin_projects()))),
      services:  Arc::new(Mutex::new(EntityListManager::new(seed::admin_services()))),
      inbox:     Arc::new(Mutex::new(Inbox {
        messages: EntityListManager::new(seed::inbox_messages()),
        composer: ReplyComposer::new(),
      })),
      contact:   ContactDesk::new(timing),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

pub fn router(state: AppState) -> Router {
  Router::new()
    // Public
    .route("/",                                   get(site::home))
    .route("/contact",                            post(site::contact))
    // Overviews
    .route("/admin",                              get(site::dashboard))
    .route("/admin/analytics",                    get(site::analytics))
    // Portfolio
    .route("/admin/portfolio",                    get(portfolio::list).post(portfolio::create))
    .route("/admin/portfolio/categories",         get(portfolio::categories))
    .route("/admin/portfolio/{id}",               put(portfolio::update).delete(portfolio::request_delete))
    .route("/admin/portfolio/{id}/featured",      post(portfolio::toggle_featured))
    .route("/admin/portfolio/deletions/{token}",  post(portfolio::resolve_delete))
    // Services
    .route("/admin/services",                     get(services::list).post(services::create))
    .route("/admin/services/categories",          get(services::categories))
    .route("/admin/services/{id}",                put(services::update).delete(services::request_delete))
    .route("/admin/services/{id}/popular",        post(services::toggle_popular))
    .route("/admin/services/{id}/status",         post(services::cycle_status))
    .route("/admin/services/deletions/{token}",   post(services::resolve_delete))
    // Messages
    .route("/admin/messages",                     get(messages::list).post(messages::create))
    .route(
      "/admin/messages/reply",
      get(messages::composer).post(messages::send_reply).delete(messages::close_reply),
    )
    .route("/admin/messages/{id}",                axum::routing::delete(messages::request_delete))
    .route("/admin/messages/{id}/open",           post(messages::open))
    .route("/admin/messages/{id}/status",         put(messages::set_status))
    .route("/admin/messages/{id}/archive",        post(messages::archive))
    .route("/admin/messages/deletions/{token}",   post(messages::resolve_delete))
    .fallback(site::not_found)
    .with_state(state)
}

#[cfg(test)]
mod tests;
