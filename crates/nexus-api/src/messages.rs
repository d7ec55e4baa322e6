//! Handlers for `/admin/messages`, the inbox and its reply dialog.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/admin/messages` | `?search=&filter=` (`status` alias); with counts |
//! | `POST`   | `/admin/messages` | Body: [`MessageForm`]; 201 |
//! | `POST`   | `/admin/messages/{id}/open` | Select for reply; unread becomes read |
//! | `GET`    | `/admin/messages/reply` | Current dialog state |
//! | `POST`   | `/admin/messages/reply` | `{"text":"..."}`; sends to the open message |
//! | `DELETE` | `/admin/messages/reply` | Close the dialog, keeping the draft |
//! | `PUT`    | `/admin/messages/{id}/status` | `{"status":"read"}` |
//! | `POST`   | `/admin/messages/{id}/archive` | |
//! | `DELETE` | `/admin/messages/{id}` | 202 + deletion ticket |
//! | `POST`   | `/admin/messages/deletions/{token}` | `{"confirm":bool}` |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use nexus_core::{
  EntityListManager, RecordId,
  manager::DeleteTicket,
  message::{Message, MessageForm, MessageStatus},
  reply::{Reply, ReplyComposer},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  AppState,
  error::ApiError,
  list::{self, DeletionBody, ListParams, Resolution, found},
};

const KIND: &str = "message";

/// The inbox page: its messages plus the reply dialog.
pub struct Inbox {
  pub messages: EntityListManager<Message>,
  pub composer: ReplyComposer,
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MessageList {
  pub messages: Vec<Message>,
  /// Unread messages in this view.
  pub unread:   usize,
  /// Messages in the inbox regardless of the view.
  pub total:    usize,
}

/// `GET /admin/messages`
pub async fn list(
  State(state): State<AppState>,
  Query(params): Query<ListParams>,
) -> Result<Json<MessageList>, ApiError> {
  let mut inbox = state.inbox.lock().await;
  params.apply(&mut inbox.messages)?;
  let list = MessageList {
    messages: inbox.messages.filtered_view().cloned().collect(),
    unread:   inbox.messages.unread_count(),
    total:    inbox.messages.len(),
  };
  tracing::debug!(count = list.messages.len(), unread = list.unread, "listed messages");
  Ok(Json(list))
}

/// `POST /admin/messages`
pub async fn create(
  State(state): State<AppState>,
  Json(form): Json<MessageForm>,
) -> Result<impl IntoResponse, ApiError> {
  ApiError::require(&[("name", form.name.as_str()), ("email", form.email.as_str())])?;
  let message = state.inbox.lock().await.messages.create(form);
  tracing::info!(id = %message.id, from = %message.email, "message created");
  Ok((StatusCode::CREATED, Json(message)))
}

// ─── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: MessageStatus,
}

/// `PUT /admin/messages/{id}/status`
pub async fn set_status(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
  Json(body): Json<StatusBody>,
) -> Result<Json<Message>, ApiError> {
  let message = found(
    state.inbox.lock().await.messages.set_status(id, body.status),
    KIND,
    id,
  )?;
  tracing::info!(%id, status = %message.status, "message status set");
  Ok(Json(message))
}

/// `POST /admin/messages/{id}/archive`
pub async fn archive(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
) -> Result<Json<Message>, ApiError> {
  let message = found(state.inbox.lock().await.messages.archive(id), KIND, id)?;
  tracing::info!(%id, "message archived");
  Ok(Json(message))
}

// ─── Reply dialog ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ComposerView {
  pub selected: Option<RecordId>,
  pub draft:    String,
  pub can_send: bool,
}

impl From<&ReplyComposer> for ComposerView {
  fn from(composer: &ReplyComposer) -> Self {
    Self {
      selected: composer.selected(),
      draft:    composer.draft().to_owned(),
      can_send: composer.can_send(),
    }
  }
}

/// `POST /admin/messages/{id}/open`
pub async fn open(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
) -> Result<Json<Message>, ApiError> {
  let mut inbox = state.inbox.lock().await;
  let Inbox { messages, composer } = &mut *inbox;
  let message = found(composer.open(messages, id), KIND, id)?;
  tracing::info!(%id, status = %message.status, "message opened for reply");
  Ok(Json(message))
}

/// `GET /admin/messages/reply`
pub async fn composer(State(state): State<AppState>) -> Json<ComposerView> {
  Json(ComposerView::from(&state.inbox.lock().await.composer))
}

#[derive(Debug, Deserialize)]
pub struct ReplyBody {
  pub text: String,
}

/// `POST /admin/messages/reply`
pub async fn send_reply(
  State(state): State<AppState>,
  Json(body): Json<ReplyBody>,
) -> Result<Json<Reply>, ApiError> {
  let mut inbox = state.inbox.lock().await;
  let Inbox { messages, composer } = &mut *inbox;
  composer.set_draft(body.text);
  let reply = composer.send(messages)?;
  tracing::info!(id = %reply.message_id, to = %reply.to, "reply sent");
  Ok(Json(reply))
}

/// `DELETE /admin/messages/reply`
pub async fn close_reply(State(state): State<AppState>) -> StatusCode {
  state.inbox.lock().await.composer.close();
  StatusCode::NO_CONTENT
}

// ─── Deletion ─────────────────────────────────────────────────────────────────

/// `DELETE /admin/messages/{id}`
pub async fn request_delete(
  State(state): State<AppState>,
  Path(id): Path<RecordId>,
) -> Result<(StatusCode, Json<DeleteTicket>), ApiError> {
  list::request_deletion(&mut state.inbox.lock().await.messages, KIND, id)
}

/// `POST /admin/messages/deletions/{token}`
pub async fn resolve_delete(
  State(state): State<AppState>,
  Path(token): Path<Uuid>,
  Json(body): Json<DeletionBody>,
) -> Result<Json<Resolution<Message>>, ApiError> {
  list::resolve_deletion(&mut state.inbox.lock().await.messages, KIND, token, body)
}
