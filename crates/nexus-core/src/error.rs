//! Error types for `nexus-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::record::RecordId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("record not found: {0}")]
  RecordNotFound(RecordId),

  #[error("unknown deletion ticket: {0}")]
  UnknownTicket(Uuid),

  #[error("reply text is empty")]
  EmptyReply,

  #[error("no message is open for reply")]
  NoMessageSelected,

  #[error("a contact submission is already in progress")]
  SubmissionInProgress,

  #[error("invalid filter key: {0:?}")]
  InvalidFilter(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
