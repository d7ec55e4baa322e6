//! The reply dialog of the inbox.
//!
//! Opening a message selects it (and marks it read); sending non-blank text
//! marks it replied and clears the composer. No email leaves the process: the
//! outgoing [`Reply`] is handed back to the caller.

use serde::Serialize;

use crate::{
  EntityListManager, Error, Result,
  message::{Message, MessageStatus},
  record::RecordId,
};

/// What would have been emailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
  pub message_id: RecordId,
  pub to:         String,
  pub subject:    String,
  pub body:       String,
}

#[derive(Debug, Clone, Default)]
pub struct ReplyComposer {
  selected: Option<RecordId>,
  draft:    String,
}

impl ReplyComposer {
  pub fn new() -> Self { Self::default() }

  /// Select `id` for reply. Returns `None` and changes nothing if the
  /// message does not exist.
  pub fn open(
    &mut self,
    inbox: &mut EntityListManager<Message>,
    id: RecordId,
  ) -> Option<Message> {
    let message = inbox.mark_opened(id)?;
    self.selected = Some(id);
    Some(message)
  }

  pub fn selected(&self) -> Option<RecordId> { self.selected }

  pub fn draft(&self) -> &str { &self.draft }

  pub fn set_draft(&mut self, text: impl Into<String>) { self.draft = text.into(); }

  /// Whether the send action is available.
  pub fn can_send(&self) -> bool {
    self.selected.is_some() && !self.draft.trim().is_empty()
  }

  /// Mark the selected message replied and reset the composer.
  pub fn send(&mut self, inbox: &mut EntityListManager<Message>) -> Result<Reply> {
    let id = self.selected.ok_or(Error::NoMessageSelected)?;
    if self.draft.trim().is_empty() {
      return Err(Error::EmptyReply);
    }

    let body = std::mem::take(&mut self.draft);
    self.selected = None;

    let message = inbox
      .set_status(id, MessageStatus::Replied)
      .ok_or(Error::RecordNotFound(id))?;

    Ok(Reply {
      message_id: id,
      to: message.email,
      subject: format!("Re: {}", message.subject),
      body,
    })
  }

  /// Hide the dialog. The draft survives for the next open.
  pub fn close(&mut self) { self.selected = None; }
}
