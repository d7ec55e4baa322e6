//! Inbound client messages.
//!
//! Opening moves `unread -> read`, sending a reply moves to `replied`, and any
//! status may be archived. The admin may also set a status directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  manager::EntityListManager,
  record::{Record, RecordId},
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageStatus {
  #[default]
  Unread,
  Read,
  Replied,
  Archived,
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
  Low,
  #[default]
  Medium,
  High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  pub id:          RecordId,
  pub name:        String,
  pub email:       String,
  pub company:     Option<String>,
  pub subject:     String,
  pub body:        String,
  pub received_at: DateTime<Utc>,
  pub status:      MessageStatus,
  pub priority:    Priority,
}

/// A message as entered into the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageForm {
  pub name:        String,
  pub email:       String,
  #[serde(default)]
  pub company:     Option<String>,
  pub subject:     String,
  pub body:        String,
  /// Defaults to the time the form is turned into a record.
  #[serde(default)]
  pub received_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub status:      MessageStatus,
  #[serde(default)]
  pub priority:    Priority,
}

impl Record for Message {
  type Filter = MessageStatus;
  type Form = MessageForm;

  fn id(&self) -> RecordId { self.id }

  fn search_fields(&self) -> Vec<&str> {
    vec![self.name.as_str(), self.email.as_str(), self.subject.as_str()]
  }

  fn filter_value(&self) -> &MessageStatus { &self.status }

  fn from_form(id: RecordId, form: MessageForm) -> Self {
    Self {
      id,
      name: form.name,
      email: form.email,
      company: form.company.filter(|c| !c.is_empty()),
      subject: form.subject,
      body: form.body,
      received_at: form.received_at.unwrap_or_else(Utc::now),
      status: form.status,
      priority: form.priority,
    }
  }

  fn to_form(&self) -> MessageForm {
    MessageForm {
      name:        self.name.clone(),
      email:       self.email.clone(),
      company:     self.company.clone(),
      subject:     self.subject.clone(),
      body:        self.body.clone(),
      received_at: Some(self.received_at),
      status:      self.status,
      priority:    self.priority,
    }
  }
}

impl EntityListManager<Message> {
  /// Set any of the four statuses.
  pub fn set_status(&mut self, id: RecordId, status: MessageStatus) -> Option<Message> {
    self.modify(id, |m| m.status = status)
  }

  pub fn archive(&mut self, id: RecordId) -> Option<Message> {
    self.set_status(id, MessageStatus::Archived)
  }

  /// Viewing a message marks it read if it was unread; other statuses are
  /// left alone.
  pub fn mark_opened(&mut self, id: RecordId) -> Option<Message> {
    self.modify(id, |m| {
      if m.status == MessageStatus::Unread {
        m.status = MessageStatus::Read;
      }
    })
  }

  /// Unread messages among the current filtered view.
  pub fn unread_count(&self) -> usize {
    self
      .filtered_view()
      .filter(|m| m.status == MessageStatus::Unread)
      .count()
  }
}
