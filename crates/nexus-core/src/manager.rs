//! [`EntityListManager`]: an ordered in-memory collection with a search
//! term, a categorical filter, and create/update/delete against it.
//!
//! Insertion order is the display order. Every operation is synchronous and
//! total: an identifier that is not in the collection turns the operation
//! into a no-op, reported to the caller as `None`.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::{
  Error, Result,
  record::{FilterKey, IdSequence, Record, RecordId},
};

// ─── Deletion tickets ─────────────────────────────────────────────────────────

/// A pending deletion. Issued by [`EntityListManager::request_delete`] and
/// consumed by [`EntityListManager::resolve_delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteTicket {
  pub token: Uuid,
  pub id:    RecordId,
}

/// The answer to a deletion ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
  Confirm,
  Cancel,
}

impl From<bool> for Decision {
  fn from(confirm: bool) -> Self {
    if confirm { Self::Confirm } else { Self::Cancel }
  }
}

// ─── Manager ──────────────────────────────────────────────────────────────────

pub struct EntityListManager<T: Record> {
  records:     Vec<T>,
  ids:         IdSequence,
  search_term: String,
  filter:      FilterKey<T::Filter>,
  pending:     HashMap<Uuid, RecordId>,
}

impl<T: Record> EntityListManager<T> {
  /// Take ownership of `seed` as the initial collection, in order.
  pub fn new(seed: Vec<T>) -> Self {
    let ids = IdSequence::starting_after(seed.iter().map(|r| r.id()));
    Self {
      records: seed,
      ids,
      search_term: String::new(),
      filter: FilterKey::All,
      pending: HashMap::new(),
    }
  }

  pub fn records(&self) -> &[T] { &self.records }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  pub fn get(&self, id: RecordId) -> Option<&T> {
    self.records.iter().find(|r| r.id() == id)
  }

  // ── View state ──────────────────────────────────────────────────────────

  pub fn set_search_term(&mut self, term: impl Into<String>) {
    self.search_term = term.into();
  }

  pub fn search_term(&self) -> &str { &self.search_term }

  pub fn set_filter(&mut self, key: FilterKey<T::Filter>) { self.filter = key; }

  pub fn active_filter(&self) -> &FilterKey<T::Filter> { &self.filter }

  /// Records matching both the search term and the active filter, in
  /// collection order. Recomputed on every call.
  pub fn filtered_view(&self) -> impl Iterator<Item = &T> + '_ {
    let needle = self.search_term.to_lowercase();
    self
      .records
      .iter()
      .filter(move |r| matches_search(*r, &needle) && self.filter.admits(r.filter_value()))
  }

  // ── Mutations ───────────────────────────────────────────────────────────

  /// Append a record built from `form` under a fresh identifier.
  pub fn create(&mut self, form: T::Form) -> T {
    let record = T::from_form(self.ids.next_id(), form);
    self.records.push(record.clone());
    record
  }

  /// Overwrite the record with `id` in place, keeping its position.
  pub fn update(&mut self, id: RecordId, form: T::Form) -> Option<T> {
    let slot = self.records.iter_mut().find(|r| r.id() == id)?;
    *slot = T::from_form(id, form);
    Some(slot.clone())
  }

  /// Apply `change` to the record with `id` and return the result.
  pub fn modify(&mut self, id: RecordId, change: impl FnOnce(&mut T)) -> Option<T> {
    let slot = self.records.iter_mut().find(|r| r.id() == id)?;
    change(slot);
    Some(slot.clone())
  }

  /// Remove the record with `id` immediately. Views go through
  /// [`Self::request_delete`] instead.
  pub fn delete(&mut self, id: RecordId) -> Option<T> {
    let index = self.records.iter().position(|r| r.id() == id)?;
    self.pending.retain(|_, pending| *pending != id);
    Some(self.records.remove(index))
  }

  // ── Confirmed deletion ──────────────────────────────────────────────────

  /// Issue a ticket for deleting `id`. Nothing changes until the ticket is
  /// resolved; `None` if the record does not exist. A record has at most one
  /// open ticket: asking again hands back the same one.
  pub fn request_delete(&mut self, id: RecordId) -> Option<DeleteTicket> {
    self.get(id)?;
    if let Some((&token, _)) = self.pending.iter().find(|(_, pending)| **pending == id) {
      return Some(DeleteTicket { token, id });
    }
    let ticket = DeleteTicket { token: Uuid::new_v4(), id };
    self.pending.insert(ticket.token, id);
    Some(ticket)
  }

  /// Consume a ticket. `Confirm` removes the record (if it still exists);
  /// `Cancel` leaves the collection untouched.
  pub fn resolve_delete(&mut self, token: Uuid, decision: Decision) -> Result<Option<T>> {
    let id = self.pending.remove(&token).ok_or(Error::UnknownTicket(token))?;
    Ok(match decision {
      Decision::Confirm => self.delete(id),
      Decision::Cancel => None,
    })
  }

  pub fn pending_deletions(&self) -> usize { self.pending.len() }
}

fn matches_search<T: Record>(record: &T, needle: &str) -> bool {
  needle.is_empty()
    || record
      .search_fields()
      .into_iter()
      .any(|field| field.to_lowercase().contains(needle))
}
