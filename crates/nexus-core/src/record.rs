//! The shared vocabulary of every managed collection: identifiers, filter
//! keys, the publication status, and the [`Record`] trait that
//! [`EntityListManager`](crate::manager::EntityListManager) is generic over.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

// ─── Identifiers ──────────────────────────────────────────────────────────────

/// Identifier of a record within its collection. Assigned once at creation
/// and never changed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Monotonic identifier allocator owned by a single collection.
#[derive(Debug, Clone)]
pub struct IdSequence {
  next: u64,
}

impl IdSequence {
  /// A sequence whose first id is one past the largest of `taken`.
  pub fn starting_after(taken: impl IntoIterator<Item = RecordId>) -> Self {
    let next = taken.into_iter().map(|id| id.0).max().map_or(1, |max| max + 1);
    Self { next }
  }

  pub fn next_id(&mut self) -> RecordId {
    let id = RecordId(self.next);
    self.next += 1;
    id
  }
}

// ─── Status ───────────────────────────────────────────────────────────────────

/// Publication status shared by projects and services.
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
pub enum RecordStatus {
  #[default]
  Active,
  Draft,
  Archived,
}

// ─── Filter keys ──────────────────────────────────────────────────────────────

/// The categorical constraint of a list view. `All` is the identity filter
/// and is written as the literal string `"all"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey<V> {
  All,
  Only(V),
}

impl<V> Default for FilterKey<V> {
  fn default() -> Self { Self::All }
}

impl<V: PartialEq> FilterKey<V> {
  /// Exact-match test; `All` admits everything.
  pub fn admits(&self, value: &V) -> bool {
    match self {
      Self::All => true,
      Self::Only(wanted) => wanted == value,
    }
  }
}

impl<V: FromStr> FromStr for FilterKey<V> {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    if s == "all" {
      return Ok(Self::All);
    }
    s.parse()
      .map(Self::Only)
      .map_err(|_| Error::InvalidFilter(s.to_owned()))
  }
}

impl<V: fmt::Display> fmt::Display for FilterKey<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::All => f.write_str("all"),
      Self::Only(v) => v.fmt(f),
    }
  }
}

impl<V: fmt::Display> Serialize for FilterKey<V> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de, V: FromStr> Deserialize<'de> for FilterKey<V> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

// ─── Record ───────────────────────────────────────────────────────────────────

/// A flat record kind that can be held by an
/// [`EntityListManager`](crate::manager::EntityListManager).
pub trait Record: Clone {
  /// The edit-form shape: list fields arrive as comma-separated text.
  type Form;
  /// The field value a [`FilterKey`] is compared against.
  type Filter: PartialEq + FromStr + fmt::Display;

  fn id(&self) -> RecordId;

  /// Text fields consulted by the case-insensitive search.
  fn search_fields(&self) -> Vec<&str>;

  fn filter_value(&self) -> &Self::Filter;

  /// Build the full record from a submitted form. Used for both create and
  /// update; an update overwrites every field except the identifier.
  fn from_form(id: RecordId, form: Self::Form) -> Self;

  /// The edit pre-fill for this record.
  fn to_form(&self) -> Self::Form;
}

// ─── Form helpers ─────────────────────────────────────────────────────────────

/// Split a comma-separated edit field into trimmed entries.
///
/// No validation and no deduplication: `"a,,b"` yields an empty middle entry
/// and `""` yields a single empty entry.
pub fn split_list(text: &str) -> Vec<String> {
  text.split(',').map(|item| item.trim().to_owned()).collect()
}

/// Inverse of [`split_list`] for pre-filling an edit form.
pub fn join_list(items: &[String]) -> String { items.join(", ") }
