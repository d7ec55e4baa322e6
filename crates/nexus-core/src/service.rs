//! Agency service offerings.

use serde::{Deserialize, Serialize};

use crate::{
  manager::EntityListManager,
  record::{Record, RecordId, RecordStatus, join_list, split_list},
};

/// Categories offered by the admin picker. Stored categories are free text;
/// these are only the suggested values.
pub const SERVICE_CATEGORIES: [&str; 4] = ["Marketing", "Development", "Design", "Strategy"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
  pub id:          RecordId,
  pub title:       String,
  pub description: String,
  /// Opaque icon name, resolved by whoever renders the service.
  pub icon:        String,
  pub features:    Vec<String>,
  /// Display price, e.g. `"$1,200/month"`.
  pub price:       String,
  pub category:    String,
  pub status:      RecordStatus,
  pub popular:     bool,
}

/// The service edit form. `features` is comma-separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceForm {
  pub title:       String,
  pub description: String,
  #[serde(default)]
  pub icon:        String,
  #[serde(default)]
  pub features:    String,
  #[serde(default)]
  pub price:       String,
  #[serde(default)]
  pub category:    String,
  #[serde(default)]
  pub status:      RecordStatus,
  #[serde(default)]
  pub popular:     bool,
}

impl Record for Service {
  type Filter = String;
  type Form = ServiceForm;

  fn id(&self) -> RecordId { self.id }

  fn search_fields(&self) -> Vec<&str> { vec![self.title.as_str(), self.description.as_str()] }

  fn filter_value(&self) -> &String { &self.category }

  fn from_form(id: RecordId, form: ServiceForm) -> Self {
    Self {
      id,
      title: form.title,
      description: form.description,
      icon: form.icon,
      features: split_list(&form.features),
      price: form.price,
      category: form.category,
      status: form.status,
      popular: form.popular,
    }
  }

  fn to_form(&self) -> ServiceForm {
    ServiceForm {
      title:       self.title.clone(),
      description: self.description.clone(),
      icon:        self.icon.clone(),
      features:    join_list(&self.features),
      price:       self.price.clone(),
      category:    self.category.clone(),
      status:      self.status,
      popular:     self.popular,
    }
  }
}

impl EntityListManager<Service> {
  pub fn toggle_popular(&mut self, id: RecordId) -> Option<Service> {
    self.modify(id, |s| s.popular = !s.popular)
  }

  /// Flip between `active` and `draft`. Anything that is not active
  /// (including `archived`) becomes active; archiving a service goes through
  /// the edit form.
  pub fn cycle_status(&mut self, id: RecordId) -> Option<Service> {
    self.modify(id, |s| {
      s.status = match s.status {
        RecordStatus::Active => RecordStatus::Draft,
        RecordStatus::Draft | RecordStatus::Archived => RecordStatus::Active,
      }
    })
  }
}
