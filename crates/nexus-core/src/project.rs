//! Portfolio projects.

use serde::{Deserialize, Serialize};

use crate::{
  manager::EntityListManager,
  record::{Record, RecordId, RecordStatus, join_list, split_list},
};

/// The fixed set of portfolio categories.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectCategory {
  Web,
  Mobile,
  Branding,
  Marketing,
}

impl ProjectCategory {
  /// Every category, in picker order.
  pub const ALL: [ProjectCategory; 4] = [Self::Web, Self::Mobile, Self::Branding, Self::Marketing];

  /// Human label used by category pickers.
  pub fn label(self) -> &'static str {
    match self {
      Self::Web => "Web Development",
      Self::Mobile => "Mobile Apps",
      Self::Branding => "Branding",
      Self::Marketing => "Marketing",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
  pub id:           RecordId,
  pub title:        String,
  pub category:     ProjectCategory,
  pub description:  String,
  /// Image URL.
  pub image:        String,
  pub technologies: Vec<String>,
  pub live_url:     String,
  pub github_url:   String,
  pub featured:     bool,
  pub status:       RecordStatus,
}

/// The project edit form. `technologies` is comma-separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectForm {
  pub title:        String,
  pub category:     ProjectCategory,
  pub description:  String,
  #[serde(default)]
  pub image:        String,
  #[serde(default)]
  pub technologies: String,
  #[serde(default)]
  pub live_url:     String,
  #[serde(default)]
  pub github_url:   String,
  #[serde(default)]
  pub featured:     bool,
  #[serde(default)]
  pub status:       RecordStatus,
}

impl Record for Project {
  type Filter = ProjectCategory;
  type Form = ProjectForm;

  fn id(&self) -> RecordId { self.id }

  fn search_fields(&self) -> Vec<&str> { vec![self.title.as_str(), self.description.as_str()] }

  fn filter_value(&self) -> &ProjectCategory { &self.category }

  fn from_form(id: RecordId, form: ProjectForm) -> Self {
    Self {
      id,
      title: form.title,
      category: form.category,
      description: form.description,
      image: form.image,
      technologies: split_list(&form.technologies),
      live_url: form.live_url,
      github_url: form.github_url,
      featured: form.featured,
      status: form.status,
    }
  }

  fn to_form(&self) -> ProjectForm {
    ProjectForm {
      title:        self.title.clone(),
      category:     self.category,
      description:  self.description.clone(),
      image:        self.image.clone(),
      technologies: join_list(&self.technologies),
      live_url:     self.live_url.clone(),
      github_url:   self.github_url.clone(),
      featured:     self.featured,
      status:       self.status,
    }
  }
}

impl EntityListManager<Project> {
  pub fn toggle_featured(&mut self, id: RecordId) -> Option<Project> {
    self.modify(id, |p| p.featured = !p.featured)
  }
}
