//! Read-only page content: the marketing home page, the dashboard, and the
//! analytics overview. All figures are illustrative and hard-coded.

use serde::Serialize;

use crate::{project::Project, seed};

// ─── Building blocks ──────────────────────────────────────────────────────────

/// A headline number with its month-over-month change, e.g. `"+12%"`.
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
  pub title:  &'static str,
  pub value:  &'static str,
  pub change: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroStat {
  pub number: &'static str,
  pub metric: &'static str,
}

/// A service as shown on the public page.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
  pub icon:        &'static str,
  pub title:       &'static str,
  pub description: &'static str,
  pub features:    &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactChannel {
  pub title:   &'static str,
  pub content: &'static str,
  pub link:    &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpeningHours {
  pub days:  &'static str,
  pub hours: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
  pub action: &'static str,
  pub time:   &'static str,
  /// Who did it (dashboard) or what kind of event it was (analytics).
  pub detail: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickAction {
  pub label: &'static str,
  pub href:  &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageViews {
  pub page:       &'static str,
  pub views:      u32,
  pub percentage: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrafficSource {
  pub source:     &'static str,
  pub visitors:   u32,
  pub percentage: u8,
}

// ─── Pages ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
  pub hero_stats: &'static [HeroStat],
  pub services:   &'static [ServiceCard],
  /// The showcase after the visitor's category filter.
  pub portfolio:  Vec<Project>,
  pub contact:    &'static [ContactChannel],
  pub hours:      &'static [OpeningHours],
}

impl HomePage {
  pub fn new(portfolio: Vec<Project>) -> Self {
    Self {
      hero_stats: seed::HERO_STATS,
      services: seed::SERVICE_CARDS,
      portfolio,
      contact: seed::CONTACT_CHANNELS,
      hours: seed::OPENING_HOURS,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
  pub stats:           &'static [Stat],
  pub recent_activity: &'static [Activity],
  pub quick_actions:   &'static [QuickAction],
}

pub fn dashboard() -> Dashboard {
  Dashboard {
    stats:           seed::DASHBOARD_STATS,
    recent_activity: seed::DASHBOARD_ACTIVITY,
    quick_actions:   seed::QUICK_ACTIONS,
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct Analytics {
  pub metrics:         &'static [Stat],
  pub top_pages:       &'static [PageViews],
  pub top_sources:     &'static [TrafficSource],
  pub recent_activity: &'static [Activity],
}

pub fn analytics() -> Analytics {
  Analytics {
    metrics:         seed::ANALYTICS_METRICS,
    top_pages:       seed::TOP_PAGES,
    top_sources:     seed::TOP_SOURCES,
    recent_activity: seed::ANALYTICS_ACTIVITY,
  }
}
