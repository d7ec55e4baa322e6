//! Configuration and application assembly for the NexusForge server.

use std::{path::Path, time::Duration};

use axum::Router;
use nexus_api::AppState;
use nexus_core::contact::DeskTiming;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `NEXUS_*` environment variables. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  /// Simulated delivery delay of the contact form.
  pub contact_delay_ms: u64,
  /// How long the contact form shows its success state.
  pub contact_reset_ms: u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             "127.0.0.1".to_string(),
      port:             8080,
      contact_delay_ms: 2000,
      contact_reset_ms: 3000,
    }
  }
}

impl ServerConfig {
  /// Read `path` if it exists, then overlay the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("NEXUS").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn desk_timing(&self) -> DeskTiming {
    DeskTiming {
      delay:       Duration::from_millis(self.contact_delay_ms),
      reset_after: Duration::from_millis(self.contact_reset_ms),
    }
  }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// The full application: freshly seeded pages behind request tracing.
pub fn app(config: &ServerConfig) -> Router {
  nexus_api::router(AppState::seeded(config.desk_timing())).layer(TraceLayer::new_for_http())
}
