//! The public contact form.
//!
//! A submission waits out an artificial delay standing in for network
//! latency, then shows a success state for a while before the desk accepts
//! the next one. While a submission is in flight, or its success state is
//! still showing, further submissions are refused.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
  pub name:    String,
  pub email:   String,
  #[serde(default)]
  pub company: String,
  pub message: String,
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
  pub name:        String,
  pub email:       String,
  pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeskPhase {
  Idle,
  Submitting,
  Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeskTiming {
  /// Simulated network latency of a submission.
  pub delay:       Duration,
  /// How long the success state is shown.
  pub reset_after: Duration,
}

impl Default for DeskTiming {
  fn default() -> Self {
    Self {
      delay:       Duration::from_millis(2000),
      reset_after: Duration::from_millis(3000),
    }
  }
}

/// Cheap-to-clone handle to the contact form's submission state.
#[derive(Clone)]
pub struct ContactDesk {
  phase:  Arc<watch::Sender<DeskPhase>>,
  timing: DeskTiming,
}

impl ContactDesk {
  pub fn new(timing: DeskTiming) -> Self {
    let (phase, _) = watch::channel(DeskPhase::Idle);
    Self { phase: Arc::new(phase), timing }
  }

  pub fn phase(&self) -> DeskPhase { *self.phase.borrow() }

  /// Observe phase changes.
  pub fn subscribe(&self) -> watch::Receiver<DeskPhase> { self.phase.subscribe() }

  pub async fn submit(&self, form: ContactForm) -> Result<ContactReceipt> {
    let claimed = self.phase.send_if_modified(|phase| {
      if *phase == DeskPhase::Idle {
        *phase = DeskPhase::Submitting;
        true
      } else {
        false
      }
    });
    if !claimed {
      return Err(Error::SubmissionInProgress);
    }

    let in_flight = InFlight(&self.phase);
    tokio::time::sleep(self.timing.delay).await;
    self.phase.send_replace(DeskPhase::Submitted);
    drop(in_flight);

    let phase = Arc::clone(&self.phase);
    let reset_after = self.timing.reset_after;
    tokio::spawn(async move {
      tokio::time::sleep(reset_after).await;
      phase.send_replace(DeskPhase::Idle);
    });

    Ok(ContactReceipt {
      name:        form.name,
      email:       form.email,
      received_at: Utc::now(),
    })
  }
}

/// Returns the desk to idle if a submission is abandoned mid-delay.
struct InFlight<'a>(&'a watch::Sender<DeskPhase>);

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    self.0.send_if_modified(|phase| {
      if *phase == DeskPhase::Submitting {
        *phase = DeskPhase::Idle;
        true
      } else {
        false
      }
    });
  }
}
