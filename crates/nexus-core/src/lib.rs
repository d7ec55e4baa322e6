//! Core types for the NexusForge agency site and its back office.
//!
//! This crate has no HTTP concerns. Every collection lives in
//! memory, owned by whichever view holds its [`EntityListManager`]; nothing is
//! persisted and nothing is shared between views.

pub mod contact;
pub mod error;
pub mod manager;
pub mod message;
pub mod project;
pub mod record;
pub mod reply;
pub mod seed;
pub mod service;
pub mod site;

pub use error::{Error, Result};
pub use manager::EntityListManager;
pub use record::{FilterKey, Record, RecordId};
