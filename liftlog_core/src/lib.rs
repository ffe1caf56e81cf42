#![forbid(unsafe_code)]

//! Core domain model and persistence for the Liftlog workout logbook.
//!
//! This crate provides:
//! - Domain types (muscle groups, exercises, dated sessions)
//! - The logbook aggregate with lookup and filtering
//! - JSON persistence
//! - Event log, configuration and logging setup

pub mod types;
pub mod error;
pub mod session;
pub mod logbook;
pub mod codec;
pub mod events;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, ParseError, ReadError, Result};
pub use types::*;
pub use session::WorkoutSession;
pub use logbook::Logbook;
pub use events::{Event, EventLog};
pub use config::Config;
