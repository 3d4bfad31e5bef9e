//! Editor bridge for the scrypgen code generator.
//!
//! This crate connects an editor (anything implementing [`Host`]) to the
//! external `scrypgen` command:
//!
//! - [`config`] - `scrypgen.toml` settings
//! - [`project`] - working directory resolution
//! - [`invoke`] - running the generator without a shell
//! - [`session`] - the shared generate-and-insert flow
//! - [`testing`] - Test utilities (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod config;
mod error;
pub mod host;
pub mod invoke;
pub mod menu;
pub mod project;
pub mod session;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::Settings;
pub use error::{Error, Result};
pub use host::{Document, Host, Selection};
pub use invoke::{Generator, InvokeError};
pub use menu::MenuItem;
pub use session::{DescriptionSource, Outcome, Session};
