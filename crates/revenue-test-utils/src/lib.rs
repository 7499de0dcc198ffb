//! Shared test utilities for the Glasspath Revenue workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`application`]: the bundled application directory new projects are
//!   seeded from
//! - [`project`]: [`TestProject`] builder for project directories and backups

pub mod application;
pub mod project;

pub use application::{BUNDLED_TEMPLATES, FakeApplication, fixtures_dir};
pub use project::TestProject;
