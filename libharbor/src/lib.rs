//! libharbor - Harbor Registry Management Library
//!
//! libharbor provides a typed client for the Harbor management API: projects,
//! repositories and tags, vulnerability scans, users and memberships.
//!
//! # Quick Start
//!
//! ```no_run
//! use libharbor::{Credentials, Harbor};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to a Harbor instance
//!     let harbor = Harbor::connect(
//!         "https://harbor.example.com",
//!         Credentials::basic("admin", "Harbor12345"),
//!     )?;
//!
//!     // List projects
//!     let projects = harbor.projects().list(&Default::default()).into_result()?;
//!     for project in projects {
//!         println!("{}", project.name);
//!     }
//!
//!     // Inspect a failed call without losing the response
//!     let result = harbor.users().get(42);
//!     if let Some(errors) = result.errors() {
//!         for error in errors {
//!             eprintln!("{}", error);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **Configurable routes**: API paths come from a route table that can be
//!   overridden from YAML configuration
//! - **Aggregated errors**: Every call returns a [`CallResult`] holding the
//!   decoded value or all errors, plus the raw response when one arrived
//! - **Thread safe**: A [`Harbor`] handle can be cloned and shared freely
//!
//! # Main Types
//!
//! - [`Harbor`] - Main entry point for Harbor operations
//! - [`HarborBuilder`] - Builder for advanced configuration
//! - [`Config`] - YAML and environment configuration
//! - [`CallResult`] - Outcome of a single API call
//! - [`Credentials`] - Authentication credentials
//!
//! # Architecture
//!
//! A call flows through the route table ([`routes`]), the dispatcher and
//! transport ([`client`]) and back as a [`CallResult`]. The resource adapters
//! ([`resources`]) are thin wrappers naming a route and the payload types
//! from [`models`].

#![warn(clippy::all)]

/// Returns the libharbor crate version.
///
/// This is useful for version reporting in CLI tools and debugging.
///
/// # Examples
///
/// ```
/// let version = libharbor::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod harbor;
pub use harbor::{Harbor, HarborBuilder};

// Re-export commonly used types for convenience
pub use auth::Credentials;
pub use client::{CallResult, Method, Outcome};
pub use config::Config;
pub use error::{Errors, HarborError, Result};

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
pub mod routes;
