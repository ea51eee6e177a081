//! User Directory
//!
//! A client for a REST placeholder user service with support for:
//! - Fetching and searching the user list
//! - Local create and edit through a validated form
//! - Remote delete with confirmation
//! - Per-user detail views routed by path

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
