//! Infrastructure layer for external integrations.
//!
//! Implements the persistence contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite store implementation and pool setup

pub mod persistence;
