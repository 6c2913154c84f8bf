//! Utility functions for alias generation and database error inspection.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`db_error`] - Classification of SQLx errors

pub mod alias_generator;
pub mod db_error;
