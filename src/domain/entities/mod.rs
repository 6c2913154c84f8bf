//! Core domain entities representing the business data model.
//!
//! The service persists a single entity, [`UrlRecord`]. Its public key is the
//! [`Alias`]; the numeric [`RecordId`] is assigned by the store and stays
//! internal.
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewUrlRecord`] carries only the caller-supplied fields.

pub mod url_record;

pub use url_record::{Alias, NewUrlRecord, RecordId, UrlRecord};
