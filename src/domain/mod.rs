//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures and key newtypes
//! - [`repositories`] - The [`repositories::AliasStore`] persistence contract
//! - [`generator`] - The [`generator::AliasGenerator`] sampling contract
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure and utils layers
//! - Orchestration lives in [`crate::application::services`]

pub mod entities;
pub mod generator;
pub mod repositories;
