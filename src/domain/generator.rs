//! Alias candidate generation contract.

use crate::domain::entities::Alias;

/// Produces alias candidates.
///
/// Implementations are stateless samplers with no view of existing aliases.
/// Collisions are discovered by the store at insertion time.
///
/// # Implementations
///
/// - [`crate::utils::alias_generator::RandomAliasGenerator`] - uniform alphanumeric sampling
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a candidate of exactly `length` characters.
    fn generate(&self, length: usize) -> Alias;
}
