//! Random alias generation.
//!
//! Provides the production [`AliasGenerator`]: uniform sampling over the
//! 62-character alphanumeric alphabet.

use rand::Rng;
use rand::distr::Alphanumeric;

use crate::domain::entities::Alias;
use crate::domain::generator::AliasGenerator;

/// Alias length used when the configuration does not override it.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Samples each character independently and uniformly from `[A-Za-z0-9]`.
///
/// Every call draws from the thread-local generator, which is seeded from the
/// operating system and periodically reseeded, so successive aliases are
/// independent. Zero-length requests produce an empty alias.
///
/// # Examples
///
/// ```ignore
/// let alias = RandomAliasGenerator.generate(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl RandomAliasGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> Alias {
        let alias: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();

        Alias::new(alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_requested_length() {
        let generator = RandomAliasGenerator::new();

        for length in [1, 2, 4, 6, 8, 16, 32, 64, 128] {
            assert_eq!(generator.generate(length).len(), length);
        }
    }

    #[test]
    fn test_generate_zero_length_is_empty() {
        assert!(RandomAliasGenerator.generate(0).is_empty());
    }

    #[test]
    fn test_generate_alphanumeric_characters_only() {
        let alias = RandomAliasGenerator.generate(256);
        assert!(alias.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_produces_unique_aliases() {
        let mut aliases = HashSet::new();

        for _ in 0..1000 {
            aliases.insert(RandomAliasGenerator.generate(8));
        }

        assert_eq!(aliases.len(), 1000);
    }

    #[test]
    fn test_generate_covers_whole_alphabet() {
        // 62 * 200 draws; missing any symbol has negligible probability.
        let alias = RandomAliasGenerator.generate(62 * 200);
        let seen: HashSet<char> = alias.as_str().chars().collect();

        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_default_alias_length() {
        assert_eq!(DEFAULT_ALIAS_LENGTH, 6);
    }
}
