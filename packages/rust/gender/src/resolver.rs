//! The gender-resolution cascade: local detector, then cache, then service.

use tracing::debug;

use gendercite_shared::{Gender, GenderGuess, Result};
use gendercite_storage::NameCache;

use crate::detector::Detector;
use crate::service::GenderApiClient;

/// Resolves a given name to a gender guess.
///
/// Policy, in order: names shorter than two characters are unknown without
/// any lookup; a confident local detector hit wins (no accuracy score); a
/// cache hit on the exact name string is returned as stored; otherwise the
/// external service is consulted when configured, and its answer is written
/// through to the cache. A still-unknown hyphenated name is retried once on
/// the part before the first hyphen.
///
/// The cache is caller-owned and passed in per call, never shared implicitly.
#[derive(Debug)]
pub struct GenderResolver {
    detector: Detector,
    service: Option<GenderApiClient>,
}

impl GenderResolver {
    /// Build a resolver. `service` is `None` when no API key is configured,
    /// which disables the external fallback but is not an error.
    pub fn new(detector: Detector, service: Option<GenderApiClient>) -> Self {
        Self { detector, service }
    }

    /// Resolve `name` to a guess, consulting and updating `cache`.
    pub async fn resolve(&self, name: &str, cache: &mut NameCache) -> Result<GenderGuess> {
        let guess = self.resolve_once(name, cache).await?;

        // Hyphenated compound names: retry on the first component.
        if guess.is_unknown() && name.contains('-') {
            let head = name.split('-').next().unwrap_or_default();
            debug!(%name, %head, "retrying hyphenated name on first component");
            return self.resolve_once(head, cache).await;
        }

        Ok(guess)
    }

    async fn resolve_once(&self, name: &str, cache: &mut NameCache) -> Result<GenderGuess> {
        // A bare initial or empty string is never resolvable.
        if name.chars().count() < 2 {
            return Ok(GenderGuess::unknown());
        }

        let local = self.detector.get(name);
        if local != Gender::Unknown {
            return Ok(GenderGuess {
                gender: local,
                accuracy: None,
            });
        }

        if let Some(hit) = cache.get(name) {
            debug!(%name, "name cache hit");
            return Ok(hit);
        }

        if let Some(service) = &self.service {
            let guess = service.lookup(name).await?;
            // Write-through: a partial run keeps everything resolved so far.
            cache.put(name, guess)?;
            return Ok(guess);
        }

        Ok(GenderGuess::unknown())
    }
}
