//! Resource resolver abstraction for photo locators.
//!
//! The core stores locators as opaque strings; resolving them to image
//! bytes is the shell's job. The core only needs to validate a locator
//! before a photo enters an album, so that an unresolvable resource
//! never leaves the aggregate partially mutated.

use std::path::Path;
use std::sync::Arc;

use crate::utils::error::{AppError, AppResult};

/// Trait for validating photo locators.
///
/// Implementations can target the local filesystem, a content-provider
/// bridge, or accept everything for testing.
pub trait ResourceResolver: Send + Sync {
    /// Check that the locator resolves to an existing resource.
    ///
    /// Returns `ResourceUnavailable` if it does not. Failures here must
    /// not mutate the model; display-time failures are handled by the
    /// shell with a placeholder image, never by deleting the photo.
    fn validate(&self, locator: &str) -> AppResult<()>;
}

/// Shared reference to a ResourceResolver implementation.
pub type SharedResourceResolver = Arc<dyn ResourceResolver>;

/// Filesystem resolver.
///
/// Only `file://` locators can be checked without the platform; other
/// schemes (e.g. `content://`) are accepted unexamined.
#[derive(Debug, Clone, Default)]
pub struct FsResourceResolver;

impl ResourceResolver for FsResourceResolver {
    fn validate(&self, locator: &str) -> AppResult<()> {
        if let Some(path) = locator.strip_prefix("file://") {
            if !Path::new(path).exists() {
                return Err(AppError::ResourceUnavailable(locator.to_string()));
            }
        }
        Ok(())
    }
}

/// Resolver that accepts every locator, for tests or shells that
/// validate on their own side.
#[derive(Debug, Clone, Default)]
pub struct TrustingResolver;

impl ResourceResolver for TrustingResolver {
    fn validate(&self, _locator: &str) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_resolver_checks_file_locators() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.jpg");
        std::fs::write(&file, b"jpeg").unwrap();

        let resolver = FsResourceResolver;
        let good = format!("file://{}", file.display());
        assert!(resolver.validate(&good).is_ok());

        let bad = format!("file://{}", tmp.path().join("missing.jpg").display());
        let err = resolver.validate(&bad).unwrap_err();
        assert!(matches!(err, AppError::ResourceUnavailable(_)));
    }

    #[test]
    fn test_fs_resolver_accepts_other_schemes() {
        let resolver = FsResourceResolver;
        assert!(resolver.validate("content://media/images/42").is_ok());
    }

    #[test]
    fn test_trusting_resolver_accepts_everything() {
        let resolver = TrustingResolver;
        assert!(resolver.validate("file:///definitely/missing.jpg").is_ok());
    }
}
