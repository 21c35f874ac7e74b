//! Entity-to-result mapping contract.
//!
//! Every JSON result is created empty (or carrying a service status) and then
//! populated in place from a commerce entity. Population is a one-way read of
//! the entity; results never write back to it.

use thiserror::Error;

use crate::site::StorefrontUri;

/// Errors raised while populating a result from an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The source entity or collection was absent.
    #[error("argument cannot be null: {argument}")]
    ArgumentNull {
        /// Name of the missing argument.
        argument: &'static str,
    },
}

/// A result that can be populated from a `Source` entity.
///
/// `Source` is unsized so collection results can be populated from slices.
pub trait Initialize<Source: ?Sized> {
    /// Argument name reported when the source is absent.
    const ARGUMENT: &'static str;

    /// Copy fields from `source` into `self` and compute derived fields.
    fn initialize(&mut self, source: &Source, site: &dyn StorefrontUri);

    /// Populate from a source that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::ArgumentNull`] when `source` is `None`. The
    /// target is left untouched in that case.
    fn try_initialize(
        &mut self,
        source: Option<&Source>,
        site: &dyn StorefrontUri,
    ) -> Result<(), MappingError> {
        let source = source.ok_or(MappingError::ArgumentNull {
            argument: Self::ARGUMENT,
        })?;
        self.initialize(source, site);
        Ok(())
    }
}

/// Map each source in order to a freshly initialized result.
pub(crate) fn map_each<S, R>(sources: &[S], site: &dyn StorefrontUri) -> impl Iterator<Item = R>
where
    R: Default + Initialize<S>,
{
    sources.iter().map(move |source| {
        let mut result = R::default();
        result.initialize(source, site);
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteContext;

    #[derive(Debug, Default, PartialEq)]
    struct Upper(String);

    impl Initialize<str> for Upper {
        const ARGUMENT: &'static str = "text";

        fn initialize(&mut self, source: &str, _site: &dyn StorefrontUri) {
            self.0 = source.to_uppercase();
        }
    }

    #[test]
    fn test_try_initialize_with_source() {
        let site = SiteContext::default();
        let mut target = Upper::default();
        assert_eq!(target.try_initialize(Some("abc"), &site), Ok(()));
        assert_eq!(target.0, "ABC");
    }

    #[test]
    fn test_try_initialize_null_leaves_target_untouched() {
        let site = SiteContext::default();
        let mut target = Upper("kept".to_string());
        let err = target.try_initialize(None, &site);
        assert_eq!(err, Err(MappingError::ArgumentNull { argument: "text" }));
        assert_eq!(target.0, "kept");
    }

    #[test]
    fn test_argument_null_display() {
        let err = MappingError::ArgumentNull { argument: "address" };
        assert_eq!(err.to_string(), "argument cannot be null: address");
    }
}
