//! Error types for registry construction.
//!
//! Everything that can go wrong here goes wrong at build time, when
//! collections fold into a registry or a subset is projected. Lookups and
//! rendering are total and never produce these.

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building registries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two collections define the same icon name without a declared
    /// override.
    #[error(
        "duplicate icon '{name}': defined by collection '{first}' and again by '{second}' \
         (declare an override to keep the later definition)"
    )]
    DuplicateIcon {
        name: String,
        first: String,
        second: String,
    },

    /// An icon name does not follow the kebab-case convention.
    #[error("ill-formed icon name '{name}' in collection '{collection}'")]
    IllFormedName { name: String, collection: String },

    /// A collection declared a fallback glyph it does not contain.
    #[error("collection '{collection}' declares fallback '{fallback}' but does not define it")]
    MissingFallback {
        collection: String,
        fallback: String,
    },

    /// A collection was built with no icons.
    #[error("collection '{collection}' has no icons")]
    EmptyCollection { collection: String },

    /// A subset allow-list named an icon the source registry lacks.
    #[error("subset allow-list names unknown icon '{name}'")]
    UnknownSubsetIcon { name: String },

    /// An override was declared for a name that never collided.
    #[error("override declared for '{name}', but no collection pair collides on it")]
    UnusedOverride { name: String },
}

impl Error {
    /// Create a duplicate-icon error.
    pub fn duplicate_icon(
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateIcon {
            name: name.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create an ill-formed-name error.
    pub fn ill_formed_name(name: impl Into<String>, collection: impl Into<String>) -> Self {
        Self::IllFormedName {
            name: name.into(),
            collection: collection.into(),
        }
    }

    /// Create a missing-fallback error.
    pub fn missing_fallback(collection: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::MissingFallback {
            collection: collection.into(),
            fallback: fallback.into(),
        }
    }

    /// Create an unknown-subset-icon error.
    pub fn unknown_subset_icon(name: impl Into<String>) -> Self {
        Self::UnknownSubsetIcon { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_icon_names_both_collections() {
        let err = Error::duplicate_icon("alert-circle", "interface", "status");
        let message = err.to_string();
        assert!(message.contains("alert-circle"));
        assert!(message.contains("interface"));
        assert!(message.contains("status"));
    }

    #[test]
    fn errors_implement_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&Error::unknown_subset_icon("sparkles"));
    }
}
