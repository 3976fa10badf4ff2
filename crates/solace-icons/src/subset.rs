//! Optimized subset registries.
//!
//! Size-sensitive surfaces (home-screen widgets, watch faces, the
//! notification renderer) do not want the full registry behind them. A
//! [`SubsetRegistry`] is a mechanical projection of a source registry onto
//! a declared allow-list: the entries are the source's own, so the subset
//! cannot drift from the full set - rename or remove an icon and the
//! projection fails at build time instead of shipping a stale copy.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::name::IconName;
use crate::registry::{builtin, IconDef, IconRegistry, RegistryEntry};

/// The curated allow-list for the shipped subset: the icons observed in
/// use by the application's reduced surfaces, plus the global fallback
/// glyph so degraded lookups stay renderable.
pub const CORE_ICONS: [&str; 20] = [
    "heart",
    "brain",
    "meditation",
    "lotus",
    "activity",
    "home",
    "settings",
    "search",
    "close",
    "check",
    "plus",
    "user",
    "calendar",
    "bell",
    "alert-circle",
    "check-circle",
    "help-circle",
    "arrow-left",
    "arrow-right",
    "chevron-down",
];

/// A projection of an [`IconRegistry`] onto an allow-list of names.
#[derive(Debug)]
pub struct SubsetRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl SubsetRegistry {
    /// Project `names` out of `source`.
    ///
    /// Every name must exist in the source registry; an unknown name is
    /// [`Error::UnknownSubsetIcon`]. Duplicate allow-list entries collapse
    /// harmlessly.
    pub fn project<I, S>(source: &IconRegistry, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let entry = source
                .entry(name)
                .ok_or_else(|| Error::unknown_subset_icon(name))?;
            entries.insert(name.to_owned(), entry.clone());
        }

        tracing::debug!(
            target: "solace::subset",
            icons = entries.len(),
            "subset registry projected"
        );

        Ok(Self { entries })
    }

    /// Look up an icon definition by name.
    ///
    /// Unknown names log a warning and return `None`; reduced surfaces
    /// run unattended, so a missing icon should be loud in logs without
    /// taking the surface down.
    pub fn resolve(&self, name: &IconName) -> Option<&IconDef> {
        match self.entries.get(name.as_str()) {
            Some(entry) => Some(&entry.def),
            None => {
                tracing::warn!(
                    target: "solace::subset",
                    icon = %name,
                    "icon not in subset"
                );
                None
            }
        }
    }

    /// Check membership without logging.
    pub fn is_available(&self, name: &IconName) -> bool {
        self.entries.contains_key(name.as_str())
    }

    /// All subset names, sorted.
    pub fn list_available(&self) -> Vec<IconName> {
        let mut names: Vec<IconName> = self
            .entries
            .values()
            .map(|entry| entry.def.name().clone())
            .collect();
        names.sort();
        names
    }

    /// Number of icons in the subset.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A projected subset can be empty if the allow-list was.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The shipped subset: [`CORE_ICONS`] projected from [`builtin`].
pub fn core() -> &'static SubsetRegistry {
    static CORE: OnceLock<SubsetRegistry> = OnceLock::new();
    CORE.get_or_init(|| {
        SubsetRegistry::project(builtin(), CORE_ICONS)
            .expect("core allow-list names built-in icons")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_subset_has_every_allow_listed_icon() {
        let subset = core();
        assert_eq!(subset.len(), CORE_ICONS.len());
        for name in CORE_ICONS {
            assert!(subset.is_available(&IconName::new(name)), "{name} missing");
        }
    }

    #[test]
    fn projection_rejects_unknown_names() {
        let err = SubsetRegistry::project(builtin(), ["heart", "definitely-not-an-icon"])
            .unwrap_err();
        match err {
            Error::UnknownSubsetIcon { name } => assert_eq!(name, "definitely-not-an-icon"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn subset_lookup_misses_names_outside_the_allow_list() {
        let subset = core();
        // In the full registry but not the core allow-list.
        assert!(subset.resolve(&IconName::new("mood-happy")).is_none());
        assert!(!subset.is_available(&IconName::new("mood-happy")));
    }

    #[test]
    fn subset_entries_are_the_source_entries() {
        let subset = core();
        let name = IconName::new(IconName::HEART);

        let from_subset = subset.resolve(&name).unwrap();
        let from_full = builtin().resolve(&name).unwrap();
        assert!(std::ptr::fn_addr_eq(
            from_subset.renderer(),
            from_full.renderer()
        ));
    }

    #[test]
    fn list_available_is_sorted() {
        let names = core().list_available();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), CORE_ICONS.len());
    }

    #[test]
    fn duplicate_allow_list_entries_collapse() {
        let subset = SubsetRegistry::project(builtin(), ["heart", "heart", "home"]).unwrap();
        assert_eq!(subset.len(), 2);
    }
}
