//! Icon collections and the aggregated registry.
//!
//! Icons are authored in collections (one module per domain under
//! [`crate::collections`]) and folded into a flat [`IconRegistry`] at
//! startup. Folding is strict: a name defined by two collections is a
//! build error unless the override was declared up front, so accidental
//! shadowing cannot ship. The shipped registry is [`builtin`], built once
//! behind a `OnceLock` and shared for the life of the process.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use solace_theme::{ResolvedProps, TherapeuticTheme};
use solace_vector::DrawingTree;

use crate::category::IconCategory;
use crate::collections;
use crate::error::{Error, Result};
use crate::name::IconName;

/// A pure renderer: resolved props in, drawing tree out.
///
/// Plain `fn` pointers rather than closures: renderers capture nothing,
/// which keeps every registry `Send + Sync` for free and makes subset
/// projection a pointer copy.
pub type IconRenderer = fn(&ResolvedProps) -> DrawingTree;

/// One icon: its name and its renderer.
#[derive(Debug, Clone)]
pub struct IconDef {
    name: IconName,
    renderer: IconRenderer,
}

impl IconDef {
    /// Create a definition.
    pub fn new(name: impl Into<IconName>, renderer: IconRenderer) -> Self {
        Self {
            name: name.into(),
            renderer,
        }
    }

    /// The icon's name.
    pub fn name(&self) -> &IconName {
        &self.name
    }

    /// Invoke the renderer.
    pub fn render(&self, props: &ResolvedProps) -> DrawingTree {
        (self.renderer)(props)
    }

    /// The renderer function itself.
    pub fn renderer(&self) -> IconRenderer {
        self.renderer
    }
}

/// An ordered, named set of icons with collection-level metadata.
#[derive(Debug, Clone)]
pub struct Collection {
    id: String,
    category: IconCategory,
    default_theme: TherapeuticTheme,
    fallback: IconName,
    icons: Vec<IconDef>,
    index: HashMap<String, usize>,
}

impl Collection {
    /// Start building a collection.
    pub fn builder(id: impl Into<String>, category: IconCategory) -> CollectionBuilder {
        CollectionBuilder {
            id: id.into(),
            category,
            default_theme: None,
            fallback: None,
            icons: Vec::new(),
        }
    }

    /// The collection id (kebab-case).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The category every member belongs to.
    pub fn category(&self) -> IconCategory {
        self.category
    }

    /// The therapeutic theme this collection's screens default to.
    pub fn default_theme(&self) -> TherapeuticTheme {
        self.default_theme
    }

    /// The collection-local fallback glyph. Always a member.
    pub fn fallback(&self) -> &IconName {
        &self.fallback
    }

    /// Number of icons in the collection.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Collections are never empty once built.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Look up a member by name.
    pub fn get(&self, name: &IconName) -> Option<&IconDef> {
        self.index.get(name.as_str()).map(|&i| &self.icons[i])
    }

    /// Look up a member, falling back to the collection's own fallback
    /// glyph for names it does not recognize.
    ///
    /// This is collection-local behavior: the aggregated registry reports
    /// unknown names as `None` and leaves substitution to the front door.
    pub fn lookup_or_fallback(&self, name: &IconName) -> &IconDef {
        self.get(name).unwrap_or_else(|| {
            self.get(&self.fallback)
                .expect("collection fallback is validated at build time")
        })
    }

    /// Iterate members in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &IconDef> {
        self.icons.iter()
    }

    /// Member names in authored order.
    pub fn names(&self) -> impl Iterator<Item = &IconName> {
        self.icons.iter().map(|def| def.name())
    }
}

/// Builder for [`Collection`].
#[derive(Debug)]
pub struct CollectionBuilder {
    id: String,
    category: IconCategory,
    default_theme: Option<TherapeuticTheme>,
    fallback: Option<IconName>,
    icons: Vec<IconDef>,
}

impl CollectionBuilder {
    /// Set the therapeutic theme the collection's screens default to.
    pub fn default_theme(mut self, theme: TherapeuticTheme) -> Self {
        self.default_theme = Some(theme);
        self
    }

    /// Name the collection-local fallback glyph.
    pub fn fallback(mut self, name: impl Into<IconName>) -> Self {
        self.fallback = Some(name.into());
        self
    }

    /// Add an icon.
    pub fn icon(mut self, name: impl Into<IconName>, renderer: IconRenderer) -> Self {
        self.icons.push(IconDef::new(name, renderer));
        self
    }

    /// Validate and build the collection.
    ///
    /// Fails on an empty collection, an ill-formed member name, a
    /// duplicate member name, or a fallback that is not a member.
    pub fn build(self) -> Result<Collection> {
        if self.icons.is_empty() {
            return Err(Error::EmptyCollection {
                collection: self.id,
            });
        }

        let mut index = HashMap::with_capacity(self.icons.len());
        for (i, def) in self.icons.iter().enumerate() {
            if !def.name().is_well_formed() {
                return Err(Error::ill_formed_name(def.name().as_str(), &self.id));
            }
            if index.insert(def.name().as_str().to_owned(), i).is_some() {
                return Err(Error::duplicate_icon(def.name().as_str(), &self.id, &self.id));
            }
        }

        let fallback = self
            .fallback
            .unwrap_or_else(|| self.icons[0].name().clone());
        if !index.contains_key(fallback.as_str()) {
            return Err(Error::missing_fallback(&self.id, fallback.as_str()));
        }

        Ok(Collection {
            id: self.id,
            category: self.category,
            default_theme: self.default_theme.unwrap_or(TherapeuticTheme::Calming),
            fallback,
            icons: self.icons,
            index,
        })
    }
}

/// One aggregated entry: the definition plus where it came from.
#[derive(Debug, Clone)]
pub(crate) struct RegistryEntry {
    pub(crate) def: IconDef,
    pub(crate) category: IconCategory,
    pub(crate) theme: TherapeuticTheme,
    collection: String,
}

/// Builder for [`IconRegistry`].
///
/// Collections fold in the order they are added. A name defined by two
/// collections is an error unless declared via
/// [`allow_override`](Self::allow_override), in which case the later
/// collection's definition wins and the override is logged.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    collections: Vec<Collection>,
    overrides: HashSet<String>,
}

impl RegistryBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection. Order matters: later collections win declared
    /// overrides.
    pub fn collection(mut self, collection: Collection) -> Self {
        self.collections.push(collection);
        self
    }

    /// Declare that `name` is expected to collide, keeping the later
    /// collection's definition.
    pub fn allow_override(mut self, name: impl Into<String>) -> Self {
        self.overrides.insert(name.into());
        self
    }

    /// Fold the collections into a registry.
    pub fn build(self) -> Result<IconRegistry> {
        let mut entries: HashMap<String, RegistryEntry> = HashMap::new();
        let mut used_overrides: HashSet<String> = HashSet::new();

        for collection in &self.collections {
            for def in collection.iter() {
                let key = def.name().as_str().to_owned();
                if let Some(existing) = entries.get(&key) {
                    if !self.overrides.contains(&key) {
                        return Err(Error::duplicate_icon(
                            key,
                            existing.collection.clone(),
                            collection.id(),
                        ));
                    }
                    tracing::debug!(
                        target: "solace::registry",
                        icon = %def.name(),
                        kept = collection.id(),
                        replaced = existing.collection.as_str(),
                        "declared override applied"
                    );
                    used_overrides.insert(key.clone());
                }
                entries.insert(
                    key,
                    RegistryEntry {
                        def: def.clone(),
                        category: collection.category(),
                        theme: collection.default_theme(),
                        collection: collection.id().to_owned(),
                    },
                );
            }
        }

        if let Some(unused) = self
            .overrides
            .iter()
            .find(|name| !used_overrides.contains(*name))
        {
            return Err(Error::UnusedOverride {
                name: unused.clone(),
            });
        }

        let mut by_category: BTreeMap<IconCategory, Vec<IconName>> = BTreeMap::new();
        for entry in entries.values() {
            by_category
                .entry(entry.category)
                .or_default()
                .push(entry.def.name().clone());
        }
        for names in by_category.values_mut() {
            names.sort();
        }

        tracing::debug!(
            target: "solace::registry",
            collections = self.collections.len(),
            icons = entries.len(),
            "icon registry built"
        );

        Ok(IconRegistry {
            entries,
            by_category,
        })
    }
}

/// The aggregated flat icon registry.
///
/// Write-once, read-many: built by [`RegistryBuilder`], then only ever
/// queried. Unknown names are a normal outcome (`None`), never an error.
#[derive(Debug)]
pub struct IconRegistry {
    entries: HashMap<String, RegistryEntry>,
    by_category: BTreeMap<IconCategory, Vec<IconName>>,
}

impl IconRegistry {
    /// Look up an icon definition by name.
    pub fn resolve(&self, name: &IconName) -> Option<&IconDef> {
        self.entries.get(name.as_str()).map(|entry| &entry.def)
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &IconName) -> bool {
        self.entries.contains_key(name.as_str())
    }

    /// Number of registered icons.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A registry built from the built-in collections is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<IconName> {
        let mut names: Vec<IconName> = self
            .entries
            .values()
            .map(|entry| entry.def.name().clone())
            .collect();
        names.sort();
        names
    }

    /// The category of a registered icon.
    pub fn category_of(&self, name: &IconName) -> Option<IconCategory> {
        self.entries.get(name.as_str()).map(|entry| entry.category)
    }

    /// The therapeutic theme suggested by the icon's collection.
    pub fn suggested_theme(&self, name: &IconName) -> Option<TherapeuticTheme> {
        self.entries.get(name.as_str()).map(|entry| entry.theme)
    }

    /// Sorted names in one category.
    pub fn names_in_category(&self, category: IconCategory) -> &[IconName] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn entry(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }
}

/// The application's built-in registry: all eight collections, with the
/// one declared override (`alert-circle`; the status collection's heavier
/// glyph replaces the interface one).
///
/// Built on first use and shared for the life of the process. The
/// interface collection's losing definition stays reachable through
/// [`collections::interface::collection`].
pub fn builtin() -> &'static IconRegistry {
    static REGISTRY: OnceLock<IconRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        RegistryBuilder::new()
            .collection(collections::health::collection())
            .collection(collections::interface::collection())
            .collection(collections::navigation::collection())
            .collection(collections::charts::collection())
            .collection(collections::communication::collection())
            .collection(collections::status::collection())
            .collection(collections::mindfulness::collection())
            .collection(collections::arrows::collection())
            .allow_override(IconName::ALERT_CIRCLE)
            .build()
            .expect("built-in collections are statically consistent")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::IconSheet;

    fn blank(props: &ResolvedProps) -> DrawingTree {
        IconSheet::new(props).build()
    }

    fn round(props: &ResolvedProps) -> DrawingTree {
        IconSheet::new(props).circle(12.0, 12.0, 10.0).build()
    }

    fn collection_a() -> Collection {
        Collection::builder("a", IconCategory::Interface)
            .default_theme(TherapeuticTheme::Peaceful)
            .fallback("one")
            .icon("one", blank)
            .icon("two", round)
            .build()
            .unwrap()
    }

    fn collection_b() -> Collection {
        Collection::builder("b", IconCategory::Status)
            .default_theme(TherapeuticTheme::Energizing)
            .fallback("three")
            .icon("three", blank)
            .icon("two", round)
            .build()
            .unwrap()
    }

    #[test]
    fn collection_rejects_duplicates_within_itself() {
        let err = Collection::builder("dup", IconCategory::Health)
            .fallback("one")
            .icon("one", blank)
            .icon("one", round)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateIcon { .. }));
    }

    #[test]
    fn collection_rejects_ill_formed_names() {
        let err = Collection::builder("bad", IconCategory::Health)
            .icon("Not-Kebab", blank)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::IllFormedName { .. }));
    }

    #[test]
    fn collection_rejects_non_member_fallback() {
        let err = Collection::builder("nofb", IconCategory::Health)
            .fallback("absent")
            .icon("present", blank)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingFallback { .. }));
    }

    #[test]
    fn collection_falls_back_locally_for_unknown_names() {
        let c = collection_a();
        let def = c.lookup_or_fallback(&IconName::new("missing"));
        assert_eq!(def.name().as_str(), "one");
    }

    #[test]
    fn undeclared_collision_fails_the_build() {
        let err = RegistryBuilder::new()
            .collection(collection_a())
            .collection(collection_b())
            .build()
            .unwrap_err();

        match err {
            Error::DuplicateIcon {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "two");
                assert_eq!(first, "a");
                assert_eq!(second, "b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn declared_override_keeps_the_later_collection() {
        let registry = RegistryBuilder::new()
            .collection(collection_a())
            .collection(collection_b())
            .allow_override("two")
            .build()
            .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.category_of(&IconName::new("two")),
            Some(IconCategory::Status)
        );
        assert_eq!(
            registry.suggested_theme(&IconName::new("two")),
            Some(TherapeuticTheme::Energizing)
        );
    }

    #[test]
    fn unused_override_fails_the_build() {
        let err = RegistryBuilder::new()
            .collection(collection_a())
            .allow_override("never-collides")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::UnusedOverride { .. }));
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        let registry = RegistryBuilder::new().collection(collection_a()).build().unwrap();
        assert!(registry.resolve(&IconName::new("missing")).is_none());
        assert!(!registry.contains(&IconName::new("missing")));
    }

    #[test]
    fn names_are_sorted() {
        let registry = RegistryBuilder::new()
            .collection(collection_a())
            .collection(collection_b())
            .allow_override("two")
            .build()
            .unwrap();

        let names: Vec<String> = registry.names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, ["one", "three", "two"]);
    }
}
