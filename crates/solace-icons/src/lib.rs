//! Programmatic icon registry and renderer for the Solace app.
//!
//! Every icon in the app is a small pure function that draws vector
//! geometry on a 24-unit grid; this crate aggregates those functions into
//! a queryable registry and exposes the render call the UI layer uses.
//!
//! # Rendering an icon
//!
//! ```
//! use solace_icons::{render, IconRequest};
//! use solace_theme::{ThemeContext, TherapeuticTheme, Variant};
//!
//! let icon = render(
//!     &IconRequest::new("heart")
//!         .with_theme(TherapeuticTheme::Nurturing)
//!         .with_variant(Variant::Filled),
//!     &ThemeContext::standard(),
//! );
//!
//! assert_eq!(icon.test_id, "health-icon-heart");
//! let svg = icon.to_svg();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Registries
//!
//! [`builtin`] is the shipped registry: eight collections folded together
//! at first use, with collisions rejected at build time unless they were
//! declared. [`subset::core`] is the reduced registry for size-sensitive
//! surfaces, projected mechanically from the full one so the two cannot
//! drift.
//!
//! # Failure policy
//!
//! Lookups return `Option`; rendering is total. Unknown names fall back
//! to the `help-circle` glyph with a `tracing` warning under the
//! `solace::icon` target. The only errors in this crate happen at
//! registry build time.

pub mod accessibility;
pub mod collections;
pub mod subset;

mod category;
mod error;
mod icon;
mod name;
mod registry;
mod sheet;

// Registry API
pub use error::{Error, Result};
pub use registry::{
    builtin, Collection, CollectionBuilder, IconDef, IconRegistry, IconRenderer, RegistryBuilder,
};

// Icon identity
pub use category::IconCategory;
pub use name::IconName;

// Rendering front door
pub use icon::{render, render_with, IconRequest, RenderedIcon, FALLBACK_ICON};
pub use sheet::{IconSheet, ICON_GRID};

// Re-exports for call sites that only pull in this crate
pub use solace_theme;
pub use solace_vector;

/// Commonly used items for application code.
pub mod prelude {
    pub use crate::accessibility::{validate, AccessibilityWarning, MIN_TOUCH_TARGET};
    pub use crate::subset::{core, SubsetRegistry, CORE_ICONS};
    pub use crate::{
        builtin, render, render_with, IconCategory, IconName, IconRequest, RenderedIcon,
    };
    pub use solace_theme::{
        IconSize, ThemeContext, TherapeuticTheme, Variant, DEFAULT_STROKE_WIDTH,
    };
    pub use solace_vector::Color;
}
