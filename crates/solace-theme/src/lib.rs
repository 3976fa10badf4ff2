//! Therapeutic color palettes and cascading resolution for Solace icons.
//!
//! This crate owns everything between "the app wants a heart icon in the
//! nurturing theme" and "this exact color, filled or stroked". It has three
//! layers:
//!
//! - **Palettes** ([`ShadeScale`], [`ThemeColors`], [`ThemeContext`]): the
//!   six therapeutic scales plus the shared primary scale, supplied by the
//!   host and never mutated here. [`ThemeContext::standard`] is the
//!   application's built-in palette set.
//! - **Resolution** ([`resolve_color`]): the cascade that picks one color
//!   per request - explicit color, then the theme's scale, then primary,
//!   then a hard-coded fallback. Total; a sparse or empty context degrades
//!   instead of failing.
//! - **Composition** ([`compose`], [`ResolvedProps`]): turns the resolved
//!   color plus a [`Variant`] into the fill/stroke pair a renderer draws
//!   with.
//!
//! ```
//! use solace_theme::{resolve_color, ThemeContext, TherapeuticTheme};
//!
//! let ctx = ThemeContext::standard();
//! let calm = resolve_color(None, Some(TherapeuticTheme::Calming), &ctx);
//! assert_eq!(calm.to_hex(), "#4A90B8");
//! ```

mod context;
mod palette;
mod palettes;
mod resolver;
mod therapeutic;
mod tokens;
mod variant;

// Palette model
pub use context::{TextColors, ThemeColors, ThemeContext};
pub use palette::ShadeScale;
pub use therapeutic::TherapeuticTheme;

// Resolution and composition
pub use resolver::{resolve_color, FALLBACK_COLOR};
pub use variant::{compose, PaintPair, ResolvedProps, Variant};

// Design tokens
pub use tokens::{IconSize, DEFAULT_STROKE_WIDTH};
