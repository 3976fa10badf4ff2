//! The built-in icon collections.
//!
//! One module per domain, each exporting `collection()`. Collections are
//! folded into the shipped registry by [`crate::builtin`]; they stay
//! individually reachable so tests and tooling can inspect a domain in
//! isolation (including the interface collection's `alert-circle`, which
//! loses the declared override in the aggregated registry).
//!
//! All glyphs are authored on the 24-unit grid with round caps and joins.
//! Renderers are plain `fn` items: pure, capture nothing, and read only
//! the resolved props they are handed.

pub mod arrows;
pub mod charts;
pub mod communication;
pub mod health;
pub mod interface;
pub mod mindfulness;
pub mod navigation;
pub mod status;
