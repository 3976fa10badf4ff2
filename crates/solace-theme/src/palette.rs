//! Shade scales.

use std::collections::BTreeMap;

use solace_vector::Color;

/// An ordered map from numeric shade key to color.
///
/// Keys follow the familiar 50/100/…/900 convention, but nothing enforces
/// that set: scales may be sparse, and lookups for absent shades return
/// `None` rather than interpolating. The resolver knows which shades it
/// prefers and how to degrade.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadeScale {
    shades: BTreeMap<u16, Color>,
}

impl ShadeScale {
    /// Create an empty scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a shade, returning the scale for chaining.
    pub fn with(mut self, key: u16, color: Color) -> Self {
        self.shades.insert(key, color);
        self
    }

    /// Look up a shade by key.
    pub fn shade(&self, key: u16) -> Option<Color> {
        self.shades.get(&key).copied()
    }

    /// Check if the scale has no shades.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// Number of shades in the scale.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Iterate shades in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Color)> + '_ {
        self.shades.iter().map(|(k, c)| (*k, *c))
    }
}
