//! Basic geometry and color types.
//!
//! This module provides the fundamental types used throughout the drawing
//! system. Colors use straight (non-premultiplied) alpha: icon geometry is
//! composed long before any rasterizer sees it, and SVG expects straight
//! alpha in its attributes.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// Components are in the 0.0-1.0 range. Equality is exact component
/// equality, which is what the deterministic SVG writer and the snapshot
/// tests want; colors that should compare equal must be constructed the
/// same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000CC").
    ///
    /// The leading `#` is optional; six digits parse as opaque RGB, eight
    /// as RGBA. Returns `None` for any other length or non-hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let len = hex.len();

        if len != 6 && len != 8 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Format as an uppercase hex string.
    ///
    /// Opaque colors format as `#RRGGBB`; anything with alpha below 1.0
    /// gets the 8-digit `#RRGGBBAA` form. Components are clamped to the
    /// displayable range first.
    pub fn to_hex(&self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;

        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Color::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {hex:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip_preserves_channels() {
        let color = Color::from_hex("#4A90B8").unwrap();
        assert_eq!(color.to_hex(), "#4A90B8");
    }

    #[test]
    fn hex_accepts_lowercase_and_missing_hash() {
        let with_hash = Color::from_hex("#3a7bd5").unwrap();
        let bare = Color::from_hex("3A7BD5").unwrap();
        assert_eq!(with_hash, bare);
        assert_eq!(bare.to_hex(), "#3A7BD5");
    }

    #[test]
    fn eight_digit_hex_carries_alpha() {
        let color = Color::from_hex("#FF000080").unwrap();
        assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.to_hex(), "#FF000080");
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
        assert!(Color::from_hex("#12345").is_none());
    }

    #[test]
    fn with_alpha_leaves_rgb_untouched() {
        let faded = Color::from_rgb8(74, 144, 184).with_alpha(0.5);
        assert_eq!(faded.r, 74.0 / 255.0);
        assert_eq!(faded.a, 0.5);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Color::from_hex("#4A90B8").unwrap();
        let b = Color::from_hex("#F2C14E").unwrap();
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
