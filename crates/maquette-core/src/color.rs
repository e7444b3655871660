//! Color handling for maquette diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing the conversions the Graphviz attribute
//! surface needs (hex strings, light/dark contrast checks).

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
///
/// Used for builtin icon fills and the configurable diagram background.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use maquette_core::color::Color;
    ///
    /// let brand = Color::new("#336791").unwrap();
    /// let white = Color::new("white").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as a `#rrggbb` hex string.
    ///
    /// Graphviz accepts this form for every color-valued attribute, which is
    /// not true of the CSS functional notations `Display` may produce.
    ///
    /// # Examples
    ///
    /// ```
    /// use maquette_core::color::Color;
    ///
    /// let color = Color::new("#336791").unwrap();
    /// assert_eq!(color.to_hex(), "#336791");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.color.to_alpha_color::<Srgb>().components;
        format!(
            "#{:02x}{:02x}{:02x}",
            (r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (b.clamp(0.0, 1.0) * 255.0).round() as u8
        )
    }

    /// Whether this color is dark enough that overlaid text should be white.
    ///
    /// Uses the Rec. 601 luma approximation; fills below the midpoint count
    /// as dark.
    ///
    /// # Examples
    ///
    /// ```
    /// use maquette_core::color::Color;
    ///
    /// assert!(Color::new("black").unwrap().is_dark());
    /// assert!(!Color::new("white").unwrap().is_dark());
    /// ```
    pub fn is_dark(self) -> bool {
        let [r, g, b, _] = self.color.to_alpha_color::<Srgb>().components;
        0.299 * r + 0.587 * g + 0.114 * b < 0.5
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let brand = Color::new("#61dafb");
        assert!(brand.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_hex(), "#000000");
    }

    #[test]
    fn test_to_hex_round_trips_hex_input() {
        let color = Color::new("#24292e").unwrap();
        assert_eq!(color.to_hex(), "#24292e");
    }

    #[test]
    fn test_to_hex_named_color() {
        let color = Color::new("white").unwrap();
        assert_eq!(color.to_hex(), "#ffffff");
    }

    #[test]
    fn test_is_dark() {
        assert!(Color::new("#24292e").unwrap().is_dark());
        assert!(Color::new("#000000").unwrap().is_dark());
        assert!(!Color::new("#61dafb").unwrap().is_dark());
        assert!(!Color::new("#ffffff").unwrap().is_dark());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
