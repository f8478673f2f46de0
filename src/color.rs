//! The canonical [`Color`] exchanged between every color model.

use std::fmt;
use std::str::FromStr;

use crate::Error;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all normalized components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all normalized components are stored as.
pub type Component = f64;

/// The lowest value a slider channel can take.
pub const CHANNEL_MIN: i32 = 0;

/// The highest value a slider channel can take.
pub const CHANNEL_MAX: i32 = 255;

/// Clamp a raw channel value into `CHANNEL_MIN..=CHANNEL_MAX`.
pub fn clamp_channel(value: i32) -> i32 {
    value.clamp(CHANNEL_MIN, CHANNEL_MAX)
}

/// An 8-bit sRGB color. This is the single source of truth that is passed
/// between models; every other representation is derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red component of the color.
    pub red: u8,
    /// The green component of the color.
    pub green: u8,
    /// The blue component of the color.
    pub blue: u8,
}

impl Color {
    /// Create a new [`Color`] from 8-bit components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a new [`Color`] from wider integers. Values outside of
    /// `0..=255` are clamped, never rejected.
    /// ```rust
    /// use trichrome::Color;
    /// assert_eq!(Color::clamped(300, -10, 255), Color::new(255, 0, 255));
    /// ```
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        // Clamped into u8 range, the casts can not truncate.
        Self {
            red: clamp_channel(red) as u8,
            green: clamp_channel(green) as u8,
            blue: clamp_channel(blue) as u8,
        }
    }

    /// Create a new [`Color`] from slider values in channel order. Missing
    /// values are treated as 0.
    pub fn from_channels(values: &[i32]) -> Self {
        let value = |index: usize| values.get(index).copied().unwrap_or(0);
        Self::clamped(value(0), value(1), value(2))
    }

    /// Return the components as slider values in channel order.
    pub fn to_channels(&self) -> [i32; 3] {
        [self.red as i32, self.green as i32, self.blue as i32]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a `#rrggbb` or `rrggbb` hex string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_string()));
        }

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        };

        Ok(Self::new(component(0..2)?, component(2..4)?, component(4..6)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_components_are_clamped() {
        let c = Color::clamped(300, -10, 255);
        assert_eq!(c, Color::new(255, 0, 255));

        let c = Color::clamped(i32::MIN, i32::MAX, 128);
        assert_eq!(c, Color::new(0, 255, 128));
    }

    #[test]
    fn from_channels_fills_missing_values() {
        assert_eq!(Color::from_channels(&[1, 2, 3]), Color::new(1, 2, 3));
        assert_eq!(Color::from_channels(&[1]), Color::new(1, 0, 0));
        assert_eq!(Color::from_channels(&[-1, 256, 7, 99]), Color::new(0, 255, 7));
    }

    #[test]
    fn hex_strings() {
        let c: Color = "#6464c8".parse().unwrap();
        assert_eq!(c, Color::new(100, 100, 200));
        assert_eq!(c.to_string(), "#6464c8");

        let c: Color = "FF0080".parse().unwrap();
        assert_eq!(c, Color::new(255, 0, 128));

        assert!(matches!("#12345".parse::<Color>(), Err(Error::InvalidHex(_))));
        assert!(matches!("#gg0000".parse::<Color>(), Err(Error::InvalidHex(_))));
        assert!(matches!("#ééé".parse::<Color>(), Err(Error::InvalidHex(_))));
    }
}
