//! Model a color in the gamma encoded sRGB color space.

use crate::color::{Color, Component};
use crate::convert::{denormalize, normalize};

trichrome_macros::gen_channels! {
    /// A color specified in the sRGB color space, with each component in
    /// `0..=1`.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Rgb {
    /// Convert back to an 8-bit [`Color`], truncating each component.
    pub fn to_color(&self) -> Color {
        Color::clamped(
            denormalize(self.red),
            denormalize(self.green),
            denormalize(self.blue),
        )
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        let [red, green, blue] = value.to_channels().map(normalize);
        Self::new(red, green, blue)
    }
}
