//! Model a color in the CIE-XYZ color space.

use crate::color::Component;

trichrome_macros::gen_channels! {
    /// A color in the CIE-XYZ color space, with each component clamped to
    /// `0..=1` so it can be shown on a slider.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y (luminance) component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}
