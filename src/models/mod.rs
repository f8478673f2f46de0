//! Models are structs that hold the normalized components of a color in one
//! of the supported color models. Each model maps one-to-one onto a group of
//! sliders.

use bitflags::bitflags;

use crate::convert::{denormalize, normalize};
use crate::Component;

mod cmyk;
mod rgb;
mod xyz;

pub use cmyk::Cmyk;
pub use rgb::Rgb;
pub use xyz::Xyz;

/// Implemented by models that can be read from and written to a group of
/// sliders.
pub trait Channels: Sized {
    /// Human readable label for each channel, in channel order.
    const LABELS: &'static [&'static str];

    /// Return the normalized components in channel order.
    fn components(&self) -> Vec<Component>;

    /// Create a model from normalized components in channel order. Missing
    /// components are set to 0.
    fn from_components(components: &[Component]) -> Self;

    /// Convert the components to slider values, truncating to integers.
    fn to_slider_values(&self) -> Vec<i32> {
        self.components().into_iter().map(denormalize).collect()
    }

    /// Create a model from slider values.
    fn from_slider_values(values: &[i32]) -> Self {
        let components = values.iter().copied().map(normalize).collect::<Vec<_>>();
        Self::from_components(&components)
    }
}

/// The color models a slider group can represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Gamma encoded sRGB.
    Rgb,
    /// CIE-XYZ, derived from gamma decoded sRGB.
    Xyz,
    /// Cyan, magenta, yellow and key (black).
    Cmyk,
}

impl ColorModel {
    /// All the models, in the order they are usually presented.
    pub const ALL: [ColorModel; 3] = [ColorModel::Rgb, ColorModel::Xyz, ColorModel::Cmyk];

    /// The labels of the channels of this model.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            ColorModel::Rgb => Rgb::LABELS,
            ColorModel::Xyz => Xyz::LABELS,
            ColorModel::Cmyk => Cmyk::LABELS,
        }
    }

    /// The number of sliders needed to represent this model.
    pub fn channel_count(&self) -> usize {
        self.labels().len()
    }

    /// The flag representing this model in a [`Models`] set.
    pub fn flag(&self) -> Models {
        match self {
            ColorModel::Rgb => Models::RGB,
            ColorModel::Xyz => Models::XYZ,
            ColorModel::Cmyk => Models::CMYK,
        }
    }
}

bitflags! {
    /// A set of [`ColorModel`]s.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Models : u8 {
        /// Set when the RGB model is included.
        const RGB = 1 << 0;
        /// Set when the XYZ model is included.
        const XYZ = 1 << 1;
        /// Set when the CMYK model is included.
        const CMYK = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_field_order() {
        assert_eq!(ColorModel::Rgb.labels(), &["Red", "Green", "Blue"]);
        assert_eq!(ColorModel::Xyz.labels(), &["X", "Y", "Z"]);
        assert_eq!(ColorModel::Cmyk.labels(), &["Cyan", "Magenta", "Yellow", "Key"]);
    }

    #[test]
    fn channel_counts() {
        assert_eq!(ColorModel::Rgb.channel_count(), 3);
        assert_eq!(ColorModel::Xyz.channel_count(), 3);
        assert_eq!(ColorModel::Cmyk.channel_count(), 4);
    }

    #[test]
    fn flags() {
        let all = ColorModel::ALL
            .iter()
            .fold(Models::empty(), |set, model| set | model.flag());
        assert_eq!(all, Models::all());
    }

    #[test]
    fn slider_values_are_truncated() {
        let cmyk = Cmyk::new(0.5, 0.0, 1.0, 0.999);
        // 127.5 and 254.745 both truncate.
        assert_eq!(cmyk.to_slider_values(), vec![127, 0, 255, 254]);

        let back = Cmyk::from_slider_values(&[255, 0, 51]);
        assert_eq!(back, Cmyk::new(1.0, 0.0, 0.2, 0.0));
    }
}
