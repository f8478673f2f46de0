//! Conversions between the color models. Conversions operate on normalized
//! components and are total: every result is clamped back into `0..=1`.
//!
//! ```rust
//! use trichrome::{Color, Rgb};
//! let rgb = Rgb::from(Color::new(100, 100, 200));
//! let back = rgb.to_cmyk().to_rgb().to_color();
//! assert!((back.blue as i32 - 200).abs() <= 1);
//! ```

use std::sync::LazyLock;

use crate::color::{clamp_channel, Component, CHANNEL_MAX};
use crate::math::{clamp_unit, transform, transform_3x3, Transform};
use crate::models::{Cmyk, Rgb, Xyz};

/// The power used to gamma encode and decode sRGB components.
pub const GAMMA: Component = 2.2;

/// Keeps the key ink away from 0 and 1, so the division when extracting
/// cyan, magenta and yellow is always defined.
pub const KEY_EPSILON: Component = 0.001;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static RGB_TO_XYZ: LazyLock<Transform> = LazyLock::new(|| transform_3x3([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]));

static XYZ_TO_RGB: LazyLock<Transform> = LazyLock::new(|| {
    RGB_TO_XYZ
        .inverse()
        .expect("the sRGB primaries matrix is invertible")
});

/// Convert a slider value to a normalized component.
pub fn normalize(value: i32) -> Component {
    clamp_channel(value) as Component / CHANNEL_MAX as Component
}

/// Convert a normalized component to a slider value. The result is truncated,
/// not rounded, so `0.999` maps to 254.
pub fn denormalize(value: Component) -> i32 {
    // Float to int casts saturate, and NaN becomes 0.
    clamp_channel((clamp_unit(value) * CHANNEL_MAX as Component) as i32)
}

impl Rgb {
    /// Decode the gamma of each component.
    pub fn to_linear_light(&self) -> Rgb {
        self.map(|v| v.max(0.0).powf(GAMMA))
    }

    /// Encode the gamma of each component.
    pub fn to_gamma_encoded(&self) -> Rgb {
        self.map(|v| v.max(0.0).powf(1.0 / GAMMA))
    }

    /// Convert to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        let linear = self.to_linear_light();
        Xyz::from(transform(&RGB_TO_XYZ, linear.to_array())).map(clamp_unit)
    }

    /// Convert to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        let Rgb { red, green, blue } = *self;

        let key = (1.0 - red.max(green).max(blue)).clamp(KEY_EPSILON, 1.0 - KEY_EPSILON);
        let ink = |v: Component| (1.0 - v - key) / (1.0 - key);

        Cmyk::new(ink(red), ink(green), ink(blue), key).map(clamp_unit)
    }
}

impl Xyz {
    /// Convert to gamma encoded sRGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from(transform(&XYZ_TO_RGB, self.to_array()))
            .map(clamp_unit)
            .to_gamma_encoded()
            .map(clamp_unit)
    }
}

impl Cmyk {
    /// Convert to gamma encoded sRGB.
    pub fn to_rgb(&self) -> Rgb {
        let Cmyk {
            cyan,
            magenta,
            yellow,
            key,
        } = *self;

        Rgb::new(
            (1.0 - cyan) * (1.0 - key),
            (1.0 - magenta) * (1.0 - key),
            (1.0 - yellow) * (1.0 - key),
        )
        .map(clamp_unit)
    }
}
