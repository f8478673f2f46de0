//! Model a color with cyan, magenta, yellow and key (black) inks.

use crate::color::Component;

trichrome_macros::gen_channels! {
    /// A subtractive color with each ink coverage in `0..=1`.
    pub struct Cmyk {
        /// Cyan ink coverage.
        cyan: Component,
        /// Magenta ink coverage.
        magenta: Component,
        /// Yellow ink coverage.
        yellow: Component,
        /// Black ink coverage.
        key: Component,
    }
}
