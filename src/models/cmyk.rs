//! Model a color with the naive CMYK notation.

use crate::color::Component;

tintshade_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black)
    /// percentages. This is the device independent formula, no ink profile
    /// is involved.
    pub struct Cmyk {
        /// The cyan channel as a percentage.
        cyan: Component,
        /// The magenta channel as a percentage.
        magenta: Component,
        /// The yellow channel as a percentage.
        yellow: Component,
        /// The key (black) channel as a percentage.
        black: Component,
    }
}
