//! Model a color with the HSV notation.

use crate::color::Component;

tintshade_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue of the color in degrees.
        hue: Component,
        /// The saturation of the color as a percentage.
        saturation: Component,
        /// The value (brightness) of the color as a percentage.
        value: Component,
    }
}
