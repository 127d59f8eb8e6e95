//! Model a color with the HSL notation.

use crate::color::Component;

tintshade_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue of the color in degrees.
        hue: Component,
        /// The saturation of the color as a percentage.
        saturation: Component,
        /// The lightness of the color as a percentage.
        lightness: Component,
    }
}

impl Hsl {
    /// Return a copy with the hue brought into `[0, 360)` and saturation and
    /// lightness clamped to `[0, 100]`.
    pub fn clamped(&self) -> Self {
        Self::new(
            crate::math::normalize_hue(self.hue),
            self.saturation.clamp(0.0, 100.0),
            self.lightness.clamp(0.0, 100.0),
        )
    }
}
