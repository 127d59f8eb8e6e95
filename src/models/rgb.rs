//! Model a color with unrounded red, green and blue channels.

use crate::color::Component;

tintshade_macros::gen_model! {
    /// A color with red, green and blue channels in `0..=255`.
    ///
    /// Channels are not rounded, so this is where blending happens before a
    /// [`Color`](crate::Color) is built from the result.
    pub struct Rgb {
        /// The red channel.
        red: Component,
        /// The green channel.
        green: Component,
        /// The blue channel.
        blue: Component,
    }
}
