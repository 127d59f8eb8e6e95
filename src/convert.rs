//! Conversions between the RGB channels of a color and the other notations.
//!
//! RGB channels are in `0..=255`; hue is in degrees; every other channel is a
//! percentage. Hue is `0` for achromatic colors, where it is powerless.

use crate::{
    color::Component,
    math::Channels,
    models::{Cmyk, Hsl, Hsv, Rgb},
};

impl Rgb {
    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let unit = self.map(|v| v / 255.0);
        util::rgb_to_hsl(unit.red, unit.green, unit.blue).into()
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let unit = self.map(|v| v / 255.0);
        util::rgb_to_hsv(unit.red, unit.green, unit.blue).into()
    }

    /// Convert to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        let unit = self.map(|v| v / 255.0);
        util::rgb_to_cmyk(unit.red, unit.green, unit.blue).into()
    }

    /// Relative luminance as defined by WCAG, in `[0, 1]`.
    /// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    pub fn luminosity(&self) -> Component {
        let linear = self.map(|v| util::to_linear_light(v / 255.0));
        Channels::new(linear.red, linear.green, linear.blue).dot(Channels::new(
            0.2126, 0.7152, 0.0722,
        ))
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB channels. Out of range
    /// channels are clamped first.
    pub fn to_rgb(&self) -> Rgb {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.clamped();
        util::hsl_to_rgb(hue, saturation / 100.0, lightness / 100.0)
            .map(|v| v * 255.0)
    }
}

mod util {
    use crate::{
        color::Component,
        math::{almost_zero, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values.
    fn hue_with_min_max(red: Component, green: Component, blue: Component) -> [Component; 3] {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if almost_zero(delta) {
            0.0
        } else {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        };

        [normalize_hue(hue), min, max]
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(red: Component, green: Component, blue: Component) -> [Component; 3] {
        let [hue, min, max] = hue_with_min_max(red, green, blue);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        [hue, saturation * 100.0, lightness * 100.0]
    }

    /// Convert from HSL notation to RGB notation, all in unit range except
    /// the hue.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> crate::models::Rgb {
        if saturation <= 0.0 {
            return [lightness, lightness, lightness].into();
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        [f!(0.0), f!(8.0), f!(4.0)].into()
    }

    pub fn rgb_to_hsv(red: Component, green: Component, blue: Component) -> [Component; 3] {
        let [hue, min, max] = hue_with_min_max(red, green, blue);

        let saturation = if almost_zero(max) {
            0.0
        } else {
            (max - min) / max
        };

        [hue, saturation * 100.0, max * 100.0]
    }

    pub fn rgb_to_cmyk(red: Component, green: Component, blue: Component) -> [Component; 4] {
        let black = 1.0 - red.max(green).max(blue);

        if almost_zero(1.0 - black) {
            return [0.0, 0.0, 0.0, 100.0];
        }

        let ink = |v: Component| (1.0 - v - black) / (1.0 - black) * 100.0;

        [ink(red), ink(green), ink(blue), black * 100.0]
    }

    /// Remove the sRGB transfer function from a unit channel.
    pub fn to_linear_light(value: Component) -> Component {
        let abs = value.abs();

        if abs <= 0.04045 {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    }
}
