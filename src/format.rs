//! Render the channels of a [`Color`] as the fixed strings a color card
//! displays.

use bitflags::bitflags;

use crate::color::{Color, Component};

fn whole(value: Component) -> i64 {
    value.round() as i64
}

/// `"RGB: {r} {g} {b}"`
pub fn format_rgb(color: &Color) -> String {
    format!("RGB: {} {} {}", color.red(), color.green(), color.blue())
}

/// `"CMYK: {c}/{m}/{y}/{k}"` with integer percentages.
pub fn format_cmyk(color: &Color) -> String {
    let cmyk = color.to_cmyk();
    format!(
        "CMYK: {}/{}/{}/{}",
        whole(cmyk.cyan),
        whole(cmyk.magenta),
        whole(cmyk.yellow),
        whole(cmyk.black)
    )
}

/// `"HSL: {h}° {s}% {l}%"` with integer degrees and percentages.
pub fn format_hsl(color: &Color) -> String {
    let hsl = color.to_hsl();
    format!(
        "HSL: {}° {}% {}%",
        whole(hsl.hue),
        whole(hsl.saturation),
        whole(hsl.lightness)
    )
}

/// `"HSV: {h}° {s}% {l}%"` with integer degrees and percentages.
///
/// The last figure is the HSL lightness, not the HSV value.
pub fn format_hsv(color: &Color) -> String {
    format!(
        "HSV: {}° {}% {}%",
        whole(color.hue()),
        whole(color.saturation_hsv()),
        whole(color.lightness())
    )
}

/// `"Luminance: {value}"`, the relative luminance rounded half up to four
/// decimals and printed without trailing zeros: `1`, `0.5`, `0.2126`.
pub fn format_luminance(color: &Color) -> String {
    let luminance = f64::from(color.luminosity());
    let rounded = ((luminance + f64::EPSILON) * 10_000.0).round() / 10_000.0;
    format!("Luminance: {}", rounded)
}

bitflags! {
    /// Selects which lines [`describe`] renders.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Formats : u8 {
        /// [`format_rgb`]
        const RGB = 1 << 0;
        /// [`format_cmyk`]
        const CMYK = 1 << 1;
        /// [`format_hsl`]
        const HSL = 1 << 2;
        /// [`format_hsv`]
        const HSV = 1 << 3;
        /// [`format_luminance`]
        const LUMINANCE = 1 << 4;
    }
}

impl Default for Formats {
    fn default() -> Self {
        Self::all()
    }
}

/// Render the selected formats of `color`, one line each, always in the
/// order RGB, CMYK, HSL, HSV, luminance.
pub fn describe(color: &Color, formats: Formats) -> Vec<String> {
    const RENDERERS: [(Formats, fn(&Color) -> String); 5] = [
        (Formats::RGB, format_rgb),
        (Formats::CMYK, format_cmyk),
        (Formats::HSL, format_hsl),
        (Formats::HSV, format_hsv),
        (Formats::LUMINANCE, format_luminance),
    ];

    RENDERERS
        .iter()
        .filter(|(flag, _)| formats.contains(*flag))
        .map(|(_, render)| render(color))
        .collect()
}
