//! A [`Color`] is an immutable sRGB value with 8-bit channels. Every other
//! notation (HSL, HSV, CMYK) is a view derived from the channels on demand.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{PaletteError, Result},
    math::{self, Channels},
    models::{Cmyk, Hsl, Hsv, Rgb},
    named, parse,
};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all derived channels are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all derived channels are stored as.
pub type Component = f64;

/// An immutable color with integer red, green and blue channels.
///
/// Operations never modify a color, they return a new one. Two colors are
/// equal when their channels are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// `#FFFFFF`, the target of tints.
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    /// `#000000`, the target of shades.
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    /// `#808080`, the target of tones.
    pub const GRAY: Color = Color::from_rgb(128, 128, 128);

    /// Create a color from its red, green and blue channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a `#RGB` or `#RRGGBB` hex string. The leading `#` is optional.
    /// ```rust
    /// use tintshade::Color;
    /// assert_eq!(Color::from_hex("#3366CC")?, Color::from_rgb(51, 102, 204));
    /// assert_eq!(Color::from_hex("36c")?, Color::from_rgb(51, 102, 204));
    /// # Ok::<(), tintshade::PaletteError>(())
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        parse::parse_hex(digits).ok_or_else(|| PaletteError::invalid_color(hex))
    }

    /// Look up a CSS named color such as `rebeccapurple`, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        named::lookup(name.trim())
            .map(Self::from)
            .ok_or_else(|| PaletteError::invalid_color(name))
    }

    /// The red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The channels as an unrounded [`Rgb`] view.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(
            Component::from(self.red),
            Component::from(self.green),
            Component::from(self.blue),
        )
    }

    /// The color in the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// The color in the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    /// The color in the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }

    /// Hue in degrees, `0` for grays.
    pub fn hue(&self) -> Component {
        self.to_hsl().hue
    }

    /// HSL saturation as a percentage.
    pub fn saturation_hsl(&self) -> Component {
        self.to_hsl().saturation
    }

    /// HSV saturation as a percentage.
    pub fn saturation_hsv(&self) -> Component {
        self.to_hsv().saturation
    }

    /// HSL lightness as a percentage.
    pub fn lightness(&self) -> Component {
        self.to_hsl().lightness
    }

    /// HSV value as a percentage.
    pub fn value(&self) -> Component {
        self.to_hsv().value
    }

    /// Cyan as a percentage.
    pub fn cyan(&self) -> Component {
        self.to_cmyk().cyan
    }

    /// Magenta as a percentage.
    pub fn magenta(&self) -> Component {
        self.to_cmyk().magenta
    }

    /// Yellow as a percentage.
    pub fn yellow(&self) -> Component {
        self.to_cmyk().yellow
    }

    /// Key (black) as a percentage.
    pub fn black(&self) -> Component {
        self.to_cmyk().black
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn luminosity(&self) -> Component {
        self.to_rgb().luminosity()
    }

    /// Uppercase `#RRGGBB` representation.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Blend this color with `other`. Each channel becomes
    /// `self * (1 - weight) + other * weight`, rounded and clamped to
    /// `0..=255`. A weight outside `[0, 1]` extrapolates.
    pub fn mix(&self, other: &Color, weight: Component) -> Color {
        let mixed = math::mix(self.channels(), other.channels(), weight);
        Rgb::new(mixed.x, mixed.y, mixed.z).into()
    }

    /// Return a color with the HSL lightness replaced, keeping hue and
    /// saturation. The lightness is clamped to `[0, 100]`.
    pub fn with_lightness(&self, lightness: Component) -> Color {
        let hsl = self.to_hsl();
        Hsl::new(hsl.hue, hsl.saturation, lightness).into()
    }

    /// Return a color with the HSL saturation replaced, keeping hue and
    /// lightness. The saturation is clamped to `[0, 100]`.
    pub fn with_saturation_hsl(&self, saturation: Component) -> Color {
        let hsl = self.to_hsl();
        Hsl::new(hsl.hue, saturation, hsl.lightness).into()
    }

    fn channels(&self) -> Channels {
        let rgb = self.to_rgb();
        Channels::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::from_rgb(
            math::to_channel(value.red),
            math::to_channel(value.green),
            math::to_channel(value.blue),
        )
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        value.to_rgb().into()
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Color::from_rgb(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::from_rgb(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> Self {
        [value.red, value.green, value.blue]
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<&str> for Color {
    type Error = PaletteError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}
