//! Generate ordered palettes of related colors from a single base color.
//!
//! ```rust
//! use tintshade::{Color, PaletteKind, PaletteOptions, PaletteRequest};
//!
//! let request = PaletteRequest::new(PaletteKind::Tints, Color::from_hex("#3366CC")?)
//!     .with_options(PaletteOptions {
//!         length: 3,
//!         increment: 0.25,
//!         ..Default::default()
//!     });
//! let palette = request.generate()?;
//! assert_eq!(palette.hex_strings(), ["#668CD9", "#99B3E6", "#CCD9F2"]);
//! # Ok::<(), tintshade::PaletteError>(())
//! ```

use std::{fmt, ops::Index, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    color::{Color, Component},
    error::{PaletteError, Result},
    math::lerp,
    select::SelectionSink,
};

/// The transformation applied to the base color at every step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteKind {
    /// Tints for the first half of the palette, shades for the second.
    TintsAndShades,
    /// The base mixed toward white.
    Tints,
    /// The base mixed toward black.
    Shades,
    /// The base mixed toward neutral gray.
    Tones,
    /// HSL lightness raised toward 100%, always relative to the base.
    Lighten,
    /// HSL lightness lowered, each step relative to the previous step.
    Darken,
    /// HSL saturation raised toward 100%, always relative to the base.
    Saturated,
    /// HSL saturation lowered, each step relative to the previous step.
    Desaturated,
}

impl PaletteKind {
    /// Every kind, in the order the tags are listed.
    pub const ALL: [PaletteKind; 8] = [
        PaletteKind::TintsAndShades,
        PaletteKind::Tints,
        PaletteKind::Shades,
        PaletteKind::Tones,
        PaletteKind::Lighten,
        PaletteKind::Darken,
        PaletteKind::Saturated,
        PaletteKind::Desaturated,
    ];

    /// The stable string tag of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteKind::TintsAndShades => "tintsAndShades",
            PaletteKind::Tints => "tints",
            PaletteKind::Shades => "shades",
            PaletteKind::Tones => "tones",
            PaletteKind::Lighten => "lighten",
            PaletteKind::Darken => "darken",
            PaletteKind::Saturated => "saturated",
            PaletteKind::Desaturated => "desaturated",
        }
    }

    /// Whether each step is derived from the previous step instead of from
    /// the base color.
    pub fn is_compounding(&self) -> bool {
        matches!(self, PaletteKind::Darken | PaletteKind::Desaturated)
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteKind {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        PaletteKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PaletteError::invalid_parameter("type", s))
    }
}

/// Tunable parameters of a palette. Every field has a default, so callers
/// only set what they need.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaletteOptions {
    /// Number of generated steps. Must be at least 1.
    pub length: usize,
    /// Weight added per step: step `i` uses `(i + 1) * increment`.
    pub increment: Component,
    /// Prepend the unmodified base color to the palette.
    pub include_base_color: bool,
    /// Reverse the finished palette, including the prepended base color.
    pub reversed: bool,
}

impl PaletteOptions {
    /// Steps generated when no length is given.
    pub const DEFAULT_LENGTH: usize = 10;
    /// Weight increment used when none is given.
    pub const DEFAULT_INCREMENT: Component = 0.1;

    /// Check the options before any color is computed.
    ///
    /// Increments that push a weight outside `[0, 1]` are accepted; the
    /// resulting channels are clamped instead.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0
            || self
                .length
                .checked_add(usize::from(self.include_base_color))
                .is_none()
        {
            return Err(PaletteError::invalid_parameter("length", self.length));
        }
        if !self.increment.is_finite() {
            return Err(PaletteError::invalid_parameter(
                "increment",
                self.increment,
            ));
        }
        Ok(())
    }

    /// Number of colors a palette built with these options holds.
    pub fn palette_len(&self) -> usize {
        self.length
            .saturating_add(usize::from(self.include_base_color))
    }

    /// The blend weight of step `index`.
    pub fn weight(&self, index: usize) -> Component {
        (index + 1) as Component * self.increment
    }
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            increment: Self::DEFAULT_INCREMENT,
            include_base_color: false,
            reversed: false,
        }
    }
}

/// Everything needed to generate a palette.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteRequest {
    /// The transformation to apply.
    #[serde(rename = "type")]
    pub kind: PaletteKind,
    /// The color every step is derived from.
    #[serde(rename = "baseColor")]
    pub base: Color,
    /// Length, increment and ordering.
    #[serde(flatten)]
    pub options: PaletteOptions,
}

impl PaletteRequest {
    /// Create a request with default options.
    pub fn new(kind: PaletteKind, base: Color) -> Self {
        Self {
            kind,
            base,
            options: PaletteOptions::default(),
        }
    }

    /// Replace the options of this request.
    pub fn with_options(self, options: PaletteOptions) -> Self {
        Self { options, ..self }
    }

    /// Generate the palette described by this request.
    pub fn generate(&self) -> Result<Palette> {
        generate(self)
    }
}

/// An ordered sequence of generated colors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The color at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.0.get(index)
    }

    /// Iterate over the colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.0.iter()
    }

    /// The colors as a slice.
    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// Take the colors out of the palette.
    pub fn into_vec(self) -> Vec<Color> {
        self.0
    }

    /// The `#RRGGBB` hex of every color, in order.
    pub fn hex_strings(&self) -> Vec<String> {
        self.0.iter().map(Color::to_hex).collect()
    }

    /// Report that the user picked the color at `index`: the sink receives
    /// its hex string. Returns the picked color, or `None` without calling
    /// the sink when the index is out of range.
    pub fn select(&self, index: usize, sink: &impl SelectionSink) -> Option<Color> {
        let color = *self.0.get(index)?;
        sink.on_select(&color.to_hex());
        Some(color)
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Palette> for Vec<Color> {
    fn from(value: Palette) -> Self {
        value.0
    }
}

/// Generate the palette for `request`.
///
/// The result is fully computed and depends on nothing but the request, so
/// calling this again with the same request returns the same palette.
///
/// Mixing kinds (`tints`, `shades`, `tones`, `tintsAndShades`) and the
/// `lighten` and `saturated` kinds derive every step from the base color.
/// `darken` and `desaturated` derive every step from the previous step, with
/// the first step derived from the base. When the base color is included it
/// is only prepended to the output; the chain still starts from the base.
pub fn generate(request: &PaletteRequest) -> Result<Palette> {
    let PaletteRequest {
        kind,
        base,
        options,
    } = *request;

    options.validate()?;

    log::debug!(
        "generating {} palette from {} (length {}, increment {}, include base {}, reversed {})",
        kind,
        base,
        options.length,
        options.increment,
        options.include_base_color,
        options.reversed
    );

    let mut colors = Vec::new();
    colors
        .try_reserve_exact(options.palette_len())
        .map_err(|_| PaletteError::invalid_parameter("length", options.length))?;
    if options.include_base_color {
        colors.push(base);
    }

    let base_lightness = base.lightness();
    let base_saturation = base.saturation_hsl();
    let half = options.length as Component / 2.0;

    let mut previous = base;
    for i in 0..options.length {
        let weight = options.weight(i);

        let color = match kind {
            PaletteKind::TintsAndShades => {
                if (i as Component) < half {
                    base.mix(&Color::WHITE, 0.5 - weight)
                } else {
                    base.mix(&Color::BLACK, weight - 0.5)
                }
            }
            PaletteKind::Tints => base.mix(&Color::WHITE, weight),
            PaletteKind::Shades => base.mix(&Color::BLACK, weight),
            PaletteKind::Tones => base.mix(&Color::GRAY, weight),
            PaletteKind::Lighten => base.with_lightness(lerp(base_lightness, 100.0, weight)),
            PaletteKind::Darken => previous.with_lightness(previous.lightness() * (1.0 - weight)),
            PaletteKind::Saturated => {
                base.with_saturation_hsl(lerp(base_saturation, 100.0, weight))
            }
            PaletteKind::Desaturated => {
                previous.with_saturation_hsl(previous.saturation_hsl() * (1.0 - weight))
            }
        };

        log::trace!("{} step {}: weight {} -> {}", kind, i, weight, color);

        colors.push(color);
        previous = color;
    }

    if options.reversed {
        colors.reverse();
    }

    Ok(Palette(colors))
}

/// Generate a palette from the string forms a presentation layer holds: a
/// kind tag such as `"tints"` and any color input [`Color`] parses.
///
/// Fails with [`PaletteError::InvalidParameter`] for an unknown tag and with
/// [`PaletteError::InvalidColorFormat`] for an unparseable base color.
pub fn generate_palette(kind: &str, base: &str, options: &PaletteOptions) -> Result<Palette> {
    let kind = kind.parse::<PaletteKind>()?;
    let base = base.parse::<Color>()?;
    generate(&PaletteRequest::new(kind, base).with_options(*options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    const BASE: Color = Color::from_rgb(0x33, 0x66, 0xCC);

    fn palette(kind: PaletteKind, options: PaletteOptions) -> Vec<Color> {
        PaletteRequest::new(kind, BASE)
            .with_options(options)
            .generate()
            .unwrap()
            .into_vec()
    }

    fn options(length: usize, increment: Component) -> PaletteOptions {
        PaletteOptions {
            length,
            increment,
            ..Default::default()
        }
    }

    #[test]
    fn kind_tags() {
        for kind in PaletteKind::ALL {
            assert_eq!(kind.as_str().parse::<PaletteKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert_eq!(
            "Tints".parse::<PaletteKind>(),
            Err(PaletteError::invalid_parameter("type", "Tints"))
        );
        assert!("".parse::<PaletteKind>().is_err());
        assert!(PaletteKind::Darken.is_compounding());
        assert!(!PaletteKind::Lighten.is_compounding());
    }

    #[test]
    fn default_options() {
        let options = PaletteOptions::default();
        assert_eq!(options.length, 10);
        assert_component_eq!(options.increment, 0.1);
        assert!(!options.include_base_color);
        assert!(!options.reversed);
        assert_eq!(palette(PaletteKind::Tints, options).len(), 10);
    }

    #[test]
    fn zero_length_is_rejected() {
        let request = PaletteRequest::new(PaletteKind::Shades, BASE).with_options(options(0, 0.1));
        assert_eq!(
            request.generate(),
            Err(PaletteError::invalid_parameter("length", 0))
        );
    }

    #[test]
    fn non_finite_increment_is_rejected() {
        for increment in [Component::NAN, Component::INFINITY] {
            let request =
                PaletteRequest::new(PaletteKind::Shades, BASE).with_options(options(3, increment));
            assert!(matches!(
                request.generate(),
                Err(PaletteError::InvalidParameter { ref parameter, .. }) if parameter == "increment"
            ));
        }
    }

    #[test]
    fn mixing_kinds_follow_their_targets() {
        let options = options(4, 0.2);
        for (kind, target) in [
            (PaletteKind::Tints, Color::WHITE),
            (PaletteKind::Shades, Color::BLACK),
            (PaletteKind::Tones, Color::GRAY),
        ] {
            let colors = palette(kind, options);
            for (i, color) in colors.iter().enumerate() {
                assert_eq!(*color, BASE.mix(&target, options.weight(i)), "{kind} {i}");
            }
        }
    }

    #[test]
    fn tints_and_shades_split_at_half_length() {
        let options = options(5, 0.1);
        let colors = palette(PaletteKind::TintsAndShades, options);
        assert_eq!(colors[0], BASE.mix(&Color::WHITE, 0.5 - options.weight(0)));
        assert_eq!(colors[1], BASE.mix(&Color::WHITE, 0.5 - options.weight(1)));
        assert_eq!(colors[2], BASE.mix(&Color::WHITE, 0.5 - options.weight(2)));
        assert_eq!(colors[3], BASE.mix(&Color::BLACK, options.weight(3) - 0.5));
        assert_eq!(colors[4], BASE);
    }

    #[test]
    fn tints_and_shades_split_at_half_even_length() {
        let options = PaletteOptions::default();
        let colors = palette(PaletteKind::TintsAndShades, options);
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[0], BASE.mix(&Color::WHITE, 0.5 - options.weight(0)));
        // Weight 0.5 lands exactly on the base.
        assert_eq!(colors[4], BASE);
        // First shade: 0.6 - 0.5 toward black.
        assert_eq!(colors[5], BASE.mix(&Color::BLACK, options.weight(5) - 0.5));
        assert_eq!(colors[5], Color::from_rgb(46, 92, 184));
        assert_eq!(colors[9], BASE.mix(&Color::BLACK, options.weight(9) - 0.5));
    }

    #[test]
    fn unallocatable_lengths_are_rejected() {
        for include_base_color in [true, false] {
            let request = PaletteRequest::new(PaletteKind::Tints, BASE).with_options(
                PaletteOptions {
                    length: usize::MAX,
                    include_base_color,
                    ..Default::default()
                },
            );
            assert_eq!(
                request.generate(),
                Err(PaletteError::invalid_parameter("length", usize::MAX))
            );
        }
    }

    #[test]
    fn rounding_at_half_channels_follows_component_precision() {
        // 255 * (1 - 7 * 0.1) sits on a .5 boundary: 76.5 in f32, just under
        // it in f64.
        let colors = PaletteRequest::new(PaletteKind::Shades, Color::from_rgb(0, 0, 255))
            .generate()
            .unwrap();
        #[cfg(not(feature = "f64"))]
        assert_eq!(colors[6], Color::from_rgb(0, 0, 77));
        #[cfg(feature = "f64")]
        assert_eq!(colors[6], Color::from_rgb(0, 0, 76));
    }

    #[test]
    fn lighten_and_saturated_derive_from_the_base() {
        let options = options(4, 0.2);

        let lighter = palette(PaletteKind::Lighten, options);
        for (i, color) in lighter.iter().enumerate() {
            let weight = options.weight(i);
            assert_eq!(*color, BASE.with_lightness(lerp(BASE.lightness(), 100.0, weight)));
            assert_component_eq!(color.lightness(), 50.0 + weight * 50.0, epsilon = 0.5);
        }

        let saturated = palette(PaletteKind::Saturated, options);
        for (i, color) in saturated.iter().enumerate() {
            let weight = options.weight(i);
            let expected = BASE.with_saturation_hsl(lerp(BASE.saturation_hsl(), 100.0, weight));
            assert_eq!(*color, expected);
            assert_component_eq!(color.saturation_hsl(), 60.0 + weight * 40.0, epsilon = 1.0);
        }
    }

    #[test]
    fn darken_compounds_on_the_previous_step() {
        let options = options(3, 0.1);
        let colors = palette(PaletteKind::Darken, options);

        let mut previous = BASE;
        for (i, color) in colors.iter().enumerate() {
            let expected =
                previous.with_lightness(previous.lightness() * (1.0 - options.weight(i)));
            assert_eq!(*color, expected);
            previous = *color;
        }

        // 50% * 0.9 * 0.8 rather than 50% * 0.8.
        assert_component_eq!(colors[1].lightness(), 36.0, epsilon = 0.5);
        assert_component_eq!(colors[2].lightness(), 25.2, epsilon = 0.5);
    }

    #[test]
    fn desaturated_compounds_on_the_previous_step() {
        let options = options(3, 0.1);
        let colors = palette(PaletteKind::Desaturated, options);

        let mut previous = BASE;
        for (i, color) in colors.iter().enumerate() {
            let expected =
                previous.with_saturation_hsl(previous.saturation_hsl() * (1.0 - options.weight(i)));
            assert_eq!(*color, expected);
            previous = *color;
        }

        // 60% * 0.9 * 0.8 rather than 60% * 0.8.
        assert_component_eq!(colors[1].saturation_hsl(), 43.2, epsilon = 1.0);
    }

    #[test]
    fn included_base_does_not_restart_the_chain() {
        for kind in PaletteKind::ALL {
            let without = palette(kind, options(4, 0.15));
            let with = palette(
                kind,
                PaletteOptions {
                    include_base_color: true,
                    ..options(4, 0.15)
                },
            );
            assert_eq!(with[0], BASE);
            assert_eq!(with[1..], without[..], "{kind}");
        }
    }

    #[test]
    fn reversed_includes_the_base_color() {
        let colors = palette(
            PaletteKind::Shades,
            PaletteOptions {
                include_base_color: true,
                reversed: true,
                ..options(3, 0.25)
            },
        );
        assert_eq!(colors.len(), 4);
        assert_eq!(colors[3], BASE);
        assert_eq!(colors[0], BASE.mix(&Color::BLACK, 0.75));
    }

    #[test]
    fn string_entry_point() {
        let palette = generate_palette("tones", "#3366CC", &options(2, 0.5)).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[1], Color::GRAY);

        assert!(matches!(
            generate_palette("sepia", "#3366CC", &PaletteOptions::default()),
            Err(PaletteError::InvalidParameter { .. })
        ));
        assert!(matches!(
            generate_palette("tones", "#33", &PaletteOptions::default()),
            Err(PaletteError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn select_reports_the_hex() {
        let palette = generate_palette("shades", "white", &options(2, 0.5)).unwrap();
        let picked = std::cell::RefCell::new(None);
        let sink = |hex: &str| *picked.borrow_mut() = Some(hex.to_string());

        assert_eq!(palette.select(1, &sink), Some(Color::BLACK));
        assert_eq!(picked.borrow().as_deref(), Some("#000000"));

        *picked.borrow_mut() = None;
        assert_eq!(palette.select(2, &sink), None);
        assert_eq!(*picked.borrow(), None);
    }
}
