//! tintshade generates deterministic palettes of related colors (tints,
//! shades, tones, lightness and saturation ramps) from a single base color,
//! and renders a color's channels as the strings a design tool displays.
//!
//! ```rust
//! use tintshade::{format_hsl, generate_palette, PaletteOptions};
//!
//! let palette = generate_palette("shades", "#3366CC", &PaletteOptions::default())?;
//! assert_eq!(palette.len(), 10);
//! assert_eq!(format_hsl(&palette[9]), "HSL: 0° 0% 0%");
//! # Ok::<(), tintshade::PaletteError>(())
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod math;
pub mod models;
mod named;
mod palette;
mod parse;
mod select;


pub use color::{Color, Component};
pub use error::{PaletteError, Result};
pub use format::{
    describe, format_cmyk, format_hsl, format_hsv, format_luminance, format_rgb, Formats,
};
pub use palette::{generate, generate_palette, Palette, PaletteKind, PaletteOptions, PaletteRequest};
pub use parse::parse_color;
pub use select::{NoopSink, SelectionSink};
