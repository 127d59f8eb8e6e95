//! Views of a [`Color`](crate::Color) in the notations a design tool shows.
//!
//! Each view is a plain struct of channels generated by `gen_model!`. Views
//! are never stored inside a color; they are derived on demand and turned
//! back into a color through `From`, which clamps and rounds.

mod cmyk;
mod hsl;
mod hsv;
mod rgb;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
