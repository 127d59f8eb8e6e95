//! Parsing colors from the strings a design tool passes around.

use std::str::FromStr;

use crate::{
    color::Color,
    error::{PaletteError, Result},
    named,
};

/// Parse the digits of a hex color, without the leading `#`.
///
/// The allowed formats are:
/// * RGB
/// * RRGGBB
pub(crate) fn parse_hex(hex: &str) -> Option<Color> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let byte = |hi: u8, lo: u8| -> Option<u8> { Some(nibble(hi)? << 4 | nibble(lo)?) };

    match *hex.as_bytes() {
        [r, g, b] => Some(Color::from_rgb(
            nibble(r)? * 17,
            nibble(g)? * 17,
            nibble(b)? * 17,
        )),
        [r1, r2, g1, g2, b1, b2] => Some(Color::from_rgb(
            byte(r1, r2)?,
            byte(g1, g2)?,
            byte(b1, b2)?,
        )),
        _ => None,
    }
}

/// Parse the arguments of a CSS `rgb(r, g, b)` function with integer
/// channels.
fn parse_css_rgb(args: &str) -> Option<Color> {
    let channels = args
        .split(',')
        .map(|arg| arg.trim().parse::<u8>().ok())
        .collect::<Option<Vec<_>>>()?;

    match channels[..] {
        [red, green, blue] => Some(Color::from_rgb(red, green, blue)),
        _ => None,
    }
}

/// Parse any color input a palette request accepts: `#RGB`/`#RRGGBB` hex,
/// a CSS named color, `rgb(r, g, b)`, or bare hex digits.
pub fn parse_color(input: &str) -> Result<Color> {
    let s = input.trim();

    let parsed = if let Some(digits) = s.strip_prefix('#') {
        parse_hex(digits)
    } else if let Some(args) = s
        .get(..4)
        .filter(|prefix| prefix.eq_ignore_ascii_case("rgb("))
        .and_then(|_| s[4..].strip_suffix(')'))
    {
        parse_css_rgb(args)
    } else {
        named::lookup(s)
            .map(Color::from)
            .or_else(|| parse_hex(s))
    };

    parsed.ok_or_else(|| PaletteError::invalid_color(input))
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}
