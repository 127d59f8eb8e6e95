//! Generate a palette from a JSON request, print what a color card would show
//! for every entry and render the palette as a strip of swatches.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use tintshade::{describe, Formats, PaletteRequest};

const SWATCH_WIDTH: u32 = 100;
const SWATCH_HEIGHT: u32 = 100;

#[derive(Parser, Debug)]
#[command(about = "Render a tintshade palette request as a strip of swatches")]
struct Args {
    /// JSON file holding the palette request.
    request: PathBuf,

    /// Where to write the PNG.
    #[arg(short, long, default_value = "palette.png")]
    output: PathBuf,

    /// Print only the hex of each color.
    #[arg(long)]
    hex_only: bool,

    /// Simulate the user picking the color at this index.
    #[arg(long)]
    select: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let json = std::fs::read_to_string(&args.request)
        .with_context(|| format!("could not read {}", args.request.display()))?;
    let request: PaletteRequest = serde_json::from_str(&json)
        .with_context(|| format!("invalid palette request in {}", args.request.display()))?;

    let palette = request.generate()?;
    tracing::info!(
        kind = %request.kind,
        base = %request.base,
        colors = palette.len(),
        "generated palette"
    );

    let formats = if args.hex_only {
        Formats::empty()
    } else {
        Formats::all()
    };
    for color in &palette {
        println!("{color}");
        for line in describe(color, formats) {
            println!("  {line}");
        }
    }

    if let Some(index) = args.select {
        let sink = |hex: &str| tracing::info!(hex, "selected");
        if palette.select(index, &sink).is_none() {
            tracing::warn!(index, len = palette.len(), "selection out of range");
        }
    }

    let mut img = RgbImage::new(SWATCH_WIDTH * palette.len() as u32, SWATCH_HEIGHT);
    for (i, color) in palette.iter().enumerate() {
        let x = i as u32 * SWATCH_WIDTH;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x as i32, 0).of_size(SWATCH_WIDTH, SWATCH_HEIGHT),
            Rgb([color.red(), color.green(), color.blue()]),
        );
    }

    img.save(&args.output)
        .with_context(|| format!("could not write image to {}", args.output.display()))?;

    Ok(())
}
