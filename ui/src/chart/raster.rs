//! Native PNG serialization: SVG → `usvg` tree → `resvg` pixmap → `png`.

use std::sync::Arc;

use thiserror::Error;

use super::fonts::{self, FontSetup};
use super::RenderedChart;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("chart markup could not be parsed: {0}")]
    Svg(#[from] usvg::Error),
    #[error("unable to allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Rasterize `chart` to PNG bytes using the shared font database.
pub fn serialize(chart: &RenderedChart) -> Result<Vec<u8>, RasterError> {
    serialize_with(chart, fonts::font_setup())
}

pub fn serialize_with(chart: &RenderedChart, fonts: &FontSetup) -> Result<Vec<u8>, RasterError> {
    let svg = chart.to_svg();

    let mut opt = usvg::Options::default();
    opt.font_family = fonts.resolution.fallback_family.clone();
    opt.fontdb = Arc::clone(&fonts.database);

    let tree = usvg::Tree::from_str(&svg, &opt)?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RasterError::Canvas { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    encode_png(&pixmap)
}

fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, RasterError> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.write_header()?.write_image_data(&rgba)?;
    }

    Ok(buffer)
}
