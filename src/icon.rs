use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::config::{FONT_SCALE, IconStyle, MIN_FONT_PX};
use crate::fonts::{TextBounds, TextFace};

pub fn font_px(size: u32) -> u32 {
    ((size as f32 * FONT_SCALE).round() as u32).max(MIN_FONT_PX)
}

/// Origin that puts the ink box, not the line box, in the middle of the canvas.
pub fn centered_origin(size: u32, bounds: &TextBounds) -> (i32, i32) {
    let size = size as f32;
    let x = (size - bounds.width() as f32) / 2.0 - bounds.left as f32;
    let y = (size - bounds.height() as f32) / 2.0 - bounds.top as f32;
    (x.round() as i32, y.round() as i32)
}

/// Renders one square icon: solid background, text centered on its ink.
pub fn render_icon(size: u32, font: Option<&Path>, style: &IconStyle) -> RgbaImage {
    debug_assert!(size > 0, "icon size must be positive");
    let [r, g, b] = style.background.0;
    let mut img = RgbaImage::from_pixel(size, size, Rgba([r, g, b, 255]));

    let face = TextFace::load(font, font_px(size));
    if let Some(bounds) = face.bounds(&style.text) {
        let origin = centered_origin(size, &bounds);
        face.draw(&mut img, origin, &style.text, style.foreground);
    }
    img
}
