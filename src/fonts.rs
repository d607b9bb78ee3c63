//! Font discovery and the two text faces the renderer can draw with.
//!
//! A [`TextFace`] is either an outline font loaded from disk through `ab_glyph`,
//! or the built-in 8x8 bitmap font, scaled by a whole factor. Both report
//! bounding boxes from actual ink, not from nominal line metrics.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, OutlinedGlyph, PxScale, ScaleFont, point};
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, Rgba, RgbaImage};
use log::{debug, warn};

const CELL: u32 = 8;

/// One way of finding a font file. Absence is not an error.
pub trait FontSource {
    fn locate(&self) -> Option<PathBuf>;
}

impl FontSource for PathBuf {
    fn locate(&self) -> Option<PathBuf> {
        self.exists().then(|| self.clone())
    }
}

/// First candidate that resolves, in list order.
pub fn resolve_font(sources: &[Box<dyn FontSource>]) -> Option<PathBuf> {
    sources.iter().find_map(|s| s.locate())
}

/// Ink rectangle of a laid-out string; `right`/`bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

pub enum TextFace {
    Outline { font: FontVec, scale: PxScale },
    Builtin { scale: u32 },
}

impl TextFace {
    /// Loads `path` at `px` pixels per em; anything unreadable gives the built-in face.
    pub fn load(path: Option<&Path>, px: u32) -> TextFace {
        let Some(path) = path else {
            return TextFace::builtin(px);
        };
        let data = match fs::read(path) {
            Ok(d) => d,
            Err(e) => {
                warn!("cannot read font {}: {e}, using default", path.display());
                return TextFace::builtin(px);
            }
        };
        // collections (.ttc) load their first face
        match FontVec::try_from_vec_and_index(data, 0) {
            Ok(font) => {
                let scale = em_scale(&font, px as f32);
                debug!("loaded {} at {px}px", path.display());
                TextFace::Outline { font, scale }
            }
            Err(e) => {
                warn!("cannot load font {}: {e}, using default", path.display());
                TextFace::builtin(px)
            }
        }
    }

    pub fn builtin(px: u32) -> TextFace {
        TextFace::Builtin { scale: (px / CELL).max(1) }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TextFace::Builtin { .. })
    }

    /// Ink bounds of `text` drawn with its line box at (0, 0). `None` when nothing inks.
    pub fn bounds(&self, text: &str) -> Option<TextBounds> {
        match self {
            TextFace::Outline { font, scale } => layout_outline(font, *scale, text, 0.0, 0.0)
                .iter()
                .map(|g| {
                    let r = g.px_bounds();
                    TextBounds {
                        left: r.min.x as i32,
                        top: r.min.y as i32,
                        right: r.max.x as i32,
                        bottom: r.max.y as i32,
                    }
                })
                .reduce(TextBounds::union),
            TextFace::Builtin { scale } => builtin_cells(text)
                .filter_map(|(col, rows)| cell_ink(&rows).map(|b| (col, b)))
                .map(|(col, b)| {
                    let x0 = (col * CELL) as i32;
                    TextBounds {
                        left: (x0 + b.left) * *scale as i32,
                        top: b.top * *scale as i32,
                        right: (x0 + b.right) * *scale as i32,
                        bottom: b.bottom * *scale as i32,
                    }
                })
                .reduce(TextBounds::union),
        }
    }

    /// Draws `text` with its line box at `origin`, blending by coverage.
    pub fn draw(&self, canvas: &mut RgbaImage, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        let (ox, oy) = origin;
        match self {
            TextFace::Outline { font, scale } => {
                for glyph in layout_outline(font, *scale, text, ox as f32, oy as f32) {
                    let r = glyph.px_bounds();
                    let (gx, gy) = (r.min.x as i32, r.min.y as i32);
                    glyph.draw(|x, y, c| {
                        blend_pixel(canvas, gx + x as i32, gy + y as i32, color, c);
                    });
                }
            }
            TextFace::Builtin { scale } => {
                let s = *scale as i32;
                for (col, rows) in builtin_cells(text) {
                    let x0 = ox + (col * CELL) as i32 * s;
                    for (ry, bits) in rows.iter().enumerate() {
                        for rx in 0..CELL {
                            if bits & (1 << rx) == 0 {
                                continue;
                            }
                            let px = x0 + rx as i32 * s;
                            let py = oy + ry as i32 * s;
                            for dy in 0..s {
                                for dx in 0..s {
                                    blend_pixel(canvas, px + dx, py + dy, color, 1.0);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// `px` is the em size, like point sizes in desktop font APIs.
fn em_scale(font: &FontVec, px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(px * font.height_unscaled() / upem),
        _ => PxScale::from(px),
    }
}

fn layout_outline(font: &FontVec, scale: PxScale, text: &str, x: f32, y: f32) -> Vec<OutlinedGlyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = point(x, y + scaled.ascent());
    let mut prev = None;
    let mut out = Vec::new();
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(p) = prev {
            caret.x += scaled.kern(p, id);
        }
        let glyph = id.with_scale_and_position(scale, caret);
        caret.x += scaled.h_advance(id);
        prev = Some(id);
        if let Some(outlined) = font.outline_glyph(glyph) {
            out.push(outlined);
        }
    }
    out
}

fn builtin_cells(text: &str) -> impl Iterator<Item = (u32, [u8; 8])> + '_ {
    text.chars()
        .enumerate()
        .map(|(i, c)| (i as u32, BASIC_FONTS.get(c).unwrap_or([0; 8])))
}

// Bit 0 of each row byte is the leftmost pixel.
fn cell_ink(rows: &[u8; 8]) -> Option<TextBounds> {
    let mut ink: Option<TextBounds> = None;
    for (y, bits) in rows.iter().enumerate() {
        for x in 0..CELL {
            if bits & (1 << x) != 0 {
                let px = TextBounds {
                    left: x as i32,
                    top: y as i32,
                    right: x as i32 + 1,
                    bottom: y as i32 + 1,
                };
                ink = Some(ink.map_or(px, |b| b.union(px)));
            }
        }
    }
    ink
}

fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 || coverage <= 0.0 {
        return;
    }
    let c = coverage.min(1.0);
    let Rgba([r, g, b, a]) = *canvas.get_pixel(x as u32, y as u32);
    let mix = |bg: u8, fg: u8| (bg as f32 + (fg as f32 - bg as f32) * c).round() as u8;
    let alpha = (a as f32 + (255.0 - a as f32) * c).round() as u8;
    canvas.put_pixel(
        x as u32,
        y as u32,
        Rgba([mix(r, color[0]), mix(g, color[1]), mix(b, color[2]), alpha]),
    );
}
