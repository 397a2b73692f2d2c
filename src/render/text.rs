//! Text measurement and drawing behind one capability abstraction.
//!
//! The primary backend rasterizes a TrueType font; when no usable font
//! file can be found, a built-in 5x7 bitmap backend takes over. The
//! choice is made once at construction — callers measure and draw
//! through the same API either way, and centering via the builtin
//! backend is approximate rather than pixel-perfect.

use std::path::PathBuf;

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

/// Pixel offset of the drop-shadow duplicate under shadowed text.
pub const SHADOW_OFFSET: i32 = 3;

/// Well-known font locations tried after the explicit path and the
/// `SIRENGEN_FONT` environment variable.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

enum Backend {
    TrueType(FontVec),
    Builtin,
}

/// Measures and draws text on the poster canvas.
pub struct TextPainter {
    backend: Backend,
}

impl TextPainter {
    /// Build a painter, preferring a TrueType font from the explicit
    /// config path, then `SIRENGEN_FONT`, then common system locations;
    /// falls back to the built-in bitmap glyphs when none is loadable.
    #[must_use]
    pub fn load(explicit: Option<&str>) -> Self {
        match load_truetype(explicit) {
            Some(font) => Self { backend: Backend::TrueType(font) },
            None => Self { backend: Backend::Builtin },
        }
    }

    /// Painter that always uses the built-in bitmap glyphs.
    #[must_use]
    pub fn builtin() -> Self {
        Self { backend: Backend::Builtin }
    }

    /// Width in pixels of `text` at the given pixel size.
    #[must_use]
    pub fn measure(&self, text: &str, px: u32) -> u32 {
        match &self.backend {
            #[allow(clippy::cast_precision_loss)]
            Backend::TrueType(font) => text_size(PxScale::from(px as f32), font, text).0,
            Backend::Builtin => {
                let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
                count * builtin_advance(px)
            }
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw(
        &self,
        canvas: &mut RgbImage,
        x: i32,
        y: i32,
        px: u32,
        color: Rgb<u8>,
        text: &str,
    ) {
        match &self.backend {
            #[allow(clippy::cast_precision_loss)]
            Backend::TrueType(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(px as f32), font, text);
            }
            Backend::Builtin => draw_builtin(canvas, x, y, px, color, text),
        }
    }

    /// Draw `text` horizontally centered on `center_x`.
    pub fn draw_centered(
        &self,
        canvas: &mut RgbImage,
        center_x: i32,
        y: i32,
        px: u32,
        color: Rgb<u8>,
        text: &str,
    ) {
        let width = i32::try_from(self.measure(text, px)).unwrap_or(i32::MAX);
        self.draw(canvas, center_x - width / 2, y, px, color, text);
    }

    /// Draw centered text with a drop shadow: an offset duplicate in
    /// `shadow` underneath the `color` text.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_shadowed(
        &self,
        canvas: &mut RgbImage,
        center_x: i32,
        y: i32,
        px: u32,
        color: Rgb<u8>,
        shadow: Rgb<u8>,
        text: &str,
    ) {
        self.draw_centered(canvas, center_x + SHADOW_OFFSET, y + SHADOW_OFFSET, px, shadow, text);
        self.draw_centered(canvas, center_x, y, px, color, text);
    }
}

fn load_truetype(explicit: Option<&str>) -> Option<FontVec> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(p) = explicit {
        candidates.push(PathBuf::from(p));
    }
    if let Ok(p) = std::env::var("SIRENGEN_FONT") {
        candidates.push(PathBuf::from(p));
    }
    candidates.extend(SYSTEM_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        if let Ok(data) = std::fs::read(&path) {
            if let Ok(font) = FontVec::try_from_vec(data) {
                return Some(font);
            }
        }
    }
    None
}

// Built-in backend: 5x7 glyphs scaled to the requested pixel size.

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Integer cell size one glyph pixel occupies at the requested size.
fn builtin_scale(px: u32) -> u32 {
    (px / (GLYPH_HEIGHT + 1)).max(1)
}

/// Horizontal advance per character: glyph width plus one column gap.
fn builtin_advance(px: u32) -> u32 {
    (GLYPH_WIDTH + 1) * builtin_scale(px)
}

fn draw_builtin(canvas: &mut RgbImage, x: i32, y: i32, px: u32, color: Rgb<u8>, text: &str) {
    let scale = builtin_scale(px) as i32;
    let advance = builtin_advance(px) as i32;
    let mut pen_x = x;

    for ch in text.chars() {
        let rows = builtin_glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) != 0 {
                    let px_x = pen_x + i32::try_from(col).unwrap_or(0) * scale;
                    let px_y = y + i32::try_from(row).unwrap_or(0) * scale;
                    let rect = Rect::at(px_x, px_y).of_size(scale as u32, scale as u32);
                    draw_filled_rect_mut(canvas, rect, color);
                }
            }
        }
        pen_x += advance;
    }
}

/// 5x7 bitmap rows (MSB = leftmost of the 5 columns). Lowercase maps to
/// uppercase; anything without a glyph renders as a hollow box.
#[allow(clippy::too_many_lines)]
fn builtin_glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        ' ' => [0x00; 7],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x01, 0x01, 0x01, 0x01, 0x11, 0x11, 0x0E],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        _ => [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F],
    }
}
