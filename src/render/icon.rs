//! Gender-dispatched stick-figure icon painters.
//!
//! Two fixed variants selected through an enum dispatch table; the
//! renderer never branches on gender anywhere else.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

use crate::member::Gender;

/// Signature shared by both icon painters: canvas, horizontal center,
/// top edge, icon size in pixels, stroke color.
pub type IconPainter = fn(&mut RgbImage, i32, i32, u32, Rgb<u8>);

impl Gender {
    /// Select the icon painter for this gender.
    #[must_use]
    pub fn painter(self) -> IconPainter {
        match self {
            Self::Male => draw_male_icon,
            Self::Female => draw_female_icon,
        }
    }
}

/// Straight-limbed stick figure: circular head, vertical torso,
/// horizontal arms, two split legs.
fn draw_male_icon(canvas: &mut RgbImage, center_x: i32, top_y: i32, size: u32, color: Rgb<u8>) {
    let size = size as i32;
    let head_radius = size / 4;
    let hip_y = top_y + size - head_radius;

    draw_filled_circle_mut(canvas, (center_x, top_y + head_radius), head_radius, color);

    // Torso
    stroke(canvas, (center_x, top_y + 2 * head_radius), (center_x, hip_y), color);
    // Arms
    stroke(
        canvas,
        (center_x - size / 4, top_y + size / 2),
        (center_x + size / 4, top_y + size / 2),
        color,
    );
    // Legs
    stroke(canvas, (center_x, hip_y), (center_x - size / 6, top_y + size), color);
    stroke(canvas, (center_x, hip_y), (center_x + size / 6, top_y + size), color);
}

/// Same head and arms as the male variant, with a filled triangular
/// dress torso and a shorter unsplit leg line below the hem.
fn draw_female_icon(canvas: &mut RgbImage, center_x: i32, top_y: i32, size: u32, color: Rgb<u8>) {
    let size = size as i32;
    let head_radius = size / 4;
    let hem_y = top_y + size - head_radius;

    draw_filled_circle_mut(canvas, (center_x, top_y + head_radius), head_radius, color);

    // Dress: triangle from the neck down to the hem. Below 4px the
    // triangle collapses to coincident points, which the polygon
    // rasterizer rejects, so tiny figures get a plain torso line.
    if head_radius > 0 {
        let dress = [
            Point::new(center_x, top_y + 2 * head_radius),
            Point::new(center_x - size / 4, hem_y),
            Point::new(center_x + size / 4, hem_y),
        ];
        draw_polygon_mut(canvas, &dress, color);
    } else {
        stroke(canvas, (center_x, top_y + 2 * head_radius), (center_x, hem_y), color);
    }

    // Arms
    stroke(
        canvas,
        (center_x - size / 4, top_y + size / 2),
        (center_x + size / 4, top_y + size / 2),
        color,
    );
    // Single short leg line below the hem
    stroke(canvas, (center_x, hem_y), (center_x, hem_y + head_radius / 2), color);
}

/// 2px-wide line segment; imageproc lines are 1px, so draw a shifted
/// duplicate for the stroke weight the poster uses.
#[allow(clippy::cast_precision_loss)]
fn stroke(canvas: &mut RgbImage, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
    let (x0, y0) = (from.0 as f32, from.1 as f32);
    let (x1, y1) = (to.0 as f32, to.1 as f32);
    draw_line_segment_mut(canvas, (x0, y0), (x1, y1), color);
    draw_line_segment_mut(canvas, (x0 + 1.0, y0), (x1 + 1.0, y1), color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn paint(gender: Gender) -> RgbImage {
        let mut canvas = RgbImage::new(200, 200);
        gender.painter()(&mut canvas, 100, 40, 80, WHITE);
        canvas
    }

    fn lit_pixels(img: &RgbImage) -> usize {
        img.pixels().filter(|p| p.0 != [0, 0, 0]).count()
    }

    #[test]
    fn each_gender_selects_exactly_one_painter() {
        // Dispatch is total over the closed enum; both variants draw something
        assert!(lit_pixels(&paint(Gender::Male)) > 0);
        assert!(lit_pixels(&paint(Gender::Female)) > 0);
    }

    #[test]
    fn male_and_female_icons_differ() {
        assert_ne!(paint(Gender::Male).as_raw(), paint(Gender::Female).as_raw());
    }

    #[test]
    fn same_gender_paints_deterministically() {
        assert_eq!(paint(Gender::Male).as_raw(), paint(Gender::Male).as_raw());
        assert_eq!(paint(Gender::Female).as_raw(), paint(Gender::Female).as_raw());
    }

    #[test]
    fn tiny_icon_sizes_do_not_panic() {
        // Sizes below 4px collapse the dress triangle to coincident
        // points; both painters must still draw without panicking
        for size in 0..=4 {
            let mut canvas = RgbImage::new(50, 50);
            Gender::Male.painter()(&mut canvas, 25, 10, size, WHITE);
            Gender::Female.painter()(&mut canvas, 25, 10, size, WHITE);
        }
    }

    #[test]
    fn dress_fills_more_than_torso_line() {
        // The filled triangle makes the female icon heavier than the
        // male icon at the same size
        assert!(lit_pixels(&paint(Gender::Female)) > lit_pixels(&paint(Gender::Male)));
    }
}
