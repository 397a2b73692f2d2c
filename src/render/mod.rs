//! Poster rendering: a pure function from family-member records to a
//! fixed-size raster image.

mod icon;
mod layout;
mod text;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::config::PosterConfig;
use crate::error::PosterError;
use crate::member::FamilyMember;
use layout::Layout;
use text::TextPainter;

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const INK: Rgb<u8> = Rgb([255, 255, 255]);
const ACCENT: Rgb<u8> = Rgb([220, 30, 30]);
const ACCENT_SHADOW: Rgb<u8> = Rgb([70, 0, 0]);

const TITLE_PX: u32 = 60;
const NAME_PX: u32 = 30;
const INFO_PX: u32 = 20;
const MESSAGE_PX: u32 = 40;

/// Gap between an icon's bottom edge and the name line.
const NAME_GAP: i32 = 10;
/// Vertical step between caption lines.
const LINE_STEP: i32 = 26;
/// Vertical step between message lines.
const MESSAGE_STEP: i32 = 56;

/// Render the poster for the given members.
///
/// Pure with respect to its inputs: one member grid, title above,
/// protest messages below, all on a `config.width` x `config.height`
/// canvas regardless of member count.
///
/// # Errors
///
/// Returns [`PosterError::EmptyInput`] when `members` is empty.
pub fn render_poster(
    members: &[FamilyMember],
    current_year: i32,
    config: &PosterConfig,
) -> Result<RgbImage, PosterError> {
    if members.is_empty() {
        return Err(PosterError::EmptyInput);
    }

    let mut canvas = RgbImage::from_pixel(config.width, config.height, BACKGROUND);
    let painter = TextPainter::load(config.font_path.as_deref());
    let layout = Layout::new(members.len(), config);
    let center_x = i32::try_from(config.width / 2).unwrap_or(i32::MAX);

    painter.draw_shadowed(
        &mut canvas,
        center_x,
        i32::try_from(config.title_y).unwrap_or(0),
        TITLE_PX,
        ACCENT,
        ACCENT_SHADOW,
        &config.title,
    );

    for (i, member) in members.iter().enumerate() {
        draw_member_cell(&mut canvas, &painter, &layout, i, member, current_year, config);
    }

    draw_message_block(&mut canvas, &painter, &layout, config);

    Ok(canvas)
}

/// Caption lines drawn under a member's name, in display order.
fn caption_lines(member: &FamilyMember) -> [String; 3] {
    [
        format!("Born: {}", member.birth_year),
        format!("First Siren: {}", member.siren_year),
        format!("Age at First Siren: {}", member.age_at_first_siren()),
    ]
}

fn draw_member_cell(
    canvas: &mut RgbImage,
    painter: &TextPainter,
    layout: &Layout,
    index: usize,
    member: &FamilyMember,
    current_year: i32,
    config: &PosterConfig,
) {
    let cell_x = layout.cell_center_x(index);
    let cell_top = layout.cell_top_y(index);
    let size = layout::icon_size(member.age(current_year), config);

    member.gender.painter()(canvas, cell_x, cell_top, size, INK);

    let mut y = cell_top + i32::try_from(size).unwrap_or(0) + NAME_GAP;
    painter.draw_centered(canvas, cell_x, y, NAME_PX, INK, &member.name);
    y += i32::try_from(NAME_PX).unwrap_or(0) + 6;

    if !member.relation.trim().is_empty() {
        painter.draw_centered(canvas, cell_x, y, INFO_PX, ACCENT, &member.relation);
        y += LINE_STEP;
    }
    for line in caption_lines(member) {
        painter.draw_centered(canvas, cell_x, y, INFO_PX, INK, &line);
        y += LINE_STEP;
    }
}

fn draw_message_block(
    canvas: &mut RgbImage,
    painter: &TextPainter,
    layout: &Layout,
    config: &PosterConfig,
) {
    let center_x = i32::try_from(config.width / 2).unwrap_or(i32::MAX);
    let message_y = layout.message_y();
    let block_height = i32::try_from(config.messages.len()).unwrap_or(0) * MESSAGE_STEP;

    rule_line(canvas, message_y - 16, config);
    for (i, line) in config.messages.iter().enumerate() {
        let y = message_y + i32::try_from(i).unwrap_or(0) * MESSAGE_STEP;
        painter.draw_shadowed(canvas, center_x, y, MESSAGE_PX, ACCENT, ACCENT_SHADOW, line);
    }
    rule_line(canvas, message_y + block_height + 8, config);
}

/// Thin horizontal decoration line, inset from both canvas edges.
#[allow(clippy::cast_precision_loss)]
fn rule_line(canvas: &mut RgbImage, y: i32, config: &PosterConfig) {
    let inset = (config.width / 8) as f32;
    let y = y as f32;
    draw_line_segment_mut(canvas, (inset, y), (config.width as f32 - inset, y), ACCENT);
}
