//! Grid layout arithmetic and icon sizing.
//!
//! Members fill a row-major grid of at most [`MAX_COLS`] columns; the
//! last row may be partially populated and its unused cells stay blank.

use crate::config::PosterConfig;

/// Maximum number of columns in the member grid.
pub const MAX_COLS: u32 = 3;

/// Gap between the last cell row and the bottom message block.
pub const MESSAGE_MARGIN: u32 = 50;

/// Computed grid geometry for one poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Number of columns, `min(3, member count)`.
    pub cols: u32,
    /// Number of rows, `ceil(count / cols)`.
    pub rows: u32,
    /// Width of each cell, `canvas width / cols`.
    pub cell_width: u32,
    /// Height of each cell.
    pub cell_height: u32,
    /// Vertical offset of the first row.
    pub start_y: u32,
}

impl Layout {
    /// Compute the grid for `count` members. `count` must be at least 1;
    /// the renderer rejects empty input before layout runs.
    #[must_use]
    pub fn new(count: usize, config: &PosterConfig) -> Self {
        let count = u32::try_from(count).unwrap_or(u32::MAX).max(1);
        let cols = count.min(MAX_COLS);
        let rows = count.div_ceil(cols);
        Self {
            cols,
            rows,
            cell_width: config.width / cols,
            cell_height: config.cell_height,
            start_y: config.start_y,
        }
    }

    /// Row-major grid position of member `index`: `(index / cols, index % cols)`.
    #[must_use]
    pub fn position(&self, index: usize) -> (u32, u32) {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        (index / self.cols, index % self.cols)
    }

    /// Horizontal center of the cell holding member `index`.
    #[must_use]
    pub fn cell_center_x(&self, index: usize) -> i32 {
        let (_, col) = self.position(index);
        (col * self.cell_width + self.cell_width / 2) as i32
    }

    /// Top edge of the cell holding member `index`.
    #[must_use]
    pub fn cell_top_y(&self, index: usize) -> i32 {
        let (row, _) = self.position(index);
        (self.start_y + row * self.cell_height) as i32
    }

    /// Vertical offset of the message block below the grid.
    #[must_use]
    pub fn message_y(&self) -> i32 {
        (self.start_y + self.rows * self.cell_height + MESSAGE_MARGIN) as i32
    }
}

/// Icon size for a member of the given age: grows linearly with age,
/// clamped so both infants and the elderly stay legibly sized.
#[must_use]
pub fn icon_size(age: i32, config: &PosterConfig) -> u32 {
    let age = age.max(0);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (config.icon_base as f32 + config.icon_age_scale * age as f32).round() as u32;
    scaled.clamp(config.icon_min, config.icon_max)
}
