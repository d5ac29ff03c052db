//! Horizontal scrolling of the ground strip and obstacle columns
//!
//! Positions are integers and move by a whole step per tick, so wrap
//! thresholds and the score line are hit exactly.

use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleColumn;
use super::rect::Rect;
use crate::config::Tuning;

/// One tile of the repeating ground strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTile {
    pub x: i32,
    pub y: i32,
}

impl GroundTile {
    pub fn bounds(&self, tuning: &Tuning) -> Rect {
        Rect::from_tile(
            self.x,
            self.y,
            tuning.ground_tile_width,
            tuning.ground_tile_height,
        )
    }
}

/// Ground tiles laid side by side from x = 0
pub fn initial_ground(tuning: &Tuning) -> Vec<GroundTile> {
    (0..tuning.ground_tile_count as i32)
        .map(|i| GroundTile {
            x: i * tuning.ground_tile_width,
            y: tuning.ground_y,
        })
        .collect()
}

/// Scroll every ground tile, relocating those that reached the wrap threshold
pub fn advance_ground(tiles: &mut [GroundTile], tuning: &Tuning) {
    let respawn_x = tuning.ground_respawn_x();
    for tile in tiles.iter_mut() {
        tile.x -= tuning.scroll_step;
        if tile.x <= tuning.ground_wrap_x {
            // Keep the overshoot so larger steps stay seamless
            tile.x = respawn_x + (tile.x - tuning.ground_wrap_x);
        }
    }
}

/// What happened to a column during one scroll step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnStep {
    /// Crossed the score line
    pub scored: bool,
    /// Reached the wrap threshold and must be regenerated
    pub wrapped: bool,
}

/// Scroll one column by a single step
pub fn advance_column(column: &mut ObstacleColumn, tuning: &Tuning) -> ColumnStep {
    let prev_x = column.x;
    column.x -= tuning.scroll_step;
    ColumnStep {
        scored: prev_x > tuning.score_line_x && column.x <= tuning.score_line_x,
        wrapped: column.x <= tuning.column_wrap_x,
    }
}

/// X a column starts at, by index
#[inline]
pub fn column_start_x(index: usize, tuning: &Tuning) -> i32 {
    tuning.column_spawn_x + index as i32 * tuning.column_spacing
}
