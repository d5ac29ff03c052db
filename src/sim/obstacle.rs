//! Obstacle column generation
//!
//! A column is a vertical stack of square tiles with one contiguous gap.
//! Gap placement draws from an injectable [`GapSource`] so runs are
//! reproducible.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::Tuning;
use crate::error::ConfigError;

/// Source of gap start indices
pub trait GapSource {
    /// Uniform value in `lo..=hi`
    fn gap_start(&mut self, lo: u32, hi: u32) -> u32;
}

impl<R: Rng> GapSource for R {
    fn gap_start(&mut self, lo: u32, hi: u32) -> u32 {
        self.random_range(lo..=hi)
    }
}

/// One occupied slot of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub slot: u32,
    pub y: i32,
}

/// A scrolling column of obstacle tiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleColumn {
    /// Left edge shared by every segment
    pub x: i32,
    /// First empty slot
    pub gap_start: u32,
    pub gap_len: u32,
    /// Occupied slots, top to bottom
    pub segments: Vec<Segment>,
}

impl ObstacleColumn {
    /// Bounding boxes of every segment at the column's current x
    pub fn segment_bounds(&self, tile_size: i32) -> impl Iterator<Item = Rect> + '_ {
        self.segments
            .iter()
            .map(move |s| Rect::from_tile(self.x, s.y, tile_size, tile_size))
    }

    /// Vertical center of the gap
    pub fn gap_center_y(&self, tile_size: i32) -> f32 {
        (self.gap_start as f32 + self.gap_len as f32 / 2.0) * tile_size as f32
    }

    #[inline]
    pub fn contains_slot(&self, slot: u32) -> bool {
        self.segments.iter().any(|s| s.slot == slot)
    }
}

/// Builds columns from validated tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleGenerator {
    tiles: u32,
    tile_size: i32,
    gap_size: u32,
    start_min: u32,
    start_max: u32,
}

impl ObstacleGenerator {
    /// Rejects tuning with no legal gap placement
    pub fn new(tuning: &Tuning) -> Result<Self, ConfigError> {
        // Slot offsets are only overflow-free for bounded tuning
        tuning.validate()?;
        let (start_min, start_max) = tuning.gap_start_range()?;
        Ok(Self {
            tiles: tuning.column_tiles,
            tile_size: tuning.tile_size,
            gap_size: tuning.gap_size,
            start_min,
            start_max,
        })
    }

    /// Inclusive range of gap start slots this generator draws from
    pub fn start_range(&self) -> (u32, u32) {
        (self.start_min, self.start_max)
    }

    /// Build a fresh column at `x`
    pub fn generate<G: GapSource + ?Sized>(&self, x: i32, gaps: &mut G) -> ObstacleColumn {
        // Custom sources are not trusted to stay in range
        let gap_start = gaps
            .gap_start(self.start_min, self.start_max)
            .clamp(self.start_min, self.start_max);
        let gap = gap_start..gap_start + self.gap_size;

        let segments = (0..self.tiles)
            .filter(|slot| !gap.contains(slot))
            .map(|slot| Segment {
                slot,
                y: slot as i32 * self.tile_size,
            })
            .collect();

        ObstacleColumn {
            x,
            gap_start,
            gap_len: self.gap_size,
            segments,
        }
    }

    /// Clear `column` and rebuild it in place at `x`
    pub fn regenerate<G: GapSource + ?Sized>(
        &self,
        column: &mut ObstacleColumn,
        x: i32,
        gaps: &mut G,
    ) {
        *column = self.generate(x, gaps);
    }
}
