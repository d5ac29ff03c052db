//! Player collision detection
//!
//! First overlap wins; there is no damage model.

use serde::{Deserialize, Serialize};

use super::kinematics::Player;
use super::obstacle::ObstacleColumn;
use super::rect::Rect;
use super::scroll::GroundTile;
use crate::config::Tuning;

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitKind {
    Obstacle,
    Ground,
}

/// True if `bounds` overlaps any segment of any column
pub fn hits_obstacle(bounds: &Rect, columns: &[ObstacleColumn], tile_size: i32) -> bool {
    columns
        .iter()
        .flat_map(|c| c.segment_bounds(tile_size))
        .any(|seg| bounds.intersects(&seg))
}

/// True if `bounds` overlaps any ground tile
pub fn hits_ground(bounds: &Rect, ground: &[GroundTile], tuning: &Tuning) -> bool {
    ground.iter().any(|t| bounds.intersects(&t.bounds(tuning)))
}

/// Test the player against obstacles, then the ground
pub fn detect(
    player: &Player,
    columns: &[ObstacleColumn],
    ground: &[GroundTile],
    tuning: &Tuning,
) -> Option<HitKind> {
    let bounds = player.bounds();
    if hits_obstacle(&bounds, columns, tuning.tile_size) {
        Some(HitKind::Obstacle)
    } else if hits_ground(&bounds, ground, tuning) {
        Some(HitKind::Ground)
    } else {
        None
    }
}
