//! Sprite instances for an external renderer
//!
//! The simulation never draws. Hosts upload these records as an instance
//! buffer (or map them onto engine sprites) once per frame.

use bytemuck::{Pod, Zeroable};

use crate::sim::{GameState, Rect};

/// Which texture an instance uses
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player = 0,
    Obstacle = 1,
    Ground = 2,
}

/// One sprite: center, size, rotation and kind
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 2],
    pub size: [f32; 2],
    pub rotation: f32,
    pub kind: u32,
}

impl SpriteInstance {
    pub fn from_rect(rect: &Rect, rotation: f32, kind: SpriteKind) -> Self {
        Self {
            center: rect.center().to_array(),
            size: rect.size().to_array(),
            rotation,
            kind: kind as u32,
        }
    }
}

/// Flatten the state into draw order: ground, obstacles, player on top
pub fn sprite_instances(state: &GameState) -> Vec<SpriteInstance> {
    let tuning = &state.tuning;
    let segment_count: usize = state.columns.iter().map(|c| c.segments.len()).sum();
    let mut instances = Vec::with_capacity(state.ground.len() + segment_count + 1);

    for tile in &state.ground {
        instances.push(SpriteInstance::from_rect(
            &tile.bounds(tuning),
            0.0,
            SpriteKind::Ground,
        ));
    }

    for column in &state.columns {
        for bounds in column.segment_bounds(tuning.tile_size) {
            instances.push(SpriteInstance::from_rect(&bounds, 0.0, SpriteKind::Obstacle));
        }
    }

    instances.push(SpriteInstance::from_rect(
        &state.player.bounds(),
        state.player.rotation,
        SpriteKind::Player,
    ));

    instances
}
