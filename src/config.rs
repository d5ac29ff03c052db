//! Game tuning
//!
//! Every constant the simulation reads lives here so a host can load a
//! variant from JSON. Missing fields fall back to the defaults in
//! [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Data-driven game balance and layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulation ticks per second
    pub tick_rate: f32,

    // === View ===
    pub view_width: i32,
    pub view_height: i32,

    // === Player ===
    /// Start position (center of the sprite)
    pub player_start: Vec2,
    /// Side length of the square bounding box
    pub player_size: f32,
    pub gravity: f32,
    pub min_velocity: f32,
    pub velocity_increase: f32,
    pub rotation_factor: f32,
    pub rotation_limit: f32,

    // === Scrolling ===
    pub scroll_step: i32,

    // === Ground ===
    pub ground_y: i32,
    pub ground_tile_width: i32,
    pub ground_tile_height: i32,
    pub ground_tile_count: u32,
    pub ground_wrap_x: i32,

    // === Obstacles ===
    /// Slots per column
    pub column_tiles: u32,
    pub tile_size: i32,
    /// Consecutive empty slots forming the gap
    pub gap_size: u32,
    /// Lowest slot index the gap may start at
    pub gap_min_start: u32,
    pub column_count: u32,
    pub column_spawn_x: i32,
    pub column_spacing: i32,
    pub column_wrap_x: i32,
    pub score_line_x: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,

            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,

            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_size: PLAYER_SIZE,
            gravity: GRAVITY,
            min_velocity: MIN_VELOCITY,
            velocity_increase: VELOCITY_INCREASE,
            rotation_factor: ROTATION_FACTOR,
            rotation_limit: ROTATION_LIMIT,

            scroll_step: SCROLL_STEP,

            ground_y: GROUND_Y,
            ground_tile_width: GROUND_TILE_WIDTH,
            ground_tile_height: GROUND_TILE_HEIGHT,
            ground_tile_count: GROUND_TILE_COUNT,
            ground_wrap_x: GROUND_WRAP_X,

            column_tiles: COLUMN_TILES,
            tile_size: OBSTACLE_TILE_SIZE,
            gap_size: GAP_SIZE,
            gap_min_start: GAP_MIN_START,
            column_count: COLUMN_COUNT,
            column_spawn_x: COLUMN_SPAWN_X,
            column_spacing: COLUMN_SPACING,
            column_wrap_x: COLUMN_WRAP_X,
            score_line_x: SCORE_LINE_X,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Fixed timestep in seconds
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// X a ground tile is moved to once it reaches the wrap threshold
    #[inline]
    pub fn ground_respawn_x(&self) -> i32 {
        self.ground_wrap_x + self.ground_tile_count as i32 * self.ground_tile_width
    }

    /// Check every constraint the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::NonPositiveTickRate {
                tick_rate: self.tick_rate,
            });
        }
        if self.scroll_step <= 0 {
            return Err(ConfigError::NonPositiveScrollStep {
                step: self.scroll_step,
            });
        }

        // Counts are bounded before any of them is used as an i32
        for (field, value) in [
            ("ground_tile_count", self.ground_tile_count),
            ("column_tiles", self.column_tiles),
            ("column_count", self.column_count),
        ] {
            if value > MAX_COUNT {
                return Err(ConfigError::CountTooLarge {
                    field,
                    value,
                    max: MAX_COUNT,
                });
            }
        }
        if self.column_count == 0 {
            return Err(ConfigError::NoColumns);
        }

        for (field, value) in [
            ("scroll_step", self.scroll_step),
            ("view_width", self.view_width),
            ("view_height", self.view_height),
            ("ground_y", self.ground_y),
            ("ground_tile_width", self.ground_tile_width),
            ("ground_tile_height", self.ground_tile_height),
            ("ground_wrap_x", self.ground_wrap_x),
            ("tile_size", self.tile_size),
            ("column_spawn_x", self.column_spawn_x),
            ("column_spacing", self.column_spacing),
            ("column_wrap_x", self.column_wrap_x),
            ("score_line_x", self.score_line_x),
        ] {
            if value.unsigned_abs() > MAX_COORD.unsigned_abs() {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    limit: MAX_COORD,
                });
            }
        }

        for (field, value) in [
            ("view_width", self.view_width),
            ("view_height", self.view_height),
            ("ground_tile_width", self.ground_tile_width),
            ("ground_tile_height", self.ground_tile_height),
            ("ground_tile_count", self.ground_tile_count as i32),
            ("tile_size", self.tile_size),
            ("column_tiles", self.column_tiles as i32),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositiveDimension { field, value });
            }
        }

        // A tile leaves coverage one tile-width before it wraps, so one
        // extra tile is needed beyond the view.
        let covered = self.ground_tile_count as i32 * self.ground_tile_width;
        let required = self.view_width + self.ground_tile_width;
        if covered < required {
            return Err(ConfigError::GroundTooShort { covered, required });
        }

        if self.column_wrap_x >= self.column_spawn_x {
            return Err(ConfigError::WrapAheadOfSpawn {
                wrap_x: self.column_wrap_x,
                spawn_x: self.column_spawn_x,
            });
        }

        self.gap_start_range().map(|_| ())
    }

    /// Inclusive range of legal gap start slots
    ///
    /// The gap must leave slot 0 and the last slot solid.
    pub fn gap_start_range(&self) -> Result<(u32, u32), ConfigError> {
        let tiles = self.column_tiles;
        let gap = self.gap_size;
        if gap == 0 {
            return Err(ConfigError::EmptyGap);
        }
        if gap >= tiles {
            return Err(ConfigError::GapTooLarge { gap, tiles });
        }
        let min_start = self.gap_min_start.max(1);
        // gap < tiles, so neither subtraction can underflow
        let last_slot = tiles - 1;
        if min_start > last_slot - gap {
            return Err(ConfigError::NoGapPlacement {
                min_start: self.gap_min_start,
                gap,
                tiles,
            });
        }
        Ok((min_start, last_slot - gap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.gap_start_range().unwrap(), (2, 6));
        assert_eq!(tuning.ground_respawn_x(), 500);
        assert!((tuning.dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_overrides() {
        let tuning = Tuning::from_json(r#"{ "gap_size": 2, "scroll_step": 2 }"#).unwrap();
        assert_eq!(tuning.gap_size, 2);
        assert_eq!(tuning.scroll_step, 2);
        assert_eq!(tuning.column_tiles, COLUMN_TILES);
        assert_eq!(tuning.gap_start_range().unwrap(), (2, 7));
    }

    #[test]
    fn test_player_start_from_json() {
        let tuning = Tuning::from_json(r#"{ "player_start": [120.0, 250.0] }"#).unwrap();
        assert_eq!(tuning.player_start, Vec2::new(120.0, 250.0));
    }

    #[test]
    fn test_gap_too_large_rejected() {
        let tuning = Tuning {
            gap_size: 10,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::GapTooLarge { gap: 10, tiles: 10 })
        ));
    }

    #[test]
    fn test_gap_without_placement_rejected() {
        // Start >= 2 with 8 empty slots would reach the last slot
        let tuning = Tuning {
            gap_size: 8,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NoGapPlacement { .. })
        ));
    }

    #[test]
    fn test_zero_gap_rejected() {
        let tuning = Tuning {
            gap_size: 0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::EmptyGap)));
    }

    #[test]
    fn test_bad_tick_rate_rejected() {
        for tick_rate in [0.0, -60.0, f32::NAN] {
            let tuning = Tuning {
                tick_rate,
                ..Default::default()
            };
            assert!(matches!(
                tuning.validate(),
                Err(ConfigError::NonPositiveTickRate { .. })
            ));
        }
    }

    #[test]
    fn test_bad_scroll_step_rejected() {
        let tuning = Tuning {
            scroll_step: 0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NonPositiveScrollStep { step: 0 })
        ));
    }

    #[test]
    fn test_short_ground_rejected() {
        let tuning = Tuning {
            ground_tile_count: 4,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::GroundTooShort {
                covered: 400,
                required: 500
            })
        ));
    }

    #[test]
    fn test_wrap_ahead_of_spawn_rejected() {
        let tuning = Tuning {
            column_wrap_x: 400,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::WrapAheadOfSpawn { .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Tuning::from_json("{ gap_size: }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid tuning json"));
    }

    #[test]
    fn test_huge_gap_min_start_rejected() {
        let err = Tuning::from_json(r#"{ "gap_min_start": 4294967295 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NoGapPlacement {
                min_start: u32::MAX,
                ..
            }
        ));
    }

    #[test]
    fn test_huge_dimension_rejected() {
        let err = Tuning::from_json(r#"{ "ground_tile_width": 1000000000 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "ground_tile_width",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "column_spacing": 2000000000 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "column_spacing",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "column_wrap_x": -2147483648 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    #[test]
    fn test_huge_counts_rejected() {
        for field in ["column_count", "ground_tile_count", "column_tiles"] {
            let json = format!(r#"{{ "{field}": 4000000000 }}"#);
            let err = Tuning::from_json(&json).unwrap_err();
            assert!(
                matches!(err, ConfigError::CountTooLarge { field: f, max: MAX_COUNT, .. } if f == field),
                "{field}: {err}"
            );
        }
    }

    #[test]
    fn test_largest_accepted_layout_fits_i32() {
        let tuning = Tuning {
            ground_tile_count: MAX_COUNT,
            ground_tile_width: MAX_COORD,
            ground_wrap_x: MAX_COORD,
            column_count: MAX_COUNT,
            column_spawn_x: MAX_COORD,
            column_spacing: MAX_COORD,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
        assert_eq!(
            tuning.ground_respawn_x(),
            MAX_COORD + MAX_COUNT as i32 * MAX_COORD
        );
    }

    #[test]
    fn test_json_with_invalid_values_rejected() {
        let err = Tuning::from_json(r#"{ "tick_rate": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveTickRate { .. }));
    }
}
