//! Player kinematics
//!
//! Gravity is integrated once per running tick; the hold control adds an
//! upward impulse on top of it and drives the sprite tilt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::Tuning;

/// The player sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center of the sprite; x stays at the start column
    pub pos: Vec2,
    /// Vertical velocity (units/s, positive is down)
    pub vel_y: f32,
    /// Tilt in radians, derived from velocity
    pub rotation: f32,
    /// Side length of the square bounding box
    pub size: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start,
            vel_y: 0.0,
            rotation: 0.0,
            size: tuning.player_size,
        }
    }

    /// Put the player back at the start with no motion
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Bounding box used for collision tests
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.size))
    }

    /// Apply gravity then move (semi-implicit Euler)
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        self.vel_y += gravity * dt;
        self.pos.y += self.vel_y * dt;
    }

    /// Process the hold control for one tick
    ///
    /// The impulse only fires while `running`; the tilt keeps tracking
    /// velocity either way.
    pub fn apply_control(&mut self, hold: bool, running: bool, tuning: &Tuning) {
        if hold {
            if self.vel_y >= tuning.min_velocity {
                if running {
                    self.vel_y =
                        (self.vel_y - tuning.velocity_increase).max(tuning.min_velocity);
                }
                if self.rotation >= -tuning.rotation_limit {
                    self.update_rotation(tuning.rotation_factor);
                }
            }
        } else if self.rotation <= tuning.rotation_limit {
            self.update_rotation(tuning.rotation_factor);
        }
    }

    #[inline]
    fn update_rotation(&mut self, factor: f32) {
        self.rotation = self.vel_y * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn player() -> (Player, Tuning) {
        let tuning = Tuning::default();
        (Player::new(&tuning), tuning)
    }

    #[test]
    fn test_gravity_accumulates() {
        let (mut p, tuning) = player();
        for _ in 0..60 {
            p.integrate(tuning.gravity, tuning.dt());
        }
        // One second of free fall
        assert!((p.vel_y - GRAVITY).abs() < 0.01);
        assert!(p.pos.y > PLAYER_START_Y);
        assert_eq!(p.pos.x, PLAYER_START_X);
    }

    #[test]
    fn test_hold_applies_impulse() {
        let (mut p, tuning) = player();
        p.apply_control(true, true, &tuning);
        assert_eq!(p.vel_y, -VELOCITY_INCREASE);
        assert!((p.rotation - (-VELOCITY_INCREASE * ROTATION_FACTOR)).abs() < 1e-6);
    }

    #[test]
    fn test_impulse_clamped_at_floor() {
        let (mut p, tuning) = player();
        p.vel_y = MIN_VELOCITY;
        p.apply_control(true, true, &tuning);
        assert_eq!(p.vel_y, MIN_VELOCITY);
    }

    #[test]
    fn test_impulse_near_floor_does_not_overshoot() {
        let (mut p, tuning) = player();
        p.vel_y = MIN_VELOCITY + 10.0;
        p.apply_control(true, true, &tuning);
        assert_eq!(p.vel_y, MIN_VELOCITY);
    }

    #[test]
    fn test_held_velocity_settles_at_floor() {
        let (mut p, tuning) = player();
        for _ in 0..20 {
            p.apply_control(true, true, &tuning);
            assert!(p.vel_y >= MIN_VELOCITY);
        }
        assert_eq!(p.vel_y, MIN_VELOCITY);
    }

    #[test]
    fn test_no_impulse_when_stopped() {
        let (mut p, tuning) = player();
        p.vel_y = 120.0;
        p.apply_control(true, false, &tuning);
        assert_eq!(p.vel_y, 120.0);
        assert!((p.rotation - 120.0 * ROTATION_FACTOR).abs() < 1e-6);
    }

    #[test]
    fn test_release_tracks_velocity() {
        let (mut p, tuning) = player();
        p.vel_y = 200.0;
        p.apply_control(false, true, &tuning);
        assert!((p.rotation - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_release_leaves_rotation_outside_band() {
        let (mut p, tuning) = player();
        p.rotation = 1.2;
        p.vel_y = 0.0;
        p.apply_control(false, true, &tuning);
        assert_eq!(p.rotation, 1.2);
    }

    #[test]
    fn test_reset() {
        let (mut p, tuning) = player();
        p.pos.y = 10.0;
        p.vel_y = -200.0;
        p.rotation = -0.6;
        p.reset(&tuning);
        assert_eq!(p, Player::new(&tuning));
    }

    #[test]
    fn test_bounds_centered() {
        let (p, _) = player();
        let b = p.bounds();
        assert!((b.min.x - (PLAYER_START_X - PLAYER_SIZE / 2.0)).abs() < 1e-4);
        assert!((b.max.y - (PLAYER_START_Y + PLAYER_SIZE / 2.0)).abs() < 1e-4);
    }
}
