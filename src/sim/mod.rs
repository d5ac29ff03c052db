//! Gameplay simulation
//!
//! [`tick()`] drives one fixed step over a [`GameState`]: the player falls
//! and flaps ([`kinematics`]), the ground and columns scroll left
//! ([`scroll`]), wrapped columns are rebuilt with a fresh gap
//! ([`obstacle`]), and the first overlap ([`collision`]) stops the run.
//! Gap placement is the only randomness and comes in through
//! [`GapSource`], so a seed plus an input sequence replays exactly.

pub mod collision;
pub mod kinematics;
pub mod obstacle;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{HitKind, detect};
pub use kinematics::Player;
pub use obstacle::{GapSource, ObstacleColumn, ObstacleGenerator, Segment};
pub use rect::Rect;
pub use scroll::GroundTile;
pub use state::{EventQueue, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, autopilot_hold, tick};
