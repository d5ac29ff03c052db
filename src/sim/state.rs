//! Game state and phase transitions
//!
//! Everything the simulation mutates lives in [`GameState`]. It is built
//! once by the host and reset in place on restart.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::collision::HitKind;
use super::kinematics::Player;
use super::obstacle::{GapSource, ObstacleColumn, ObstacleGenerator};
use super::scroll::{GroundTile, column_start_x, initial_ground};
use crate::config::Tuning;
use crate::consts::MAX_PENDING_EVENTS;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Field scrolls, collisions are checked
    Running,
    /// Frozen after a collision, waiting for restart
    Stopped,
}

/// Notable things that happened during a tick, for HUD and audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Scored { score: u64 },
    Collided { with: HitKind },
    ColumnRegenerated { index: usize, gap_start: u32 },
    Restarted,
}

/// Pending events, oldest first
///
/// Holds at most [`MAX_PENDING_EVENTS`]; once full, the oldest event is
/// dropped for each new one, so a host that never drains stays bounded.
#[derive(Debug, Clone, Default)]
pub struct EventQueue(VecDeque<GameEvent>);

impl EventQueue {
    pub fn push(&mut self, event: GameEvent) {
        if self.0.len() >= MAX_PENDING_EVENTS {
            self.0.pop_front();
        }
        self.0.push_back(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.0.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.0.contains(event)
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.0.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.0.iter()
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub generator: ObstacleGenerator,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
    pub player: Player,
    pub ground: Vec<GroundTile>,
    /// Obstacle columns, in spawn order
    pub columns: Vec<ObstacleColumn>,
    /// Events since the host last drained them
    #[serde(skip)]
    pub events: EventQueue,
}

impl GameState {
    /// Validate `tuning` and lay out a fresh field
    pub fn new<G: GapSource + ?Sized>(tuning: Tuning, gaps: &mut G) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let generator = ObstacleGenerator::new(&tuning)?;
        let columns = spawn_columns(&generator, &tuning, gaps);

        Ok(Self {
            player: Player::new(&tuning),
            ground: initial_ground(&tuning),
            columns,
            generator,
            tuning,
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            events: EventQueue::default(),
        })
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Freeze the game after a collision
    ///
    /// Returns false if already stopped, so a sustained overlap only
    /// transitions once.
    pub fn stop(&mut self, hit: HitKind) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = GamePhase::Stopped;
        self.events.push(GameEvent::Collided { with: hit });
        log::info!(
            "Collided with {:?} at tick {}, score {}",
            hit,
            self.time_ticks,
            self.score
        );
        true
    }

    /// Reset score, player and columns and resume play
    ///
    /// Only honoured while stopped; returns whether a restart happened.
    pub fn restart<G: GapSource + ?Sized>(&mut self, gaps: &mut G) -> bool {
        if self.is_running() {
            log::debug!("Restart ignored while running");
            return false;
        }
        self.score = 0;
        self.player.reset(&self.tuning);
        self.columns = spawn_columns(&self.generator, &self.tuning, gaps);
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted at tick {}", self.time_ticks);
        true
    }

    /// Whether the host should show its restart affordance
    #[inline]
    pub fn restart_prompt_visible(&self) -> bool {
        self.phase == GamePhase::Stopped
    }

    /// HUD score text
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}

fn spawn_columns<G: GapSource + ?Sized>(
    generator: &ObstacleGenerator,
    tuning: &Tuning,
    gaps: &mut G,
) -> Vec<ObstacleColumn> {
    (0..tuning.column_count as usize)
        .map(|i| generator.generate(column_start_x(i, tuning), gaps))
        .collect()
}
