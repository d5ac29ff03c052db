//! Host-facing game facade
//!
//! Owns the state, the seeded RNG and the sampled input, and turns
//! variable frame times into fixed simulation ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::Tuning;
use crate::consts::MAX_SUBSTEPS;
use crate::error::ConfigError;
use crate::render::{SpriteInstance, sprite_instances};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    rng: Pcg32,
    input: TickInput,
    accumulator: f32,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(tuning, &mut rng)?;
        log::info!("Started new game with seed: {}", seed);
        Ok(Self {
            state,
            rng,
            input: TickInput::default(),
            accumulator: 0.0,
        })
    }

    /// Advance exactly one fixed step
    pub fn tick(&mut self) {
        let input = self.input;
        tick(&mut self.state, &input, &mut self.rng);
        // Clear one-shot inputs after processing
        self.input.restart = false;
    }

    /// Run as many fixed steps as `frame_dt` covers; returns the count
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        let step = self.state.tuning.dt();
        // A bad frame time must not poison the accumulator
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, 0.1)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            self.tick();
            self.accumulator -= step;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Sample the flap control
    pub fn set_hold(&mut self, hold: bool) {
        self.input.hold = hold;
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
    }

    /// Restart now if stopped; returns whether it happened
    pub fn request_restart(&mut self) -> bool {
        self.state.restart(&mut self.rng)
    }

    pub fn current_score(&self) -> u64 {
        self.state.score
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn restart_prompt_visible(&self) -> bool {
        self.state.restart_prompt_visible()
    }

    pub fn score_label(&self) -> String {
        self.state.score_label()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn sprite_instances(&self) -> Vec<SpriteInstance> {
        sprite_instances(&self.state)
    }
}
