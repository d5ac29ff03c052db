//! Fixed timestep simulation tick
//!
//! Order within a running tick: gravity, ground scroll, column scroll
//! (regeneration and scoring), collision. The hold control is processed
//! last, in every phase.

use super::collision::detect;
use super::obstacle::GapSource;
use super::scroll::{advance_column, advance_ground, column_start_x};
use super::state::{GameEvent, GameState};

/// Input sampled at the start of a tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap control held down
    pub hold: bool,
    /// Restart requested (only honoured while stopped)
    pub restart: bool,
    /// Idle/demo mode - autopilot flies and restarts
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick<G: GapSource + ?Sized>(state: &mut GameState, input: &TickInput, gaps: &mut G) {
    let mut input = *input;
    if input.idle_mode && !state.is_running() {
        input.restart = true;
    }

    if input.restart {
        state.restart(gaps);
    }

    // Decide after any restart so the autopilot sees the fresh field
    if input.idle_mode {
        input.hold = autopilot_hold(state);
    }

    state.time_ticks += 1;

    if state.is_running() {
        let dt = state.tuning.dt();
        state.player.integrate(state.tuning.gravity, dt);

        advance_ground(&mut state.ground, &state.tuning);
        advance_columns(state, gaps);

        if let Some(hit) = detect(
            &state.player,
            &state.columns,
            &state.ground,
            &state.tuning,
        ) {
            state.stop(hit);
        }
    }

    let running = state.is_running();
    state.player.apply_control(input.hold, running, &state.tuning);
}

fn advance_columns<G: GapSource + ?Sized>(state: &mut GameState, gaps: &mut G) {
    // Wrapped columns come back at the first spawn slot
    let respawn_x = column_start_x(0, &state.tuning);

    for (index, column) in state.columns.iter_mut().enumerate() {
        let step = advance_column(column, &state.tuning);

        if step.scored {
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
            log::debug!("Column {} passed, score {}", index, state.score);
        }

        if step.wrapped {
            state.generator.regenerate(column, respawn_x, gaps);
            state.events.push(GameEvent::ColumnRegenerated {
                index,
                gap_start: column.gap_start,
            });
            log::debug!(
                "Column {} regenerated at x={} with gap at slot {}",
                index,
                column.x,
                column.gap_start
            );
        }
    }
}

/// Autopilot decision for idle mode
///
/// Aims for the gap center of the nearest column the player has not yet
/// cleared. Holds while the predicted resting height (where the current
/// vertical motion would stop) is below that target.
pub fn autopilot_hold(state: &GameState) -> bool {
    let tuning = &state.tuning;
    let player = &state.player;
    let left = player.bounds().min.x;

    let target_y = state
        .columns
        .iter()
        .filter(|c| (c.x + tuning.tile_size) as f32 > left)
        .min_by_key(|c| c.x)
        .map(|c| c.gap_center_y(tuning.tile_size))
        .unwrap_or(tuning.player_start.y);

    let v = player.vel_y;
    let predicted_y = if v < 0.0 {
        // Rising: gravity alone brings it to rest
        player.pos.y - v * v / (2.0 * tuning.gravity.max(f32::EPSILON))
    } else {
        // Falling: holding brakes at impulse rate minus gravity
        let braking = (tuning.velocity_increase * tuning.tick_rate - tuning.gravity)
            .max(f32::EPSILON);
        player.pos.y + v * v / (2.0 * braking)
    };

    predicted_y > target_y
}
