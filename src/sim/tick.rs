//! Per-frame simulation tick
//!
//! Core game loop that advances the road by one frame.

use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Steer left (ArrowLeft / a held)
    pub left: bool,
    /// Steer right (ArrowRight / d held)
    pub right: bool,
}

/// Advance the game state by one frame
///
/// Order within a tick: steer, clamp to road, spawn, then sweep opponents
/// newest-first. The sweep stops at the first collision, leaving the older
/// opponents un-advanced for that frame. Nothing changes while game over.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    // Player movement
    state.player.steer(input);
    state
        .player
        .clamp_to_road(state.tuning.road_left(), state.tuning.road_right());

    // Spawning
    if let Some(opponent) = state.spawner.tick(&mut state.rng, &state.tuning) {
        log::debug!(
            "Spawned opponent at x={:.1} speed={:.2}",
            opponent.pos.x,
            opponent.speed
        );
        events.push(GameEvent::Spawned {
            x: opponent.pos.x,
            speed: opponent.speed,
        });
        state.opponents.push(opponent);
    }

    // Sweep newest-first, marking passed opponents for removal
    let canvas_height = state.tuning.canvas_height;
    let mut passed = vec![false; state.opponents.len()];
    let mut score = state.score;
    let mut crashed = false;

    for (i, opponent) in state.opponents.iter_mut().enumerate().rev() {
        let off_screen = opponent.advance(canvas_height);

        if opponent.collides_with(&state.player) {
            crashed = true;
            break;
        }

        if off_screen {
            passed[i] = true;
            score += state.tuning.score_per_pass;
            events.push(GameEvent::Passed { score });
        }
    }

    if passed.contains(&true) {
        let mut flags = passed.into_iter();
        state
            .opponents
            .retain(|_| !flags.next().unwrap_or(false));
        state.score = score;
    }

    if crashed {
        state.phase = GamePhase::GameOver;
        log::info!("Crash! Game over with score {}", state.score);
        events.push(GameEvent::Crashed { score: state.score });
    }

    events
}
