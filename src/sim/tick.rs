//! Per-frame game loop
//!
//! One call to `tick` per sensor frame. There is no wall clock: spawn and
//! move timing come from the cycle countdown, the game-over screen from its
//! own countdown.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::state::{CycleState, GameEvent, GamePhase, GameSession};
use crate::highscores::ScoreStore;

/// Status line shown after a new game request
pub const NEW_GAME_STATUS: &str = "INVASION!";

/// Input for a single tick (player one only)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player one's body was in this frame. Untracked ticks change nothing.
    pub tracked: bool,
    /// Open→closed transition this tick
    pub fired: bool,
    /// Last known normalized hand position
    pub hand: Option<Vec2>,
    /// Explicit new game request
    pub new_game: bool,
}

/// Advance the session by one sensor frame
pub fn tick(session: &mut GameSession, input: &TickInput, store: &mut dyn ScoreStore) {
    session.events.clear();

    if input.new_game {
        // A new game request ends the running session
        if !session.is_over() && store.record_if_higher(session.score, session.high_score) {
            session.events.push(GameEvent::HighScore {
                score: session.score,
            });
        }
        reset_game(session, store);
        session.status_line = Some(NEW_GAME_STATUS.to_string());
    }

    if !input.tracked {
        return;
    }

    session.time_ticks += 1;

    match session.phase {
        GamePhase::NotStarted => {
            // The starting fire is consumed here and does not also shoot
            if input.fired {
                log::info!("Game started (high score {})", session.high_score);
                session.phase = GamePhase::Playing;
                session.events.push(GameEvent::Started);
            }
        }

        GamePhase::Playing => play(session, input, store),

        GamePhase::GameOverPending => count_down_game_over(session),

        GamePhase::GameOverHeld => {
            if input.fired {
                reset_game(session, store);
            }
        }
    }
}

fn play(session: &mut GameSession, input: &TickInput, store: &mut dyn ScoreStore) {
    if let Some(hand) = input.hand {
        let shot = collision::resolve(hand, input.fired, &mut session.grid, session.config.kill_score);
        if let Some(kill) = shot.kill {
            session.score = session.score.saturating_add(shot.score_delta);
            log::debug!("Kill at ({}, {}), score {}", kill.row, kill.col, session.score);
            session.events.push(GameEvent::Kill {
                row: kill.row,
                col: kill.col,
                score: session.score,
            });
        }
    }

    session.difficulty.evaluate(session.score);

    if session.grid.has_invader_at_bottom() {
        enter_game_over(session, store);
        return;
    }

    advance_cycle(session);
}

/// Wait, then move, then reload and spawn
fn advance_cycle(session: &mut GameSession) {
    match session.cycle {
        CycleState::Waiting(n) if n > 0 => {
            session.cycle = CycleState::Waiting(n - 1);
        }
        CycleState::Waiting(_) => {
            session.grid.shift_down();
            session.cycle = CycleState::Consumed;
            session.events.push(GameEvent::Moved);
            log::trace!("Grid after move:\n{}", session.grid.dump());
        }
        CycleState::Consumed => {
            let max_spawns = session.difficulty.max_spawns.max(1);
            session.cycle = CycleState::Waiting(session.difficulty.cadence);
            let count = session.rng.random_range(1..=max_spawns);
            session.grid.spawn(count, &mut session.rng);
            log::debug!(
                "Spawned {} invader(s), next move in {} ticks",
                count,
                session.difficulty.cadence
            );
            session.events.push(GameEvent::Spawned { count });
        }
    }
}

fn enter_game_over(session: &mut GameSession, store: &mut dyn ScoreStore) {
    log::info!("Game over, final score {}", session.score);
    session.phase = GamePhase::GameOverPending;
    session.game_over_countdown = session.config.game_over_hold;
    session.events.push(GameEvent::GameOver {
        score: session.score,
    });

    if store.record_if_higher(session.score, session.high_score) {
        session.events.push(GameEvent::HighScore {
            score: session.score,
        });
    }

    // The detecting tick counts toward the hold
    count_down_game_over(session);
}

fn count_down_game_over(session: &mut GameSession) {
    if !session.grid.has_invader_at_bottom() {
        return;
    }
    session.game_over_countdown = session.game_over_countdown.saturating_sub(1);
    if session.game_over_countdown == 0 {
        log::info!("Game over screen held, waiting for a new game");
        session.phase = GamePhase::GameOverHeld;
        session.events.push(GameEvent::GameOverHeld);
    }
}

/// Full reset: score, grid, difficulty, countdowns and phase. The high
/// score is re-read from the store.
pub fn reset_game(session: &mut GameSession, store: &mut dyn ScoreStore) {
    let high_score = store.read_or_default();
    session.reset(high_score);
    session.events.push(GameEvent::Reset);
    log::info!("Game reset");
}

/// Save the current score if it beats the stored high score (shutdown path)
pub fn persist_high_score(session: &GameSession, store: &mut dyn ScoreStore) -> bool {
    store.record_if_higher(session.score, session.high_score)
}
