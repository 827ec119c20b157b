//! Top-level game wiring
//!
//! `Game` owns the session, the input hub and the score store, and turns
//! one sensor frame into one tick plus one render snapshot.

use glam::Vec2;

use crate::error::Result;
use crate::highscores::ScoreStore;
use crate::input::{InputHub, PlayerSlot, SensorFrame};
use crate::renderer::RenderSnapshot;
use crate::settings::GameConfig;
use crate::sim::{self, GameEvent, GameSession, TickInput, is_hand_in_cell};

pub struct Game<S: ScoreStore> {
    session: GameSession,
    input: InputHub,
    store: S,
    /// New game requested since the last frame
    new_game_pending: bool,
}

impl<S: ScoreStore> Game<S> {
    pub fn new(config: GameConfig, store: S) -> Result<Self> {
        config.validate()?;
        let seed = config.effective_seed();
        let high_score = store.read_or_default();
        log::info!(
            "New game: {}x{} grid, seed {}, {} hand",
            config.rows,
            config.cols,
            seed,
            config.hand.as_str()
        );
        Ok(Self {
            input: InputHub::new(&config),
            session: GameSession::new(config, seed, high_score),
            store,
            new_game_pending: false,
        })
    }

    /// Process one sensor frame (`None` when the sensor delivered nothing)
    pub fn on_frame(&mut self, frame: Option<&SensorFrame>) -> RenderSnapshot {
        let input = TickInput {
            new_game: std::mem::take(&mut self.new_game_pending),
            ..self.input.process(frame)
        };
        sim::tick(&mut self.session, &input, &mut self.store);

        if self.session.events.contains(&GameEvent::Reset) {
            self.input.reset_gestures();
        }
        RenderSnapshot::capture(&self.session)
    }

    /// Request a full reset on the next frame
    pub fn new_game(&mut self) {
        self.new_game_pending = true;
    }

    /// Save the high score if the current run beat it
    pub fn shutdown(&mut self) -> bool {
        sim::persist_high_score(&self.session, &mut self.store)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn input(&self) -> &InputHub {
        &self.input
    }

    /// Player one's hand as a fraction of the hand region (may fall outside 0..1)
    pub fn hand_location_unit(&self) -> Vec2 {
        self.input.player(PlayerSlot::One).locator.position_unit()
    }

    /// Whether player one's hand is over the given cell
    pub fn is_hand_in_cell(&self, row: usize, col: usize) -> bool {
        let grid = &self.session.grid;
        let locator = &self.input.player(PlayerSlot::One).locator;
        locator.has_position() && is_hand_in_cell(locator.position(), row, col, grid.rows(), grid.cols())
    }
}
