use delve_core::{CueSink, Direction, Game, RunOutcome, SessionPhase};
use macroquad::prelude::KeyCode;

/// Persistence actions raised during a frame's `tick()`.
/// Drained by the caller, which owns the save store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersistRequest {
    Save,
    Load,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    Finished(RunOutcome),
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Latest save/load notice for the status line.
    pub notice: Option<String>,
    pub persist_requests: Vec<PersistRequest>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one frame's key presses. All gameplay input is dead once the
    /// session finished; unrecognized keys are no-ops either way.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode], cues: &mut dyn CueSink) {
        self.persist_requests.clear();

        if matches!(self.mode, AppMode::Finished(_)) {
            return;
        }

        if let Some(dir) = movement_key(keys_pressed) {
            game.apply_move(dir, cues);
            self.sync_phase(game);
            // A move that ends the session also kills the rest of the frame's input.
            if matches!(self.mode, AppMode::Finished(_)) {
                return;
            }
        }
        if keys_pressed.contains(&KeyCode::F5) {
            self.persist_requests.push(PersistRequest::Save);
        }
        if keys_pressed.contains(&KeyCode::F9) {
            self.persist_requests.push(PersistRequest::Load);
        }
    }

    /// The frame's chase step; skipped entirely once finished.
    pub fn advance(&mut self, game: &mut Game, cues: &mut dyn CueSink) {
        if matches!(self.mode, AppMode::Finished(_)) {
            return;
        }
        game.advance_enemies(cues);
        self.sync_phase(game);
    }

    pub fn sync_phase(&mut self, game: &Game) {
        if let SessionPhase::Finished(outcome) = game.phase() {
            self.mode = AppMode::Finished(outcome);
        }
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }
}

fn movement_key(keys_pressed: &[KeyCode]) -> Option<Direction> {
    // One step per frame; the first recognized arrow wins.
    keys_pressed.iter().find_map(|key| match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    })
}
