//! Text formatting for the stats bar, event log entries, and the terminal overlay.

use delve_app::app_loop::{AppMode, AppState};
use delve_app::reason_code;
use delve_core::{GameEvent, Player, RunOutcome};

pub fn stats_line(player: &Player) -> String {
    format!("Health: {}   Score: {}   Keys: {}", player.health, player.score, player.keys)
}

pub fn controls_line(app: &AppState) -> String {
    if let Some(notice) = &app.notice {
        return notice.clone();
    }
    match app.mode {
        AppMode::Finished(outcome) => format!("Run over ({})", reason_code(outcome)),
        AppMode::Playing => "Arrows to move, F5 save, F9 load".to_string(),
    }
}

pub fn overlay_text(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Victory => "You Win!",
        RunOutcome::Defeat => "Game Over",
    }
}

pub fn event_log_line(event: &GameEvent) -> String {
    match event {
        GameEvent::CoinCollected { .. } => "picked up a coin".to_string(),
        GameEvent::KeyCollected { .. } => "found a key".to_string(),
        GameEvent::DoorOpened { pos } => format!("opened the door at ({}, {})", pos.x, pos.y),
        GameEvent::DamageTaken { .. } => "took a hit".to_string(),
        GameEvent::Finished(outcome) => overlay_text(*outcome).to_string(),
    }
}
