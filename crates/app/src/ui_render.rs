//! Rendering for the map panel, stats bar, event log, and terminal overlay.

use crate::game_layout::{FrameLayout, PanelRect};
use crate::ui_text::{controls_line, event_log_line, overlay_text, stats_line};
use delve_app::app_loop::{AppMode, AppState};
use delve_app::{format_seed, format_snapshot_hash};
use delve_core::{Game, Pos, TileKind, within_sight};
use macroquad::prelude::*;

const FOG_COLOR: Color = BLACK;
const FLOOR_COLOR: Color = Color { r: 0.27, g: 0.27, b: 0.27, a: 1.0 };
const WALL_COLOR: Color = Color { r: 0.60, g: 0.60, b: 0.60, a: 1.0 };
const COIN_COLOR: Color = GOLD;
const KEY_COLOR: Color = SKYBLUE;
const DOOR_COLOR: Color = BROWN;
const ENEMY_COLOR: Color = RED;
const PLAYER_COLOR: Color = LIME;
const OVERLAY_DIM: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.6 };

const PANEL_PAD_X: f32 = 10.0;
const PANEL_PAD_Y: f32 = 20.0;
const LINE_HEIGHT: f32 = 18.0;
const EVENT_LOG_CAPACITY: usize = 16;

pub fn draw_frame(game: &Game, app: &AppState, run_seed: u64, layout: &FrameLayout) {
    draw_stats_panel(game, app, run_seed, layout.stats);
    draw_map_panel(game, layout.map);
    draw_event_log(game, layout.event_log);

    if let AppMode::Finished(outcome) = app.mode {
        draw_overlay(layout.map, overlay_text(outcome));
    }
}

fn draw_stats_panel(game: &Game, app: &AppState, run_seed: u64, panel: PanelRect) {
    let text_x = panel.x + PANEL_PAD_X;
    draw_text(&stats_line(&game.state().player), text_x, panel.y + PANEL_PAD_Y, 24.0, WHITE);
    draw_text(&controls_line(app), text_x, panel.y + PANEL_PAD_Y + 22.0, 18.0, LIGHTGRAY);

    let recap = format!(
        "seed {}  snapshot {}",
        format_seed(run_seed),
        format_snapshot_hash(game.snapshot_hash())
    );
    draw_text(&recap, text_x + 420.0, panel.y + PANEL_PAD_Y, 16.0, DARKGRAY);
}

/// Full-grid redraw: fog outside the sight radius, tile colors inside it,
/// enemies only when visible, and the player last so it stays on top.
fn draw_map_panel(game: &Game, panel: PanelRect) {
    let state = game.state();
    let map = &state.map;
    let player_pos = state.player.pos;
    let tile_size = cell_size(panel, map.size);

    for y in 0..map.size {
        for x in 0..map.size {
            let pos = Pos { y: y as i32, x: x as i32 };
            let color = if within_sight(player_pos, pos) {
                tile_color(map.tile_at(pos))
            } else {
                FOG_COLOR
            };
            draw_cell(panel, pos, tile_size, color);
        }
    }

    for enemy in &state.enemies {
        if within_sight(player_pos, enemy.pos) {
            draw_cell(panel, enemy.pos, tile_size, ENEMY_COLOR);
        }
    }

    draw_cell(panel, player_pos, tile_size, PLAYER_COLOR);
}

fn draw_event_log(game: &Game, panel: PanelRect) {
    draw_text("Events", panel.x + PANEL_PAD_X, panel.y + PANEL_PAD_Y, 22.0, YELLOW);

    let events = game.log();
    let start = events.len().saturating_sub(EVENT_LOG_CAPACITY);
    for (index, event) in events[start..].iter().enumerate() {
        draw_text(
            &event_log_line(event),
            panel.x + PANEL_PAD_X,
            panel.y + PANEL_PAD_Y + (index as f32 + 1.0) * LINE_HEIGHT,
            16.0,
            LIGHTGRAY,
        );
    }
}

fn draw_overlay(panel: PanelRect, message: &str) {
    draw_rectangle(panel.x, panel.y, panel.width, panel.height, OVERLAY_DIM);

    let font_size = 48.0;
    let dims = measure_text(message, None, font_size as u16, 1.0);
    draw_text(
        message,
        panel.x + (panel.width - dims.width) / 2.0,
        panel.y + panel.height / 2.0,
        font_size,
        WHITE,
    );
}

fn cell_size(panel: PanelRect, grid_size: usize) -> f32 {
    (panel.width.min(panel.height)) / grid_size as f32
}

fn draw_cell(panel: PanelRect, pos: Pos, tile_size: f32, color: Color) {
    draw_rectangle(
        panel.x + pos.x as f32 * tile_size,
        panel.y + pos.y as f32 * tile_size,
        tile_size,
        tile_size,
        color,
    );
}

fn tile_color(tile: TileKind) -> Color {
    match tile {
        TileKind::Floor => FLOOR_COLOR,
        TileKind::Wall => WALL_COLOR,
        TileKind::Coin => COIN_COLOR,
        TileKind::Key => KEY_COLOR,
        TileKind::Door => DOOR_COLOR,
    }
}
