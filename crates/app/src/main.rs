use std::io;

use macroquad::prelude::*;
use taffy::TaffyTree;

use delve_app::app_loop::{AppState, PersistRequest};
use delve_app::save_file::SaveStore;
use delve_app::seed::{generate_runtime_seed, resolve_seed_from_args};
use delve_core::{GenConfig, Game};

mod audio;
mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(source) => source.value(),
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };

    let mut game = Game::new(seed, &GenConfig::default());
    let mut app = AppState::new();
    let mut cues = audio::CueBank::load().await;
    let store = SaveStore::at_default_location();

    let mut taffy = TaffyTree::new();
    let nodes = game_layout::setup_layout(&mut taffy);

    loop {
        let keys_pressed = frame_input::capture_frame_input();
        app.tick(&mut game, &keys_pressed, &mut cues);
        handle_persist_requests(&mut app, &mut game, store.as_ref());

        let layout = game_layout::compute_frame_layout(
            &mut taffy,
            &nodes,
            screen_width(),
            screen_height(),
        );
        clear_background(BLACK);
        ui_render::draw_frame(&game, &app, seed, &layout);

        // Enemies advance after the draw so the frame on screen shows their
        // pre-move positions.
        app.advance(&mut game, &mut cues);

        next_frame().await
    }
}

fn handle_persist_requests(app: &mut AppState, game: &mut Game, store: Option<&SaveStore>) {
    let requests: Vec<PersistRequest> = app.persist_requests.drain(..).collect();
    for request in requests {
        let Some(store) = store else {
            app.set_notice("No writable data directory.");
            continue;
        };

        match request {
            PersistRequest::Save => match store.save(&game.snapshot()) {
                Ok(()) => app.set_notice("Game saved!"),
                Err(err) => app.set_notice(format!("Save failed: {err}")),
            },
            PersistRequest::Load => match store.load() {
                Ok(snapshot) => {
                    game.restore(snapshot);
                    app.set_notice("Game loaded.");
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    app.set_notice("No saved game.");
                }
                Err(_) => app.set_notice("Save file could not be read."),
            },
        }
    }
}
