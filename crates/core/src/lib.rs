pub mod effects;
pub mod game;
pub mod mapgen;
pub mod snapshot;
pub mod state;
pub mod types;

pub use effects::{Cue, CueSink, RecordedCues, SilentCues};
pub use game::{COIN_SCORE, Game, SIGHT_RADIUS, WIN_SCORE, within_sight};
pub use mapgen::{GenConfig, MapGenerator, TileRule};
pub use snapshot::WorldSnapshot;
pub use state::{Enemy, Map, Player, WorldState};
pub use types::*;
