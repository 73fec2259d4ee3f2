//! Random board generation split into the rule table and the generator.

mod generator;
mod rules;

pub use generator::MapGenerator;
pub use rules::{GenConfig, TileRule, default_rules};

use crate::state::WorldState;

pub fn generate_world(seed: u64, config: &GenConfig) -> WorldState {
    MapGenerator::new(seed, config.clone()).generate()
}
