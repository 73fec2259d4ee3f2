//! Per-cell tile rules. The list is applied in order and a later rule that
//! fires replaces whatever an earlier one produced, so precedence is the
//! list order itself.

use crate::types::{Pos, TileKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRule {
    pub tile: TileKind,
    pub chance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GenConfig {
    pub size: usize,
    pub rules: Vec<TileRule>,
    pub player_spawn: Pos,
    pub starting_health: u32,
    /// Spawn cells are taken as-is; nothing checks them against the walls
    /// the rules produce.
    pub enemy_spawns: Vec<Pos>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            size: 20,
            rules: default_rules().to_vec(),
            player_spawn: Pos { y: 1, x: 1 },
            starting_health: 3,
            enemy_spawns: vec![Pos { y: 15, x: 15 }],
        }
    }
}

pub fn default_rules() -> [TileRule; 4] {
    [
        TileRule { tile: TileKind::Wall, chance: 0.10 },
        TileRule { tile: TileKind::Coin, chance: 0.05 },
        TileRule { tile: TileKind::Key, chance: 0.02 },
        TileRule { tile: TileKind::Door, chance: 0.02 },
    ]
}
