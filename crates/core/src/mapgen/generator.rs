//! Seeded board generation: random fill driven by the rule table, then the
//! border is forced back to walls.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use super::rules::GenConfig;
use crate::state::{Enemy, Map, Player, WorldState};
use crate::types::{Pos, TileKind};

pub struct MapGenerator {
    seed: u64,
    config: GenConfig,
}

impl MapGenerator {
    pub fn new(seed: u64, config: GenConfig) -> Self {
        Self { seed, config }
    }

    pub fn generate(&self) -> WorldState {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let size = self.config.size;
        let mut map = Map::new(size);

        // Every cell gets randomized, border included; the border is
        // re-walled afterwards, matching the rule-then-override order.
        for y in 0..size {
            for x in 0..size {
                let mut tile = TileKind::Floor;
                for rule in &self.config.rules {
                    if chance_hit(&mut rng, rule.chance) {
                        tile = rule.tile;
                    }
                }
                map.set_tile(Pos { y: y as i32, x: x as i32 }, tile);
            }
        }
        map.force_border_walls();

        WorldState {
            map,
            player: Player {
                pos: self.config.player_spawn,
                health: self.config.starting_health,
                keys: 0,
                score: 0,
            },
            enemies: self.config.enemy_spawns.iter().map(|&pos| Enemy { pos }).collect(),
        }
    }
}

fn chance_hit(rng: &mut ChaCha8Rng, chance: f64) -> bool {
    // 53 high bits give a uniform draw in [0, 1).
    let unit = (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
    unit < chance
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use xxhash_rust::xxh3::xxh3_64;

    use super::*;
    use crate::mapgen::rules::TileRule;

    fn tile_counts(world: &WorldState) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for tile in &world.map.tiles {
            counts[*tile as usize] += 1;
        }
        counts
    }

    #[test]
    fn same_seed_and_config_produce_byte_identical_worlds() {
        let config = GenConfig::default();
        let a = MapGenerator::new(123_456, config.clone()).generate();
        let b = MapGenerator::new(123_456, config).generate();
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        assert_eq!(xxh3_64(&a.canonical_bytes()), xxh3_64(&b.canonical_bytes()));
    }

    #[test]
    fn changing_the_seed_changes_the_board() {
        let config = GenConfig::default();
        let a = MapGenerator::new(1, config.clone()).generate();
        let b = MapGenerator::new(2, config).generate();
        assert_ne!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn later_rules_override_earlier_ones() {
        // Both rules always fire, so every cell must end up as the later tile.
        let config = GenConfig {
            rules: vec![
                TileRule { tile: TileKind::Wall, chance: 1.0 },
                TileRule { tile: TileKind::Coin, chance: 1.0 },
            ],
            ..GenConfig::default()
        };
        let world = MapGenerator::new(7, config).generate();
        for y in 1..(world.map.size as i32 - 1) {
            for x in 1..(world.map.size as i32 - 1) {
                assert_eq!(world.map.tile_at(Pos { y, x }), TileKind::Coin);
            }
        }
    }

    #[test]
    fn zero_chances_leave_an_all_floor_interior() {
        let config = GenConfig {
            rules: vec![TileRule { tile: TileKind::Wall, chance: 0.0 }],
            ..GenConfig::default()
        };
        let world = MapGenerator::new(99, config).generate();
        let counts = tile_counts(&world);
        let border_cells = 4 * (world.map.size - 1);
        assert_eq!(counts[TileKind::Wall as usize], border_cells);
        assert_eq!(counts[TileKind::Floor as usize], world.map.size * world.map.size - border_cells);
    }

    #[test]
    fn default_rules_scatter_every_tile_kind_somewhere() {
        // One 20x20 board per seed is small, so sample a handful of seeds.
        let mut counts = [0usize; 5];
        for seed in 0..10 {
            let world = MapGenerator::new(seed, GenConfig::default()).generate();
            let board = tile_counts(&world);
            for (total, count) in counts.iter_mut().zip(board) {
                *total += count;
            }
        }
        assert!(counts[TileKind::Coin as usize] > 0);
        assert!(counts[TileKind::Key as usize] > 0);
        assert!(counts[TileKind::Door as usize] > 0);
    }

    #[test]
    fn spawns_come_from_the_config_unvalidated() {
        let config = GenConfig {
            player_spawn: Pos { y: 3, x: 4 },
            starting_health: 5,
            enemy_spawns: vec![Pos { y: 10, x: 2 }, Pos { y: 2, x: 10 }],
            ..GenConfig::default()
        };
        let world = MapGenerator::new(42, config).generate();
        assert_eq!(world.player.pos, Pos { y: 3, x: 4 });
        assert_eq!(world.player.health, 5);
        assert_eq!(world.player.keys, 0);
        assert_eq!(world.player.score, 0);
        assert_eq!(
            world.enemies.iter().map(|enemy| enemy.pos).collect::<Vec<_>>(),
            vec![Pos { y: 10, x: 2 }, Pos { y: 2, x: 10 }]
        );
    }

    proptest! {
        #[test]
        fn border_is_walls_for_every_seed(seed in any::<u64>()) {
            let world = MapGenerator::new(seed, GenConfig::default()).generate();
            let size = world.map.size as i32;
            for i in 0..size {
                prop_assert_eq!(world.map.tile_at(Pos { y: 0, x: i }), TileKind::Wall);
                prop_assert_eq!(world.map.tile_at(Pos { y: size - 1, x: i }), TileKind::Wall);
                prop_assert_eq!(world.map.tile_at(Pos { y: i, x: 0 }), TileKind::Wall);
                prop_assert_eq!(world.map.tile_at(Pos { y: i, x: size - 1 }), TileKind::Wall);
            }
        }
    }
}
