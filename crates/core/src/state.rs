use serde::{Deserialize, Serialize};

use crate::types::{Pos, TileKind};

/// Square tile grid, row-major. Reads outside the grid resolve to `Wall`
/// so movement code never needs a separate bounds branch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    pub size: usize,
    pub tiles: Vec<TileKind>,
}

impl Map {
    /// All-floor grid with a wall border.
    pub fn new(size: usize) -> Self {
        let mut map = Self { size, tiles: vec![TileKind::Floor; size * size] };
        map.force_border_walls();
        map
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0
                || pos.y == 0
                || pos.x as usize == self.size - 1
                || pos.y as usize == self.size - 1)
    }

    /// Overwrite every border cell with `Wall`, whatever landed there before.
    pub fn force_border_walls(&mut self) {
        for i in 0..self.size {
            self.tiles[i] = TileKind::Wall;
            self.tiles[(self.size - 1) * self.size + i] = TileKind::Wall;
            self.tiles[i * self.size] = TileKind::Wall;
            self.tiles[i * self.size + (self.size - 1)] = TileKind::Wall;
        }
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.size + (pos.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Pos,
    pub health: u32,
    pub keys: u32,
    pub score: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Pos,
}

/// Everything the simulation mutates, and the only unit that gets saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    pub map: Map,
    pub player: Player,
    pub enemies: Vec<Enemy>,
}

impl WorldState {
    /// Stable byte encoding for fingerprinting; two worlds hash equal iff
    /// their observable state is equal.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.map.size as u32).to_le_bytes());
        for tile in &self.map.tiles {
            bytes.push(match tile {
                TileKind::Floor => 0,
                TileKind::Wall => 1,
                TileKind::Coin => 2,
                TileKind::Key => 3,
                TileKind::Door => 4,
            });
        }

        bytes.extend(self.player.pos.y.to_le_bytes());
        bytes.extend(self.player.pos.x.to_le_bytes());
        bytes.extend(self.player.health.to_le_bytes());
        bytes.extend(self.player.keys.to_le_bytes());
        bytes.extend(self.player.score.to_le_bytes());

        bytes.extend((self.enemies.len() as u32).to_le_bytes());
        for enemy in &self.enemies {
            bytes.extend(enemy.pos.y.to_le_bytes());
            bytes.extend(enemy.pos.x.to_le_bytes());
        }

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_has_wall_border_and_floor_interior() {
        let map = Map::new(6);
        for y in 0..6 {
            for x in 0..6 {
                let pos = Pos { y, x };
                let expected =
                    if map.is_border(pos) { TileKind::Wall } else { TileKind::Floor };
                assert_eq!(map.tile_at(pos), expected, "unexpected tile at {pos:?}");
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_are_walls() {
        let map = Map::new(5);
        assert_eq!(map.tile_at(Pos { y: -1, x: 2 }), TileKind::Wall);
        assert_eq!(map.tile_at(Pos { y: 2, x: -1 }), TileKind::Wall);
        assert_eq!(map.tile_at(Pos { y: 5, x: 2 }), TileKind::Wall);
        assert_eq!(map.tile_at(Pos { y: 2, x: 5 }), TileKind::Wall);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut map = Map::new(5);
        let before = map.clone();
        map.set_tile(Pos { y: -3, x: 9 }, TileKind::Coin);
        assert_eq!(map, before);
    }

    #[test]
    fn canonical_bytes_differ_when_a_tile_changes() {
        let mut world = WorldState {
            map: Map::new(6),
            player: Player { pos: Pos { y: 1, x: 1 }, health: 3, keys: 0, score: 0 },
            enemies: vec![Enemy { pos: Pos { y: 4, x: 4 } }],
        };
        let before = world.canonical_bytes();
        world.map.set_tile(Pos { y: 2, x: 2 }, TileKind::Coin);
        assert_ne!(before, world.canonical_bytes());
    }

    #[test]
    fn canonical_bytes_are_stable_for_clones() {
        let world = WorldState {
            map: Map::new(6),
            player: Player { pos: Pos { y: 1, x: 1 }, health: 3, keys: 2, score: 40 },
            enemies: vec![Enemy { pos: Pos { y: 3, x: 2 } }, Enemy { pos: Pos { y: 4, x: 4 } }],
        };
        assert_eq!(world.canonical_bytes(), world.clone().canonical_bytes());
    }
}
