//! Greedy axis-chase stepping for enemies.

use crate::state::Map;
use crate::types::{Pos, TileKind};

/// One chase step toward `player`: move along the axis with the greater
/// absolute delta, ties favoring vertical, unless a wall blocks the
/// destination. Returns where the enemy ends up (possibly unchanged).
pub(super) fn chase_step(map: &Map, enemy: Pos, player: Pos) -> Pos {
    let dx = player.x - enemy.x;
    let dy = player.y - enemy.y;

    let target = if dx.abs() > dy.abs() {
        Pos { y: enemy.y, x: enemy.x + dx.signum() }
    } else {
        Pos { y: enemy.y + dy.signum(), x: enemy.x }
    };

    if map.tile_at(target) == TileKind::Wall { enemy } else { target }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_chase_closes_the_larger_axis() {
        let map = Map::new(10);
        let next = chase_step(&map, Pos { y: 5, x: 5 }, Pos { y: 1, x: 5 });
        assert_eq!(next, Pos { y: 4, x: 5 });
    }

    #[test]
    fn horizontal_chase_closes_the_larger_axis() {
        let map = Map::new(10);
        let next = chase_step(&map, Pos { y: 5, x: 2 }, Pos { y: 4, x: 8 });
        assert_eq!(next, Pos { y: 5, x: 3 });
    }

    #[test]
    fn equal_deltas_favor_the_vertical_axis() {
        let map = Map::new(10);
        let next = chase_step(&map, Pos { y: 5, x: 5 }, Pos { y: 2, x: 2 });
        assert_eq!(next, Pos { y: 4, x: 5 });
    }

    #[test]
    fn wall_blocks_the_step_entirely() {
        let mut map = Map::new(10);
        map.set_tile(Pos { y: 4, x: 5 }, TileKind::Wall);
        let next = chase_step(&map, Pos { y: 5, x: 5 }, Pos { y: 1, x: 5 });
        // No fallback to the other axis; the enemy just stays put.
        assert_eq!(next, Pos { y: 5, x: 5 });
    }

    #[test]
    fn overlapping_enemy_stays_in_place() {
        let map = Map::new(10);
        let next = chase_step(&map, Pos { y: 3, x: 3 }, Pos { y: 3, x: 3 });
        assert_eq!(next, Pos { y: 3, x: 3 });
    }
}
