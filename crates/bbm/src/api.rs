//! Relative-offset view of the grid around one cell.

use crate::tile::Tile;
use crate::Grid;

/// Neighbour offsets in the order interactions are applied: up, down, left, right.
pub const NEIGHBORS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Out-of-bounds reads return Wall, writes are no-ops.
#[derive(Debug)]
pub struct TileApi<'a> {
    pub grid: &'a mut Grid,
    pub position: usize,
}

impl<'a> TileApi<'a> {
    pub fn new(grid: &'a mut Grid, position: usize) -> Self {
        Self { grid, position }
    }

    /// Flattened index `(dx, dy)` away from the centre cell.
    #[must_use]
    pub fn index(&self, dx: i32, dy: i32) -> usize {
        self.grid.offset(self.position, dx, dy)
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Tile {
        self.grid.get(self.index(dx, dy))
    }

    pub fn set(&mut self, dx: i32, dy: i32, tile: Tile) {
        let index = self.index(dx, dy);
        self.grid.set(index, tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_tile() -> impl Strategy<Value = Tile> {
        proptest::sample::select(Tile::ALL.to_vec())
    }

    #[test]
    fn neighbors_read_up_down_left_right() {
        let mut grid = Grid::new(3, 3);
        grid.set(grid.interior_index(1, 0), Tile::Duplicator);
        grid.set(grid.interior_index(1, 2), Tile::Charger);
        grid.set(grid.interior_index(0, 1), Tile::LampOff);
        grid.set(grid.interior_index(2, 1), Tile::LampOn);
        let centre = grid.interior_index(1, 1);
        let api = TileApi::new(&mut grid, centre);
        let seen: Vec<Tile> = NEIGHBORS.iter().map(|&(dx, dy)| api.get(dx, dy)).collect();
        assert_eq!(
            seen,
            vec![Tile::Duplicator, Tile::Charger, Tile::LampOff, Tile::LampOn]
        );
    }

    proptest! {
        #[test]
        fn prop_tileapi_get_set_round_trip(
            x in 0usize..16,
            y in 0usize..16,
            dx in -3i32..=3,
            dy in -3i32..=3,
            tile in arb_tile(),
        ) {
            let tx = x as i32 + dx;
            let ty = y as i32 + dy;
            prop_assume!((0..16).contains(&tx) && (0..16).contains(&ty));

            let mut grid = Grid::new(16, 16);
            let centre = grid.interior_index(x, y);
            let mut api = TileApi::new(&mut grid, centre);
            api.set(dx, dy, tile);
            prop_assert_eq!(api.get(dx, dy), tile);
            prop_assert_eq!(grid.get_xy(tx + 1, ty + 1), tile);
        }
    }

    proptest! {
        #[test]
        fn prop_tileapi_border_is_read_only(
            x in 0usize..16,
            y in 0usize..16,
            side in 0u8..4,
            along in 0i32..18,
            tile in arb_tile(),
        ) {
            // A padded coordinate on the wall ring.
            let (px, py) = match side {
                0 => (along, 0),
                1 => (along, 17),
                2 => (0, along),
                _ => (17, along),
            };
            let dx = px - 1 - x as i32;
            let dy = py - 1 - y as i32;

            let mut grid = Grid::new(16, 16);
            let before = grid.clone();
            let centre = grid.interior_index(x, y);
            let mut api = TileApi::new(&mut grid, centre);
            prop_assert_eq!(api.get(dx, dy), Tile::Wall);
            api.set(dx, dy, tile);
            prop_assert_eq!(&*api.grid, &before);
        }
    }
}
