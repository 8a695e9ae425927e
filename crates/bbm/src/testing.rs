//! ASCII levels for tests.
//!
//! `.` air, `T` teleporter, `#` wall, `D` duplicator, `C` charger,
//! `o` lamp off, `O` lamp on; balls `<` `>` uncharged, `{` `}` charged.

use proptest::prelude::*;

use crate::ball::{Ball, BallSet};
use crate::tile::Tile;
use crate::world::World;
use crate::Grid;

fn tile_char(tile: Tile) -> char {
    match tile {
        Tile::Air => '.',
        Tile::Teleporter => 'T',
        Tile::Wall => '#',
        Tile::Duplicator => 'D',
        Tile::Charger => 'C',
        Tile::LampOff => 'o',
        Tile::LampOn => 'O',
    }
}

fn ball_char(ball: &Ball) -> char {
    ['<', '>', '{', '}'][ball.code()]
}

/// Build a world from interior rows of equal length.
pub(crate) fn world_from_rows(rows: &[&str]) -> World {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut grid = Grid::new(width, height);
    let mut balls = BallSet::new();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "ragged row {y}: {row:?}");
        for (x, ch) in row.chars().enumerate() {
            let index = grid.interior_index(x, y);
            match ch {
                '<' => balls.push(Ball::from_code(index, 0)),
                '>' => balls.push(Ball::from_code(index, 1)),
                '{' => balls.push(Ball::from_code(index, 2)),
                '}' => balls.push(Ball::from_code(index, 3)),
                _ => {
                    let tile = Tile::ALL
                        .into_iter()
                        .find(|&t| tile_char(t) == ch)
                        .unwrap_or_else(|| panic!("unknown level char {ch:?}"));
                    grid.set(index, tile);
                }
            }
        }
    }
    World::new(grid, balls)
}

/// Interior rows with balls drawn over their tiles.
pub(crate) fn dump(world: &World) -> Vec<String> {
    let grid = world.grid();
    let mut rows: Vec<Vec<char>> = (0..grid.interior_height())
        .map(|y| {
            (0..grid.interior_width())
                .map(|x| tile_char(grid.get(grid.interior_index(x, y))))
                .collect()
        })
        .collect();
    for ball in world.balls() {
        let (x, y) = grid.coords(ball.position());
        rows[y - 1][x - 1] = ball_char(ball);
    }
    rows.into_iter().map(|r| r.into_iter().collect()).collect()
}

pub(crate) fn ball_at(grid: &Grid, x: usize, y: usize, facing_right: bool, charged: bool) -> Ball {
    Ball::new(grid.interior_index(x, y), facing_right, charged)
}

fn arb_level_char() -> impl Strategy<Value = char> {
    prop_oneof![
        8 => Just('.'),
        3 => Just('#'),
        1 => Just('T'),
        1 => Just('D'),
        1 => Just('C'),
        1 => Just('o'),
        1 => Just('O'),
        2 => proptest::sample::select(vec!['<', '>', '{', '}']),
    ]
}

/// Random level with interior dimensions in the given ranges.
pub(crate) fn arb_world(
    widths: std::ops::Range<usize>,
    heights: std::ops::Range<usize>,
) -> impl Strategy<Value = World> {
    (widths, heights)
        .prop_flat_map(|(w, h)| proptest::collection::vec(arb_level_char(), w * h).prop_map(move |cells| (w, cells)))
        .prop_map(|(w, cells)| {
            let rows: Vec<String> = cells.chunks(w).map(|c| c.iter().collect()).collect();
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            world_from_rows(&rows)
        })
}
