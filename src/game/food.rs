use rand::seq::SliceRandom;
use rand::Rng;

use super::cell::Cell;

/// Picks a uniformly random cell not covered by `snake`.
///
/// Scans the whole board once and samples from the free cells, so it always
/// terminates. Returns `None` when the snake covers every cell.
pub fn place_food<R: Rng + ?Sized>(
    snake: &[Cell],
    width: i32,
    height: i32,
    rng: &mut R,
) -> Option<Cell> {
    let free: Vec<Cell> = (0..height)
        .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
        .filter(|cell| !snake.contains(cell))
        .collect();
    free.choose(rng).copied()
}
