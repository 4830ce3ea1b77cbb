use super::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the board
    Wall,
    /// Head landed on its own body
    SelfBite,
}

/// Checks the head of `snake` against the walls and the rest of the body.
/// Both kinds end the game the same way; the kind is only reported for logs.
pub fn detect_collision(snake: &[Cell], width: i32, height: i32) -> Option<Collision> {
    let (head, body) = snake.split_first()?;
    if !head.is_within(width, height) {
        return Some(Collision::Wall);
    }
    if body.contains(head) {
        return Some(Collision::SelfBite);
    }
    None
}
