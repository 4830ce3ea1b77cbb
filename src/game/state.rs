use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::cell::Cell;
use super::collision::detect_collision;
use super::config::{GameConfig, INITIAL_SNAKE};
use super::direction::Direction;
use super::food::place_food;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Paused,
    /// Hit a wall or itself
    Crashed,
    /// Filled the whole board
    Won,
}

/// The whole game: snake, food, score and flags, plus the rules that
/// mutate them. Has no knowledge of windows, keys or drawing.
#[derive(Debug, Clone)]
pub struct GameState {
    width: i32,
    height: i32,
    score_increment: u32,
    snake: Vec<Cell>,
    food: Cell,
    /// Direction applied by the last step
    direction: Direction,
    /// Direction the next step will apply
    next_direction: Direction,
    score: u32,
    game_over: bool,
    paused: bool,
    won: bool,
    rng: StdRng,
}

impl GameState {
    /// Starts a fresh game with the fixed opening layout.
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut state = Self {
            width: config.width,
            height: config.height,
            score_increment: config.score_increment,
            snake: Vec::new(),
            food: Cell::new(0, 0),
            direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            game_over: false,
            paused: false,
            won: false,
            rng,
        };
        state.restart();
        state
    }

    /// Builds a game from an explicit layout instead of the opening one.
    /// `snake` is head first. An empty `snake` keeps the opening snake; only
    /// `direction` and `food` are applied then.
    pub fn from_layout(
        config: &GameConfig,
        snake: Vec<Cell>,
        direction: Direction,
        food: Cell,
    ) -> Self {
        let mut state = Self::new(config);
        if !snake.is_empty() {
            state.snake = snake;
        }
        state.direction = direction;
        state.next_direction = direction;
        state.food = food;
        state
    }

    /// Queues a turn for the next step. Reversals onto the direction the
    /// snake is moving in are dropped, as is any turn after game over.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }
        if direction.is_opposite(self.direction) {
            trace!("ignoring reversal from {:?} to {:?}", self.direction, direction);
            return;
        }
        self.next_direction = direction;
    }

    /// Advances the game by one cell. No-op while paused or over.
    pub fn step(&mut self) {
        if self.paused || self.game_over {
            return;
        }

        self.direction = self.next_direction;
        let new_head = self.head().moved(self.direction);
        self.snake.insert(0, new_head);

        if new_head == self.food {
            self.score = self.score.saturating_add(self.score_increment);
            debug!("ate food at ({}, {}), score {}", new_head.x, new_head.y, self.score);
            match place_food(&self.snake, self.width, self.height, &mut self.rng) {
                Some(food) => self.food = food,
                None => {
                    self.won = true;
                    self.game_over = true;
                    info!("board filled, final score {}", self.score);
                    return;
                }
            }
        } else {
            self.snake.pop();
        }

        // The moved body stays as is so the crash is visible on the last frame.
        if let Some(collision) = detect_collision(&self.snake, self.width, self.height) {
            self.game_over = true;
            info!("game over ({:?}), final score {}", collision, self.score);
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "resumed" });
    }

    /// Back to the opening layout with a fresh food cell.
    pub fn restart(&mut self) {
        self.snake.clear();
        self.snake.extend_from_slice(&INITIAL_SNAKE);
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.game_over = false;
        self.paused = false;
        self.won = false;
        match place_food(&self.snake, self.width, self.height, &mut self.rng) {
            Some(food) => self.food = food,
            None => {
                // Only reachable with a board no larger than the opening snake.
                self.won = true;
                self.game_over = true;
            }
        }
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn outcome(&self) -> Outcome {
        match (self.game_over, self.won, self.paused) {
            (true, true, _) => Outcome::Won,
            (true, false, _) => Outcome::Crashed,
            (false, _, true) => Outcome::Paused,
            (false, _, false) => Outcome::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> GameConfig {
        GameConfig {
            seed: Some(42),
            ..Default::default()
        }
    }

    fn opening() -> Vec<Cell> {
        INITIAL_SNAKE.to_vec()
    }

    #[test]
    fn new_game_uses_opening_layout() {
        let state = GameState::new(&seeded());
        assert_eq!(state.snake(), &INITIAL_SNAKE[..]);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.outcome(), Outcome::Running);
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn step_moves_without_growing() {
        let mut state =
            GameState::from_layout(&seeded(), opening(), Direction::Right, Cell::new(15, 10));
        state.step();
        assert_eq!(
            state.snake(),
            &[Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
        );
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut state =
            GameState::from_layout(&seeded(), opening(), Direction::Right, Cell::new(6, 5));
        state.step();
        assert_eq!(
            state.snake(),
            &[Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]
        );
        assert_eq!(state.score(), 10);
        assert!(!state.snake().contains(&state.food()));
        assert!(!state.is_game_over());
    }

    #[test]
    fn left_wall_ends_game() {
        let snake = vec![Cell::new(0, 5), Cell::new(1, 5), Cell::new(2, 5)];
        let mut state = GameState::from_layout(&seeded(), snake, Direction::Left, Cell::new(10, 10));
        state.step();
        assert!(state.is_game_over());
        assert_eq!(state.outcome(), Outcome::Crashed);
        // Final frame keeps the head outside the board.
        assert_eq!(state.head(), Cell::new(-1, 5));
    }

    #[test]
    fn biting_body_ends_game() {
        let snake = vec![
            Cell::new(5, 5),
            Cell::new(5, 6),
            Cell::new(6, 6),
            Cell::new(6, 5),
            Cell::new(6, 4),
        ];
        let mut state = GameState::from_layout(&seeded(), snake, Direction::Up, Cell::new(0, 0));
        state.set_direction(Direction::Right);
        state.step();
        assert!(state.is_game_over());
    }

    #[test]
    fn following_own_tail_is_safe() {
        // A 2x2 loop: the head moves into the cell the tail leaves.
        let snake = vec![
            Cell::new(5, 5),
            Cell::new(5, 6),
            Cell::new(6, 6),
            Cell::new(6, 5),
        ];
        let mut state = GameState::from_layout(&seeded(), snake, Direction::Up, Cell::new(0, 0));
        state.set_direction(Direction::Right);
        state.step();
        assert!(!state.is_game_over());
        assert_eq!(state.head(), Cell::new(6, 5));
    }

    #[test]
    fn empty_layout_keeps_opening_snake() {
        let state =
            GameState::from_layout(&seeded(), Vec::new(), Direction::Down, Cell::new(9, 9));
        assert_eq!(state.snake(), &INITIAL_SNAKE[..]);
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.food(), Cell::new(9, 9));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut state = GameState::new(&seeded());
        state.set_direction(Direction::Left);
        assert_eq!(state.next_direction(), Direction::Right);
    }

    #[test]
    fn two_quick_turns_cannot_reverse() {
        let mut state =
            GameState::from_layout(&seeded(), opening(), Direction::Right, Cell::new(15, 10));
        state.set_direction(Direction::Up);
        state.set_direction(Direction::Left);
        assert_eq!(state.next_direction(), Direction::Up);
        state.step();
        assert_eq!(state.head(), Cell::new(5, 4));
    }

    #[test]
    fn paused_step_changes_nothing() {
        let mut state = GameState::new(&seeded());
        state.toggle_pause();
        let snake = state.snake().to_vec();
        let food = state.food();
        state.step();
        assert_eq!(state.snake(), &snake[..]);
        assert_eq!(state.food(), food);
        assert_eq!(state.outcome(), Outcome::Paused);

        state.toggle_pause();
        state.step();
        assert_ne!(state.snake(), &snake[..]);
    }

    #[test]
    fn game_over_blocks_input() {
        let snake = vec![Cell::new(0, 5), Cell::new(1, 5)];
        let mut state = GameState::from_layout(&seeded(), snake, Direction::Left, Cell::new(9, 9));
        state.step();
        assert!(state.is_game_over());

        state.toggle_pause();
        assert!(!state.is_paused());
        state.set_direction(Direction::Up);
        assert_eq!(state.next_direction(), Direction::Left);
        let before = state.snake().to_vec();
        state.step();
        assert_eq!(state.snake(), &before[..]);
    }

    #[test]
    fn restart_resets_everything() {
        let mut state =
            GameState::from_layout(&seeded(), opening(), Direction::Right, Cell::new(6, 5));
        state.step();
        state.set_direction(Direction::Up);
        state.toggle_pause();
        state.restart();

        assert_eq!(state.snake(), &INITIAL_SNAKE[..]);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.next_direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert!(!state.is_game_over());
        assert!(!state.is_paused());
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn filling_the_board_wins() {
        let config = GameConfig {
            width: 6,
            height: 6,
            ..seeded()
        };
        // Serpentine path over the whole board; the snake covers all of it
        // except the first cell, where the food sits.
        let path: Vec<Cell> = (0..6)
            .flat_map(|y| {
                let xs: Vec<i32> = if y % 2 == 0 {
                    (0..6).collect()
                } else {
                    (0..6).rev().collect()
                };
                xs.into_iter().map(move |x| Cell::new(x, y))
            })
            .collect();
        let snake = path[1..].to_vec();
        let mut state = GameState::from_layout(&config, snake, Direction::Left, path[0]);

        state.step();

        assert!(state.is_game_over());
        assert!(state.is_won());
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.snake().len(), 36);
        assert_eq!(state.score(), 10);
    }
}
