use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GameConfig, GridSize, SPEED_INCREMENT, SPEED_UP_SCORE_STEP};
use crate::error::GameError;
use crate::food::Food;
use crate::input::{Command, Direction};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// What a single call to [`GameSession::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    /// The round is over; nothing moved.
    Idle,
    Moved,
    Ate {
        score: u32,
        speed_increased: bool,
    },
    Collided,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

/// Read-only view of one frame's worth of state.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub food: &'a Food,
    pub score: u32,
    pub length: u32,
    pub speed: u32,
    pub status: GameStatus,
    pub bounds: GridSize,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub status: GameStatus,
    pub speed: u32,
    pub tick_count: u64,
    pending_turn: Option<Direction>,
    config: GameConfig,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session seeded from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, GameError> {
        let config = config.validate()?;
        let snake = Snake::new(Position::center_of(config.grid));
        let food = Food::random(&mut rng, config.grid);

        let mut session = Self {
            snake,
            food,
            status: GameStatus::Playing,
            speed: config.base_speed,
            tick_count: 0,
            pending_turn: None,
            config,
            rng,
        };
        session.place_food()?;

        info!(
            "new session on {}x{} grid at {} ticks/s",
            config.grid.width, config.grid.height, config.base_speed
        );
        Ok(session)
    }

    /// Applies one external command.
    ///
    /// Moves only register while playing and overwrite any earlier move from
    /// the same tick. Restart only acts once the round is over.
    pub fn apply_command(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::Move(direction) => {
                if self.status == GameStatus::Playing {
                    self.pending_turn = Some(direction);
                }
            }
            Command::Restart => {
                if self.status == GameStatus::GameOver {
                    self.restart()?;
                }
            }
            Command::Quit => {}
        }
        Ok(())
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickEvent {
        if self.status != GameStatus::Playing {
            return TickEvent::Idle;
        }

        self.tick_count += 1;
        if let Some(direction) = self.pending_turn.take() {
            self.snake.turn(direction);
        }
        self.snake.move_forward(self.config.grid);

        if !self.snake.is_alive() {
            self.status = GameStatus::GameOver;
            info!(
                "game over after {} ticks: score {}, length {}",
                self.tick_count,
                self.snake.score(),
                self.snake.length()
            );
            return TickEvent::Collided;
        }

        if self.snake.head() != self.food.position {
            return TickEvent::Moved;
        }

        self.snake.grow();
        let score = self.snake.score();
        debug!("food eaten at {:?}, score {score}", self.food.position);

        if let Err(error) = self.place_food() {
            warn!("{error}; ending round");
            self.status = GameStatus::GameOver;
            return TickEvent::BoardFilled;
        }

        let speed_increased = self.update_speed();
        TickEvent::Ate {
            score,
            speed_increased,
        }
    }

    /// Resets snake, food, speed and status to a fresh round.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.snake.reset(Position::center_of(self.config.grid));
        self.status = GameStatus::Playing;
        self.speed = self.config.base_speed;
        self.tick_count = 0;
        self.pending_turn = None;
        self.place_food()?;

        info!("round restarted");
        Ok(())
    }

    /// Moves the food to a random cell not covered by the snake.
    pub fn place_food(&mut self) -> Result<(), GameError> {
        let bounds = self.config.grid;
        if self.snake.len() >= bounds.total_cells() {
            return Err(GameError::NoSpaceForFood {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let mut draws = 1_u32;
        self.food.randomize_position(&mut self.rng, bounds);
        while self.snake.occupies(self.food.position) {
            self.food.randomize_position(&mut self.rng, bounds);
            draws += 1;
        }

        debug!(
            "food placed at {:?} after {draws} draw(s)",
            self.food.position
        );
        Ok(())
    }

    /// Returns the read-only state a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            food: &self.food,
            score: self.snake.score(),
            length: self.snake.length(),
            speed: self.speed,
            status: self.status,
            bounds: self.config.grid,
        }
    }

    fn update_speed(&mut self) -> bool {
        let score = self.snake.score();
        if score == 0 || score % SPEED_UP_SCORE_STEP != 0 {
            return false;
        }

        self.speed += SPEED_INCREMENT;
        info!("score {score} reached, speed now {} ticks/s", self.speed);
        true
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Returns the move that will be applied on the next tick, if any.
    #[must_use]
    pub fn pending_turn(&self) -> Option<Direction> {
        self.pending_turn
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GameConfig, GridSize};
    use crate::food::Food;
    use crate::input::{Command, Direction};
    use crate::snake::{Position, Snake};

    use super::{GameSession, GameStatus, TickEvent};

    fn grid(width: u16, height: u16) -> GameConfig {
        GameConfig {
            grid: GridSize { width, height },
            ..GameConfig::default()
        }
    }

    #[test]
    fn fresh_session_keeps_food_off_the_snake() {
        for seed in 0..50 {
            let session = GameSession::new_with_seed(grid(4, 4), seed).expect("valid config");
            assert!(!session.snake.occupies(session.food.position));
            assert_eq!(session.status, GameStatus::Playing);
        }
    }

    #[test]
    fn latest_move_wins_within_a_tick() {
        let mut session = GameSession::new_with_seed(GameConfig::default(), 1).expect("valid");
        session.food = Food::at(Position { x: 0, y: 0 });

        session
            .apply_command(Command::Move(Direction::Up))
            .expect("move");
        session
            .apply_command(Command::Move(Direction::Down))
            .expect("move");
        assert_eq!(session.pending_turn(), Some(Direction::Down));

        session.tick();

        assert_eq!(session.snake.head(), Position { x: 15, y: 16 });
        assert_eq!(session.pending_turn(), None);
    }

    #[test]
    fn coalesced_reverse_is_dropped_not_queued() {
        let mut session = GameSession::new_with_seed(GameConfig::default(), 2).expect("valid");
        session.food = Food::at(Position { x: 0, y: 0 });

        session
            .apply_command(Command::Move(Direction::Up))
            .expect("move");
        session
            .apply_command(Command::Move(Direction::Left))
            .expect("move");
        session.tick();

        assert_eq!(session.snake.direction(), Direction::Right);
        assert_eq!(session.snake.head(), Position { x: 16, y: 15 });
    }

    #[test]
    fn eating_food_scores_and_respawns_food() {
        let mut session = GameSession::new_with_seed(grid(10, 10), 4).expect("valid");
        session.snake = Snake::from_segments(vec![Position { x: 5, y: 5 }], Direction::Right);
        session.food = Food::at(Position { x: 6, y: 5 });

        let event = session.tick();

        assert_eq!(
            event,
            TickEvent::Ate {
                score: 10,
                speed_increased: false
            }
        );
        assert_eq!(session.snake.length(), 2);
        assert_ne!(session.food.position, Position { x: 6, y: 5 });
        assert!(!session.snake.occupies(session.food.position));
    }

    #[test]
    fn self_collision_ends_the_round() {
        let mut session = GameSession::new_with_seed(grid(6, 6), 3).expect("valid");
        session.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 3, y: 2 },
            ],
            Direction::Right,
        );

        assert_eq!(session.tick(), TickEvent::Collided);
        assert_eq!(session.status, GameStatus::GameOver);
        assert_eq!(session.tick(), TickEvent::Idle);
        assert_eq!(session.tick_count, 1);
    }

    #[test]
    fn moves_are_ignored_after_game_over() {
        let mut session = GameSession::new_with_seed(grid(6, 6), 5).expect("valid");
        session.status = GameStatus::GameOver;

        session
            .apply_command(Command::Move(Direction::Up))
            .expect("move");

        assert_eq!(session.pending_turn(), None);
    }

    #[test]
    fn restart_only_acts_after_game_over() {
        let mut session = GameSession::new_with_seed(GameConfig::default(), 6).expect("valid");
        session.food = Food::at(Position { x: 0, y: 0 });
        session.tick();

        session.apply_command(Command::Restart).expect("restart");
        assert_eq!(session.tick_count, 1);

        session.status = GameStatus::GameOver;
        session.apply_command(Command::Restart).expect("restart");
        assert_eq!(session.tick_count, 0);
        assert_eq!(session.status, GameStatus::Playing);
    }

    #[test]
    fn full_board_ends_the_round() {
        let mut session = GameSession::new_with_seed(grid(2, 2), 8).expect("valid");
        session.snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 0, y: 1 },
                Position { x: 1, y: 1 },
            ],
            Direction::Right,
        );
        session.snake.grow();
        session.food = Food::at(Position { x: 1, y: 0 });

        assert_eq!(session.tick(), TickEvent::BoardFilled);
        assert_eq!(session.status, GameStatus::GameOver);
        assert_eq!(session.snake.len(), 4);
    }
}
