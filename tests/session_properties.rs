use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use torus_snake::config::{BASE_SPEED, FOOD_REWARD, GameConfig, GridSize};
use torus_snake::food::Food;
use torus_snake::game::{GameSession, TickEvent};
use torus_snake::input::{Command, Direction};
use torus_snake::snake::{Position, Snake};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Plays random moves, restarting after every death, and checks the
/// invariants that must hold after each tick.
#[test]
fn random_play_keeps_invariants() {
    let config = GameConfig {
        grid: GridSize {
            width: 8,
            height: 7,
        },
        ..GameConfig::default()
    };
    let mut player = StdRng::seed_from_u64(2024);

    for seed in 0..20 {
        let mut session = GameSession::new_with_seed(config, seed).expect("valid config");

        for _ in 0..400 {
            if session.is_game_over() {
                session.apply_command(Command::Restart).expect("restart");
                assert_eq!(session.score(), 0);
                assert_eq!(session.speed, BASE_SPEED);
            }

            let direction = DIRECTIONS[player.gen_range(0..DIRECTIONS.len())];
            session
                .apply_command(Command::Move(direction))
                .expect("move");

            let len_before = session.snake.len();
            let score_before = session.score();
            let direction_before = session.snake.direction();
            let event = session.tick();

            for segment in session.snake.segments() {
                assert!(segment.is_within_bounds(config.grid));
            }
            if session.snake.length() > 1 {
                assert_ne!(session.snake.direction(), direction_before.opposite());
            }

            match event {
                TickEvent::Collided => assert_eq!(session.snake.len(), len_before),
                TickEvent::BoardFilled => {}
                _ => {
                    assert!(session.snake.len() >= len_before);
                    assert!(session.snake.len() <= len_before + 1);
                    assert!(!session.snake.occupies(session.food.position));
                }
            }

            if let TickEvent::Ate { score, .. } = event {
                assert_eq!(score, score_before + FOOD_REWARD);
            }
        }
    }
}

#[test]
fn speed_rises_once_per_fifty_points() {
    let mut session = GameSession::new_with_seed(GameConfig::default(), 5).expect("valid config");
    session.snake = Snake::from_segments(vec![Position { x: 0, y: 2 }], Direction::Right);
    let mut speeds = Vec::new();

    for _ in 0..12 {
        session.food = Food::at(session.snake.next_head_position(session.bounds()));
        match session.tick() {
            TickEvent::Ate {
                score,
                speed_increased,
            } => {
                assert_eq!(speed_increased, score % 50 == 0);
                speeds.push(session.speed);
            }
            other => panic!("expected to eat, got {other:?}"),
        }
    }

    assert_eq!(session.score(), 120);
    assert_eq!(
        speeds,
        vec![10, 10, 10, 10, 11, 11, 11, 11, 11, 12, 12, 12]
    );
}

#[test]
fn body_grows_by_one_on_the_move_after_each_meal() {
    let mut session = GameSession::new_with_seed(GameConfig::default(), 3).expect("valid config");
    session.food = Food::at(Position { x: 0, y: 0 });
    for _ in 0..2 {
        session.tick();
    }
    assert_eq!(session.snake.len(), 3);

    session.food = Food::at(session.snake.next_head_position(session.bounds()));
    session.tick();
    assert_eq!(session.snake.len(), 3);
    assert_eq!(session.snake.length(), 4);

    session.food = Food::at(Position { x: 0, y: 0 });
    session.tick();
    assert_eq!(session.snake.len(), 4);
    session.tick();
    assert_eq!(session.snake.len(), 4);
}
