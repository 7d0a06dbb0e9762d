use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Creates food on a uniformly random cell.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        let mut food = Self::at(Position { x: 0, y: 0 });
        food.randomize_position(rng, bounds);
        food
    }

    /// Moves the food to a uniformly random cell.
    ///
    /// The snake is not consulted; callers resample until the cell is free.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize) {
        self.position = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
    }
}
