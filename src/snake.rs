use std::collections::VecDeque;

use crate::config::{FOOD_REWARD, GridSize, INITIAL_LENGTH, INITIAL_PENDING_GROWTH};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the center cell of the grid.
    #[must_use]
    pub fn center_of(bounds: GridSize) -> Self {
        Self {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(bounds.width)),
            y: self.y.rem_euclid(i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring cell in `direction`, wrapping at the edges.
    #[must_use]
    pub fn step(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }
}

/// Snake body, heading and growth bookkeeping.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_growth: u32,
    score: u32,
    length: u32,
    alive: bool,
}

impl Snake {
    /// Creates a fresh snake: one cell at `start`, growing to full length over
    /// its first moves.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction: Direction::Right,
            pending_growth: INITIAL_PENDING_GROWTH,
            score: 0,
            length: INITIAL_LENGTH,
            alive: true,
        }
    }

    /// Creates a snake from explicit body segments (front is head) with no
    /// pending growth.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        let length = u32::try_from(segments.len()).unwrap_or(u32::MAX);
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_growth: 0,
            score: 0,
            length,
            alive: true,
        }
    }

    /// Restores the spawn state at `start`.
    pub fn reset(&mut self, start: Position) {
        *self = Self::new(start);
    }

    /// Changes heading unless it would reverse straight into the body.
    pub fn turn(&mut self, direction: Direction) {
        if self.length > 1 && direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Applies one movement step.
    ///
    /// The collision test runs against the body as it was before the step,
    /// tail included, so entering the cell the tail is about to leave kills
    /// the snake. On collision the body is left untouched.
    pub fn move_forward(&mut self, bounds: GridSize) {
        if !self.alive {
            return;
        }

        let next_head = self.next_head_position(bounds);
        if self.body.iter().skip(1).any(|segment| *segment == next_head) {
            self.alive = false;
            return;
        }

        self.body.push_front(next_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Records one eaten food: one extra segment on the next move plus reward.
    pub fn grow(&mut self) {
        self.pending_growth += 1;
        self.score += FOOD_REWARD;
        self.length += 1;
    }

    /// Returns the head position for the next movement step.
    #[must_use]
    pub fn next_head_position(&self, bounds: GridSize) -> Position {
        self.head().step(self.direction, bounds)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the logical length, which counts growth not yet drawn.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
