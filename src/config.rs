use ratatui::style::Color;

use crate::error::GameError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the `(columns, rows)` a terminal needs to show every cell:
    /// the grid, its border and the HUD rows.
    #[must_use]
    pub fn required_terminal(self) -> (u16, u16) {
        (
            self.width.saturating_add(BORDER_CELLS),
            self.height.saturating_add(BORDER_CELLS + HUD_ROWS),
        )
    }

    /// Shrinks each axis, if needed, so the grid fits a `columns x rows` terminal.
    #[must_use]
    pub fn fit_within_terminal(self, columns: u16, rows: u16) -> Self {
        Self {
            width: self.width.min(columns.saturating_sub(BORDER_CELLS)),
            height: self.height.min(rows.saturating_sub(BORDER_CELLS + HUD_ROWS)),
        }
    }
}

/// Terminal cells taken by the field border on each axis.
pub const BORDER_CELLS: u16 = 2;

/// Terminal rows taken by the stats row and the controls row.
pub const HUD_ROWS: u16 = 2;

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    /// Body segments alternate between `snake_body` and `snake_body_alt`.
    pub snake_body: Color,
    pub snake_body_alt: Color,
    pub food: Color,
    pub border: Color,
    pub hud_score: Color,
    pub hud_length: Color,
    pub hud_muted: Color,
    pub game_over_title: Color,
    pub game_over_hint: Color,
}

/// Green snake, red food, dark field.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    snake_body_alt: Color::Rgb(0, 100, 0),
    food: Color::Red,
    border: Color::DarkGray,
    hud_score: Color::White,
    hud_length: Color::LightBlue,
    hud_muted: Color::DarkGray,
    game_over_title: Color::Red,
    game_over_hint: Color::Green,
};

pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_SNAKE_DEAD: &str = "✕";

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Starting simulation rate in ticks per second.
pub const BASE_SPEED: u32 = 10;

/// Ticks per second added at every speed-up.
pub const SPEED_INCREMENT: u32 = 1;

/// Score step at which the speed goes up.
pub const SPEED_UP_SCORE_STEP: u32 = 50;

/// Score granted per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Logical length of a fresh snake.
pub const INITIAL_LENGTH: u32 = 3;

/// Growth buffered at spawn so the body reaches `INITIAL_LENGTH` in the first moves.
pub const INITIAL_PENDING_GROWTH: u32 = INITIAL_LENGTH - 1;

/// Runtime game parameters, validated once before a session starts.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub base_speed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            base_speed: BASE_SPEED,
        }
    }
}

impl GameConfig {
    /// Checks that the grid can hold a full-length snake plus one food cell.
    pub fn validate(self) -> Result<Self, GameError> {
        let required = INITIAL_LENGTH as usize + 1;
        if self.grid.total_cells() < required {
            return Err(GameError::GridTooSmall {
                width: self.grid.width,
                height: self.grid.height,
                required,
            });
        }

        if self.base_speed == 0 {
            return Err(GameError::ZeroSpeed);
        }

        Ok(self)
    }
}
