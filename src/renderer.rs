use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_DEAD, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GridSize, Theme,
};
use crate::game::{GameStatus, Snapshot};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_too_small_notice};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, theme);

    let (columns, rows) = snapshot.bounds.required_terminal();
    if area.width < columns || area.height < rows {
        render_too_small_notice(frame, play_area, (columns, rows), theme);
        return;
    }

    let field = field_rect(play_area, snapshot.bounds);

    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_food(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    if snapshot.status == GameStatus::GameOver {
        render_game_over_menu(frame, play_area, snapshot.score, theme);
    }
}

/// Centers a bordered box sized to the grid inside `area`.
fn field_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_add(2).min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, snapshot.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let snake = snapshot.snake;
    let buffer = frame.buffer_mut();

    // Tail first so the head wins if segments ever share a cell.
    let segments: Vec<_> = snake.segments().copied().enumerate().collect();
    for (index, segment) in segments.into_iter().rev() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, segment) else {
            continue;
        };

        if index == 0 {
            let glyph = if snake.is_alive() {
                head_glyph(snake.direction())
            } else {
                GLYPH_SNAKE_DEAD
            };
            buffer.set_string(
                x,
                y,
                glyph,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        let color = if index % 2 == 0 {
            theme.snake_body
        } else {
            theme.snake_body_alt
        };
        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(color));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
