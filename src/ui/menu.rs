use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(
            "GAME OVER",
            Style::default()
                .fg(theme.game_over_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final Score: {score}")),
        Line::from(""),
        Line::styled("Press R to Restart", Style::default().fg(theme.game_over_hint)),
        Line::from("Esc to Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

/// Replaces the field when the terminal cannot show every grid cell.
pub fn render_too_small_notice(
    frame: &mut Frame<'_>,
    area: Rect,
    required: (u16, u16),
    theme: &Theme,
) {
    let [_, message_area, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    let (columns, rows) = required;
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default()
                .fg(theme.game_over_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("need {columns}x{rows}")),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        message_area,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
