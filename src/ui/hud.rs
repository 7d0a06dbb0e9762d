use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::Snapshot;

const HUD_SEPARATOR: &str = " │ ";
const CONTROLS_HINT: &str = "Arrows/WASD move │ R restart │ Esc quit";

/// Renders the stats row above and the controls row below, returning the
/// area left for the play field.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    theme: &Theme,
) -> Rect {
    let [stats_area, play_area, controls_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let [score_area, length_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(stats_area);

    frame.render_widget(
        Paragraph::new(score_line(snapshot.score, snapshot.speed, theme)),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Length: "),
            Span::styled(
                snapshot.length.to_string(),
                Style::default()
                    .fg(theme.hud_length)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Right),
        length_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(CONTROLS_HINT))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_muted)),
        controls_area,
    );

    play_area
}

fn score_line(score: u32, speed: u32, theme: &Theme) -> Line<'static> {
    let value_style = Style::default()
        .fg(theme.hud_score)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(score.to_string(), value_style),
        Span::styled(HUD_SEPARATOR, Style::default().fg(theme.hud_muted)),
        Span::raw("Speed: "),
        Span::styled(speed.to_string(), value_style),
    ])
}
