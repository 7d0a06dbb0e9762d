use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Theme;
use crate::controller::Renderer;
use crate::error::GameError;
use crate::game::Snapshot;
use crate::renderer;

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode alternate-screen terminal that draws game frames.
///
/// Dropping it puts the terminal back the way it was found.
pub struct TerminalSession {
    terminal: AppTerminal,
    theme: &'static Theme,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen.
    pub fn enter(theme: &'static Theme) -> Result<Self, GameError> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal, theme }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error.into())
            }
        }
    }
}

impl Renderer for TerminalSession {
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> Result<(), GameError> {
        let theme = self.theme;
        self.terminal
            .draw(|frame| renderer::render(frame, snapshot, theme))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Chains a panic hook that restores the terminal before the report prints.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
