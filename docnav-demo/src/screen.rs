//! Terminal lifecycle and drawing.

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;

use crate::pages::Page;

/// Raw-mode terminal wrapper; `enter` and `leave` bracket the dispatch
/// loop.
pub struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn leave(mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }

    /// Address bar on top, the active content unit below it.
    pub fn draw(&mut self, fragment: &str, input: &str, units: &[Page]) -> io::Result<()> {
        let location = if fragment.is_empty() { "(none)" } else { fragment };
        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(frame.area());

            let bar = Line::from(vec![
                Span::styled("#", Style::default().fg(Color::DarkGray)),
                Span::raw(input.to_string()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]);
            let address = Paragraph::new(bar).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" location: {location} ")),
            );
            frame.render_widget(address, chunks[0]);

            match units.last() {
                Some(page) => {
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", page.title));
                    let body = Paragraph::new(page.body.clone()).block(block);
                    frame.render_widget(body, chunks[1]);
                }
                None => {
                    frame.render_widget(Block::default().borders(Borders::ALL), chunks[1]);
                }
            }
        })?;
        Ok(())
    }
}
