use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::Page;

pub fn page() -> Page {
    let body = Text::from(vec![
        Line::from(Span::styled(
            "docnav",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("A fragment-driven viewer for pre-built documentation pages."),
        Line::raw(""),
        Line::raw("Type a page name in the address bar and press Enter:"),
        Line::raw(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("about", Style::default().fg(Color::Cyan)),
            Span::raw("   where this viewer comes from"),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("guide", Style::default().fg(Color::Cyan)),
            Span::raw("   how navigation works"),
        ]),
        Line::raw(""),
        Line::raw("An empty address goes back home. Esc quits."),
    ]);
    Page {
        title: "home",
        body,
    }
}
