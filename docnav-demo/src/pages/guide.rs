use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::Page;

pub fn page() -> Page {
    let key = Style::default().fg(Color::Yellow);
    let body = Text::from(vec![
        Line::from(Span::styled(
            "Navigation guide",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  <letters>  ", key),
            Span::raw("edit the address bar"),
        ]),
        Line::from(vec![
            Span::styled("  Backspace  ", key),
            Span::raw("delete the last character"),
        ]),
        Line::from(vec![
            Span::styled("  Enter      ", key),
            Span::raw("commit the address and render that page"),
        ]),
        Line::from(vec![
            Span::styled("  Esc        ", key),
            Span::raw("quit"),
        ]),
        Line::raw(""),
        Line::raw("The committed address becomes the location fragment. An empty"),
        Line::raw("fragment renders the home page; anything else is looked up"),
        Line::raw("verbatim in the route table."),
    ]);
    Page {
        title: "guide",
        body,
    }
}
