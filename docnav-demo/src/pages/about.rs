use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::Page;

pub fn page() -> Page {
    let body = Text::from(vec![
        Line::from(Span::styled(
            "About this viewer",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("Every page you see here was built before the viewer started."),
        Line::raw("Navigation is a dictionary lookup: the address fragment names"),
        Line::raw("a page, the matching content is swapped into this area, and"),
        Line::raw("nothing else happens. No network, no state beyond the address."),
        Line::raw(""),
        Line::raw("Asking for a page that was never registered is a hard error,"),
        Line::raw("the viewer exits rather than guessing at a fallback."),
    ]);
    Page {
        title: "about",
        body,
    }
}
