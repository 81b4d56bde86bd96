//! Pre-built content units for the viewer, keyed by page name.
//!
//! This is the collaborator side of the contract: pages are authored
//! ahead of time and registered once, before the dispatch loop starts.
//! The navigation layer only ever reads the table.

pub mod about;
pub mod guide;
pub mod home;

use docnav::RouteTable;
use ratatui::text::Text;

/// One page's worth of pre-rendered content.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: &'static str,
    pub body: Text<'static>,
}

/// Every page the viewer can show. `"home"` doubles as the
/// empty-fragment default.
pub fn routes() -> RouteTable<Page> {
    docnav::routes! {
        "home" => home::page(),
        "about" => about::page(),
        "guide" => guide::page(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_the_default_page() {
        let table = routes();
        assert!(table.contains(docnav::DEFAULT_PAGE));
        assert_eq!(table.len(), 3);
    }
}
