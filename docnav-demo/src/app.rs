//! Wiring: route table, environment adapters, dispatch loop.

use std::sync::Arc;

use docnav::{App, PageRenderer};

use crate::adapters::{FrameContainer, HashLocation, KeyEventSource};
use crate::pages;
use crate::screen::Screen;

pub fn run() -> anyhow::Result<()> {
    let routes = Arc::new(pages::routes());
    let location = HashLocation::default();
    let container = FrameContainer::default();

    let screen = Screen::enter()?;
    let mut source = KeyEventSource::new(screen, location.clone(), container.clone());
    let renderer = PageRenderer::new(routes, location, container);
    let mut app = App::new(renderer);

    // Restore the terminal before surfacing any render error.
    let result = app.run(&mut source);
    source.into_screen().leave()?;
    Ok(result?)
}
