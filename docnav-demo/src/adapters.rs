//! Real implementations of the library's environment capabilities.
//!
//! Everything here runs on the one UI thread; shared handles are
//! `Rc<RefCell>`.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use docnav::{Container, EventSource, Location, NavEvent};
use tracing::debug;

use crate::pages::Page;
use crate::screen::Screen;

/// The address bar's committed value: a raw fragment such as `"#about"`,
/// or `""` before the first navigation.
#[derive(Clone, Default)]
pub struct HashLocation {
    fragment: Rc<RefCell<String>>,
}

impl HashLocation {
    fn set(&self, fragment: String) {
        *self.fragment.borrow_mut() = fragment;
    }
}

impl Location for HashLocation {
    fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }
}

/// The content area of the screen. The renderer clears and refills it;
/// the event source draws whatever it holds between events.
#[derive(Clone, Default)]
pub struct FrameContainer {
    units: Rc<RefCell<Vec<Page>>>,
}

impl Container<Page> for FrameContainer {
    fn clear(&mut self) {
        self.units.borrow_mut().clear();
    }

    fn append(&mut self, unit: &Page) {
        self.units.borrow_mut().push(unit.clone());
    }
}

/// Translates terminal input into navigation events.
///
/// Emits `Load` once at startup, then `FragmentChanged` each time the
/// user commits the address bar with Enter. Esc ends the stream (the
/// environment tearing down). The screen is redrawn before every blocking
/// read so the latest render is visible.
pub struct KeyEventSource {
    screen: Screen,
    location: HashLocation,
    container: FrameContainer,
    input: String,
    loaded: bool,
}

impl KeyEventSource {
    pub fn new(screen: Screen, location: HashLocation, container: FrameContainer) -> Self {
        Self {
            screen,
            location,
            container,
            input: String::new(),
            loaded: false,
        }
    }

    pub fn into_screen(self) -> Screen {
        self.screen
    }

    fn draw(&mut self) -> std::io::Result<()> {
        let fragment = self.location.fragment();
        let units = self.container.units.borrow();
        self.screen.draw(&fragment, &self.input, &units)
    }
}

impl EventSource for KeyEventSource {
    fn next_event(&mut self) -> Option<NavEvent> {
        if !self.loaded {
            self.loaded = true;
            return Some(NavEvent::Load);
        }
        loop {
            if let Err(err) = self.draw() {
                debug!(%err, "draw failed, shutting down");
                return None;
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Esc => return None,
                    KeyCode::Enter => {
                        let fragment = if self.input.is_empty() {
                            String::new()
                        } else {
                            format!("#{}", self.input)
                        };
                        self.input.clear();
                        debug!(%fragment, "address bar committed");
                        self.location.set(fragment);
                        return Some(NavEvent::FragmentChanged);
                    }
                    KeyCode::Backspace => {
                        self.input.pop();
                    }
                    KeyCode::Char(c) => self.input.push(c),
                    _ => {}
                },
                Ok(_) => {}
                Err(err) => {
                    debug!(%err, "terminal event read failed, shutting down");
                    return None;
                }
            }
        }
    }
}
