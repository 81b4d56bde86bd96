//! Lifecycle wiring: the dispatch loop that ties the renderer to the
//! environment's load and fragment-change events.

use tracing::{debug, trace};

use crate::environment::{Container, Location};
use crate::error::Result;
use crate::renderer::PageRenderer;

/// The two external event types the navigation environment delivers.
///
/// A fragment change carries no payload; the fragment is re-read from the
/// [`Location`] at render time, which keeps the location the single
/// source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The environment finished loading; rendering may start.
    Load,
    /// The location fragment changed after load.
    FragmentChanged,
}

/// Subscription capability: yields navigation events in arrival order.
///
/// Returning `None` means the hosting environment has torn down; there is
/// no other way for the dispatch loop to end.
pub trait EventSource {
    fn next_event(&mut self) -> Option<NavEvent>;
}

/// Ties a [`PageRenderer`] to the environment lifecycle.
///
/// Two states: uninitialized until the one-time `Load` event renders the
/// startup fragment and registers the change listener, listening from
/// then on. Every fragment change triggers exactly one re-render, and
/// nothing ever de-registers.
pub struct App<C, L, S> {
    renderer: PageRenderer<C, L, S>,
    listening: bool,
}

impl<C, L, S> App<C, L, S>
where
    L: Location,
    S: Container<C>,
{
    pub fn new(renderer: PageRenderer<C, L, S>) -> Self {
        debug!("navigation app constructed");
        Self {
            renderer,
            listening: false,
        }
    }

    /// Handle one navigation event.
    ///
    /// Fragment changes delivered before `Load` are ignored: no listener
    /// is registered yet at that point.
    pub fn dispatch(&mut self, event: NavEvent) -> Result<()> {
        match event {
            NavEvent::Load => {
                self.renderer.render_page()?;
                self.listening = true;
            }
            NavEvent::FragmentChanged if self.listening => {
                self.renderer.render_page()?;
            }
            NavEvent::FragmentChanged => {
                trace!("fragment changed before load, ignored");
            }
        }
        Ok(())
    }

    /// Drain `source`, dispatching each event in arrival order.
    ///
    /// Renders are strictly serialized: one event is fully handled before
    /// the next is pulled, so nothing coalesces and nothing is dropped.
    /// The first render error aborts the loop and propagates; hosts that
    /// want to outlive a failed render can drive
    /// [`dispatch`](Self::dispatch) themselves and decide per event.
    pub fn run<E: EventSource>(&mut self, source: &mut E) -> Result<()> {
        while let Some(event) = source.next_event() {
            self.dispatch(event)?;
        }
        Ok(())
    }

    /// Whether the one-time load transition has happened.
    pub fn is_listening(&self) -> bool {
        self.listening
    }
}
