//! Page rendering: resolve the current fragment, swap in the matching
//! content unit.

use std::sync::Arc;

use snafu::OptionExt;
use tracing::trace;

use crate::environment::{Container, Location};
use crate::error::{self, Result};
use crate::router::{self, RouteTable};

/// Renders the page matching the current navigation target into the
/// display container.
///
/// The route table is owned by the hosting application and shared in by
/// handle; the renderer only reads it. The location provider is consulted
/// on every render, and the container belongs exclusively to the renderer
/// for the duration of each call.
pub struct PageRenderer<C, L, S> {
    routes: Arc<RouteTable<C>>,
    location: L,
    container: S,
}

impl<C, L, S> PageRenderer<C, L, S>
where
    L: Location,
    S: Container<C>,
{
    pub fn new(routes: Arc<RouteTable<C>>, location: L, container: S) -> Self {
        Self {
            routes,
            location,
            container,
        }
    }

    /// Re-resolve the current fragment and swap the matching content unit
    /// into the container.
    ///
    /// The container is cleared before the key is looked up, so a failed
    /// lookup leaves it empty. There is no fallback page: the
    /// [`RouteNotFound`](crate::Error::RouteNotFound) error propagates to
    /// the caller.
    pub fn render_page(&mut self) -> Result<()> {
        let fragment = self.location.fragment();
        let key = router::resolve(&fragment);
        self.container.clear();
        let unit = self
            .routes
            .get(key)
            .context(error::RouteNotFoundSnafu { key })?;
        self.container.append(unit);
        trace!(%fragment, key, "rendered page");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeLocation {
        fragment: Rc<RefCell<String>>,
    }

    impl FakeLocation {
        fn set(&self, fragment: &str) {
            *self.fragment.borrow_mut() = fragment.to_string();
        }
    }

    impl Location for FakeLocation {
        fn fragment(&self) -> String {
            self.fragment.borrow().clone()
        }
    }

    #[derive(Clone, Default)]
    struct FakeContainer {
        units: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Container<&'static str> for FakeContainer {
        fn clear(&mut self) {
            self.units.borrow_mut().clear();
        }

        fn append(&mut self, unit: &&'static str) {
            self.units.borrow_mut().push(*unit);
        }
    }

    fn renderer(
        fragment: &str,
    ) -> (
        PageRenderer<&'static str, FakeLocation, FakeContainer>,
        FakeLocation,
        FakeContainer,
    ) {
        let routes = Arc::new(crate::routes! {
            "home" => "<home>",
            "about" => "<about>",
        });
        let location = FakeLocation::default();
        location.set(fragment);
        let container = FakeContainer::default();
        let renderer = PageRenderer::new(routes, location.clone(), container.clone());
        (renderer, location, container)
    }

    #[test]
    fn empty_fragment_renders_home() {
        let (mut renderer, _location, container) = renderer("");
        renderer.render_page().expect("home is registered");
        assert_eq!(*container.units.borrow(), ["<home>"]);
    }

    #[test]
    fn fragment_change_swaps_content_without_leftovers() {
        let (mut renderer, location, container) = renderer("");
        renderer.render_page().expect("home is registered");
        location.set("#about");
        renderer.render_page().expect("about is registered");
        assert_eq!(*container.units.borrow(), ["<about>"]);
    }

    #[test]
    fn rerender_is_idempotent() {
        let (mut renderer, _location, container) = renderer("#about");
        renderer.render_page().expect("about is registered");
        let first = container.units.borrow().clone();
        renderer.render_page().expect("about is registered");
        assert_eq!(*container.units.borrow(), first);
    }

    #[test]
    fn missing_route_clears_then_fails() {
        let (mut renderer, location, container) = renderer("");
        renderer.render_page().expect("home is registered");
        location.set("#missing");
        let err = renderer.render_page().expect_err("missing is not registered");
        assert!(matches!(err, Error::RouteNotFound { key } if key == "missing"));
        assert!(container.units.borrow().is_empty());
    }
}
