use super::App;
use crate::error::RouterError;
use crate::reference::Ref;
use crate::route::RouteRef;

use std::rc::Rc;

use tracing::debug;

impl App {
    /// Handles a location-changed notification from the host.
    ///
    /// The outgoing route's exit callback runs first, while the old state is
    /// still committed; then the state resets, the match engine runs, and on
    /// success the new route's enter callback runs against the committed new
    /// state. A failed match surfaces as [`RouterError::RoutingFailure`] and
    /// leaves no route active. Callback errors propagate unmodified with the
    /// state exactly as committed before the callback ran.
    pub fn navigate(&mut self, location: &str) -> Result<(), RouterError> {
        let path = location.strip_prefix('#').unwrap_or(location);
        let path = if path.is_empty() { "/" } else { path };

        debug!(location, "navigating");

        self.leave()?;
        self.current = None;

        if !self.match_location(path) {
            debug!(location, "no route matched");
            return Err(RouterError::RoutingFailure(location.into()));
        }

        if let Some(current) = self.current.as_ref() {
            let controller = current.controller.clone();
            let enter = current.route.enter.clone();
            // fresh working data for this navigation
            controller.borrow_mut().reset();
            enter(self)?;
        }
        Ok(())
    }

    /// Handles a leaving notification from the host: the current route's
    /// exit callback runs, the state stays committed. Supports cleanup on
    /// teardown when there is no destination route.
    pub fn leave(&mut self) -> Result<(), RouterError> {
        if let Some(current) = self.current.as_ref() {
            let exit = current.route.exit.clone();
            exit(self)?;
        }
        Ok(())
    }

    /// Re-runs the host's current location through the state machine.
    pub fn refresh(&mut self) -> Result<(), RouterError> {
        let location = self.host.location();
        self.navigate(&location)
    }

    /// Whether the active route is `route`, optionally with specific path
    /// arguments.
    ///
    /// `expected` values line up with the route's parameter segments in
    /// order; a `None` skips its position. Each supplied value is compared
    /// against the raw captured path segment. Useful for conditional
    /// rendering such as highlighting an active menu entry.
    pub fn at(&self, route: impl Into<RouteRef>, expected: &[Option<&str>]) -> bool {
        let current = match self.current.as_ref() {
            Some(current) => current,
            None => return false,
        };
        let route = match route.into() {
            Ref::Value(route) => route,
            Ref::Name(name) => match self.routes.get(&name) {
                Some(route) => route.clone(),
                None => return false,
            },
        };
        if !Rc::ptr_eq(&route, &current.route) {
            return false;
        }

        let mut expected = expected.iter();
        for (i, segment) in route.segments().iter().enumerate() {
            if !segment.is_param() {
                continue;
            }
            match expected.next() {
                Some(Some(want)) => {
                    if *want != current.paths[i] {
                        return false;
                    }
                }
                Some(None) => {}
                None => break,
            }
        }
        true
    }
}
