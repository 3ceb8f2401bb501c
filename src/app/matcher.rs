use super::{App, Current};
use crate::query;

use smallvec::SmallVec;

use tracing::trace;

impl App {
    /// Runs the match engine against a location and, on success, commits the
    /// result as the current navigation state.
    ///
    /// Routes are tried strictly in registration order; the first route
    /// whose arity and segment constraints hold wins. On failure the
    /// previous state is left untouched — resetting it is the navigation
    /// state machine's job.
    pub fn match_location(&mut self, location: &str) -> bool {
        let (path_part, query_part) = match location.find('?') {
            Some(i) => (&location[..i], Some(&location[i + 1..])),
            None => (location, None),
        };

        let mut pieces = path_part.split('/');
        pieces.next(); // leading empty piece
        let paths: SmallVec<[&str; 8]> = pieces.collect();

        let found = self.routing.iter().find_map(|name| {
            let route = &self.routes[name];
            route.try_match(&paths).map(|params| (route.clone(), params))
        });

        let (route, params) = match found {
            Some(found) => found,
            None => return false,
        };

        trace!(route = route.name(), location, "matched");

        self.current = Some(Current {
            paths: paths.iter().map(|s| s.to_string()).collect(),
            controller: route.controller.clone(),
            query: query_part.map(query::parse).unwrap_or_default(),
            params,
            route,
        });
        true
    }
}
