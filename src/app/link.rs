use super::App;
use crate::error::RouterError;
use crate::query;
use crate::reference::Ref;
use crate::route::RouteRef;

impl App {
    /// Builds a location string for a route: exact segments contribute
    /// their literal, each parameter segment consumes the next positional
    /// argument. The result carries the leading `#` marker.
    pub fn link(&self, route: impl Into<RouteRef>, args: &[&str]) -> Result<String, RouterError> {
        self.build_link(route.into(), args, None)
    }

    /// Like [`link`](App::link), with query parameters appended after `?`.
    pub fn link_with_query(
        &self,
        route: impl Into<RouteRef>,
        args: &[&str],
        query: &[(&str, &str)],
    ) -> Result<String, RouterError> {
        self.build_link(route.into(), args, Some(query))
    }

    /// Instructs the host to move to a route.
    ///
    /// A name reference starting with `#` is taken as an already-formed
    /// location and used verbatim; anything else goes through
    /// [`link`](App::link). The host delivers the resulting location-changed
    /// notification back through [`navigate`](App::navigate) on its own
    /// schedule; `go` itself never runs a transition.
    pub fn go(&mut self, route: impl Into<RouteRef>, args: &[&str]) -> Result<(), RouterError> {
        let link = match route.into() {
            Ref::Name(name) if name.starts_with('#') => String::from(name),
            route => self.build_link(route, args, None)?,
        };
        self.host.assign_location(&link);
        Ok(())
    }

    /// [`go`](App::go) with query parameters.
    pub fn go_with_query(
        &mut self,
        route: impl Into<RouteRef>,
        args: &[&str],
        query: &[(&str, &str)],
    ) -> Result<(), RouterError> {
        let link = self.build_link(route.into(), args, Some(query))?;
        self.host.assign_location(&link);
        Ok(())
    }

    fn build_link(
        &self,
        route: RouteRef,
        args: &[&str],
        query: Option<&[(&str, &str)]>,
    ) -> Result<String, RouterError> {
        let route = self.resolve_route(route)?;

        let expected = route.segments().iter().filter(|s| s.is_param()).count();
        if args.len() != expected {
            return Err(RouterError::LinkArgs {
                route: route.name().into(),
                expected,
                supplied: args.len(),
            });
        }

        let mut args = args.iter();
        let mut link = String::from("#");
        for segment in route.segments() {
            link.push('/');
            match segment.literal() {
                Some(literal) => link.push_str(literal),
                // arity was checked above
                None => link.push_str(args.next().copied().unwrap_or_default()),
            }
        }

        if let Some(query) = query {
            link.push('?');
            link.push_str(&query::serialize(query));
        }
        Ok(link)
    }
}
