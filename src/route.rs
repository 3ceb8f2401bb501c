use crate::controller::{Action, Controller};
use crate::pattern::Segment;
use crate::reference::Ref;
use crate::template::Template;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A named binding of a compiled path template to a render target, a
/// controller and enter/exit callbacks. Immutable once registered.
pub struct Route {
    pub(crate) name: Box<str>,
    pub(crate) path: Box<str>,
    pub(crate) segments: Vec<Segment>,
    pub(crate) template: Rc<dyn Template>,
    pub(crate) controller: Rc<RefCell<Controller>>,
    pub(crate) enter: Action,
    pub(crate) exit: Action,
}

impl Route {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Tests the route against already-split path segments, yielding the
    /// named parameter bindings on success. Arity must match exactly.
    pub(crate) fn try_match(&self, paths: &[&str]) -> Option<HashMap<String, String>> {
        if self.segments.len() != paths.len() {
            return None;
        }
        let mut params = HashMap::new();
        for (segment, &value) in self.segments.iter().zip(paths) {
            if !segment.matches(value) {
                return None;
            }
            if let Some(name) = segment.param_name() {
                params.insert(name.to_owned(), value.to_owned());
            }
        }
        Some(params)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("segments", &self.segments)
            .finish()
    }
}

/// A registered route name or a direct route handle.
pub type RouteRef = Ref<Rc<Route>>;

impl From<Rc<Route>> for RouteRef {
    fn from(route: Rc<Route>) -> Self {
        Ref::Value(route)
    }
}

impl From<&Rc<Route>> for RouteRef {
    fn from(route: &Rc<Route>) -> Self {
        Ref::Value(route.clone())
    }
}

/// Enter/exit callback specification: a method name resolved on the route's
/// controller at registration time, or an explicit callback value.
pub enum Callback {
    Method(Box<str>),
    Func(Action),
}

impl From<&str> for Callback {
    fn from(method: &str) -> Self {
        Self::Method(method.into())
    }
}

impl From<Action> for Callback {
    fn from(action: Action) -> Self {
        Self::Func(action)
    }
}
