mod link;
mod matcher;
mod nav;
mod registry;

use crate::controller::{Controller, ControllerRef};
use crate::error::RouterError;
use crate::host::Host;
use crate::query::QueryMap;
use crate::reference::Ref;
use crate::route::{Route, RouteRef};
use crate::template::{Template, TemplateRef};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

/// A running application instance: the template, controller and route
/// registries, the current navigation state and the host collaborator.
///
/// Construct one per running app; nothing here is global.
pub struct App {
    pub(crate) templates: HashMap<Box<str>, Rc<dyn Template>>,
    pub(crate) controllers: HashMap<Box<str>, Rc<RefCell<Controller>>>,
    pub(crate) routes: HashMap<Box<str>, Rc<Route>>,
    /// Route names in registration order. Match precedence follows this
    /// list, never the map's iteration order.
    pub(crate) routing: Vec<Box<str>>,
    pub(crate) current: Option<Current>,
    pub(crate) host: Box<dyn Host>,
}

/// Snapshot of the active route, present as a whole or not at all.
/// Mutated only by the navigation state machine.
pub struct Current {
    /// The decomposed path segments of the active location.
    pub paths: Vec<String>,
    pub controller: Rc<RefCell<Controller>>,
    pub route: Rc<Route>,
    /// Named parameter bindings extracted by the match.
    pub params: HashMap<String, String>,
    pub query: QueryMap,
}

impl App {
    pub fn new(host: impl Host + 'static) -> Self {
        Self {
            templates: HashMap::new(),
            controllers: HashMap::new(),
            routes: HashMap::new(),
            routing: Vec::new(),
            current: None,
            host: Box::new(host),
        }
    }

    /// The committed navigation state, if a route is active.
    pub fn current(&self) -> Option<&Current> {
        self.current.as_ref()
    }

    pub fn controller_named(&self, name: &str) -> Option<Rc<RefCell<Controller>>> {
        self.controllers.get(name).cloned()
    }

    pub fn route_named(&self, name: &str) -> Option<Rc<Route>> {
        self.routes.get(name).cloned()
    }

    /// Renders the current route's target with the current controller's
    /// working data and hands the markup to the host.
    pub fn render(&mut self) -> Result<(), RouterError> {
        self.render_with(None, None)
    }

    /// Like [`render`](App::render), with explicit data and/or a target
    /// override. Falls back to the current route's target and the current
    /// controller's working data for whatever is not supplied.
    pub fn render_with(
        &mut self,
        data: Option<&Value>,
        target: Option<TemplateRef>,
    ) -> Result<(), RouterError> {
        let template = match target {
            Some(target) => self.resolve_template(target)?,
            None => {
                let current = self.current.as_ref().ok_or(RouterError::NoActiveRoute)?;
                current.route.template.clone()
            }
        };
        let markup = match data {
            Some(data) => template.render(data),
            None => {
                let current = self.current.as_ref().ok_or(RouterError::NoActiveRoute)?;
                template.render(&current.controller.borrow().it)
            }
        };
        self.host.present(&markup);
        Ok(())
    }

    pub(crate) fn resolve_template(
        &self,
        template: TemplateRef,
    ) -> Result<Rc<dyn Template>, RouterError> {
        match template {
            Ref::Value(template) => Ok(template),
            Ref::Name(name) => self
                .templates
                .get(&name)
                .cloned()
                .ok_or(RouterError::UnknownTemplate(name)),
        }
    }

    pub(crate) fn resolve_controller(
        &self,
        controller: ControllerRef,
    ) -> Result<Rc<RefCell<Controller>>, RouterError> {
        match controller {
            Ref::Value(controller) => Ok(controller),
            Ref::Name(name) => self
                .controllers
                .get(&name)
                .cloned()
                .ok_or(RouterError::UnknownController(name)),
        }
    }

    pub(crate) fn resolve_route(&self, route: RouteRef) -> Result<Rc<Route>, RouterError> {
        match route {
            Ref::Value(route) => Ok(route),
            Ref::Name(name) => self
                .routes
                .get(&name)
                .cloned()
                .ok_or(RouterError::UnknownRoute(name)),
        }
    }
}
