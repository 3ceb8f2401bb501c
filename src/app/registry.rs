use super::App;
use crate::controller::{Action, Controller, ControllerRef};
use crate::error::RouterError;
use crate::pattern;
use crate::route::{Callback, Route};
use crate::template::{Template, TemplateRef};

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

impl App {
    /// Registers a render target under a name, replacing any previous one.
    pub fn template(&mut self, name: &str, template: Rc<dyn Template>) -> Rc<dyn Template> {
        self.templates.insert(name.into(), template.clone());
        template
    }

    /// Composes and registers a controller.
    ///
    /// A named or literal `base` bundle's actions are copied onto a fresh
    /// instance first, then `overrides` on top, last writer per name wins.
    /// Composition happens here and only here: re-registering the base later
    /// does not touch controllers already composed from it.
    pub fn controller(
        &mut self,
        name: &str,
        base: Option<ControllerRef>,
        overrides: Vec<(Box<str>, Action)>,
    ) -> Result<Rc<RefCell<Controller>>, RouterError> {
        let base = match base {
            Some(base) => Some(self.resolve_controller(base)?),
            None => None,
        };
        let controller = {
            let base = base.as_ref().map(|b| b.borrow());
            Controller::compose(name, base.as_deref(), overrides)
        };
        debug!(controller = name, "registered controller");
        let controller = Rc::new(RefCell::new(controller));
        self.controllers.insert(name.into(), controller.clone());
        Ok(controller)
    }

    /// Compiles `path` and registers a route under `name`.
    ///
    /// `target` and `controller` may be registered names or direct values.
    /// `enter`/`exit` default to "render this route's target" and a no-op
    /// respectively. Re-registering an existing name replaces the definition
    /// but keeps its original position in the match order.
    pub fn route(
        &mut self,
        name: &str,
        path: &str,
        target: impl Into<TemplateRef>,
        controller: impl Into<ControllerRef>,
        enter: Option<Callback>,
        exit: Option<Callback>,
    ) -> Result<Rc<Route>, RouterError> {
        let segments = pattern::compile(path)?;
        let template = self.resolve_template(target.into())?;
        let controller = self.resolve_controller(controller.into())?;

        let enter = match enter {
            Some(callback) => resolve_callback(&controller, callback)?,
            None => Rc::new(|app: &mut App| app.render()) as Action,
        };
        let exit = match exit {
            Some(callback) => resolve_callback(&controller, callback)?,
            None => Rc::new(|_: &mut App| Ok(())) as Action,
        };

        let route = Rc::new(Route {
            name: name.into(),
            path: path.into(),
            segments,
            template,
            controller,
            enter,
            exit,
        });

        if self.routes.insert(name.into(), route.clone()).is_none() {
            self.routing.push(name.into());
        }
        debug!(route = name, path, "registered route");
        Ok(route)
    }
}

/// Binds a method-name callback to its controller at registration time.
fn resolve_callback(
    controller: &Rc<RefCell<Controller>>,
    callback: Callback,
) -> Result<Action, RouterError> {
    match callback {
        Callback::Func(action) => Ok(action),
        Callback::Method(method) => {
            let controller = controller.borrow();
            match controller.action(&method) {
                Some(action) => Ok(action.clone()),
                None => Err(RouterError::UnknownAction {
                    controller: controller.name().into(),
                    action: method,
                }),
            }
        }
    }
}
