use crate::app::App;
use crate::error::RouterError;
use crate::reference::Ref;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

/// A callback invoked on route transitions, with the application as
/// argument. Plain synchronous calls, no special semantics.
pub type Action = Rc<dyn Fn(&mut App) -> Result<(), RouterError>>;

/// A named bundle of actions plus per-navigation working data.
///
/// Controllers are composed by copying a base bundle's actions and overlaying
/// specific overrides on top; there is no live link back to the base.
pub struct Controller {
    name: Box<str>,
    base: Option<Box<str>>,
    actions: HashMap<Box<str>, Action>,
    /// Working data handed to templates. Reset to an empty object each time
    /// a route owned by this controller is entered.
    pub it: Value,
}

impl Controller {
    pub(crate) fn compose(
        name: &str,
        base: Option<&Controller>,
        overrides: Vec<(Box<str>, Action)>,
    ) -> Self {
        let mut actions = match base {
            Some(base) => base.actions.clone(),
            None => HashMap::new(),
        };
        // last writer wins per action name
        for (name, action) in overrides {
            actions.insert(name, action);
        }
        Self {
            name: name.into(),
            base: base.map(|b| b.name.clone()),
            actions,
            it: Value::Object(Default::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the base bundle this controller was composed from, if any.
    /// Recorded for diagnostics only.
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    pub(crate) fn reset(&mut self) {
        self.it = Value::Object(Default::default());
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut actions: Vec<&str> = self.actions.keys().map(|k| &**k).collect();
        actions.sort_unstable();
        f.debug_struct("Controller")
            .field("name", &self.name)
            .field("base", &self.base)
            .field("actions", &actions)
            .field("it", &self.it)
            .finish()
    }
}

/// A registered controller name or a direct controller handle.
pub type ControllerRef = Ref<Rc<RefCell<Controller>>>;

impl From<Rc<RefCell<Controller>>> for ControllerRef {
    fn from(controller: Rc<RefCell<Controller>>) -> Self {
        Ref::Value(controller)
    }
}
