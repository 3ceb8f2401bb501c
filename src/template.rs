use crate::reference::Ref;

use std::rc::Rc;

use serde_json::Value;

/// Rendering collaborator contract: given the working data, produce markup.
///
/// Template compilation and what the markup means are the host's concern;
/// the router never inspects the returned string.
pub trait Template {
    fn render(&self, data: &Value) -> String;
}

impl<F> Template for F
where
    F: Fn(&Value) -> String,
{
    fn render(&self, data: &Value) -> String {
        self(data)
    }
}

/// A registered template name or a direct render target.
pub type TemplateRef = Ref<Rc<dyn Template>>;

impl From<Rc<dyn Template>> for TemplateRef {
    fn from(template: Rc<dyn Template>) -> Self {
        Ref::Value(template)
    }
}
