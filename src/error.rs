use std::error::Error as StdError;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("failed to compile pattern {pattern:?}: {msg}")]
    PatternCompile { pattern: Box<str>, msg: String },

    #[error("unknown controller: {0:?}")]
    UnknownController(Box<str>),

    #[error("unknown template: {0:?}")]
    UnknownTemplate(Box<str>),

    #[error("unknown route: {0:?}")]
    UnknownRoute(Box<str>),

    #[error("no action {action:?} on controller {controller:?}")]
    UnknownAction {
        controller: Box<str>,
        action: Box<str>,
    },

    #[error("unable to route: {0:?}")]
    RoutingFailure(Box<str>),

    #[error("link to {route:?} takes {expected} arguments, {supplied} supplied")]
    LinkArgs {
        route: Box<str>,
        expected: usize,
        supplied: usize,
    },

    #[error("no active route")]
    NoActiveRoute,

    #[error(transparent)]
    Callback(Box<dyn StdError + Send + Sync>),
}

impl RouterError {
    /// Wraps a failure raised inside an enter/exit callback so that it
    /// propagates unmodified through the navigation machinery.
    pub fn callback(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Callback(err.into())
    }
}
