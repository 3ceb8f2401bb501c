/// The host environment around the router.
///
/// The host owns the history mechanism and the document. It delivers
/// location-changed notifications to [`App::navigate`] and teardown
/// notifications to [`App::leave`]; the router talks back only through this
/// trait.
///
/// [`App::navigate`]: crate::App::navigate
/// [`App::leave`]: crate::App::leave
pub trait Host {
    /// The current location fragment. A leading `#` marker is accepted.
    fn location(&self) -> String;

    /// Instruct the host to change location.
    ///
    /// The host is expected to deliver the resulting location-changed
    /// notification back to the application on its own schedule; the router
    /// never runs a transition from inside this call.
    fn assign_location(&mut self, location: &str);

    /// Present rendered markup.
    fn present(&mut self, markup: &str);
}
