/// Builds the action list handed to [`App::controller`].
///
/// ```
/// use hashroute::{actions, App};
///
/// let overrides = actions! {
///     "list" => |app: &mut App| app.render(),
///     "clear" => |_: &mut App| Ok(()),
/// };
/// assert_eq!(overrides.len(), 2);
/// ```
///
/// [`App::controller`]: crate::App::controller
#[macro_export]
macro_rules! actions {
    {$($name:expr => $action:expr),* $(,)?} => {{
        let mut __actions: Vec<(Box<str>, $crate::Action)> = Vec::new();
        $(__actions.push(($name.into(), std::rc::Rc::new($action) as $crate::Action));)*
        __actions
    }};
}
