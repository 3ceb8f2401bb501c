use hashroute::{actions, App, Callback, Host, RouterError, Template};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Shared {
    markup: Rc<RefCell<Vec<String>>>,
    assigned: Rc<RefCell<Vec<String>>>,
    location: Rc<RefCell<String>>,
}

struct TestHost(Shared);

impl Host for TestHost {
    fn location(&self) -> String {
        self.0.location.borrow().clone()
    }

    fn assign_location(&mut self, location: &str) {
        *self.0.location.borrow_mut() = location.to_owned();
        self.0.assigned.borrow_mut().push(location.to_owned());
    }

    fn present(&mut self, markup: &str) {
        self.0.markup.borrow_mut().push(markup.to_owned());
    }
}

fn test_app() -> (App, Shared) {
    let shared = Shared::default();
    let mut app = App::new(TestHost(shared.clone()));
    let plain: Rc<dyn Template> = Rc::new(|data: &Value| data.to_string());
    app.template("plain", plain);
    app.controller("base", None, actions! {}).unwrap();
    (app, shared)
}

fn func(f: impl Fn(&mut App) -> Result<(), RouterError> + 'static) -> Option<Callback> {
    Some(Callback::Func(Rc::new(f)))
}

fn noop() -> Option<Callback> {
    func(|_| Ok(()))
}

#[test]
fn registration_order_wins() {
    let (mut app, _) = test_app();
    app.route("first", "/{x}", "plain", "base", noop(), None)
        .unwrap();
    app.route("second", "/a", "plain", "base", noop(), None)
        .unwrap();

    // both routes match "/a"; the first-registered one wins
    app.navigate("#/a").unwrap();
    assert!(app.at("first", &[]));
    assert!(!app.at("second", &[]));
}

#[test]
fn match_is_deterministic() {
    let (mut app, _) = test_app();
    app.route("item", "/item/{id}", "plain", "base", noop(), None)
        .unwrap();

    app.navigate("#/item/42").unwrap();
    let first = app.current().unwrap().params.clone();
    app.navigate("#/item/42").unwrap();
    let second = app.current().unwrap().params.clone();
    assert_eq!(first, second);
    assert_eq!(first["id"], "42");
}

#[test]
fn link_match_round_trip() {
    let (mut app, _) = test_app();
    app.route("pair", "/{a}/{b}", "plain", "base", noop(), None)
        .unwrap();

    let link = app.link("pair", &["v1", "v2"]).unwrap();
    assert_eq!(link, "#/v1/v2");

    app.navigate(&link).unwrap();
    let params = &app.current().unwrap().params;
    let expected: HashMap<String, String> = vec![("a", "v1"), ("b", "v2")]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
    assert_eq!(params, &expected);
}

#[test]
fn query_parsing() {
    let (mut app, _) = test_app();
    app.route("x", "/x", "plain", "base", noop(), None).unwrap();

    app.navigate("#/x?a=1&b&c=hello%20world").unwrap();
    let query = &app.current().unwrap().query;
    assert_eq!(query["a"], Some("1".to_owned()));
    assert_eq!(query["b"], None);
    assert_eq!(query["c"], Some("hello world".to_owned()));
}

#[test]
fn arity_must_match_exactly() {
    let (mut app, _) = test_app();
    app.route("item", "/item/{id}", "plain", "base", noop(), None)
        .unwrap();

    for location in &["#/item", "#/item/42/edit", "#/"] {
        match app.navigate(location) {
            Err(RouterError::RoutingFailure(l)) => assert_eq!(&*l, *location),
            other => panic!("expected RoutingFailure, got {:?}", other),
        }
        assert!(app.current().is_none());
    }
}

#[test]
fn regex_constrained_segment() {
    let (mut app, _) = test_app();
    app.route("item", "/item/{id:^[0-9]+$}", "plain", "base", noop(), None)
        .unwrap();

    app.navigate("#/item/42").unwrap();
    assert_eq!(app.current().unwrap().params["id"], "42");

    assert!(matches!(
        app.navigate("#/item/abc"),
        Err(RouterError::RoutingFailure(_))
    ));
    assert!(app.current().is_none());
}

#[test]
fn exit_runs_before_enter_and_observes_old_state() {
    let (mut app, _) = test_app();
    let log: Rc<RefCell<Vec<String>>> = Rc::default();

    let observe = |log: &Rc<RefCell<Vec<String>>>, tag: &'static str| {
        let log = log.clone();
        move |app: &mut App| {
            let active = app
                .current()
                .map(|c| c.route.name().to_owned())
                .unwrap_or_default();
            log.borrow_mut().push(format!("{} at {}", tag, active));
            Ok(())
        }
    };

    app.route(
        "a",
        "/a",
        "plain",
        "base",
        func(observe(&log, "enter a")),
        func(observe(&log, "exit a")),
    )
    .unwrap();
    app.route(
        "b",
        "/b",
        "plain",
        "base",
        func(observe(&log, "enter b")),
        None,
    )
    .unwrap();

    app.navigate("#/a").unwrap();
    app.navigate("#/b").unwrap();

    // the exit callback still sees the outgoing route committed
    assert_eq!(
        *log.borrow(),
        vec!["enter a at a", "exit a at a", "enter b at b"]
    );
}

#[test]
fn failed_navigation_raises_and_clears_state() {
    let (mut app, _) = test_app();
    app.route("a", "/a", "plain", "base", noop(), None).unwrap();

    app.navigate("#/a").unwrap();
    assert!(app.current().is_some());

    match app.navigate("#/nope") {
        Err(RouterError::RoutingFailure(location)) => assert_eq!(&*location, "#/nope"),
        other => panic!("expected RoutingFailure, got {:?}", other),
    }
    assert!(app.current().is_none());
    assert!(!app.at("a", &[]));
}

#[test]
fn controller_override_wins_over_base() {
    let (mut app, _) = test_app();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();

    let base_log = log.clone();
    let override_log = log.clone();
    app.controller(
        "parent",
        None,
        actions! {
            "greet" => move |_: &mut App| {
                base_log.borrow_mut().push("base");
                Ok(())
            },
            "farewell" => |_: &mut App| Ok(()),
        },
    )
    .unwrap();
    let child = app
        .controller(
            "child",
            Some("parent".into()),
            actions! {
                "greet" => move |_: &mut App| {
                    override_log.borrow_mut().push("override");
                    Ok(())
                },
            },
        )
        .unwrap();

    // the inherited action survives, the overridden one is replaced
    assert!(child.borrow().action("farewell").is_some());
    assert_eq!(child.borrow().base(), Some("parent"));

    app.route("hi", "/hi", "plain", "child", Some("greet".into()), None)
        .unwrap();
    app.navigate("#/hi").unwrap();
    assert_eq!(*log.borrow(), vec!["override"]);
}

#[test]
fn composition_is_copy_at_definition_time() {
    let (mut app, _) = test_app();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();

    let old_log = log.clone();
    app.controller(
        "parent",
        None,
        actions! {
            "greet" => move |_: &mut App| {
                old_log.borrow_mut().push("old");
                Ok(())
            },
        },
    )
    .unwrap();
    app.controller("child", Some("parent".into()), actions! {})
        .unwrap();

    // re-registering the base does not reach controllers composed earlier
    let new_log = log.clone();
    app.controller(
        "parent",
        None,
        actions! {
            "greet" => move |_: &mut App| {
                new_log.borrow_mut().push("new");
                Ok(())
            },
        },
    )
    .unwrap();

    app.route("hi", "/hi", "plain", "child", Some("greet".into()), None)
        .unwrap();
    app.navigate("#/hi").unwrap();
    assert_eq!(*log.borrow(), vec!["old"]);
}

#[test]
fn unknown_references() {
    let (mut app, _) = test_app();

    assert!(matches!(
        app.route("r", "/r", "missing", "base", None, None),
        Err(RouterError::UnknownTemplate(name)) if &*name == "missing"
    ));
    assert!(matches!(
        app.route("r", "/r", "plain", "missing", None, None),
        Err(RouterError::UnknownController(name)) if &*name == "missing"
    ));
    assert!(matches!(
        app.controller("c", Some("missing".into()), actions! {}),
        Err(RouterError::UnknownController(name)) if &*name == "missing"
    ));
    assert!(matches!(
        app.link("missing", &[]),
        Err(RouterError::UnknownRoute(name)) if &*name == "missing"
    ));
    assert!(matches!(
        app.route("r", "/r", "plain", "base", Some("missing".into()), None),
        Err(RouterError::UnknownAction { action, .. }) if &*action == "missing"
    ));
    // failed registrations leave the registry untouched
    assert!(app.route_named("r").is_none());
}

#[test]
fn bad_pattern_fails_registration() {
    let (mut app, _) = test_app();
    assert!(matches!(
        app.route("r", "/item/{id:(}", "plain", "base", None, None),
        Err(RouterError::PatternCompile { .. })
    ));
}

#[test]
fn replacement_keeps_registration_order() {
    let (mut app, _) = test_app();
    app.route("first", "/{x}", "plain", "base", noop(), None)
        .unwrap();
    app.route("second", "/a", "plain", "base", noop(), None)
        .unwrap();

    // move "first" out of the way: "second" becomes reachable
    app.route("first", "/b", "plain", "base", noop(), None)
        .unwrap();
    app.navigate("#/a").unwrap();
    assert!(app.at("second", &[]));

    // restore the overlap: "first" still precedes "second"
    app.route("first", "/{x}", "plain", "base", noop(), None)
        .unwrap();
    app.navigate("#/a").unwrap();
    assert!(app.at("first", &[]));
}

#[test]
fn link_building() {
    let (mut app, _) = test_app();
    app.route(
        "item",
        "/item/{id}/{:^[a-z]+$}",
        "plain",
        "base",
        noop(),
        None,
    )
    .unwrap();

    assert_eq!(app.link("item", &["42", "info"]).unwrap(), "#/item/42/info");
    assert_eq!(
        app.link_with_query("item", &["42", "info"], &[("q", "a b")])
            .unwrap(),
        "#/item/42/info?q=a%20b"
    );

    assert!(matches!(
        app.link("item", &["42"]),
        Err(RouterError::LinkArgs {
            expected: 2,
            supplied: 1,
            ..
        })
    ));
}

#[test]
fn go_instructs_the_host_without_navigating() {
    let (mut app, shared) = test_app();
    app.route("item", "/item/{id}", "plain", "base", noop(), None)
        .unwrap();

    app.go("item", &["42"]).unwrap();
    app.go("#/already/formed", &[]).unwrap();
    assert_eq!(
        *shared.assigned.borrow(),
        vec!["#/item/42", "#/already/formed"]
    );
    // the transition only happens once the host delivers the notification
    assert!(app.current().is_none());
}

#[test]
fn refresh_reruns_the_host_location() {
    let (mut app, shared) = test_app();
    let entered: Rc<RefCell<usize>> = Rc::default();
    let count = entered.clone();
    app.route(
        "item",
        "/item/{id}",
        "plain",
        "base",
        func(move |_| {
            *count.borrow_mut() += 1;
            Ok(())
        }),
        None,
    )
    .unwrap();

    app.go("item", &["42"]).unwrap();
    let location = shared.location.borrow().clone();
    app.navigate(&location).unwrap();
    app.refresh().unwrap();

    assert_eq!(*entered.borrow(), 2);
    assert_eq!(app.current().unwrap().params["id"], "42");
}

#[test]
fn at_checks_parameter_values() {
    let (mut app, _) = test_app();
    app.route("pair", "/{a}/static/{b}", "plain", "base", noop(), None)
        .unwrap();
    app.route("other", "/other", "plain", "base", noop(), None)
        .unwrap();

    app.navigate("#/x/static/y").unwrap();

    assert!(app.at("pair", &[]));
    assert!(app.at("pair", &[Some("x")]));
    assert!(app.at("pair", &[None, Some("y")]));
    assert!(app.at("pair", &[Some("x"), Some("y")]));
    assert!(!app.at("pair", &[Some("z")]));
    assert!(!app.at("pair", &[None, Some("z")]));
    assert!(!app.at("other", &[]));
    assert!(!app.at("unregistered", &[]));
}

#[test]
fn root_route_and_marker_stripping() {
    let (mut app, _) = test_app();
    app.route("home", "/", "plain", "base", noop(), None).unwrap();

    // an empty fragment means the root location
    app.navigate("#").unwrap();
    assert!(app.at("home", &[]));
    app.navigate("").unwrap();
    assert!(app.at("home", &[]));
    app.navigate("/").unwrap();
    assert!(app.at("home", &[]));
}

#[test]
fn default_enter_renders_working_data() {
    let (mut app, shared) = test_app();
    let controller = app.controller_named("base").unwrap();
    controller.borrow_mut().it = json!({"stale": true});

    app.route("home", "/", "plain", "base", None, None).unwrap();
    app.navigate("#/").unwrap();

    // working data is reset before entry, so the default render sees {}
    assert_eq!(*shared.markup.borrow(), vec!["{}"]);
}

#[test]
fn working_data_resets_on_each_entry() {
    let (mut app, shared) = test_app();
    let fill = func(|app: &mut App| {
        let controller = app.current().unwrap().controller.clone();
        controller.borrow_mut().it = json!({"n": 1});
        app.render()
    });

    app.route("a", "/a", "plain", "base", fill, None).unwrap();
    app.route("b", "/b", "plain", "base", None, None).unwrap();

    app.navigate("#/a").unwrap();
    app.navigate("#/b").unwrap();

    let markup = shared.markup.borrow();
    assert_eq!(markup[0], r#"{"n":1}"#);
    assert_eq!(markup[1], "{}");
}

#[test]
fn callback_errors_propagate_with_state_committed() {
    let (mut app, _) = test_app();
    app.route(
        "boom",
        "/boom",
        "plain",
        "base",
        func(|_| Err(RouterError::callback("enter failed"))),
        func(|_| Err(RouterError::callback("exit failed"))),
    )
    .unwrap();
    app.route("safe", "/safe", "plain", "base", noop(), None)
        .unwrap();

    let err = app.navigate("#/boom").unwrap_err();
    assert_eq!(err.to_string(), "enter failed");
    // the enter callback failed, but its route stays committed
    assert!(app.at("boom", &[]));

    let err = app.navigate("#/safe").unwrap_err();
    assert_eq!(err.to_string(), "exit failed");
    // the exit callback failed before any state mutation
    assert!(app.at("boom", &[]));
}

#[test]
fn leave_runs_exit_without_touching_state() {
    let (mut app, _) = test_app();
    let exits: Rc<RefCell<usize>> = Rc::default();
    let count = exits.clone();
    app.route(
        "a",
        "/a",
        "plain",
        "base",
        noop(),
        func(move |_| {
            *count.borrow_mut() += 1;
            Ok(())
        }),
    )
    .unwrap();

    app.leave().unwrap(); // nothing active, nothing to do
    assert_eq!(*exits.borrow(), 0);

    app.navigate("#/a").unwrap();
    app.leave().unwrap();
    assert_eq!(*exits.borrow(), 1);
    assert!(app.at("a", &[]));
}
