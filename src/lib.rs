//! A client-side fragment router.
//!
//! `hashroute` maps location fragments like `#/item/42?tab=info` onto named
//! routes declared with a small path-template language, extracts parameters
//! and query arguments, drives exit/enter callbacks on every transition and
//! builds links back from route names (reverse routing).
//!
//! The router is a pure, synchronous, single-threaded engine. Everything
//! that touches the outside world is a collaborator behind a trait:
//! templates implement [`Template`] (`render(data) -> markup`) and the host
//! environment implements [`Host`], delivering location-changed
//! notifications to [`App::navigate`] and teardown notifications to
//! [`App::leave`].
//!
//! # Path templates
//!
//! Segments are separated by `/`. A `{...}` segment captures its value:
//!
//! ```text
//! /literal                 exact match
//! /{id}                    capture "id", any non-empty value
//! /{id:^[0-9]+$}           capture "id", constrained by a regex
//! /{word:^abc$:i}          regex with flags
//! /{:^[0-9]+$}             positional (unnamed) constrained match
//! ```
//!
//! Routes match in registration order; the first route whose segment count
//! and constraints hold wins.
//!
//! # Example
//!
//! ```
//! use hashroute::{App, Host};
//! use std::rc::Rc;
//!
//! struct NullHost;
//!
//! impl Host for NullHost {
//!     fn location(&self) -> String {
//!         String::new()
//!     }
//!     fn assign_location(&mut self, _location: &str) {}
//!     fn present(&mut self, _markup: &str) {}
//! }
//!
//! # fn main() -> Result<(), hashroute::RouterError> {
//! let mut app = App::new(NullHost);
//!
//! let item: Rc<dyn hashroute::Template> =
//!     Rc::new(|data: &serde_json::Value| format!("<p>{}</p>", data));
//! app.template("item", item);
//! app.controller("base", None, hashroute::actions! {})?;
//! app.route("item", "/item/{id}", "item", "base", None, None)?;
//!
//! assert_eq!(app.link("item", &["42"])?, "#/item/42");
//!
//! app.navigate("#/item/42")?;
//! assert!(app.at("item", &[Some("42")]));
//! assert_eq!(app.current().unwrap().params["id"], "42");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod app;
mod controller;
mod error;
mod host;
mod macros;
mod pattern;
mod query;
mod reference;
mod route;
mod template;

pub use crate::app::{App, Current};
pub use crate::controller::{Action, Controller, ControllerRef};
pub use crate::error::RouterError;
pub use crate::host::Host;
pub use crate::pattern::Segment;
pub use crate::query::QueryMap;
pub use crate::reference::Ref;
pub use crate::route::{Callback, Route, RouteRef};
pub use crate::template::{Template, TemplateRef};
