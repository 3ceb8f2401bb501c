//! Path template compiler.
//!
//! A template is a '/'-separated list of segment patterns:
//!
//! ```text
//! /literal/{name}/{name:regex}/{name:regex:flags}/{:regex}
//! ```
//!
//! A `{...}` piece captures its segment, optionally constrained by a regex;
//! anything else must match verbatim.

use crate::error::RouterError;

use regex::{Regex, RegexBuilder};

const SLASH: char = '/';
const COLON: char = ':';

#[derive(Debug, Clone)]
pub enum Segment {
    /// Matches a path segment equal to the literal.
    Exact(Box<str>),
    /// Captures a path segment, optionally under a regex constraint.
    /// A constraint-less parameter accepts any non-empty segment.
    Param {
        name: Option<Box<str>>,
        regex: Option<Regex>,
    },
}

impl Segment {
    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param { .. })
    }

    pub(crate) fn param_name(&self) -> Option<&str> {
        match self {
            Self::Param {
                name: Some(name), ..
            } => Some(name),
            _ => None,
        }
    }

    pub(crate) fn literal(&self) -> Option<&str> {
        match self {
            Self::Exact(lit) => Some(lit),
            Self::Param { .. } => None,
        }
    }

    /// The regex is tested with search semantics: anchoring is up to the
    /// pattern author.
    pub(crate) fn matches(&self, value: &str) -> bool {
        match self {
            Self::Exact(lit) => &**lit == value,
            Self::Param {
                regex: Some(re), ..
            } => re.is_match(value),
            Self::Param { regex: None, .. } => !value.is_empty(),
        }
    }
}

/// Compiles a path template into its segment patterns.
///
/// Every piece after the leading '/' yields one segment, empty pieces
/// included: the root template `"/"` compiles to a single `Exact("")`
/// segment, and trailing slashes are significant.
pub(crate) fn compile(path: &str) -> Result<Vec<Segment>, RouterError> {
    if !path.starts_with(SLASH) {
        return Err(err(path, "pattern must start with '/'"));
    }
    path[1..]
        .split(SLASH)
        .map(|piece| compile_piece(path, piece))
        .collect()
}

fn compile_piece(path: &str, piece: &str) -> Result<Segment, RouterError> {
    // a bare "{}" has nothing to capture and stays an ordinary literal
    if !(piece.len() > 2 && piece.starts_with('{') && piece.ends_with('}')) {
        return Ok(Segment::Exact(piece.into()));
    }

    let mut inner = piece[1..piece.len() - 1].split(COLON);

    let name = match inner.next() {
        Some("") | None => None,
        Some(name) => Some(name.into()),
    };

    let regex = match (inner.next(), inner.next(), inner.next()) {
        (None, ..) => None,
        (Some(src), None, _) => Some(build_regex(path, src, "")?),
        (Some(src), Some(flags), None) => Some(build_regex(path, src, flags)?),
        (Some(_), Some(_), Some(_)) => {
            return Err(err(path, "too many ':' pieces in parameter segment"))
        }
    };

    Ok(Segment::Param { name, regex })
}

fn build_regex(path: &str, src: &str, flags: &str) -> Result<Regex, RouterError> {
    let mut builder = RegexBuilder::new(src);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            'U' => builder.swap_greed(true),
            // unicode is already the default
            'u' => &mut builder,
            _ => return Err(err(path, format!("unsupported regex flag {:?}", flag))),
        };
    }
    builder.build().map_err(|e| err(path, e.to_string()))
}

fn err(pattern: &str, msg: impl Into<String>) -> RouterError {
    RouterError::PatternCompile {
        pattern: pattern.into(),
        msg: msg.into(),
    }
}
