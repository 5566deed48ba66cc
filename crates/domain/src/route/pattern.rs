//! Route path patterns.
//!
//! Supported syntax:
//! - static segments: `/history`
//! - single-segment parameters: `/documents/:id`
//! - a trailing catch-all capturing zero or more segments: `/:catchAll(.*)*`

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DomainError, DomainResult};

const CATCH_ALL_SUFFIX: &str = "(.*)*";

/// One segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, compared case-insensitively.
    Static(String),
    /// Named parameter matching exactly one segment.
    Param(String),
    /// Named parameter matching every remaining segment.
    CatchAll(String),
}

/// A parsed route path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parses a pattern such as `/history` or `/:catchAll(.*)*`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoutePattern` for empty parameter names,
    /// unsupported custom regexes, or a catch-all that is not the last segment.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Self::from_parts(&[], raw)
    }

    /// Parses `child` relative to `parent`.
    ///
    /// A child starting with `/` is absolute; anything else, including the
    /// empty string, is appended to the parent's segments.
    ///
    /// # Errors
    ///
    /// Same as [`PathPattern::parse`].
    pub fn join(parent: &Self, child: &str) -> DomainResult<Self> {
        if child.starts_with('/') {
            Self::parse(child)
        } else {
            Self::from_parts(&parent.segments, child)
        }
    }

    fn from_parts(prefix: &[Segment], raw: &str) -> DomainResult<Self> {
        let invalid = |reason: &str| DomainError::InvalidRoutePattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        if prefix.iter().any(|s| matches!(s, Segment::CatchAll(_))) {
            return Err(invalid("cannot nest below a catch-all"));
        }

        let mut segments = prefix.to_vec();
        let parts: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();

        for (index, part) in parts.iter().enumerate() {
            let Some(name) = part.strip_prefix(':') else {
                segments.push(Segment::Static(part.to_string()));
                continue;
            };

            if let Some(name) = name.strip_suffix(CATCH_ALL_SUFFIX) {
                if index + 1 != parts.len() {
                    return Err(invalid("catch-all must be the last segment"));
                }
                if name.is_empty() {
                    return Err(invalid("parameter name is empty"));
                }
                segments.push(Segment::CatchAll(name.to_string()));
            } else if name.contains('(') || name.contains(')') {
                return Err(invalid("custom parameter regexes are not supported"));
            } else if name.is_empty() {
                return Err(invalid("parameter name is empty"));
            } else {
                segments.push(Segment::Param(name.to_string()));
            }
        }

        Ok(Self { segments })
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if the pattern ends with a catch-all segment.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }

    /// Returns true if the pattern matches every possible path.
    #[must_use]
    pub fn matches_everything(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::CatchAll(_)])
    }

    /// Returns the concrete path if the pattern has no parameters.
    #[must_use]
    pub fn static_path(&self) -> Option<String> {
        let mut path = String::new();
        for segment in &self.segments {
            let Segment::Static(text) = segment else {
                return None;
            };
            path.push('/');
            path.push_str(text);
        }
        if path.is_empty() {
            path.push('/');
        }
        Some(path)
    }

    /// Matches already-split path segments against the pattern.
    #[must_use]
    pub fn matches(&self, input: &[&str]) -> Option<RouteParams> {
        let mut params = RouteParams::default();

        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(text) => {
                    let actual = input.get(index)?;
                    if actual.to_lowercase() != text.to_lowercase() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let actual = input.get(index)?;
                    params.insert(name, vec![(*actual).to_string()]);
                }
                Segment::CatchAll(name) => {
                    let rest = input.get(index..).unwrap_or_default();
                    params.insert(name, rest.iter().map(|s| (*s).to_string()).collect());
                    return Some(params);
                }
            }
        }

        (input.len() == self.segments.len()).then_some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => write!(f, "/{text}")?,
                Segment::Param(name) => write!(f, "/:{name}")?,
                Segment::CatchAll(name) => write!(f, "/:{name}{CATCH_ALL_SUFFIX}")?,
            }
        }
        Ok(())
    }
}

/// Parameters captured while matching a path.
///
/// Single-segment parameters hold one value; a catch-all holds every
/// remaining segment, possibly none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, Vec<String>>);

impl RouteParams {
    fn insert(&mut self, name: &str, values: Vec<String>) {
        self.0.insert(name.to_string(), values);
    }

    /// Returns the first value captured for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|v| v.first()).map(String::as_str)
    }

    /// Returns every value captured for `name`.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.0.get(name).map_or(&[], Vec::as_slice)
    }

    /// Returns true if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Splits a requested location into path segments.
///
/// Query string and fragment are dropped; empty segments (leading, trailing
/// or repeated slashes) are ignored.
#[must_use]
pub fn split_path(location: &str) -> Vec<&str> {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    location[..end].split('/').filter(|s| !s.is_empty()).collect()
}
