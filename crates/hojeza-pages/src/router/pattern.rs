//! Static path patterns.
//!
//! A pattern is either a sequence of literal segments (`/`, `contact`,
//! `/services/web-development`) or the wildcard `*`. There are no dynamic
//! parameters: every page route is static.
//!
//! Paths and patterns are compared segment by segment after normalization:
//! query string and fragment are dropped, empty segments are ignored (so
//! leading, trailing and doubled slashes do not matter) and comparison is
//! ASCII case-insensitive.

use std::fmt;

/// A compiled route pattern.
#[derive(Clone, PartialEq, Eq)]
pub enum PathPattern {
	/// Literal segments that must all match, in order.
	Static(Vec<String>),
	/// Matches any remainder, including an empty one.
	Wildcard,
}

impl PathPattern {
	/// Parses a pattern string.
	pub fn new(pattern: &str) -> Self {
		if pattern.trim() == "*" {
			return Self::Wildcard;
		}
		Self::Static(segments(pattern).map(str::to_string).collect())
	}

	pub fn is_wildcard(&self) -> bool {
		matches!(self, Self::Wildcard)
	}

	/// Literal segments, empty for the wildcard.
	pub fn segments(&self) -> &[String] {
		match self {
			Self::Static(segments) => segments,
			Self::Wildcard => &[],
		}
	}

	/// Number of leading segments of `path` consumed by this pattern, if it
	/// is a prefix of `path`. The wildcard consumes everything.
	pub fn match_prefix(&self, path: &[&str]) -> Option<usize> {
		match self {
			Self::Wildcard => Some(path.len()),
			Self::Static(expected) => {
				if expected.len() > path.len() {
					return None;
				}
				expected
					.iter()
					.zip(path)
					.all(|(e, p)| e.eq_ignore_ascii_case(p))
					.then_some(expected.len())
			}
		}
	}

	/// Whether this pattern matches the whole of `path`.
	pub fn matches(&self, path: &str) -> bool {
		let segs = split_path(path);
		self.match_prefix(&segs) == Some(segs.len())
	}

	/// Key used to detect duplicate siblings.
	pub(crate) fn canonical(&self) -> String {
		match self {
			Self::Wildcard => "*".to_string(),
			Self::Static(segments) => segments
				.iter()
				.map(|s| s.to_ascii_lowercase())
				.collect::<Vec<_>>()
				.join("/"),
		}
	}
}

impl fmt::Debug for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "PathPattern({self})")
	}
}

impl fmt::Display for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Wildcard => f.write_str("*"),
			Self::Static(segments) => write!(f, "/{}", segments.join("/")),
		}
	}
}

/// Splits a request path into its non-empty segments, ignoring query string
/// and fragment.
pub fn split_path(path: &str) -> Vec<&str> {
	segments(strip_suffixes(path)).collect()
}

/// Canonical `/a/b` form of a request path.
pub fn normalize_path(path: &str) -> String {
	format!("/{}", split_path(path).join("/"))
}

fn strip_suffixes(path: &str) -> &str {
	let end = path.find(['?', '#']).unwrap_or(path.len());
	&path[..end]
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
	path.split('/').filter(|s| !s.is_empty())
}
