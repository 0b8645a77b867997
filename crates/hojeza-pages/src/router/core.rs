//! Route resolution.

use std::rc::Rc;

use super::guard::GuardDecision;
use super::pattern::{normalize_path, split_path};
use super::table::{RouteEntry, RouteTable};
use crate::component::{Component, Layout, RenderContext, View};

/// Upper bound on guard redirects followed by a single resolution.
pub const MAX_REDIRECTS: usize = 8;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// Two siblings share a pattern.
	#[error("duplicate route pattern: {0}")]
	DuplicatePattern(String),
	/// A wildcard is followed by another sibling.
	#[error("wildcard route must be the last child of {0}")]
	WildcardNotLast(String),
	/// An entry has neither a page nor children.
	#[error("route entry {0} has no page and no children")]
	EmptyEntry(String),
	/// No top-level wildcard page.
	#[error("route table has no top-level wildcard fallback")]
	MissingFallback,
	/// Guards kept redirecting.
	#[error("redirect loop while resolving {path} (chain: {})", .chain.join(" -> "))]
	RedirectLoop { path: String, chain: Vec<String> },
	/// Reverse lookup for an unknown route name.
	#[error("unknown route name: {0}")]
	UnknownRouteName(String),
	/// The named entry matches any path, so it has no single URL.
	#[error("route {0} is a wildcard and cannot be reversed")]
	NotReversible(String),
}

/// A route matched against a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
	/// Normalized request path.
	pub path: String,
	/// Full pattern of the matched entry, prefixes included.
	pub pattern: String,
	/// Name of the matched entry, if any.
	pub name: Option<String>,
	/// Paths that guards redirected away from, in order.
	pub redirected_from: Vec<String>,
}

/// Result of resolving a path: the admitted match plus what to render.
#[derive(Clone)]
pub struct Resolution {
	pub route: RouteMatch,
	page: Rc<dyn Component>,
	layout: Option<Rc<dyn Layout>>,
}

impl std::fmt::Debug for Resolution {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Resolution")
			.field("route", &self.route)
			.field("page", &self.page.name())
			.field("has_layout", &self.layout.is_some())
			.finish()
	}
}

impl Resolution {
	pub fn page(&self) -> &Rc<dyn Component> {
		&self.page
	}

	pub fn layout(&self) -> Option<&Rc<dyn Layout>> {
		self.layout.as_ref()
	}

	/// Renders the page, wrapped in the layout when there is one.
	pub fn render(&self, ctx: &RenderContext<'_>) -> View {
		let content = self.page.render(ctx);
		match &self.layout {
			Some(layout) => layout.render(ctx, content),
			None => content,
		}
	}
}

/// Resolves request paths against a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct Router {
	table: RouteTable,
}

impl Router {
	pub fn new(table: RouteTable) -> Self {
		Self { table }
	}

	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	/// Resolves `path`, running guards along the matched chain.
	///
	/// Entries are tried depth-first with siblings in declaration order. Guards
	/// run outermost first; the first redirect restarts resolution at its
	/// target. The nearest layout on the chain wraps the page.
	pub fn resolve(&self, path: &str) -> Result<Resolution, RouterError> {
		let mut current = normalize_path(path);
		let mut redirected_from = Vec::new();

		loop {
			let chain = self.lookup(&current)?;

			match run_guards(&chain, &current, &redirected_from) {
				GuardDecision::Allow => {
					let resolution = build_resolution(&chain, current, redirected_from)?;
					tracing::debug!(
						path = %resolution.route.path,
						pattern = %resolution.route.pattern,
						"route resolved"
					);
					return Ok(resolution);
				}
				GuardDecision::Redirect(target) => {
					tracing::debug!(from = %current, to = %target, "guard redirected");
					redirected_from.push(current);
					if redirected_from.len() > MAX_REDIRECTS {
						return Err(RouterError::RedirectLoop {
							path: normalize_path(path),
							chain: redirected_from,
						});
					}
					current = normalize_path(&target);
				}
			}
		}
	}

	/// Chain of entries from the top level down to the page matching `path`.
	fn lookup(&self, path: &str) -> Result<Vec<&RouteEntry>, RouterError> {
		let segments = split_path(path);
		let mut chain = Vec::new();
		if find(self.table.entries(), &segments, &mut chain) {
			Ok(chain)
		} else {
			Err(RouterError::MissingFallback)
		}
	}
}

fn find<'t>(entries: &'t [RouteEntry], segments: &[&str], chain: &mut Vec<&'t RouteEntry>) -> bool {
	for entry in entries {
		let Some(consumed) = entry.pattern.match_prefix(segments) else {
			continue;
		};
		let rest = &segments[consumed..];

		chain.push(entry);
		if rest.is_empty() && entry.page.is_some() {
			return true;
		}
		if find(&entry.children, rest, chain) {
			return true;
		}
		chain.pop();
	}
	false
}

fn run_guards(chain: &[&RouteEntry], path: &str, redirected_from: &[String]) -> GuardDecision {
	let route = describe(chain, path, redirected_from);
	chain
		.iter()
		.filter_map(|entry| entry.guard.as_ref())
		.map(|guard| guard.can_enter(&route))
		.find(|decision| !decision.is_allowed())
		.unwrap_or(GuardDecision::Allow)
}

fn build_resolution(
	chain: &[&RouteEntry],
	path: String,
	redirected_from: Vec<String>,
) -> Result<Resolution, RouterError> {
	let leaf = chain.last().ok_or(RouterError::MissingFallback)?;
	let page = leaf.page.clone().ok_or(RouterError::MissingFallback)?;
	let layout = chain.iter().rev().find_map(|e| e.layout.clone());
	let route = describe(chain, &path, &redirected_from);

	Ok(Resolution {
		route,
		page,
		layout,
	})
}

fn describe(chain: &[&RouteEntry], path: &str, redirected_from: &[String]) -> RouteMatch {
	let segments: Vec<&str> = chain
		.iter()
		.flat_map(|e| e.pattern.segments())
		.map(String::as_str)
		.collect();
	let wildcard = chain.last().is_some_and(|e| e.pattern.is_wildcard());
	let pattern = match (wildcard, segments.is_empty()) {
		(true, true) => "*".to_string(),
		(true, false) => format!("/{}/*", segments.join("/")),
		(false, _) => format!("/{}", segments.join("/")),
	};

	RouteMatch {
		path: path.to_string(),
		pattern,
		name: chain.last().and_then(|e| e.name.clone()),
		redirected_from: redirected_from.to_vec(),
	}
}
