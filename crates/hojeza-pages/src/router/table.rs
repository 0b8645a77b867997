//! Declarative route table.

use std::collections::HashSet;
use std::rc::Rc;

use super::guard::AccessGuard;
use super::pattern::PathPattern;
use super::RouterError;
use crate::component::{Component, Layout};

/// One node of the route table.
///
/// An entry either renders a page, groups child entries under a common
/// prefix, or both. A pure group never matches on its own.
#[derive(Clone)]
pub struct RouteEntry {
	pub(super) pattern: PathPattern,
	pub(super) name: Option<String>,
	pub(super) guard: Option<Rc<dyn AccessGuard>>,
	pub(super) layout: Option<Rc<dyn Layout>>,
	pub(super) page: Option<Rc<dyn Component>>,
	pub(super) children: Vec<RouteEntry>,
}

impl std::fmt::Debug for RouteEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteEntry")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.field("has_guard", &self.guard.is_some())
			.field("has_layout", &self.layout.is_some())
			.field("page", &self.page.as_ref().map(|p| p.name().to_string()))
			.field("children", &self.children)
			.finish()
	}
}

impl RouteEntry {
	/// An entry that renders `page` for `pattern`.
	pub fn page(pattern: &str, page: impl Component + 'static) -> Self {
		Self {
			page: Some(Rc::new(page)),
			..Self::group(pattern)
		}
	}

	/// A prefix entry with no page of its own.
	pub fn group(pattern: &str) -> Self {
		Self {
			pattern: PathPattern::new(pattern),
			name: None,
			guard: None,
			layout: None,
			page: None,
			children: Vec::new(),
		}
	}

	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn guard(mut self, guard: impl AccessGuard + 'static) -> Self {
		self.guard = Some(Rc::new(guard));
		self
	}

	/// Shares one guard instance between several entries.
	pub fn guard_rc(mut self, guard: Rc<dyn AccessGuard>) -> Self {
		self.guard = Some(guard);
		self
	}

	pub fn layout(mut self, layout: impl Layout + 'static) -> Self {
		self.layout = Some(Rc::new(layout));
		self
	}

	/// Shares one layout instance between several entries.
	pub fn layout_rc(mut self, layout: Rc<dyn Layout>) -> Self {
		self.layout = Some(layout);
		self
	}

	pub fn child(mut self, child: RouteEntry) -> Self {
		self.children.push(child);
		self
	}

	pub fn children(mut self, children: impl IntoIterator<Item = RouteEntry>) -> Self {
		self.children.extend(children);
		self
	}

	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn has_page(&self) -> bool {
		self.page.is_some()
	}

	pub fn child_entries(&self) -> &[RouteEntry] {
		&self.children
	}
}

/// Validated, immutable route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
	entries: Vec<RouteEntry>,
}

impl RouteTable {
	/// Validates and freezes `entries`.
	///
	/// Sibling patterns must be unique, a wildcard must be the last of its
	/// siblings, every entry needs a page or children, and the top level must
	/// end with a wildcard entry that renders a page.
	pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouterError> {
		validate_siblings(&entries, "")?;

		let has_fallback = entries
			.last()
			.is_some_and(|e| e.pattern.is_wildcard() && e.page.is_some());
		if !has_fallback {
			return Err(RouterError::MissingFallback);
		}

		Ok(Self { entries })
	}

	pub fn entries(&self) -> &[RouteEntry] {
		&self.entries
	}

	/// Total number of entries, groups included.
	pub fn len(&self) -> usize {
		fn count(entries: &[RouteEntry]) -> usize {
			entries.iter().map(|e| 1 + count(&e.children)).sum()
		}
		count(&self.entries)
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Full pattern of the entry called `name`.
	///
	/// Wildcard entries match many paths and fail with
	/// [`RouterError::NotReversible`].
	pub fn reverse(&self, name: &str) -> Result<String, RouterError> {
		fn walk<'a>(
			entries: &'a [RouteEntry],
			prefix: &[String],
			name: &str,
		) -> Option<(&'a RouteEntry, Vec<String>)> {
			entries.iter().find_map(|e| {
				let mut full = prefix.to_vec();
				full.extend(e.pattern.segments().iter().cloned());
				if e.name.as_deref() == Some(name) {
					return Some((e, full));
				}
				walk(&e.children, &full, name)
			})
		}

		match walk(&self.entries, &[], name) {
			Some((entry, _)) if entry.pattern.is_wildcard() => {
				Err(RouterError::NotReversible(name.to_string()))
			}
			Some((_, full)) => Ok(format!("/{}", full.join("/"))),
			None => Err(RouterError::UnknownRouteName(name.to_string())),
		}
	}
}

fn validate_siblings(entries: &[RouteEntry], parent: &str) -> Result<(), RouterError> {
	let mut seen = HashSet::new();
	let last = entries.len().saturating_sub(1);

	for (index, entry) in entries.iter().enumerate() {
		let display = format!("{parent}{}", entry.pattern);

		if !seen.insert(entry.pattern.canonical()) {
			return Err(RouterError::DuplicatePattern(display));
		}
		if entry.pattern.is_wildcard() && index != last {
			return Err(RouterError::WildcardNotLast(parent_or_root(parent)));
		}
		if entry.page.is_none() && entry.children.is_empty() {
			return Err(RouterError::EmptyEntry(display));
		}

		let prefix = if entry.pattern.segments().is_empty() {
			parent.to_string()
		} else {
			display.clone()
		};
		validate_siblings(&entry.children, &prefix)?;
	}
	Ok(())
}

fn parent_or_root(parent: &str) -> String {
	if parent.is_empty() {
		"/".to_string()
	} else {
		parent.to_string()
	}
}
