//! Access guards.
//!
//! A guard decides whether a matched route may render. Guards run inside
//! [`Router::resolve`](super::Router::resolve), so a denied page never
//! produces a view, not even transiently.

use super::RouteMatch;

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
	/// The route may render.
	Allow,
	/// Resolve this path instead.
	Redirect(String),
}

impl GuardDecision {
	pub fn redirect(path: impl Into<String>) -> Self {
		Self::Redirect(path.into())
	}

	pub fn is_allowed(&self) -> bool {
		matches!(self, Self::Allow)
	}
}

/// Admission check evaluated before a route renders.
pub trait AccessGuard {
	fn can_enter(&self, route: &RouteMatch) -> GuardDecision;
}

impl<F> AccessGuard for F
where
	F: Fn(&RouteMatch) -> GuardDecision,
{
	fn can_enter(&self, route: &RouteMatch) -> GuardDecision {
		self(route)
	}
}

/// Guard for public pages: always allows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicGuard;

impl AccessGuard for PublicGuard {
	fn can_enter(&self, route: &RouteMatch) -> GuardDecision {
		tracing::trace!(path = %route.path, "public guard allows");
		GuardDecision::Allow
	}
}
