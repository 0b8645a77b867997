//! Integration tests for routing and navigation
//!
//! Covers:
//! 1. Fallback resolution for arbitrary unmatched paths
//! 2. Guards consulted on every resolution, including the fallback
//! 3. Dispatcher, history and router working together
//! 4. Page shell keyed by the view generation

use hojeza_i18n::{LocaleStore, MemoryStorage, Translator};
use hojeza_pages::component::{IntoView, Layout, RenderContext, View};
use hojeza_pages::layout::{PageShell, VIEW_KEY_ATTR};
use hojeza_pages::navigation::{MemoryScroll, NavigationDispatcher};
use hojeza_pages::router::{
	GuardDecision, History, MemoryHistory, PublicGuard, RouteEntry, RouteMatch, RouteTable, Router,
};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

fn home(_: &RenderContext<'_>) -> View {
	View::text("home")
}

fn contact(_: &RenderContext<'_>) -> View {
	View::text("contact")
}

fn login(_: &RenderContext<'_>) -> View {
	View::text("login")
}

fn not_found(_: &RenderContext<'_>) -> View {
	View::text("404")
}

fn navbar(_: &RenderContext<'_>) -> View {
	View::element("header").into_view()
}

fn footer(_: &RenderContext<'_>) -> View {
	View::element("footer").into_view()
}

fn site_table() -> RouteTable {
	RouteTable::new(vec![
		RouteEntry::page("/", home).guard(PublicGuard).named("home"),
		RouteEntry::page("contact", contact).guard(PublicGuard).named("contact"),
		RouteEntry::group("auth").children([RouteEntry::page("login", login).named("login")]),
		RouteEntry::page("*", not_found).guard(PublicGuard).named("not-found"),
	])
	.unwrap()
}

#[rstest]
fn test_guard_consulted_for_fallback() {
	let calls = Rc::new(Cell::new(0));
	let counted = {
		let calls = calls.clone();
		move |_: &RouteMatch| {
			calls.set(calls.get() + 1);
			GuardDecision::Allow
		}
	};
	let router = Router::new(
		RouteTable::new(vec![
			RouteEntry::page("/", home),
			RouteEntry::page("*", not_found).guard(counted).named("not-found"),
		])
		.unwrap(),
	);

	let resolution = router.resolve("/unknown/xyz").unwrap();
	assert_eq!(resolution.route.name.as_deref(), Some("not-found"));
	assert_eq!(resolution.route.pattern, "*");
	assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_dispatcher_drives_router_and_shell() {
	let store = LocaleStore::load(Rc::new(MemoryStorage::new()), Translator::builtin().unwrap());
	let history = Rc::new(MemoryHistory::default());
	let dispatcher = NavigationDispatcher::new(history.clone(), Rc::new(MemoryScroll::new()));
	let router = Router::new(site_table());
	let shell = PageShell::new(navbar, footer);

	dispatcher.go("/contact").unwrap();
	dispatcher.go("/nowhere").unwrap();

	let location = dispatcher.location();
	let resolution = router.resolve(&location).unwrap();
	let mut ctx = RenderContext::new(&store, &location);
	ctx.generation = dispatcher.generation();

	let page = resolution.render(&ctx);
	let view = shell.render(&ctx, page);

	assert_eq!(history.entries(), vec!["/", "/contact", "/nowhere"]);
	let container = view.find_by_attr(VIEW_KEY_ATTR, "2").unwrap();
	assert_eq!(View::Element(container.clone()).text_content(), "404");
}

#[rstest]
fn test_back_navigation_keeps_generation() {
	let dispatcher = NavigationDispatcher::new(
		Rc::new(MemoryHistory::default()),
		Rc::new(MemoryScroll::new()),
	);
	let generation = dispatcher.go("/contact").unwrap();

	dispatcher.location_changed("/");
	assert_eq!(dispatcher.generation(), generation);

	let router = Router::new(site_table());
	let resolution = router.resolve(&dispatcher.location()).unwrap();
	assert_eq!(resolution.route.name.as_deref(), Some("home"));
}

proptest! {
	#[test]
	fn prop_unmatched_paths_fall_back(segments in prop::collection::vec("[a-z]{1,8}", 1..4)) {
		prop_assume!(segments[0] != "contact" && segments[0] != "auth");

		let router = Router::new(site_table());
		let path = format!("/{}", segments.join("/"));
		let resolution = router.resolve(&path).unwrap();

		prop_assert_eq!(resolution.route.name.as_deref(), Some("not-found"));
		prop_assert_eq!(resolution.route.path, path);
	}

	#[test]
	fn prop_generation_counts_navigations(paths in prop::collection::vec("/[a-z]{0,6}", 0..20)) {
		let dispatcher = NavigationDispatcher::new(
			Rc::new(MemoryHistory::default()),
			Rc::new(MemoryScroll::new()),
		);
		for path in &paths {
			dispatcher.go(path).unwrap();
		}
		prop_assert_eq!(dispatcher.generation().value(), paths.len() as u64);
		prop_assert_eq!(dispatcher.history().len(), paths.len() + 1);
	}
}
