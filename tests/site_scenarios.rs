//! End-to-end scenarios for the assembled site
//!
//! Covers:
//! 1. Locale preference on first start and after switching
//! 2. Repeated navigation to the same path
//! 3. Fallback rendering for unknown paths, with the guard consulted
//! 4. Resize and outside presses closing the navbar menu
//! 5. Narrow viewport rendering
//! 6. Settings-driven file persistence of the locale

use hojeza::i18n::{
	KeyValueStorage, LOCALE_STORAGE_KEY, Locale, LocalePreference, LocaleSource, MemoryStorage,
};
use hojeza::pages::ElementView;
use hojeza::pages::layout::VIEW_KEY_ATTR;
use hojeza::pages::navbar::{MenuItemId, MenuState};
use hojeza::pages::navigation::{MemoryScroll, ScrollSurface};
use hojeza::pages::router::{AccessGuard, GuardDecision, MemoryHistory, RouteMatch};
use hojeza::pages::scope::{Point, Rect};
use hojeza::site::pages::PAGE_ATTR;
use hojeza::{SiteApp, SiteSettings};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::RefCell;
use std::rc::Rc;

/// Guard that admits everything and records what it saw.
#[derive(Default)]
struct RecordingGuard {
	seen: RefCell<Vec<String>>,
}

impl AccessGuard for RecordingGuard {
	fn can_enter(&self, route: &RouteMatch) -> GuardDecision {
		self.seen.borrow_mut().push(route.path.clone());
		GuardDecision::Allow
	}
}

struct Harness {
	app: SiteApp,
	storage: Rc<MemoryStorage>,
	history: Rc<MemoryHistory>,
	scroll: Rc<MemoryScroll>,
	guard: Rc<RecordingGuard>,
}

fn harness(width: u32) -> Harness {
	let storage = Rc::new(MemoryStorage::new());
	let history = Rc::new(MemoryHistory::default());
	let scroll = Rc::new(MemoryScroll::new());
	let guard = Rc::new(RecordingGuard::default());

	let app = SiteApp::builder(SiteSettings::default())
		.storage(storage.clone())
		.history(history.clone())
		.scroll(scroll.clone())
		.guard(guard.clone())
		.viewport_width(width)
		.navbar_bounds([Rect::new(0.0, 0.0, width as f64, 80.0)])
		.build()
		.unwrap();

	Harness {
		app,
		storage,
		history,
		scroll,
		guard,
	}
}

fn page_name(app: &SiteApp) -> String {
	let view = app.render().unwrap();
	let page = view
		.find(&|el: &ElementView| el.attr_value(PAGE_ATTR).is_some())
		.unwrap();
	page.attr_value(PAGE_ATTR).unwrap().to_string()
}

#[rstest]
fn test_first_start_then_switch_language() {
	let h = harness(1280);

	assert_eq!(
		h.app.locale().get(),
		LocalePreference {
			code: Locale::En,
			source: LocaleSource::Default
		}
	);
	assert!(h.app.render().unwrap().text_content().contains("Contact Us"));

	h.app.set_language("sq");

	assert_eq!(h.storage.get(LOCALE_STORAGE_KEY).unwrap().as_deref(), Some("sq"));
	assert_eq!(h.app.locale().get(), LocalePreference::stored(Locale::Sq));
	assert!(h.app.render().unwrap().text_content().contains("Na Kontaktoni"));
}

#[rstest]
fn test_unsupported_language_is_ignored() {
	let h = harness(1280);
	h.app.set_language("sq");
	h.app.set_language("de");

	assert_eq!(h.app.locale().get(), LocalePreference::stored(Locale::Sq));
	assert_eq!(h.storage.get(LOCALE_STORAGE_KEY).unwrap().as_deref(), Some("sq"));
}

#[rstest]
fn test_repeated_navigation() {
	let h = harness(1280);
	let before = h.app.navigation().generation();
	h.scroll.scroll_to(0.0, 900.0);

	h.app.go("/services").unwrap();
	h.scroll.scroll_to(0.0, 400.0);
	h.app.go("/services").unwrap();

	assert_eq!(h.app.navigation().generation().value(), before.value() + 2);
	assert_eq!(h.history.entries(), vec!["/", "/services", "/services"]);
	assert_eq!(h.scroll.offset(), (0.0, 0.0));

	let view = h.app.render().unwrap();
	let container = view.find_by_attr(VIEW_KEY_ATTR, "2").unwrap();
	assert!(container.attr_value("style").unwrap().contains("500ms"));
}

#[rstest]
#[case("/unknown/xyz")]
#[case("/portfolio")]
#[case("/services/mobile-apps")]
fn test_unknown_path_renders_not_found(#[case] path: &str) {
	let h = harness(1280);
	h.app.go(path).unwrap();

	assert_eq!(page_name(&h.app), "not-found");
	assert!(h.guard.seen.borrow().iter().any(|p| p == path));

	let view = h.app.render().unwrap();
	assert!(view.text_content().contains("404"));
	assert!(view.find_by_attr("href", "/").is_some());
}

#[rstest]
#[case("/", "home")]
#[case("/contact", "contact")]
#[case("/services", "services")]
#[case("/services/web-development", "web-development")]
#[case("/auth/login", "login")]
#[case("/auth/register", "register")]
fn test_known_paths(#[case] path: &str, #[case] expected: &str) {
	let h = harness(1280);
	h.app.go(path).unwrap();
	assert_eq!(page_name(&h.app), expected);
}

#[rstest]
fn test_resize_closes_menu() {
	let h = harness(1280);
	h.app.activate_menu_item(MenuItemId::Services);
	assert_eq!(h.app.navbar().state(), MenuState::OpenWithSubmenu(MenuItemId::Services));

	h.app.resize(1280);
	assert_eq!(h.app.navbar().state(), MenuState::Closed);
}

#[rstest]
fn test_outside_press_closes_menu() {
	let h = harness(1280);
	h.app.toggle_menu();

	h.app.pointer(Point::new(20.0, 20.0));
	assert!(h.app.navbar().state().is_open());

	h.app.pointer(Point::new(20.0, 500.0));
	assert_eq!(h.app.navbar().state(), MenuState::Closed);
}

fn navbar_links(app: &SiteApp) -> Vec<String> {
	let view = app.render().unwrap();
	let navbar = view.find_by_attr("class", "navbar").unwrap();
	let mut links = Vec::new();
	collect_hrefs(navbar, &mut links);
	links
}

fn collect_hrefs(el: &ElementView, out: &mut Vec<String>) {
	if let Some(href) = el.attr_value("href") {
		out.push(href.to_string());
	}
	for child in el.child_views() {
		for nested in child.top_level_elements() {
			collect_hrefs(nested, out);
		}
	}
}

#[rstest]
fn test_submenu_switch_renders_after_delay() {
	let h = harness(1280);
	h.app.tick(1_000);
	h.app.activate_menu_item(MenuItemId::Services);
	assert!(navbar_links(&h.app).contains(&"/services/seo-optimization".to_string()));

	h.app.activate_menu_item(MenuItemId::Portfolio);
	let links = navbar_links(&h.app);
	assert!(!links.contains(&"/portfolio/websites".to_string()));
	assert!(!links.contains(&"/services/seo-optimization".to_string()));

	h.app.tick(1_150);
	let links = navbar_links(&h.app);
	assert!(links.contains(&"/portfolio/websites".to_string()));
	assert!(!links.contains(&"/services/seo-optimization".to_string()));
}

#[rstest]
#[case(1280, false)]
#[case(768, true)]
#[case(375, true)]
fn test_narrow_viewport(#[case] width: u32, #[case] narrow: bool) {
	let h = harness(1920);
	h.app.resize(width);

	assert_eq!(h.app.narrow().matches(), narrow);
	let view = h.app.render().unwrap();
	assert_eq!(view.find_by_attr("class", "menu-toggle").is_some(), narrow);
}

#[rstest]
fn test_locale_persists_across_restarts() {
	let dir = tempfile::tempdir().unwrap();
	let settings = SiteSettings {
		locale_storage_path: Some(dir.path().join("locale.json")),
		..SiteSettings::default()
	};

	let first = SiteApp::new(settings.clone()).unwrap();
	assert_eq!(first.locale().get().source, LocaleSource::Default);
	first.set_language("sq");
	drop(first);

	let second = SiteApp::new(settings).unwrap();
	assert_eq!(second.locale().get(), LocalePreference::stored(Locale::Sq));
}

proptest! {
	#[test]
	fn prop_every_go_renders_a_page(path in "(/[a-z-]{0,12}){0,3}") {
		let h = harness(1280);
		h.scroll.scroll_to(0.0, 250.0);
		let before = h.app.navigation().generation();

		h.app.go(&path).unwrap();

		prop_assert_eq!(h.app.navigation().generation(), before.next());
		prop_assert_eq!(h.scroll.offset(), (0.0, 0.0));
		prop_assert!(!page_name(&h.app).is_empty());
	}
}
