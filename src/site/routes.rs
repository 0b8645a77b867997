//! The site's route table.

use std::rc::Rc;

use hojeza_pages::component::Layout;
use hojeza_pages::router::{AccessGuard, RouteEntry, RouteTable, RouterError};

use super::pages::{
	ContactPage, HomePage, login_page, not_found_page, register_page, services_page,
	web_development_page,
};

/// Builds the route table. Every entry shares `guard` and `shell`.
///
/// | Pattern | Name |
/// |---|---|
/// | `/` | `home` |
/// | `/contact` | `contact` |
/// | `/services` | `services` |
/// | `/services/web-development` | `web-development` |
/// | `/auth/login` | `login` |
/// | `/auth/register` | `register` |
/// | `*` | `not-found` |
pub fn site_routes(
	home: HomePage,
	contact: ContactPage,
	guard: Rc<dyn AccessGuard>,
	shell: Rc<dyn Layout>,
) -> Result<RouteTable, RouterError> {
	let public = |entry: RouteEntry| entry.guard_rc(guard.clone()).layout_rc(shell.clone());

	RouteTable::new(vec![
		public(RouteEntry::page("/", home).named("home")),
		public(RouteEntry::page("contact", contact).named("contact")),
		public(RouteEntry::page("services", services_page).named("services")).child(public(
			RouteEntry::page("web-development", web_development_page).named("web-development"),
		)),
		RouteEntry::group("auth").children([
			public(RouteEntry::page("login", login_page).named("login")),
			public(RouteEntry::page("register", register_page).named("register")),
		]),
		public(RouteEntry::page("*", not_found_page).named("not-found")),
	])
}

#[cfg(test)]
mod tests {
	use super::*;
	use hojeza_core::reactive::Signal;
	use hojeza_pages::carousel::HeroCarousel;
	use hojeza_pages::component::{RenderContext, View};
	use hojeza_pages::router::{PublicGuard, Router};
	use rstest::{fixture, rstest};

	struct Bare;

	impl Layout for Bare {
		fn render(&self, _: &RenderContext<'_>, content: View) -> View {
			content
		}
	}

	#[fixture]
	fn router() -> Router {
		let table = site_routes(
			HomePage::new(Signal::new(HeroCarousel::hero(0))),
			ContactPage::new(Signal::new(None)),
			Rc::new(PublicGuard),
			Rc::new(Bare),
		)
		.unwrap();
		Router::new(table)
	}

	#[rstest]
	#[case("/", "home")]
	#[case("/contact", "contact")]
	#[case("/Contact/", "contact")]
	#[case("/services", "services")]
	#[case("/services/web-development", "web-development")]
	#[case("/services/mobile-apps", "not-found")]
	#[case("/auth/login", "login")]
	#[case("/auth/register", "register")]
	#[case("/auth", "not-found")]
	#[case("/portfolio", "not-found")]
	#[case("/unknown/xyz", "not-found")]
	fn test_site_routes(router: Router, #[case] path: &str, #[case] name: &str) {
		let resolution = router.resolve(path).unwrap();
		assert_eq!(resolution.route.name.as_deref(), Some(name));
		assert!(resolution.layout().is_some());
	}

	#[rstest]
	fn test_reverse(router: Router) {
		assert_eq!(router.table().reverse("register").unwrap(), "/auth/register");
		assert_eq!(router.table().reverse("web-development").unwrap(), "/services/web-development");
	}
}
