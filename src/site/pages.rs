//! Routed pages.
//!
//! Every page root carries a `data-page` attribute naming the page.

use hojeza_core::reactive::Signal;
use hojeza_pages::carousel::HeroCarousel;
use hojeza_pages::component::{Component, ElementView, IntoView, RenderContext, View};
use hojeza_pages::form::ContactFormError;

use super::services::SERVICES;

/// Attribute naming the page on its root element.
pub const PAGE_ATTR: &str = "data-page";

fn page(name: &'static str) -> ElementView {
	View::element("section").class(format!("page page-{name}")).attr(PAGE_ATTR, name)
}

fn service_cards(ctx: &RenderContext<'_>) -> ElementView {
	View::element("div").class("service-grid").children(SERVICES.iter().map(|s| {
		View::element("a")
			.class("service-card")
			.attr("href", s.path)
			.child(View::element("h3").child(ctx.t(s.title_key)))
			.child(View::element("p").child(ctx.t(s.desc_key)))
	}))
}

/// Landing page: hero carousel, service cards and a contact call to action.
#[derive(Debug, Clone)]
pub struct HomePage {
	hero: Signal<HeroCarousel>,
}

impl HomePage {
	pub fn new(hero: Signal<HeroCarousel>) -> Self {
		Self { hero }
	}

	fn hero(&self, ctx: &RenderContext<'_>) -> ElementView {
		self.hero.with(|carousel| {
			let slide = carousel.current().map(|slide| {
				View::element("div")
					.class("hero-slide")
					.attr("style", format!("transition-duration: {}ms", carousel.speed_ms()))
					.child(View::element("img").attr("src", slide.image).attr("alt", ""))
					.child(View::element("h1").child(ctx.t(slide.title_key)))
					.child(View::element("p").child(ctx.t(slide.subtitle_key)))
			});
			let dots = View::element("ol").class("hero-dots").children(
				(0..carousel.len()).map(|i| {
					let dot = View::element("li").attr("data-slide", i.to_string());
					if i == carousel.index() {
						dot.attr("aria-current", "true")
					} else {
						dot
					}
				}),
			);
			View::element("div").class("hero").child(slide).child(dots)
		})
	}
}

impl Component for HomePage {
	fn render(&self, ctx: &RenderContext<'_>) -> View {
		page("home")
			.child(self.hero(ctx))
			.child(
				View::element("div")
					.class("services-preview")
					.child(View::element("h2").child(ctx.t("Our Services")))
					.child(service_cards(ctx)),
			)
			.child(
				View::element("div")
					.class("cta")
					.child(View::element("h2").child(ctx.t("Get in Touch")))
					.child(View::element("p").child(ctx.t(
						"Reach us via phone, email, or social media. We respond fast and love connecting with our community.",
					)))
					.child(
						View::element("a")
							.attr("href", "/contact")
							.child(ctx.t("Contact Us")),
					),
			)
			.into_view()
	}

	fn name(&self) -> &str {
		"HomePage"
	}
}

/// Services overview.
pub fn services_page(ctx: &RenderContext<'_>) -> View {
	page("services")
		.child(View::element("h1").child(ctx.t("Our Services")))
		.child(View::element("p").child(ctx.t(
			"We offer a wide range of services to help your business grow and succeed online.",
		)))
		.child(service_cards(ctx))
		.into_view()
}

const WEB_DEVELOPMENT_FEATURES: [&str; 4] = [
	"Custom Websites",
	"Scalable Solutions",
	"Modern Technologies",
	"Performance & SEO",
];

pub fn web_development_page(ctx: &RenderContext<'_>) -> View {
	page("web-development")
		.child(View::element("h1").child(ctx.t("Web Development")))
		.child(View::element("p").child(
			ctx.t("We provide modern solutions to help your business stand out online."),
		))
		.child(
			View::element("ul")
				.class("features")
				.children(WEB_DEVELOPMENT_FEATURES.iter().map(|key| View::element("li").child(ctx.t(key)))),
		)
		.into_view()
}

/// Contact form. Shows the message of the last rejected submission.
#[derive(Debug, Clone)]
pub struct ContactPage {
	rejection: Signal<Option<ContactFormError>>,
}

impl ContactPage {
	pub fn new(rejection: Signal<Option<ContactFormError>>) -> Self {
		Self { rejection }
	}
}

impl Component for ContactPage {
	fn render(&self, ctx: &RenderContext<'_>) -> View {
		let input = |name: &'static str, kind: &'static str, placeholder: &str| {
			View::element("input")
				.attr("name", name)
				.attr("type", kind)
				.attr("placeholder", ctx.t(placeholder))
		};
		let error = self.rejection.get().map(|err| {
			View::element("p")
				.class("form-error")
				.attr("role", "alert")
				.child(ctx.t(err.message_key()))
		});

		page("contact")
			.child(View::element("h1").child(ctx.t("Get in Touch")))
			.child(View::element("p").child(ctx.t(
				"We’d love to hear from you! Whether you have a question, an idea, or just want to chat, our team is here to help.",
			)))
			.child(
				View::element("form")
					.child(input("companyName", "text", "Your Company Name"))
					.child(input("email", "email", "Email Address"))
					.child(input("phone", "tel", "Phone Number"))
					.child(
						View::element("textarea")
							.attr("name", "message")
							.attr("placeholder", ctx.t("What service do you need?")),
					)
					.child(error)
					.child(
						View::element("button")
							.attr("type", "submit")
							.child(ctx.t("Send Message")),
					),
			)
			.into_view()
	}

	fn name(&self) -> &str {
		"ContactPage"
	}
}

fn auth_page(ctx: &RenderContext<'_>, name: &'static str, title_key: &str) -> View {
	page(name)
		.child(View::element("h1").child(ctx.t(title_key)))
		.child(
			View::element("form")
				.child(
					View::element("input")
						.attr("name", "email")
						.attr("type", "email")
						.attr("placeholder", ctx.t("Email Address")),
				)
				.child(
					View::element("button")
						.attr("type", "submit")
						.child(ctx.t(title_key)),
				),
		)
		.into_view()
}

pub fn login_page(ctx: &RenderContext<'_>) -> View {
	auth_page(ctx, "login", "Login")
}

pub fn register_page(ctx: &RenderContext<'_>) -> View {
	auth_page(ctx, "register", "Register")
}

/// Fallback for unmatched paths.
pub fn not_found_page(ctx: &RenderContext<'_>) -> View {
	page("not-found")
		.child(View::element("h1").child("404"))
		.child(View::element("p").child(ctx.t("Oops! The page you're looking for has wandered off.")))
		.child(
			View::element("a")
				.class("button")
				.attr("href", "/")
				.child(ctx.t("Go Back Home")),
		)
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use hojeza_i18n::{LocaleStore, MemoryStorage, Translator};
	use rstest::{fixture, rstest};
	use std::rc::Rc;

	#[fixture]
	fn store() -> LocaleStore {
		LocaleStore::load(Rc::new(MemoryStorage::new()), Translator::builtin().unwrap())
	}

	#[rstest]
	fn test_home_follows_carousel(store: LocaleStore) {
		let hero = Signal::new(HeroCarousel::hero(0));
		let home = HomePage::new(hero.clone());
		let ctx = RenderContext::new(&store, "/");

		assert!(home.render(&ctx).text_content().contains("Build Your Dream Website"));

		hero.update(|c| {
			c.next(10);
		});
		let view = home.render(&ctx);
		assert!(view.text_content().contains("Amazing UI/UX Design"));
		let current = view.find_by_attr("aria-current", "true").unwrap();
		assert_eq!(current.attr_value("data-slide"), Some("1"));
	}

	#[rstest]
	fn test_home_lists_every_service(store: LocaleStore) {
		let view = HomePage::new(Signal::new(HeroCarousel::hero(0))).render(&RenderContext::new(&store, "/"));
		for service in &SERVICES {
			assert!(view.find_by_attr("href", service.path).is_some(), "{}", service.path);
		}
	}

	#[rstest]
	fn test_contact_shows_rejection(store: LocaleStore) {
		let rejection = Signal::new(None);
		let contact = ContactPage::new(rejection.clone());
		let ctx = RenderContext::new(&store, "/contact");
		assert!(contact.render(&ctx).find_by_attr("role", "alert").is_none());

		rejection.set(Some(ContactFormError::InvalidPhone));
		let view = contact.render(&ctx);
		let alert = view.find_by_attr("role", "alert").unwrap();
		assert_eq!(
			View::Element(alert.clone()).text_content(),
			"Please enter a valid phone number."
		);
	}

	#[rstest]
	fn test_not_found(store: LocaleStore) {
		let view = not_found_page(&RenderContext::new(&store, "/nope"));
		assert!(view.find_by_attr(PAGE_ATTR, "not-found").is_some());
		assert!(view.text_content().starts_with("404"));
		assert!(view.find_by_attr("href", "/").is_some());
	}

	#[rstest]
	#[case::login(login_page as fn(&RenderContext<'_>) -> View, "login", "Login")]
	#[case::register(register_page as fn(&RenderContext<'_>) -> View, "register", "Register")]
	fn test_auth_pages(
		store: LocaleStore,
		#[case] render: fn(&RenderContext<'_>) -> View,
		#[case] name: &str,
		#[case] title: &str,
	) {
		let view = render(&RenderContext::new(&store, "/auth"));
		let root = view.find_by_attr(PAGE_ATTR, name).unwrap();
		assert_eq!(root.child_views()[0].text_content(), title);
	}

	#[rstest]
	fn test_pages_are_translated(store: LocaleStore) {
		store.set("sq");
		let ctx = RenderContext::new(&store, "/services/web-development");
		let text = web_development_page(&ctx).text_content();
		assert!(!text.contains("Scalable Solutions"));
	}
}
