//! Navbar and footer.

use hojeza_pages::component::{Component, ElementView, IntoView, RenderContext, View};
use hojeza_pages::navbar::{MENU, MenuItem, NavMenuState};
use hojeza_pages::selector::LanguageSelector;

/// How to reach the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyContact {
	pub email: &'static str,
	/// Display form.
	pub phone: &'static str,
	/// Dialable form used in the `tel:` link.
	pub phone_dial: &'static str,
	/// `(name, url)` pairs.
	pub socials: &'static [(&'static str, &'static str)],
}

pub static COMPANY_CONTACT: CompanyContact = CompanyContact {
	email: "info@hojeza.com",
	phone: "+355 68 123 4567",
	phone_dial: "+355681234567",
	socials: &[
		("Instagram", "https://www.instagram.com/hojeza"),
		("LinkedIn", "https://www.linkedin.com/company/hojeza"),
		("Facebook", "https://www.facebook.com/hojeza"),
	],
};

/// Top navigation bar.
///
/// Item labels are translated on every render. The dropdown shown is the
/// one in [`RenderContext::menu`]; on narrow viewports a menu toggle is
/// rendered and the links only count as visible while the overlay is open.
#[derive(Debug, Clone)]
pub struct SiteNavbar {
	site_name: String,
	selector: LanguageSelector,
}

impl SiteNavbar {
	pub fn new(site_name: impl Into<String>, selector: LanguageSelector) -> Self {
		Self {
			site_name: site_name.into(),
			selector,
		}
	}

	fn item(&self, ctx: &RenderContext<'_>, item: &MenuItem, menu: NavMenuState) -> ElementView {
		let class = if is_current(ctx.path, item.path) {
			"nav-item active"
		} else {
			"nav-item"
		};
		let mut li = View::element("li")
			.class(class)
			.attr("data-path", item.path)
			.child(
				View::element("a")
					.attr("href", item.path)
					.child(ctx.t(item.label_key)),
			);
		if item.has_dropdown() {
			let expanded = menu.active_dropdown == Some(item.id);
			li = li.child(
				View::element("button")
					.class("dropdown-toggle")
					.attr("aria-expanded", expanded.to_string()),
			);
			if expanded {
				li = li.child(View::element("ul").class("submenu").children(
					item.submenu.iter().map(|link| {
						View::element("li").child(
							View::element("a")
								.attr("href", link.path)
								.child(ctx.t(link.label_key)),
						)
					}),
				));
			}
		}
		li
	}
}

impl Component for SiteNavbar {
	fn render(&self, ctx: &RenderContext<'_>) -> View {
		let menu = ctx.menu;
		let links = View::element("nav")
			.class("nav-links")
			.attr("data-open", (menu.overlay_open || !ctx.narrow).to_string())
			.child(
				View::element("ul").children(MENU.iter().map(|item| self.item(ctx, item, menu))),
			);

		let toggle = ctx.narrow.then(|| {
			View::element("button")
				.class("menu-toggle")
				.attr("aria-expanded", menu.overlay_open.to_string())
		});

		View::element("header")
			.class("navbar")
			.child(
				View::element("a")
					.class("brand")
					.attr("href", "/")
					.child(self.site_name.clone()),
			)
			.child(toggle)
			.child(links)
			.child(
				View::element("div")
					.class("navbar-actions")
					.child(self.selector.render())
					.child(
						View::element("a")
							.class("contact-button")
							.attr("href", "/contact")
							.child(ctx.t("Contact Us")),
					),
			)
			.into_view()
	}

	fn name(&self) -> &str {
		"SiteNavbar"
	}
}

/// Page footer: brand, navigation, contact details and socials.
#[derive(Debug, Clone)]
pub struct SiteFooter {
	site_name: String,
}

impl SiteFooter {
	pub fn new(site_name: impl Into<String>) -> Self {
		Self {
			site_name: site_name.into(),
		}
	}
}

impl Component for SiteFooter {
	fn render(&self, ctx: &RenderContext<'_>) -> View {
		let contact = &COMPANY_CONTACT;

		let brand = View::element("div")
			.class("footer-brand")
			.child(View::element("h3").child(self.site_name.clone()))
			.child(View::element("p").child(ctx.t(
				"We build modern, scalable, and user-friendly digital solutions that help your business grow and stand out.",
			)));

		let navigation = View::element("div")
			.class("footer-nav")
			.child(View::element("h4").child(ctx.t("Navigation")))
			.child(View::element("ul").children(MENU.iter().map(|item| {
				View::element("li").child(
					View::element("a")
						.attr("href", item.path)
						.child(ctx.t(item.label_key)),
				)
			})));

		let reach = View::element("div")
			.class("footer-contact")
			.child(View::element("h4").child(ctx.t("Contact")))
			.child(
				View::element("p")
					.child(format!("{}: ", ctx.t("Email")))
					.child(
						View::element("a")
							.attr("href", format!("mailto:{}", contact.email))
							.child(contact.email),
					),
			)
			.child(
				View::element("p")
					.child(format!("{}: ", ctx.t("Phone")))
					.child(
						View::element("a")
							.attr("href", format!("tel:{}", contact.phone_dial))
							.child(contact.phone),
					),
			);

		let socials = View::element("div")
			.class("footer-social")
			.child(View::element("h4").child(ctx.t("Follow Us")))
			.children(contact.socials.iter().map(|(name, url)| {
				View::element("a")
					.attr("href", *url)
					.attr("aria-label", *name)
					.child(*name)
			}));

		View::element("footer")
			.class("footer")
			.child(brand)
			.child(navigation)
			.child(reach)
			.child(socials)
			.child(
				View::element("p")
					.class("copyright")
					.child(format!("© {}. {}", self.site_name, ctx.t("All rights reserved."))),
			)
			.into_view()
	}

	fn name(&self) -> &str {
		"SiteFooter"
	}
}

// `/services/web-development` keeps "Services" highlighted; `/` only
// matches itself.
fn is_current(path: &str, item_path: &str) -> bool {
	if item_path == "/" {
		return path == "/";
	}
	path == item_path
		|| path
			.strip_prefix(item_path)
			.is_some_and(|rest| rest.starts_with('/'))
}
