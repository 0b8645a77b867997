//! Service catalogue.

/// One offered service. Title and description are translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
	pub title_key: &'static str,
	pub desc_key: &'static str,
	pub path: &'static str,
}

/// Every service, in display order.
pub static SERVICES: [Service; 6] = [
	Service {
		title_key: "Web Development",
		desc_key: "Custom websites built with modern technologies.",
		path: "/services/web-development",
	},
	Service {
		title_key: "Mobile Apps",
		desc_key: "Scalable mobile applications for iOS and Android platforms.",
		path: "/services/mobile-apps",
	},
	Service {
		title_key: "UI/UX Design",
		desc_key: "Beautiful and intuitive designs focused on user experience.",
		path: "/services/ui-ux-design",
	},
	Service {
		title_key: "Management Systems",
		desc_key: "Custom internal systems to streamline your business operations.",
		path: "/services/management-systems",
	},
	Service {
		title_key: "Maintenance & Support",
		desc_key: "Reliable long-term support for your applications.",
		path: "/services/maintenance-support",
	},
	Service {
		title_key: "SEO Optimization",
		desc_key: "Improve your visibility and rank higher on search engines.",
		path: "/services/seo-optimization",
	},
];

/// Looks a service up by its page path.
pub fn find_by_path(path: &str) -> Option<&'static Service> {
	let path = hojeza_pages::router::normalize_path(path);
	SERVICES.iter().find(|s| s.path == path)
}

#[cfg(test)]
mod tests {
	use super::*;
	use hojeza_pages::navbar::MenuItemId;
	use rstest::rstest;

	#[rstest]
	fn test_matches_navbar_dropdown() {
		let submenu = MenuItemId::Services.item().submenu;
		assert_eq!(submenu.len(), SERVICES.len());
		for (link, service) in submenu.iter().zip(SERVICES.iter()) {
			assert_eq!(link.path, service.path);
			assert_eq!(link.label_key, service.title_key);
		}
	}

	#[rstest]
	fn test_keys_are_translated() {
		let catalogs = hojeza_i18n::bundles::load_all().unwrap();
		for service in &SERVICES {
			for catalog in &catalogs {
				assert!(catalog.contains(service.title_key), "{}", service.title_key);
				assert!(catalog.contains(service.desc_key), "{}", service.desc_key);
			}
		}
	}

	#[rstest]
	#[case("/services/web-development", Some("Web Development"))]
	#[case("/Services/seo-optimization/", None)]
	#[case("services/mobile-apps", Some("Mobile Apps"))]
	#[case("/services", None)]
	fn test_find_by_path(#[case] path: &str, #[case] title: Option<&str>) {
		assert_eq!(find_by_path(path).map(|s| s.title_key), title);
	}
}
