//! Navbar menu.
//!
//! The menu is a small state machine driven by [`MenuEvent`]s:
//!
//! ```text
//! Closed --ToggleTrigger--> OpenNoSubmenu
//! Closed | OpenNoSubmenu --ItemActivated(k)--> OpenWithSubmenu(k)
//! OpenWithSubmenu(k) --ItemActivated(k)--> OpenNoSubmenu
//! OpenWithSubmenu(k) --ItemActivated(k2)--> SwitchingSubmenu { to: k2, .. } --Tick--> OpenWithSubmenu(k2)
//! open-* --ToggleTrigger | OutsideClick | Resize | LinkActivated--> Closed
//! ```
//!
//! Activating an item without a dropdown is a plain link and closes the menu.
//! Any resize closes the menu, even one that keeps the width.
//!
//! Menu items are a fixed [`MenuItemId`] enum indexing the [`MENU`] table.

use std::fmt;

use hojeza_core::reactive::{Signal, Subscription};

use crate::media::Viewport;
use crate::scope::{InteractionScopes, Rect, ScopeRegistration};

/// Delay between closing one submenu and opening the next.
pub const DEFAULT_SUBMENU_SWITCH_DELAY_MS: u64 = 150;

/// Top-level navbar items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MenuItemId {
	Home,
	Services,
	Portfolio,
	About,
	Contact,
}

impl MenuItemId {
	pub const ALL: [MenuItemId; 5] = [
		MenuItemId::Home,
		MenuItemId::Services,
		MenuItemId::Portfolio,
		MenuItemId::About,
		MenuItemId::Contact,
	];

	/// Position in [`MENU`].
	pub const fn index(self) -> usize {
		self as usize
	}

	pub fn item(self) -> &'static MenuItem {
		&MENU[self.index()]
	}

	pub fn has_dropdown(self) -> bool {
		self.item().has_dropdown()
	}
}

/// A link inside a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmenuLink {
	/// Translation key of the label.
	pub label_key: &'static str,
	pub path: &'static str,
}

/// One top-level navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
	pub id: MenuItemId,
	/// Translation key of the label.
	pub label_key: &'static str,
	pub path: &'static str,
	pub submenu: &'static [SubmenuLink],
}

impl MenuItem {
	pub fn has_dropdown(&self) -> bool {
		!self.submenu.is_empty()
	}
}

const SERVICE_LINKS: &[SubmenuLink] = &[
	SubmenuLink {
		label_key: "Web Development",
		path: "/services/web-development",
	},
	SubmenuLink {
		label_key: "Mobile Apps",
		path: "/services/mobile-apps",
	},
	SubmenuLink {
		label_key: "UI/UX Design",
		path: "/services/ui-ux-design",
	},
	SubmenuLink {
		label_key: "Management Systems",
		path: "/services/management-systems",
	},
	SubmenuLink {
		label_key: "Maintenance & Support",
		path: "/services/maintenance-support",
	},
	SubmenuLink {
		label_key: "SEO Optimization",
		path: "/services/seo-optimization",
	},
];

const PORTFOLIO_LINKS: &[SubmenuLink] = &[
	SubmenuLink {
		label_key: "Custom Websites",
		path: "/portfolio/websites",
	},
	SubmenuLink {
		label_key: "Mobile Apps",
		path: "/portfolio/mobile-apps",
	},
	SubmenuLink {
		label_key: "UI/UX Design",
		path: "/portfolio/design",
	},
];

/// Navbar items in display order, indexed by [`MenuItemId::index`].
pub static MENU: [MenuItem; 5] = [
	MenuItem {
		id: MenuItemId::Home,
		label_key: "Home",
		path: "/",
		submenu: &[],
	},
	MenuItem {
		id: MenuItemId::Services,
		label_key: "Services",
		path: "/services",
		submenu: SERVICE_LINKS,
	},
	MenuItem {
		id: MenuItemId::Portfolio,
		label_key: "Portfolio",
		path: "/portfolio",
		submenu: PORTFOLIO_LINKS,
	},
	MenuItem {
		id: MenuItemId::About,
		label_key: "About",
		path: "/about",
		submenu: &[],
	},
	MenuItem {
		id: MenuItemId::Contact,
		label_key: "Contact",
		path: "/contact",
		submenu: &[],
	},
];

/// States of the navbar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
	#[default]
	Closed,
	OpenNoSubmenu,
	OpenWithSubmenu(MenuItemId),
	/// The previous submenu is animating out; `to` opens at `reopen_at`.
	SwitchingSubmenu { to: MenuItemId, reopen_at: u64 },
}

impl MenuState {
	pub fn is_open(self) -> bool {
		!matches!(self, Self::Closed)
	}
}

/// Inputs to the menu state machine. Timestamps are milliseconds on any
/// monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
	/// The hamburger / menu trigger was pressed.
	ToggleTrigger,
	/// A pointer press landed outside the navbar.
	OutsideClick,
	/// The viewport was resized.
	Resize,
	/// A navigation link inside the menu was followed.
	LinkActivated,
	/// A top-level item was pressed.
	ItemActivated { id: MenuItemId, now_ms: u64 },
	/// Time passed.
	Tick { now_ms: u64 },
}

/// What the navbar renders from: overlay flag plus the visible dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenuState {
	pub overlay_open: bool,
	pub active_dropdown: Option<MenuItemId>,
}

impl From<MenuState> for NavMenuState {
	fn from(state: MenuState) -> Self {
		Self {
			overlay_open: state.is_open(),
			active_dropdown: match state {
				MenuState::OpenWithSubmenu(id) => Some(id),
				_ => None,
			},
		}
	}
}

/// The menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
	state: MenuState,
	switch_delay_ms: u64,
}

impl Default for NavMenu {
	fn default() -> Self {
		Self::new(DEFAULT_SUBMENU_SWITCH_DELAY_MS)
	}
}

impl NavMenu {
	pub fn new(switch_delay_ms: u64) -> Self {
		Self {
			state: MenuState::Closed,
			switch_delay_ms,
		}
	}

	pub fn state(&self) -> MenuState {
		self.state
	}

	pub fn snapshot(&self) -> NavMenuState {
		self.state.into()
	}

	pub fn switch_delay_ms(&self) -> u64 {
		self.switch_delay_ms
	}

	/// Applies `event` and returns the new state.
	pub fn handle(&mut self, event: MenuEvent) -> MenuState {
		let next = self.next_state(event);
		if next != self.state {
			tracing::trace!(from = ?self.state, to = ?next, ?event, "menu transition");
		}
		self.state = next;
		next
	}

	fn next_state(&self, event: MenuEvent) -> MenuState {
		use MenuState::*;

		match (self.state, event) {
			(Closed, MenuEvent::ToggleTrigger) => OpenNoSubmenu,
			(_, MenuEvent::ToggleTrigger) => Closed,

			(_, MenuEvent::OutsideClick | MenuEvent::Resize | MenuEvent::LinkActivated) => Closed,

			(_, MenuEvent::ItemActivated { id, .. }) if !id.has_dropdown() => Closed,
			(Closed | OpenNoSubmenu, MenuEvent::ItemActivated { id, .. }) => OpenWithSubmenu(id),
			(OpenWithSubmenu(open), MenuEvent::ItemActivated { id, .. }) if open == id => {
				OpenNoSubmenu
			}
			(OpenWithSubmenu(_), MenuEvent::ItemActivated { id, now_ms }) => {
				if self.switch_delay_ms == 0 {
					OpenWithSubmenu(id)
				} else {
					SwitchingSubmenu {
						to: id,
						reopen_at: now_ms.saturating_add(self.switch_delay_ms),
					}
				}
			}
			(SwitchingSubmenu { to, .. }, MenuEvent::ItemActivated { id, .. }) if to == id => {
				OpenNoSubmenu
			}
			(SwitchingSubmenu { reopen_at, .. }, MenuEvent::ItemActivated { id, .. }) => {
				SwitchingSubmenu { to: id, reopen_at }
			}

			(SwitchingSubmenu { to, reopen_at }, MenuEvent::Tick { now_ms }) if now_ms >= reopen_at => {
				OpenWithSubmenu(to)
			}
			(state, MenuEvent::Tick { .. }) => state,
		}
	}
}

/// A [`NavMenu`] wired to resize events and outside presses.
///
/// Dropping the controller removes both listeners.
pub struct NavbarController {
	menu: Signal<NavMenu>,
	_resize: Subscription,
	scope: ScopeRegistration,
}

impl fmt::Debug for NavbarController {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavbarController")
			.field("menu", &self.menu.get())
			.field("scope", &self.scope)
			.finish()
	}
}

impl NavbarController {
	/// Attaches a menu to `viewport` and `scopes`. `bounds` is the navbar's
	/// on-screen area; presses inside it are not outside clicks.
	pub fn new(
		viewport: &Viewport,
		scopes: &InteractionScopes,
		bounds: impl IntoIterator<Item = Rect>,
		switch_delay_ms: u64,
	) -> Self {
		let menu = Signal::new(NavMenu::new(switch_delay_ms));

		let resize = viewport.subscribe_resize({
			let menu = menu.clone();
			move |_| dispatch(&menu, MenuEvent::Resize)
		});
		let scope = scopes.register(bounds, {
			let menu = menu.clone();
			move |_| dispatch(&menu, MenuEvent::OutsideClick)
		});

		Self {
			menu,
			_resize: resize,
			scope,
		}
	}

	pub fn handle(&self, event: MenuEvent) -> MenuState {
		dispatch(&self.menu, event);
		self.state()
	}

	pub fn toggle(&self) -> MenuState {
		self.handle(MenuEvent::ToggleTrigger)
	}

	pub fn activate_item(&self, id: MenuItemId, now_ms: u64) -> MenuState {
		self.handle(MenuEvent::ItemActivated { id, now_ms })
	}

	pub fn link_activated(&self) -> MenuState {
		self.handle(MenuEvent::LinkActivated)
	}

	pub fn tick(&self, now_ms: u64) -> MenuState {
		self.handle(MenuEvent::Tick { now_ms })
	}

	pub fn state(&self) -> MenuState {
		self.menu.with(NavMenu::state)
	}

	pub fn snapshot(&self) -> NavMenuState {
		self.menu.with(NavMenu::snapshot)
	}

	/// Moves the navbar's outside-click region.
	pub fn set_bounds(&self, bounds: impl IntoIterator<Item = Rect>) {
		self.scope.set_bounds(bounds);
	}

	/// Runs `callback` after every state change.
	pub fn subscribe(&self, callback: impl Fn(NavMenuState) + 'static) -> Subscription {
		self.menu.subscribe(move |m| callback(m.snapshot()))
	}
}

fn dispatch(menu: &Signal<NavMenu>, event: MenuEvent) {
	let mut next = menu.get();
	next.handle(event);
	menu.set_if_changed(next);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scope::Point;
	use proptest::prelude::*;
	use rstest::rstest;

	fn open(id: MenuItemId) -> MenuEvent {
		MenuEvent::ItemActivated { id, now_ms: 0 }
	}

	#[rstest]
	fn test_menu_table_is_indexed_by_id() {
		for id in MenuItemId::ALL {
			assert_eq!(id.item().id, id);
		}
		assert!(MenuItemId::Services.has_dropdown());
		assert!(MenuItemId::Portfolio.has_dropdown());
		assert!(!MenuItemId::Contact.has_dropdown());
	}

	#[rstest]
	#[case(MenuState::Closed, MenuEvent::ToggleTrigger, MenuState::OpenNoSubmenu)]
	#[case(MenuState::OpenNoSubmenu, MenuEvent::ToggleTrigger, MenuState::Closed)]
	#[case(MenuState::OpenWithSubmenu(MenuItemId::Services), MenuEvent::OutsideClick, MenuState::Closed)]
	#[case(MenuState::OpenNoSubmenu, MenuEvent::Resize, MenuState::Closed)]
	#[case(MenuState::OpenWithSubmenu(MenuItemId::Portfolio), MenuEvent::LinkActivated, MenuState::Closed)]
	#[case(MenuState::OpenNoSubmenu, open(MenuItemId::Services), MenuState::OpenWithSubmenu(MenuItemId::Services))]
	#[case(MenuState::OpenWithSubmenu(MenuItemId::Services), open(MenuItemId::Services), MenuState::OpenNoSubmenu)]
	#[case(MenuState::OpenNoSubmenu, open(MenuItemId::About), MenuState::Closed)]
	#[case(MenuState::Closed, MenuEvent::Resize, MenuState::Closed)]
	#[case(MenuState::Closed, MenuEvent::Tick { now_ms: 10_000 }, MenuState::Closed)]
	fn test_transitions(#[case] from: MenuState, #[case] event: MenuEvent, #[case] to: MenuState) {
		let mut menu = NavMenu {
			state: from,
			switch_delay_ms: DEFAULT_SUBMENU_SWITCH_DELAY_MS,
		};
		assert_eq!(menu.handle(event), to);
	}

	#[rstest]
	fn test_switching_submenu_waits_for_delay() {
		let mut menu = NavMenu::new(150);
		menu.handle(MenuEvent::ItemActivated {
			id: MenuItemId::Services,
			now_ms: 1_000,
		});

		let state = menu.handle(MenuEvent::ItemActivated {
			id: MenuItemId::Portfolio,
			now_ms: 2_000,
		});
		assert_eq!(
			state,
			MenuState::SwitchingSubmenu {
				to: MenuItemId::Portfolio,
				reopen_at: 2_150
			}
		);
		assert_eq!(menu.snapshot().active_dropdown, None);
		assert!(menu.snapshot().overlay_open);

		assert_eq!(
			menu.handle(MenuEvent::Tick { now_ms: 2_100 }),
			state,
			"still exiting"
		);
		assert_eq!(
			menu.handle(MenuEvent::Tick { now_ms: 2_150 }),
			MenuState::OpenWithSubmenu(MenuItemId::Portfolio)
		);
	}

	#[rstest]
	fn test_zero_delay_switches_immediately() {
		let mut menu = NavMenu::new(0);
		menu.handle(open(MenuItemId::Services));
		assert_eq!(
			menu.handle(open(MenuItemId::Portfolio)),
			MenuState::OpenWithSubmenu(MenuItemId::Portfolio)
		);
	}

	#[rstest]
	fn test_pending_target_reactivated_cancels_switch() {
		let mut menu = NavMenu::default();
		menu.handle(open(MenuItemId::Services));
		menu.handle(open(MenuItemId::Portfolio));
		assert_eq!(menu.handle(open(MenuItemId::Portfolio)), MenuState::OpenNoSubmenu);
	}

	#[rstest]
	fn test_controller_closes_on_resize_and_outside_click() {
		let viewport = Viewport::new(1024);
		let scopes = InteractionScopes::new();
		let navbar = NavbarController::new(
			&viewport,
			&scopes,
			[Rect::new(0.0, 0.0, 1024.0, 64.0)],
			DEFAULT_SUBMENU_SWITCH_DELAY_MS,
		);

		navbar.toggle();
		scopes.dispatch_pointer(Point::new(100.0, 30.0));
		assert_eq!(navbar.state(), MenuState::OpenNoSubmenu);

		scopes.dispatch_pointer(Point::new(100.0, 400.0));
		assert_eq!(navbar.state(), MenuState::Closed);

		navbar.activate_item(MenuItemId::Services, 0);
		viewport.resize(1024);
		assert_eq!(navbar.state(), MenuState::Closed);
	}

	#[rstest]
	fn test_controller_drop_deregisters() {
		let viewport = Viewport::new(1024);
		let scopes = InteractionScopes::new();
		let navbar = NavbarController::new(&viewport, &scopes, [], 150);
		assert_eq!(scopes.len(), 1);

		drop(navbar);
		assert!(scopes.is_empty());
		viewport.resize(500);
	}

	fn any_event() -> impl Strategy<Value = MenuEvent> {
		let id = (0..MenuItemId::ALL.len()).prop_map(|i| MenuItemId::ALL[i]);
		prop_oneof![
			Just(MenuEvent::ToggleTrigger),
			Just(MenuEvent::OutsideClick),
			Just(MenuEvent::Resize),
			Just(MenuEvent::LinkActivated),
			(id, 0u64..10_000).prop_map(|(id, now_ms)| MenuEvent::ItemActivated { id, now_ms }),
			(0u64..10_000).prop_map(|now_ms| MenuEvent::Tick { now_ms }),
		]
	}

	proptest! {
		#[test]
		fn prop_snapshot_invariants(events in proptest::collection::vec(any_event(), 0..40)) {
			let mut menu = NavMenu::default();
			for event in events {
				menu.handle(event);
				let snap = menu.snapshot();
				if !snap.overlay_open {
					prop_assert_eq!(snap.active_dropdown, None);
				}
				if let Some(id) = snap.active_dropdown {
					prop_assert!(id.has_dropdown());
				}
			}
		}

		#[test]
		fn prop_other_item_eventually_opens(
			first in prop_oneof![Just(MenuItemId::Services), Just(MenuItemId::Portfolio)],
			now in 0u64..1_000_000,
		) {
			let second = if first == MenuItemId::Services {
				MenuItemId::Portfolio
			} else {
				MenuItemId::Services
			};
			let mut menu = NavMenu::default();

			prop_assert_eq!(menu.handle(open(first)), MenuState::OpenWithSubmenu(first));
			menu.handle(MenuEvent::ItemActivated { id: second, now_ms: now });
			prop_assert_eq!(
				menu.handle(MenuEvent::Tick { now_ms: now + DEFAULT_SUBMENU_SWITCH_DELAY_MS }),
				MenuState::OpenWithSubmenu(second)
			);
		}
	}
}
