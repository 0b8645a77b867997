//! Site application context.
//!
//! [`SiteApp`] is created once at startup and owns every piece of shared
//! state: the locale store, router, navigation dispatcher, viewport, navbar
//! menu and the page-level signals. Hosts feed it input (navigation,
//! resizes, pointer presses, clock ticks) and call [`SiteApp::render`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use hojeza_core::reactive::Signal;
use hojeza_i18n::{FileStorage, KeyValueStorage, LocaleStore, Translator};
use hojeza_pages::api::{ReqwestClient, UserService};
use hojeza_pages::carousel::{HERO_SLIDES, HeroCarousel};
use hojeza_pages::component::{Layout, RenderContext, View};
use hojeza_pages::form::{ContactForm, ContactFormError, ContactSubmission};
use hojeza_pages::layout::{FadeIn, PageShell};
use hojeza_pages::media::{MediaQuery, Viewport};
use hojeza_pages::navbar::{MenuItemId, MenuState, NavbarController};
use hojeza_pages::navigation::{NavigationDispatcher, ScrollSurface, ViewGeneration};
use hojeza_pages::router::{AccessGuard, History, PublicGuard, Resolution, Router};
use hojeza_pages::scope::{InteractionScopes, Point, Rect, ScopeRegistration};
use hojeza_pages::selector::LanguageSelector;

use crate::SiteError;
use crate::conf::SiteSettings;
use crate::site::pages::{ContactPage, HomePage};
use crate::site::{SiteFooter, SiteNavbar, site_routes};

/// Viewport width assumed until the host reports one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Assembles a [`SiteApp`], with platform collaborators overridable.
///
/// Unset collaborators default to the browser ones under the `browser`
/// feature on wasm32, and to in-memory ones otherwise. The locale storage
/// is a file when [`SiteSettings::locale_storage_path`] is set.
pub struct SiteAppBuilder {
	settings: SiteSettings,
	storage: Option<Rc<dyn KeyValueStorage>>,
	history: Option<Rc<dyn History>>,
	scroll: Option<Rc<dyn ScrollSurface>>,
	guard: Option<Rc<dyn AccessGuard>>,
	viewport_width: u32,
	navbar_bounds: Vec<Rect>,
	selector_bounds: Vec<Rect>,
	started_at: u64,
}

impl SiteAppBuilder {
	pub fn new(settings: SiteSettings) -> Self {
		Self {
			settings,
			storage: None,
			history: None,
			scroll: None,
			guard: None,
			viewport_width: DEFAULT_VIEWPORT_WIDTH,
			navbar_bounds: Vec::new(),
			selector_bounds: Vec::new(),
			started_at: 0,
		}
	}

	pub fn storage(mut self, storage: Rc<dyn KeyValueStorage>) -> Self {
		self.storage = Some(storage);
		self
	}

	pub fn history(mut self, history: Rc<dyn History>) -> Self {
		self.history = Some(history);
		self
	}

	pub fn scroll(mut self, scroll: Rc<dyn ScrollSurface>) -> Self {
		self.scroll = Some(scroll);
		self
	}

	/// Guard shared by every route. Defaults to [`PublicGuard`].
	pub fn guard(mut self, guard: Rc<dyn AccessGuard>) -> Self {
		self.guard = Some(guard);
		self
	}

	pub fn viewport_width(mut self, width: u32) -> Self {
		self.viewport_width = width;
		self
	}

	/// On-screen area of the navbar; presses outside it close the menu.
	pub fn navbar_bounds(mut self, bounds: impl IntoIterator<Item = Rect>) -> Self {
		self.navbar_bounds = bounds.into_iter().collect();
		self
	}

	/// On-screen area of the language selector.
	pub fn selector_bounds(mut self, bounds: impl IntoIterator<Item = Rect>) -> Self {
		self.selector_bounds = bounds.into_iter().collect();
		self
	}

	/// Clock value at startup, in milliseconds.
	pub fn started_at(mut self, now_ms: u64) -> Self {
		self.started_at = now_ms;
		self
	}

	pub fn build(self) -> Result<SiteApp, SiteError> {
		let Self {
			settings,
			storage,
			history,
			scroll,
			guard,
			viewport_width,
			navbar_bounds,
			selector_bounds,
			started_at,
		} = self;

		let storage = storage.unwrap_or_else(|| default_storage(&settings));
		let locale = Rc::new(LocaleStore::load(storage, Translator::builtin()?));
		let selector = LanguageSelector::new(Rc::clone(&locale));

		let shell: Rc<dyn Layout> = Rc::new(
			PageShell::new(
				SiteNavbar::new(settings.site_name.clone(), selector.clone()),
				SiteFooter::new(settings.site_name.clone()),
			)
			.with_fade_duration(settings.fade_duration_ms),
		);
		let hero = Signal::new(
			HeroCarousel::new(&HERO_SLIDES, settings.carousel_autoplay_ms, started_at)
				.with_speed(settings.carousel_speed_ms),
		);
		let rejection = Signal::new(None);
		let table = site_routes(
			HomePage::new(hero.clone()),
			ContactPage::new(rejection.clone()),
			guard.unwrap_or_else(|| Rc::new(PublicGuard)),
			shell,
		)?;

		let navigation = NavigationDispatcher::new(
			history.unwrap_or_else(default_history),
			scroll.unwrap_or_else(default_scroll),
		);
		let viewport = Viewport::new(viewport_width);
		let narrow = viewport.observe(settings.narrow_breakpoint_px);
		let scopes = InteractionScopes::new();
		let navbar = NavbarController::new(
			&viewport,
			&scopes,
			navbar_bounds,
			settings.submenu_switch_delay_ms,
		);
		let selector_scope = scopes.register(selector_bounds, {
			let selector = selector.clone();
			move |_| selector.close()
		});
		let fade = FadeIn::new(navigation.generation(), settings.fade_duration_ms, started_at);

		tracing::info!(
			site = %settings.site_name,
			locale = %locale.locale(),
			location = %navigation.location(),
			"site started"
		);

		Ok(SiteApp {
			settings,
			locale,
			router: Router::new(table),
			navigation,
			viewport,
			narrow,
			scopes,
			navbar,
			selector,
			_selector_scope: selector_scope,
			hero,
			rejection,
			fade: RefCell::new(fade),
			clock: Cell::new(started_at),
		})
	}
}

fn default_storage(settings: &SiteSettings) -> Rc<dyn KeyValueStorage> {
	if let Some(path) = &settings.locale_storage_path {
		return Rc::new(FileStorage::new(path.clone()));
	}
	#[cfg(all(target_arch = "wasm32", feature = "browser"))]
	{
		Rc::new(hojeza_i18n::BrowserStorage)
	}
	#[cfg(not(all(target_arch = "wasm32", feature = "browser")))]
	{
		Rc::new(hojeza_i18n::MemoryStorage::new())
	}
}

fn default_history() -> Rc<dyn History> {
	#[cfg(all(target_arch = "wasm32", feature = "browser"))]
	{
		Rc::new(hojeza_pages::router::BrowserHistory)
	}
	#[cfg(not(all(target_arch = "wasm32", feature = "browser")))]
	{
		Rc::new(hojeza_pages::router::MemoryHistory::default())
	}
}

fn default_scroll() -> Rc<dyn ScrollSurface> {
	#[cfg(all(target_arch = "wasm32", feature = "browser"))]
	{
		Rc::new(hojeza_pages::navigation::BrowserScroll)
	}
	#[cfg(not(all(target_arch = "wasm32", feature = "browser")))]
	{
		Rc::new(hojeza_pages::navigation::MemoryScroll::new())
	}
}

/// The running site.
pub struct SiteApp {
	settings: SiteSettings,
	locale: Rc<LocaleStore>,
	router: Router,
	navigation: NavigationDispatcher,
	viewport: Viewport,
	narrow: MediaQuery,
	scopes: InteractionScopes,
	navbar: NavbarController,
	selector: LanguageSelector,
	_selector_scope: ScopeRegistration,
	hero: Signal<HeroCarousel>,
	rejection: Signal<Option<ContactFormError>>,
	fade: RefCell<FadeIn>,
	clock: Cell<u64>,
}

impl fmt::Debug for SiteApp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SiteApp")
			.field("site_name", &self.settings.site_name)
			.field("locale", &self.locale.locale())
			.field("navigation", &self.navigation.state())
			.field("menu", &self.navbar.state())
			.finish()
	}
}

impl SiteApp {
	/// Builds the site with default collaborators.
	pub fn new(settings: SiteSettings) -> Result<Self, SiteError> {
		SiteAppBuilder::new(settings).build()
	}

	pub fn builder(settings: SiteSettings) -> SiteAppBuilder {
		SiteAppBuilder::new(settings)
	}

	/// Navigates to `path`: pushes history, scrolls to the top, bumps the
	/// view generation, then closes the menus and restarts the page fade.
	pub fn go(&self, path: &str) -> Result<ViewGeneration, SiteError> {
		let generation = self.navigation.go(path)?;
		self.navbar.link_activated();
		self.selector.close();
		self.fade.borrow_mut().rekey(generation, self.clock.get());
		Ok(generation)
	}

	/// Like [`go`](Self::go) but replaces the current history entry.
	pub fn redirect(&self, path: &str) -> Result<ViewGeneration, SiteError> {
		let generation = self.navigation.replace(path)?;
		self.navbar.link_activated();
		self.selector.close();
		self.fade.borrow_mut().rekey(generation, self.clock.get());
		Ok(generation)
	}

	/// The host's back/forward navigation landed on `path`.
	pub fn location_changed(&self, path: &str) {
		self.navigation.location_changed(path);
	}

	/// Resolves the current location.
	pub fn resolve(&self) -> Result<Resolution, SiteError> {
		Ok(self.router.resolve(&self.navigation.location())?)
	}

	/// Renders the current location inside the page shell.
	pub fn render(&self) -> Result<View, SiteError> {
		let resolution = self.resolve()?;
		let mut ctx = RenderContext::new(&self.locale, &resolution.route.path);
		ctx.generation = self.navigation.generation();
		ctx.narrow = self.narrow.matches();
		ctx.menu = self.navbar.snapshot();
		Ok(resolution.render(&ctx))
	}

	/// Switches the display language. Unsupported codes are ignored.
	pub fn set_language(&self, code: &str) {
		self.locale.set(code);
		self.selector.close();
	}

	pub fn toggle_language_menu(&self) {
		self.selector.toggle();
	}

	pub fn toggle_menu(&self) -> MenuState {
		self.navbar.toggle()
	}

	pub fn activate_menu_item(&self, id: MenuItemId) -> MenuState {
		self.navbar.activate_item(id, self.clock.get())
	}

	/// Feeds a viewport resize.
	pub fn resize(&self, width: u32) {
		self.viewport.resize(width);
	}

	/// Feeds a pointer press. Returns how many regions saw it as outside.
	pub fn pointer(&self, point: Point) -> usize {
		self.scopes.dispatch_pointer(point)
	}

	/// Advances the clock: finishes pending submenu switches, runs carousel
	/// autoplay and the page fade.
	pub fn tick(&self, now_ms: u64) {
		let now_ms = now_ms.max(self.clock.get());
		self.clock.set(now_ms);

		self.navbar.tick(now_ms);
		let mut hero = self.hero.get();
		if hero.tick(now_ms) {
			self.hero.set(hero);
		}
		self.fade.borrow_mut().tick(now_ms);
	}

	/// Moves the hero carousel.
	pub fn hero_next(&self) -> usize {
		let now_ms = self.clock.get();
		let mut index = 0;
		self.hero.update(|hero| index = hero.next(now_ms));
		index
	}

	pub fn hero_prev(&self) -> usize {
		let now_ms = self.clock.get();
		let mut index = 0;
		self.hero.update(|hero| index = hero.prev(now_ms));
		index
	}

	/// A drag on the hero started. Autoplay holds until it ends.
	pub fn hero_drag_start(&self) {
		self.hero.update(|hero| hero.pointer_down());
	}

	/// The drag ended. The autoplay interval restarts from now.
	pub fn hero_drag_end(&self) {
		let now_ms = self.clock.get();
		self.hero.update(|hero| hero.pointer_up(now_ms));
	}

	/// Validates a contact submission. A rejection is kept for the contact
	/// page to display until the next submission.
	pub fn submit_contact(&self, form: &ContactForm) -> Result<ContactSubmission, ContactFormError> {
		match form.validate() {
			Ok(submission) => {
				self.rejection.set_if_changed(None);
				tracing::info!(
					has_email = submission.email.is_some(),
					has_phone = submission.phone.is_some(),
					"contact form accepted"
				);
				Ok(submission)
			}
			Err(err) => {
				tracing::debug!(error = %err, "contact form rejected");
				self.rejection.set(Some(err));
				Err(err)
			}
		}
	}

	/// User lookups against [`SiteSettings::api_base_url`].
	pub fn user_service(&self) -> Result<UserService<ReqwestClient>, SiteError> {
		Ok(UserService::new(ReqwestClient::new(&self.settings.api_base_url)?))
	}

	pub fn settings(&self) -> &SiteSettings {
		&self.settings
	}

	pub fn locale(&self) -> &Rc<LocaleStore> {
		&self.locale
	}

	pub fn router(&self) -> &Router {
		&self.router
	}

	pub fn navigation(&self) -> &NavigationDispatcher {
		&self.navigation
	}

	pub fn viewport(&self) -> &Viewport {
		&self.viewport
	}

	/// Whether the viewport is at or below the narrow breakpoint.
	pub fn narrow(&self) -> &MediaQuery {
		&self.narrow
	}

	pub fn navbar(&self) -> &NavbarController {
		&self.navbar
	}

	pub fn selector(&self) -> &LanguageSelector {
		&self.selector
	}

	pub fn hero_index(&self) -> usize {
		self.hero.with(HeroCarousel::index)
	}

	pub fn fade(&self) -> FadeIn {
		*self.fade.borrow()
	}
}
