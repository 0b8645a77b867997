//! # hojeza-pages
//!
//! Client-side core of the Hojeza site: a static router with access guards
//! and layouts, the navigation dispatcher that owns the view generation, the
//! page shell, and the UI state machines (navbar menu, language selector,
//! hero carousel) the chrome renders from.
//!
//! Everything here is single-threaded and host-agnostic. State lives in
//! [`hojeza_core::Signal`]s; platform effects (history, scrolling, storage,
//! resize events) sit behind traits with in-memory implementations, and the
//! `browser` feature adds `web-sys` backed ones on wasm32.
//!
//! ## Modules
//!
//! - [`component`]: view tree, [`component::Component`] and [`component::Layout`]
//! - [`router`]: patterns, route table, guards, history, resolution
//! - [`navigation`]: [`navigation::NavigationDispatcher`] and [`navigation::ViewGeneration`]
//! - [`media`]: viewport width and media queries
//! - [`scope`]: outside-press detection
//! - [`navbar`]: menu table and state machine
//! - [`layout`]: page shell and enter fade
//! - [`selector`], [`carousel`], [`form`], [`api`]

pub mod api;
pub mod carousel;
pub mod component;
pub mod form;
pub mod layout;
pub mod media;
pub mod navbar;
pub mod navigation;
pub mod router;
pub mod scope;
pub mod selector;

pub use component::{Component, ElementView, IntoView, Layout, RenderContext, View};
pub use layout::{FadeIn, PageShell};
pub use media::{MediaQuery, Viewport};
pub use navbar::{MenuEvent, MenuItemId, MenuState, NavMenu, NavMenuState, NavbarController};
pub use navigation::{NavigationDispatcher, NavigationError, ScrollSurface, ViewGeneration};
pub use router::{AccessGuard, GuardDecision, PublicGuard, RouteEntry, RouteTable, Router, RouterError};
pub use scope::{InteractionScopes, Point, Rect};
