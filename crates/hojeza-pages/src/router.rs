//! Client-side router.
//!
//! The router maps request paths onto a static, nested [`RouteTable`]. Each
//! entry may carry an [`AccessGuard`], a [`Layout`](crate::component::Layout)
//! and a page [`Component`](crate::component::Component).
//!
//! ## Example
//!
//! ```
//! use hojeza_pages::component::{RenderContext, View};
//! use hojeza_pages::router::{PublicGuard, RouteEntry, RouteTable, Router};
//!
//! fn home(_: &RenderContext<'_>) -> View {
//! 	View::text("home")
//! }
//!
//! fn not_found(_: &RenderContext<'_>) -> View {
//! 	View::text("not found")
//! }
//!
//! let router = Router::new(
//! 	RouteTable::new(vec![
//! 		RouteEntry::page("/", home).guard(PublicGuard),
//! 		RouteEntry::page("*", not_found).guard(PublicGuard),
//! 	])
//! 	.unwrap(),
//! );
//!
//! assert_eq!(router.resolve("/missing").unwrap().route.pattern, "*");
//! ```

mod core;
pub mod guard;
mod history;
mod pattern;
mod table;

pub use self::core::{MAX_REDIRECTS, Resolution, RouteMatch, Router, RouterError};
pub use guard::{AccessGuard, GuardDecision, PublicGuard};
#[cfg(all(target_arch = "wasm32", feature = "browser"))]
pub use history::BrowserHistory;
pub use history::{History, MemoryHistory};
pub use pattern::{PathPattern, normalize_path, split_path};
pub use table::{RouteEntry, RouteTable};
