//! Interaction scopes.
//!
//! A component that must react to pointer presses *outside* itself (a menu
//! closing on an outside click) registers a region here. The host feeds every
//! pointer press to [`InteractionScopes::dispatch_pointer`], which calls the
//! handler of each region whose bounds do not contain the point.
//!
//! Registrations are removed when their [`ScopeRegistration`] is dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// An axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Edges are inclusive.
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
	}
}

type OutsideHandler = Rc<dyn Fn(Point)>;

struct Region {
	id: u64,
	bounds: Vec<Rect>,
	on_outside: OutsideHandler,
}

impl Region {
	fn contains(&self, p: Point) -> bool {
		self.bounds.iter().any(|r| r.contains(p))
	}
}

#[derive(Default)]
struct Registry {
	next_id: u64,
	regions: Vec<Region>,
}

/// Registry of regions interested in outside presses.
#[derive(Clone, Default)]
pub struct InteractionScopes {
	registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for InteractionScopes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InteractionScopes")
			.field("regions", &self.len())
			.finish()
	}
}

impl InteractionScopes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a region made of `bounds`. A press inside any of the
	/// rectangles counts as inside.
	pub fn register(
		&self,
		bounds: impl IntoIterator<Item = Rect>,
		on_outside: impl Fn(Point) + 'static,
	) -> ScopeRegistration {
		let mut registry = self.registry.borrow_mut();
		let id = registry.next_id;
		registry.next_id += 1;
		registry.regions.push(Region {
			id,
			bounds: bounds.into_iter().collect(),
			on_outside: Rc::new(on_outside),
		});

		ScopeRegistration {
			id,
			registry: Rc::downgrade(&self.registry),
		}
	}

	/// Reports a pointer press. Returns how many regions were notified.
	pub fn dispatch_pointer(&self, point: Point) -> usize {
		let handlers: Vec<OutsideHandler> = self
			.registry
			.borrow()
			.regions
			.iter()
			.filter(|r| !r.contains(point))
			.map(|r| Rc::clone(&r.on_outside))
			.collect();

		tracing::trace!(x = point.x, y = point.y, notified = handlers.len(), "pointer dispatched");
		for handler in &handlers {
			handler(point);
		}
		handlers.len()
	}

	/// Number of live registrations.
	pub fn len(&self) -> usize {
		self.registry.borrow().regions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Handle to a registered region. Dropping it deregisters the region.
#[must_use = "dropping a ScopeRegistration immediately removes the region"]
pub struct ScopeRegistration {
	id: u64,
	registry: Weak<RefCell<Registry>>,
}

impl fmt::Debug for ScopeRegistration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScopeRegistration")
			.field("id", &self.id)
			.field("live", &self.registry.strong_count())
			.finish()
	}
}

impl ScopeRegistration {
	/// Replaces the region's bounds, e.g. after layout moved it.
	pub fn set_bounds(&self, bounds: impl IntoIterator<Item = Rect>) {
		let Some(registry) = self.registry.upgrade() else {
			return;
		};
		let mut registry = registry.borrow_mut();
		if let Some(region) = registry.regions.iter_mut().find(|r| r.id == self.id) {
			region.bounds = bounds.into_iter().collect();
		}
	}
}

impl Drop for ScopeRegistration {
	fn drop(&mut self) {
		if let Some(registry) = self.registry.upgrade() {
			registry.borrow_mut().regions.retain(|r| r.id != self.id);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::Cell;

	fn counter() -> (Rc<Cell<usize>>, impl Fn(Point) + 'static) {
		let count = Rc::new(Cell::new(0));
		let handler = {
			let count = count.clone();
			move |_: Point| count.set(count.get() + 1)
		};
		(count, handler)
	}

	#[rstest]
	#[case(Point::new(10.0, 10.0), true)]
	#[case(Point::new(0.0, 0.0), true)]
	#[case(Point::new(100.0, 50.0), true)]
	#[case(Point::new(100.1, 10.0), false)]
	#[case(Point::new(-1.0, 10.0), false)]
	fn test_rect_contains(#[case] p: Point, #[case] inside: bool) {
		assert_eq!(Rect::new(0.0, 0.0, 100.0, 50.0).contains(p), inside);
	}

	#[rstest]
	fn test_only_outside_presses_notify() {
		let scopes = InteractionScopes::new();
		let (count, handler) = counter();
		let _reg = scopes.register([Rect::new(0.0, 0.0, 100.0, 60.0)], handler);

		assert_eq!(scopes.dispatch_pointer(Point::new(50.0, 30.0)), 0);
		assert_eq!(scopes.dispatch_pointer(Point::new(500.0, 300.0)), 1);
		assert_eq!(count.get(), 1);
	}

	#[rstest]
	fn test_multiple_rects_form_one_region() {
		let scopes = InteractionScopes::new();
		let (count, handler) = counter();
		let _reg = scopes.register(
			[
				Rect::new(0.0, 0.0, 50.0, 50.0),
				Rect::new(200.0, 0.0, 50.0, 50.0),
			],
			handler,
		);

		scopes.dispatch_pointer(Point::new(210.0, 10.0));
		assert_eq!(count.get(), 0);
	}

	#[rstest]
	fn test_drop_deregisters() {
		let scopes = InteractionScopes::new();
		let (count, handler) = counter();
		let reg = scopes.register([Rect::default()], handler);
		assert_eq!(scopes.len(), 1);

		drop(reg);
		scopes.dispatch_pointer(Point::new(10.0, 10.0));

		assert!(scopes.is_empty());
		assert_eq!(count.get(), 0);
	}

	#[rstest]
	fn test_set_bounds_moves_region() {
		let scopes = InteractionScopes::new();
		let (count, handler) = counter();
		let reg = scopes.register([Rect::new(0.0, 0.0, 10.0, 10.0)], handler);

		reg.set_bounds([Rect::new(100.0, 100.0, 10.0, 10.0)]);
		scopes.dispatch_pointer(Point::new(105.0, 105.0));
		scopes.dispatch_pointer(Point::new(5.0, 5.0));

		assert_eq!(count.get(), 1);
	}

	#[rstest]
	fn test_handler_may_deregister_during_dispatch() {
		let scopes = InteractionScopes::new();
		let slot: Rc<RefCell<Option<ScopeRegistration>>> = Rc::new(RefCell::new(None));
		let reg = scopes.register([Rect::default()], {
			let slot = slot.clone();
			move |_| {
				slot.borrow_mut().take();
			}
		});
		*slot.borrow_mut() = Some(reg);

		assert_eq!(scopes.dispatch_pointer(Point::new(5.0, 5.0)), 1);
		assert!(scopes.is_empty());
	}
}
