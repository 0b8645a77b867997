//! Hojeza Core
//!
//! Shared primitives for the Hojeza site core. The only module today is
//! [`reactive`], a single-threaded signal with synchronous subscribers that
//! the locale store, the navigation dispatcher and the viewport observer
//! build on.
//!
//! ## Example
//!
//! ```
//! use hojeza_core::reactive::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let generation = Signal::new(0_u64);
//! let seen = Rc::new(Cell::new(0));
//!
//! let _sub = generation.subscribe({
//! 	let seen = seen.clone();
//! 	move |value| seen.set(*value)
//! });
//!
//! generation.update(|n| *n += 1);
//! assert_eq!(seen.get(), 1);
//! ```

pub mod reactive;

pub use reactive::{Signal, Subscription};
