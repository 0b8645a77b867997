//! Reactive primitives.
//!
//! Everything here is `!Send`: the site core runs on one cooperative UI
//! thread and every write notifies its subscribers before returning.

mod signal;
mod subscription;

pub use signal::Signal;
pub use subscription::Subscription;
