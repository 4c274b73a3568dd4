//! Reactive state for spa-router
//!
//! The router keeps its current path in a [`Signal`]. Views do not track
//! dependencies automatically; anything that needs to react to a change
//! subscribes explicitly and keeps the returned [`Subscription`] alive for as
//! long as it wants to be notified.

mod signal;

pub use signal::{Signal, Subscription};
