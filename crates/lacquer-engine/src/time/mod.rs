//! Fixed-interval tick timing.
//!
//! Widgets that animate expose a `tick()` step; the host owns a [`Ticker`]
//! and calls that step once per due tick. Stopping the ticker cancels the
//! animation, nothing else needs tearing down.

mod ticker;

pub use ticker::Ticker;
