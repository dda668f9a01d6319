//! Core traits and types shared by the residual evaluators and their callers.
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — an injected sink that receives diagnostic events

mod model;
mod observer;

pub use model::{Model, Snapshot};
pub use observer::Observer;
