//! Reusable observers for growth-model residual evaluation.
//!
//! Evaluators report intermediate quantities through an injected
//! [`Observer`] instead of printing. This crate provides the two sinks most
//! callers want:
//!
//! - [`LogObserver`] — emits each event as a structured `tracing` event
//! - [`History`] — keeps an owned copy of each event for later inspection
//!
//! [`Observer`]: ngm_core::Observer

mod history;
mod log;

pub use history::{ExpectationRecord, History};
pub use log::LogObserver;
