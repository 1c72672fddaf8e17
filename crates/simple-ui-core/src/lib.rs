//! Core systems for simple-ui.
//!
//! This crate provides the small foundation the other simple-ui crates build on:
//!
//! - **Node handles**: [`NodeId`], the generation-checked key scene nodes are
//!   stored under
//! - **Signals**: [`Signal`], synchronous observer lists used by components to
//!   report clicks and toggles
//! - **Logging**: [`logging`] target and span names for `tracing` filters

pub mod logging;
pub mod object;
pub mod signal;

pub use object::NodeId;
pub use signal::{ConnectionId, Signal};
