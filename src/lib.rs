//! tagtree
//!
//! Interactive terminal viewer and editor for trees of tagged records.
//!
//! The core is split the way the data flows:
//!
//! - [`model`]: arena-backed tree, node kinds, subtree deletion
//! - [`view_state`]: wrapping, layout, layout cache, scrolling, hit-testing
//!   and painting against abstract measure/surface traits
//! - [`state`]: application state and pure input handlers
//! - [`view`]: ratatui widgets and the terminal event loop
//! - [`source`]: document formats and file persistence
//! - [`config`] and [`logging`]: ambient setup

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
