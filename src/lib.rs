//! stacked-tabs crate root: re-exports and module wiring.
//!
//! This crate provides a tab switcher widget for egui/eframe. A fixed row of
//! selector buttons sits above a stack of content cards ordered by recency of
//! selection, with deeper cards shrunk, faded and fanned out while the
//! selector bar is hovered.
//!
//! - `data`: tab definitions, the selection state machine and per-depth looks
//! - `widgets`: the egui rendering of the selector bar and content stack
//! - `controllers`: shared selection store for code outside the widget
//! - `config`: styling hooks and animation timings

pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod widgets;

pub use config::{AnimationConfig, TabsConfig, TabsStyle};
pub use controllers::SelectionController;
pub use data::depth::{bounce_offset, stack_looks, PanelLook};
pub use data::stack::TabStack;
pub use data::tab::{Tab, TabContent};
pub use error::{Result, TabsError};
pub use widgets::TabSwitcher;
