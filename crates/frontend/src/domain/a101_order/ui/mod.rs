//! Orders screen UI.
//!
//! Simplified MVVM:
//! - view_model.rs: session signal + commands
//! - list: searchable order list
//! - details: tabbed edit form, line-item tables, payment dialog

pub mod details;
pub mod list;
pub mod view_model;

mod page;

pub use page::OrdersPage;
