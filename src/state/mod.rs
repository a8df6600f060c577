//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that owns the form controllers
//! - Navigation types (Page, Focus)
//! - Field editing helpers shared by every form
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use form::{edited_value, FieldCursor, FieldEdit};
pub use navigation::{Focus, Page};
pub use state_impl::State;
