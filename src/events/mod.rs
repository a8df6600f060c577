//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: form submissions sent to the backend
//! - Terminal events: key presses and ticks

pub mod network;
pub mod terminal;
