//! Terminal client for the EduCoach tutoring service.
//!
//! Pages, the contact form and the account modal are rendered with
//! `ratatui`. Submissions go to a simulated or HTTP backend chosen in the
//! configuration file.

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod events;
pub mod forms;
pub mod logger;
pub mod state;
pub mod ui;
