//! Terminal User Interface module
//!
//! A full-screen rendition of the signup form using ratatui: one screen per
//! step, inline field errors, and a banner for the submission result.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
