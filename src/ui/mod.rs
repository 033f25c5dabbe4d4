//! Ratatui front-end: an add-word form plus a read-only table of saved words.
//! The shell only talks to the store through `InsertCommand`s and `list_all`,
//! and renders whatever grid the projection hands back.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
