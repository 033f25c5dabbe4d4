//! Core library surface for the vocabulary keeper.
//!
//! The store and the projection are the reusable pieces; the `ui` module is a
//! thin terminal shell on top of them and the `bin` target wires everything
//! together.
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod projection;
pub mod ui;

/// Persistence layer entry points.
pub use db::{StoreError, StoreResult, VocabStore};

/// Domain types passed between layers.
pub use models::{Entry, InsertCommand};

/// Tabular projection of the stored entries.
pub use projection::{Grid, LayoutOptions, Projection, TextMeasure};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
