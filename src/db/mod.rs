//! Persistence layer around the embedded SQLite database, split into the
//! connection bootstrap, the word queries and the error taxonomy.

mod connection;
mod error;
mod words;

pub use connection::VocabStore;
pub use error::{StoreError, StoreResult};
