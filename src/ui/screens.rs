use anyhow::Error;
use log::warn;

use crate::db::VocabStore;
use crate::projection::{self, CellWidth, Grid, LayoutOptions, Projection};

use super::helpers::surface_error;

/// Content of the table view, captured once when the view opens.
pub(crate) enum TableScreen {
    /// At least one entry was loaded.
    Loaded { grid: Grid, offset: usize },
    /// The store is empty; a placeholder is shown instead of a table.
    Empty,
    /// Reading the store failed. Kept apart from `Empty` so the user can tell
    /// "nothing saved yet" from "could not read".
    Failed(String),
}

impl TableScreen {
    pub(crate) fn load(store: &VocabStore) -> Self {
        let entries = match store.list_all() {
            Ok(entries) => entries,
            Err(err) => {
                let err = Error::from(err);
                warn!("event=table_open module=ui status=error error={err:#}");
                return TableScreen::Failed(surface_error(&err));
            }
        };

        match projection::build_with(&entries, &CellWidth, LayoutOptions::terminal()) {
            Projection::NoData => TableScreen::Empty,
            Projection::Table(grid) => TableScreen::Loaded { grid, offset: 0 },
        }
    }

    /// Scroll by `delta` rows, clamped to the grid.
    pub(crate) fn scroll(&mut self, delta: isize) {
        if let TableScreen::Loaded { grid, offset } = self {
            let max = grid.rows.len().saturating_sub(1);
            *offset = offset.saturating_add_signed(delta).min(max);
        }
    }

    pub(crate) fn row_count(&self) -> usize {
        match self {
            TableScreen::Loaded { grid, .. } => grid.rows.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_opens_the_placeholder() {
        let store = VocabStore::open_in_memory().unwrap();
        assert!(matches!(TableScreen::load(&store), TableScreen::Empty));
    }

    #[test]
    fn loaded_table_sizes_the_word_column_in_cells() {
        let store = VocabStore::open_in_memory().unwrap();
        store.insert("Apple", "Яблоко").unwrap();
        store.insert("Be", "Быть").unwrap();

        let TableScreen::Loaded { grid, offset } = TableScreen::load(&store) else {
            panic!("expected a loaded table");
        };
        assert_eq!(offset, 0);
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.widths[projection::WORD_COLUMN], 5 + 2);
    }

    #[test]
    fn scrolling_is_clamped() {
        let store = VocabStore::open_in_memory().unwrap();
        for word in ["a", "b", "c"] {
            store.insert(word, word).unwrap();
        }
        let mut screen = TableScreen::load(&store);
        screen.scroll(-1);
        screen.scroll(10);
        let TableScreen::Loaded { offset, .. } = screen else {
            panic!("expected a loaded table");
        };
        assert_eq!(offset, 2);
    }
}
