//! Turns the stored entries into a render-ready grid plus column widths.
//!
//! The projection is a pure function of its input and the injected
//! [`TextMeasure`]; it never touches the store or any widget toolkit. The
//! shell decides how the grid is actually painted.

use unicode_width::UnicodeWidthStr;

use crate::models::Entry;

/// Number of columns in every row: id, word, translation.
pub const COLUMN_COUNT: usize = 3;
/// Header labels in column order.
pub const COLUMN_TITLES: [&str; COLUMN_COUNT] = ["ID", "Word", "Translation"];
/// Index of the word column, the only one sized from its content.
pub const WORD_COLUMN: usize = 1;

/// Maps a string to its display size under a fixed font/style. Must be
/// deterministic for a given configuration.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> u32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> u32,
{
    fn measure(&self, text: &str) -> u32 {
        self(text)
    }
}

/// Terminal measure: the number of cells the text occupies.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellWidth;

impl TextMeasure for CellWidth {
    fn measure(&self, text: &str) -> u32 {
        u32::try_from(text.width()).unwrap_or(u32::MAX)
    }
}

/// Width hints used while building the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Added to the widest measured word.
    pub word_padding: u32,
    /// Width reported for the id and translation columns.
    pub default_width: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            word_padding: 20,
            default_width: 100,
        }
    }
}

impl LayoutOptions {
    /// Values tuned for terminal cells rather than pixels.
    pub fn terminal() -> Self {
        Self {
            word_padding: 2,
            default_width: 12,
        }
    }
}

/// One display row: `[id, word, translation]`.
pub type Row = [String; COLUMN_COUNT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Rows in the same order as the input entries.
    pub rows: Vec<Row>,
    /// Per-column widths in the measure's units.
    pub widths: [u32; COLUMN_COUNT],
}

/// Outcome of [`build`]. `NoData` is an expected state, not a failure: the
/// caller renders a placeholder instead of an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    NoData,
    Table(Grid),
}

/// Build the grid with the default layout options.
pub fn build(entries: &[Entry], measure: &impl TextMeasure) -> Projection {
    build_with(entries, measure, LayoutOptions::default())
}

/// Build the grid. `measure` is never called when `entries` is empty.
pub fn build_with(
    entries: &[Entry],
    measure: &impl TextMeasure,
    options: LayoutOptions,
) -> Projection {
    if entries.is_empty() {
        return Projection::NoData;
    }

    let rows: Vec<Row> = entries.iter().map(project_row).collect();
    let widths = column_widths(&rows, measure, options);
    Projection::Table(Grid { rows, widths })
}

fn project_row(entry: &Entry) -> Row {
    [
        entry.id.to_string(),
        entry.word.clone(),
        entry.translation.clone(),
    ]
}

fn column_widths(
    rows: &[Row],
    measure: &impl TextMeasure,
    options: LayoutOptions,
) -> [u32; COLUMN_COUNT] {
    let mut widths = [options.default_width; COLUMN_COUNT];
    let widest_word = rows
        .iter()
        .map(|row| measure.measure(&row[WORD_COLUMN]))
        .max()
        .unwrap_or(0);
    widths[WORD_COLUMN] = widest_word.saturating_add(options.word_padding);
    widths
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn entry(id: i64, word: &str, translation: &str) -> Entry {
        Entry {
            id,
            word: word.into(),
            translation: translation.into(),
        }
    }

    #[test]
    fn empty_input_skips_measurement() {
        let calls = Cell::new(0);
        let measure = |_: &str| -> u32 {
            calls.set(calls.get() + 1);
            1
        };
        assert_eq!(build(&[], &measure), Projection::NoData);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn rows_keep_input_order_and_render_ids_as_text() {
        let entries = vec![entry(7, "b", "бэ"), entry(9, "a", "а")];
        let Projection::Table(grid) = build(&entries, &CellWidth) else {
            panic!("expected a table");
        };
        assert_eq!(
            grid.rows,
            vec![
                ["7".to_string(), "b".to_string(), "бэ".to_string()],
                ["9".to_string(), "a".to_string(), "а".to_string()],
            ]
        );
    }

    #[test]
    fn non_word_columns_use_the_default_width() {
        let entries = vec![entry(1, "sun", "солнце")];
        let options = LayoutOptions {
            word_padding: 0,
            default_width: 42,
        };
        let Projection::Table(grid) = build_with(&entries, &CellWidth, options) else {
            panic!("expected a table");
        };
        assert_eq!(grid.widths, [42, 3, 42]);
    }

    #[test]
    fn cell_width_counts_wide_glyphs_twice() {
        assert_eq!(CellWidth.measure("abc"), 3);
        assert_eq!(CellWidth.measure("日本"), 4);
        assert_eq!(CellWidth.measure(""), 0);
    }
}
