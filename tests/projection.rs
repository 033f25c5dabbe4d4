use std::cell::Cell;
use std::collections::HashMap;

use vocab_keeper::projection::{build, build_with, CellWidth, WORD_COLUMN};
use vocab_keeper::{Entry, LayoutOptions, Projection, VocabStore};

#[test]
fn empty_store_projects_to_no_data() {
    let store = VocabStore::open_in_memory().unwrap();
    let entries = store.list_all().unwrap();

    let calls = Cell::new(0u32);
    let measure = |text: &str| -> u32 {
        calls.set(calls.get() + 1);
        text.len() as u32
    };

    assert_eq!(build(&entries, &measure), Projection::NoData);
    assert_eq!(calls.get(), 0);
}

#[test]
fn word_column_is_widest_word_plus_padding() {
    let store = VocabStore::open_in_memory().unwrap();
    store.insert("short", "a").unwrap();
    store.insert("longest", "b").unwrap();
    store.insert("middle", "c").unwrap();

    let widths: HashMap<&str, u32> = [("short", 10), ("longest", 50), ("middle", 30)]
        .into_iter()
        .collect();
    let measure = |text: &str| -> u32 { widths.get(text).copied().unwrap_or(0) };

    let Projection::Table(grid) = build(&store.list_all().unwrap(), &measure) else {
        panic!("expected a table");
    };
    assert_eq!(grid.widths[WORD_COLUMN], 70);
}

#[test]
fn grid_mirrors_store_order() {
    let store = VocabStore::open_in_memory().unwrap();
    let first = store.insert("One", "Один").unwrap();
    let second = store.insert("Two", "Два").unwrap();

    let Projection::Table(grid) = build(&store.list_all().unwrap(), &CellWidth) else {
        panic!("expected a table");
    };
    assert_eq!(
        grid.rows,
        vec![
            [first.id.to_string(), "one".to_string(), "один".to_string()],
            [second.id.to_string(), "two".to_string(), "два".to_string()],
        ]
    );
}

#[test]
fn custom_layout_options_apply_to_every_column() {
    let entries = vec![Entry {
        id: 1,
        word: "moon".into(),
        translation: "луна".into(),
    }];
    let options = LayoutOptions {
        word_padding: 5,
        default_width: 8,
    };

    let Projection::Table(grid) = build_with(&entries, &CellWidth, options) else {
        panic!("expected a table");
    };
    assert_eq!(grid.widths, [8, 9, 8]);
}
