//! Behavioural tests for the data table model through the public API.

use eyesentry_business::table::{
    Column, DataTable, FilterState, NO_RESULTS_MESSAGE, Record, TableBody, TableRecord, fold_case,
};

fn patients() -> Vec<Record> {
    [
        (1, "Ada Lovelace", "ada@clinic.org"),
        (2, "Grace Hopper", "grace@clinic.org"),
        (3, "ALAN Turing", "alan@clinic.org"),
        (4, "Edsger Dijkstra", "edsger@clinic.org"),
        (5, "Barbara Liskov", "barbara@clinic.org"),
    ]
    .into_iter()
    .map(|(id, name, email)| {
        Record::new()
            .with("id", id)
            .with("name", name)
            .with("email", email)
    })
    .chain(std::iter::once(Record::new().with("id", 6)))
    .collect()
}

fn table() -> DataTable<Record> {
    DataTable::new(vec![
        Column::accessor("name", "Name"),
        Column::accessor("email", "Email"),
    ])
    .with_filter("name")
    .with_filter_placeholder("Search patients...")
}

fn filter(text: &str) -> FilterState {
    let mut state = FilterState::new();
    state.set(text);
    state
}

const QUERIES: [&str; 8] = ["", "a", "AL", "lo", "ov", "Hopper", "x", " "];

mod displayed_set {
    use super::*;

    #[test]
    fn equals_rows_whose_folded_field_contains_folded_query() {
        let rows = patients();
        for query in QUERIES {
            let shown = table().displayed_rows(&rows, &filter(query));
            let expected: Vec<&Record> = rows
                .iter()
                .filter(|row| {
                    query.is_empty()
                        || row
                            .field("name")
                            .map(|v| fold_case(&v.to_display_text()))
                            .unwrap_or_default()
                            .contains(&fold_case(query))
                })
                .collect();
            assert_eq!(shown, expected, "query {query:?}");
        }
    }

    #[test]
    fn is_idempotent() {
        let rows = patients();
        for query in QUERIES {
            let state = filter(query);
            let once: Vec<Record> = table()
                .displayed_rows(&rows, &state)
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<Record> = table()
                .displayed_rows(&once, &state)
                .into_iter()
                .cloned()
                .collect();
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn preserves_input_order() {
        let rows = patients();
        for query in QUERIES {
            let shown = table().displayed_rows(&rows, &filter(query));
            let positions: Vec<usize> = shown
                .iter()
                .map(|row| {
                    rows.iter()
                        .position(|r| std::ptr::eq(r, *row))
                        .expect("displayed row comes from input")
                })
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "query {query:?} reordered rows: {positions:?}"
            );
        }
    }
}

mod layout {
    use super::*;

    #[test]
    fn empty_display_has_exactly_one_placeholder() {
        let rows = patients();
        let layout = table().layout(&rows, &filter("no such patient"));

        assert_eq!(layout.headers, vec!["Name", "Email"]);
        assert_eq!(
            layout.body,
            TableBody::Empty {
                message: NO_RESULTS_MESSAGE,
                span: 2
            }
        );
    }

    #[test]
    fn rows_carry_identity_and_blank_missing_cells() {
        let rows = patients();
        let TableBody::Rows(rendered) = table().layout(&rows, &FilterState::new()).body else {
            panic!("expected rows");
        };

        assert_eq!(rendered.len(), 6);
        let last = rendered.last().expect("row 6");
        assert_eq!(last.id.as_str(), "6");
        assert_eq!(last.cells, vec!["", ""]);
    }

    #[test]
    fn placeholder_text_is_configurable() {
        assert_eq!(table().filter_placeholder(), "Search patients...");
    }
}
