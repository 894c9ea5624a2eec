use tabledom::{
    find_by_data, render_table, CellValue, Column, Element, Row, Size, SortDirection, SortState,
    SortType, SortableTable, TableOptions,
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(SortType::Textual),
        Column::new("age", "Age").sortable(SortType::Numeric),
    ]
}

fn row(name: &str, age: i64) -> Row {
    Row::from([
        ("name".to_string(), CellValue::from(name)),
        ("age".to_string(), CellValue::from(age)),
    ])
}

fn names(table: &SortableTable) -> Vec<String> {
    table.rows().iter().map(|r| r["name"].display()).collect()
}

fn ages(table: &SortableTable) -> Vec<f64> {
    table
        .rows()
        .iter()
        .map(|r| r["age"].as_number().unwrap())
        .collect()
}

/// (id, sortable, order) per header cell, in descriptor order.
fn header_attrs(table: &mut SortableTable) -> Vec<(String, String, Option<String>)> {
    let header = table.header().expect("header region");
    header
        .content
        .children()
        .iter()
        .map(|cell| {
            (
                cell.get_data("id").cloned().unwrap(),
                cell.get_data("sortable").cloned().unwrap(),
                cell.get_data("order").cloned(),
            )
        })
        .collect()
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_numeric_ascending_orders_consecutive_pairs() {
    let rows = vec![row("a", 30), row("b", 25), row("c", 40), row("d", 25)];
    let mut table = SortableTable::new(columns(), TableOptions { rows, sorted: None });

    table.sort("age", SortDirection::Ascending);
    let sorted = ages(&table);
    assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));

    table.sort("age", SortDirection::Descending);
    let sorted = ages(&table);
    assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_textual_ascending_matches_collation() {
    let rows = vec![row("banana", 1), row("Apple", 2), row("cherry", 3)];
    let mut table = SortableTable::new(columns(), TableOptions { rows, sorted: None });

    table.sort("name", SortDirection::Ascending);
    assert_eq!(names(&table), vec!["Apple", "banana", "cherry"]);
}

#[test]
fn test_sort_is_idempotent() {
    let rows = vec![row("b", 2), row("a", 1), row("c", 3)];
    let mut table = SortableTable::new(columns(), TableOptions { rows, sorted: None });

    table.sort("name", SortDirection::Ascending);
    let once_names = names(&table);
    let once_attrs = header_attrs(&mut table);

    table.sort("name", SortDirection::Ascending);
    assert_eq!(names(&table), once_names);
    assert_eq!(header_attrs(&mut table), once_attrs);
}

#[test]
fn test_sort_round_trip() {
    let rows = vec![row("b", 20), row("a", 10), row("c", 30)];
    let mut table = SortableTable::new(
        columns(),
        TableOptions {
            rows: rows.clone(),
            sorted: None,
        },
    );

    table.sort("age", SortDirection::Ascending);
    let ascending = ages(&table);
    table.sort("age", SortDirection::Descending);
    let descending = ages(&table);

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);

    // Same as sorting descending directly from the initial data
    let mut direct = SortableTable::new(columns(), TableOptions { rows, sorted: None });
    direct.sort("age", SortDirection::Descending);
    assert_eq!(ages(&direct), descending);
}

#[test]
fn test_invalid_sort_targets_are_ignored() {
    let mut cols = columns();
    cols.push(Column::new("note", "Note"));
    // Malformed descriptor: flagged sortable but without a sort type
    let mut broken = Column::new("broken", "Broken");
    broken.sortable = true;
    cols.push(broken);

    let rows = vec![row("b", 2), row("a", 1)];
    let mut table = SortableTable::new(cols, TableOptions { rows, sorted: None });
    let root_id = table.element().id.clone();

    assert!(!table.sort("nonexistent", SortDirection::Ascending));
    assert!(!table.sort("note", SortDirection::Ascending));
    assert!(!table.sort("broken", SortDirection::Ascending));

    // State untouched, tree not replaced
    assert_eq!(names(&table), vec!["b", "a"]);
    assert!(table.sorted().is_none());
    assert_eq!(table.element().id, root_id);
}

#[test]
fn test_rows_missing_the_sort_column_compare_equal() {
    let rows = vec![
        row("b", 2),
        Row::from([("name".to_string(), CellValue::from("a"))]),
        row("c", 1),
    ];
    let mut table = SortableTable::new(columns(), TableOptions { rows, sorted: None });

    // Incomparable rows make the relative order unspecified; sorting must
    // still succeed and keep every row
    table.sort("age", SortDirection::Ascending);
    let mut sorted = names(&table);
    sorted.sort();
    assert_eq!(sorted, vec!["a", "b", "c"]);
}

#[test]
fn test_numeric_sort_tolerates_nan_and_text_values() {
    let rows = vec![
        row("b", 30),
        row("a", 10),
        Row::from([
            ("name".to_string(), CellValue::from("x")),
            ("age".to_string(), CellValue::from(f64::NAN)),
        ]),
        Row::from([
            ("name".to_string(), CellValue::from("y")),
            ("age".to_string(), CellValue::from("not a number")),
        ]),
    ];
    let mut table = SortableTable::new(columns(), TableOptions { rows, sorted: None });

    // NaN and text values are unordered in a numeric column and compare
    // equal; sorting must still succeed, keep every row, and order the
    // comparable rows among themselves
    table.sort("age", SortDirection::Ascending);

    let sorted = names(&table);
    let mut all = sorted.clone();
    all.sort();
    assert_eq!(all, vec!["a", "b", "x", "y"]);

    let a = sorted.iter().position(|n| n == "a").unwrap();
    let b = sorted.iter().position(|n| n == "b").unwrap();
    assert!(a < b, "order: {sorted:?}");
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construction_without_sort_keeps_given_order() {
    let rows = vec![row("Bob", 30), row("alice", 25)];
    let table = SortableTable::new(columns(), TableOptions { rows, sorted: None });

    assert_eq!(names(&table), vec!["Bob", "alice"]);
    assert!(table.sorted().is_none());
}

#[test]
fn test_initial_sort_applies_before_first_render() {
    let rows = vec![row("Bob", 30), row("alice", 25)];
    let mut table = SortableTable::new(
        columns(),
        TableOptions {
            rows,
            sorted: Some(SortState::new("age", SortDirection::Ascending)),
        },
    );

    assert_eq!(ages(&table), vec![25.0, 30.0]);
    assert_eq!(
        table.sorted(),
        Some(&SortState::new("age", SortDirection::Ascending))
    );
    // First render already carries the direction attribute
    let attrs = header_attrs(&mut table);
    assert_eq!(attrs[1].2.as_deref(), Some("ascending"));
}

#[test]
fn test_invalid_initial_sort_is_dropped() {
    let rows = vec![row("Bob", 30), row("alice", 25)];
    let table = SortableTable::new(
        columns(),
        TableOptions {
            rows,
            sorted: Some(SortState::new("nonexistent", SortDirection::Ascending)),
        },
    );

    assert_eq!(names(&table), vec!["Bob", "alice"]);
    assert!(table.sorted().is_none());
}

#[test]
fn test_element_is_memoized_until_sort() {
    let rows = vec![row("a", 1)];
    let mut table = SortableTable::new(columns(), TableOptions { rows, sorted: None });

    let first = table.element().id.clone();
    assert_eq!(table.element().id, first);

    table.sort("age", SortDirection::Ascending);
    assert_ne!(table.element().id, first);
}

// ============================================================================
// Renderer output
// ============================================================================

#[test]
fn test_header_cells_carry_dispatch_attributes() {
    let mut cols = columns();
    cols.push(Column::new("note", "Note"));
    let rows = vec![row("a", 1)];
    let mut table = SortableTable::new(cols, TableOptions { rows, sorted: None });

    table.sort("name", SortDirection::Descending);

    let attrs = header_attrs(&mut table);
    assert_eq!(
        attrs,
        vec![
            (
                "name".to_string(),
                "true".to_string(),
                Some("descending".to_string())
            ),
            ("age".to_string(), "true".to_string(), None),
            ("note".to_string(), "false".to_string(), None),
        ]
    );
}

#[test]
fn test_active_header_cell_shows_arrow() {
    let rows = vec![row("a", 1)];
    let mut table = SortableTable::new(
        columns(),
        TableOptions {
            rows,
            sorted: Some(SortState::new("name", SortDirection::Ascending)),
        },
    );

    let header = table.header().expect("header region");
    let name_cell = &header.content.children()[0];
    let texts: Vec<&str> = name_cell
        .content
        .children()
        .iter()
        .filter_map(|child| child.content.text())
        .collect();
    assert_eq!(texts, vec!["Name", "▲"]);

    let age_cell = &header.content.children()[1];
    let texts: Vec<&str> = age_cell
        .content
        .children()
        .iter()
        .filter_map(|child| child.content.text())
        .collect();
    assert_eq!(texts, vec!["Age"]);
}

#[test]
fn test_body_renders_rows_in_order_with_default_cells() {
    let rows = vec![row("Bob", 30), row("alice", 25)];
    let mut table = SortableTable::new(columns(), TableOptions { rows, sorted: None });

    let body = table.body().expect("body region");
    let rendered: Vec<Vec<String>> = body
        .content
        .children()
        .iter()
        .map(|row| {
            row.content
                .children()
                .iter()
                .map(|cell| cell.content.text().unwrap_or_default().to_string())
                .collect()
        })
        .collect();

    assert_eq!(
        rendered,
        vec![
            vec!["Bob".to_string(), "30".to_string()],
            vec!["alice".to_string(), "25".to_string()],
        ]
    );
}

#[test]
fn test_missing_value_renders_empty_cell() {
    let rows = vec![Row::from([("name".to_string(), CellValue::from("solo"))])];
    let mut table = SortableTable::new(columns(), TableOptions { rows, sorted: None });

    let body = table.body().expect("body region");
    let cells = body.content.children()[0].content.children();
    assert_eq!(cells[1].content.text(), Some(""));
}

#[test]
fn test_custom_cell_renderer_is_used() {
    let cols = vec![
        Column::new("name", "Name"),
        Column::new("price", "Price").render_cell(|value| {
            Element::text(format!("${}", value.display())).width(Size::Fill)
        }),
    ];
    let rows = vec![Row::from([
        ("name".to_string(), CellValue::from("mouse")),
        ("price".to_string(), CellValue::from(25)),
    ])];
    let mut table = SortableTable::new(cols, TableOptions { rows, sorted: None });

    let body = table.body().expect("body region");
    let cells = body.content.children()[0].content.children();
    assert_eq!(cells[1].content.text(), Some("$25"));
}

#[test]
fn test_render_table_regions_are_discoverable() {
    let cols = columns();
    let rows = vec![row("a", 1)];
    let root = render_table(&cols, &rows, None);

    assert!(find_by_data(&root, "element", "header").is_some());
    assert!(find_by_data(&root, "element", "body").is_some());
}
