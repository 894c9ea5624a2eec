use std::cmp::Ordering;

use log::{debug, trace};

use super::render::{render_table, REGION_KEY};
use super::{sort_comparator, Column, Row, SortDirection, SortState, SortType};
use crate::element::{closest, find_by_data, find_element, Element};
use crate::event::{Event, MouseButton};
use crate::hit::hit_test_any;
use crate::layout::LayoutResult;

#[derive(Debug, Default)]
pub struct TableOptions {
    pub rows: Vec<Row>,
    /// Initial sort; applied before first render when it names a sortable,
    /// typed column, dropped otherwise.
    pub sorted: Option<SortState>,
}

/// Sortable table controller: owns the row data and active sort state,
/// renders through [`render_table`], and handles delegated header presses.
pub struct SortableTable {
    columns: Vec<Column>,
    rows: Vec<Row>,
    sorted: Option<SortState>,
    element: Option<Element>,
    attached: bool,
}

impl SortableTable {
    pub fn new(columns: Vec<Column>, options: TableOptions) -> Self {
        let TableOptions { rows, sorted } = options;
        let mut table = Self {
            columns,
            rows,
            sorted: None,
            element: None,
            attached: true,
        };

        if let Some(state) = sorted {
            if let Some(sort_type) = table.sort_type_of(&state.column_id) {
                table.rows = sorted_rows(&table.rows, &state, sort_type);
                table.sorted = Some(state);
            }
        }

        table
    }

    /// The rendered tree, built lazily and memoized until the next sort.
    pub fn element(&mut self) -> &Element {
        let Self {
            columns,
            rows,
            sorted,
            element,
            ..
        } = self;
        element.get_or_insert_with(|| render_table(columns, rows, sorted.as_ref()))
    }

    /// The header region of the current tree.
    pub fn header(&mut self) -> Option<&Element> {
        find_by_data(self.element(), REGION_KEY, "header")
    }

    /// The body region of the current tree.
    pub fn body(&mut self) -> Option<&Element> {
        find_by_data(self.element(), REGION_KEY, "body")
    }

    /// Current row order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Active sort, if any.
    pub fn sorted(&self) -> Option<&SortState> {
        self.sorted.as_ref()
    }

    /// Sort by the given column and re-render. Unknown, non-sortable, and
    /// untyped columns are ignored: state and tree stay untouched.
    /// Returns whether a re-render happened.
    pub fn sort(&mut self, column_id: &str, direction: SortDirection) -> bool {
        let Some(sort_type) = self.sort_type_of(column_id) else {
            trace!("ignoring sort on {column_id:?}: not a sortable column");
            return false;
        };

        debug!("sorting by {column_id} ({direction:?})");

        let state = SortState::new(column_id, direction);
        self.rows = sorted_rows(&self.rows, &state, sort_type);
        self.sorted = Some(state);

        // Exactly one wholesale subtree replacement per effective call
        self.element = Some(render_table(&self.columns, &self.rows, self.sorted.as_ref()));
        true
    }

    /// Delegated press handling for the header region: locate the nearest
    /// ancestor-or-self header cell flagged sortable, flip its direction,
    /// and sort. Returns whether a re-render happened.
    pub fn handle_event(&mut self, layout: &LayoutResult, event: &Event) -> bool {
        if !self.attached {
            return false;
        }

        let &Event::Click {
            x,
            y,
            button: MouseButton::Left,
        } = event
        else {
            return false;
        };

        let Some(root) = self.element.as_ref() else {
            return false;
        };
        let Some(target) = hit_test_any(layout, root, x, y) else {
            return false;
        };

        // Only presses inside the header region qualify
        let Some(header) = find_by_data(root, REGION_KEY, "header") else {
            return false;
        };
        if find_element(header, &target).is_none() {
            return false;
        }

        let Some(cell) = closest(header, &target, |element| {
            element.get_data("sortable").is_some_and(|v| v == "true")
        }) else {
            return false;
        };
        let Some(column_id) = cell.get_data("id").cloned() else {
            return false;
        };

        // The cell's own direction attribute when it is the active column,
        // else the table's active direction
        let current = cell
            .get_data("order")
            .and_then(|order| SortDirection::parse(order))
            .or(self.sorted.as_ref().map(|state| state.direction));
        let direction = current.map(SortDirection::flipped).unwrap_or_default();

        self.sort(&column_id, direction)
    }

    /// Detach the press handler and drop the rendered subtree. A second
    /// call is a no-op.
    pub fn destroy(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.element = None;
        debug!("sortable table destroyed");
    }

    fn sort_type_of(&self, column_id: &str) -> Option<SortType> {
        self.columns
            .iter()
            .find(|column| column.id == column_id)
            .filter(|column| column.sortable)
            .and_then(|column| column.sort_type)
    }
}

/// New sorted copy of the rows; rows missing the sort column compare equal.
fn sorted_rows(rows: &[Row], state: &SortState, sort_type: SortType) -> Vec<Row> {
    let compare = sort_comparator(sort_type, state.direction);
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        match (a.get(&state.column_id), b.get(&state.column_id)) {
            (Some(a), Some(b)) => compare(a, b),
            _ => Ordering::Equal,
        }
    });
    sorted
}
