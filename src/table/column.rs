use std::collections::HashMap;

use super::{CellValue, SortType};
use crate::element::Element;

/// Custom cell renderer: turns a row's value for this column into markup.
pub type CellRenderer = Box<dyn Fn(&CellValue) -> Element>;

/// A row maps column ids to values; row identity is positional.
pub type Row = HashMap<String, CellValue>;

/// Static configuration for one table column.
pub struct Column {
    pub id: String,
    pub title: String,
    pub sortable: bool,
    /// Present iff the column is meaningfully sortable.
    pub sort_type: Option<SortType>,
    pub render_cell: Option<CellRenderer>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sortable: false,
            sort_type: None,
            render_cell: None,
        }
    }

    pub fn sortable(mut self, sort_type: SortType) -> Self {
        self.sortable = true;
        self.sort_type = Some(sort_type);
        self
    }

    pub fn render_cell(mut self, renderer: impl Fn(&CellValue) -> Element + 'static) -> Self {
        self.render_cell = Some(Box::new(renderer));
        self
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("sort_type", &self.sort_type)
            .field("render_cell", &self.render_cell.as_ref().map(|_| "..."))
            .finish()
    }
}
