mod column;
mod controller;
mod render;
mod sort;
mod value;

pub use column::{CellRenderer, Column, Row};
pub use controller::{SortableTable, TableOptions};
pub use render::render_table;
pub use sort::{sort_comparator, Comparator, SortDirection, SortState, SortType};
pub use value::CellValue;
