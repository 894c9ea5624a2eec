pub mod buffer;
pub mod collate;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod table;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use collate::{default_collator, CaseFirst, Collator, CYRILLIC, LATIN};
pub use element::{closest, find_by_data, find_element, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, LayoutResult, Rect};
pub use table::{
    render_table, CellValue, Column, Row, SortDirection, SortState, SortType, SortableTable,
    TableOptions,
};
pub use terminal::Terminal;
pub use types::*;
