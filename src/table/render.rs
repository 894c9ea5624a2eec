//! Pure table rendering: header configuration + row data + sort state in,
//! element tree out. No mutation, no external reads.

use super::{CellValue, Column, Row, SortDirection, SortState};
use crate::element::Element;
use crate::types::{Size, Style};

/// Marker attribute key for the named regions ("table", "header", "body").
pub(crate) const REGION_KEY: &str = "element";

pub fn render_table(columns: &[Column], rows: &[Row], sorted: Option<&SortState>) -> Element {
    Element::col()
        .data(REGION_KEY, "table")
        .width(Size::Fill)
        .child(render_header(columns, sorted))
        .child(render_body(columns, rows))
}

fn render_header(columns: &[Column], sorted: Option<&SortState>) -> Element {
    Element::row()
        .data(REGION_KEY, "header")
        .width(Size::Fill)
        .gap(1)
        .children(columns.iter().map(|column| header_cell(column, sorted)))
}

fn header_cell(column: &Column, sorted: Option<&SortState>) -> Element {
    let cell = Element::row()
        .width(Size::Fill)
        .gap(1)
        .data("id", column.id.clone())
        .data("sortable", if column.sortable { "true" } else { "false" })
        .clickable(column.sortable)
        .style(Style::new().bold())
        .child(Element::text(column.title.clone()));

    // Only the active sort column carries the direction attribute and arrow
    let Some(state) = sorted.filter(|s| s.column_id == column.id) else {
        return cell;
    };

    cell.data("order", state.direction.as_str())
        .child(Element::text(arrow(state.direction)).style(Style::new().dim()))
}

fn arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

fn render_body(columns: &[Column], rows: &[Row]) -> Element {
    Element::col()
        .data(REGION_KEY, "body")
        .width(Size::Fill)
        .children(rows.iter().map(|row| render_row(columns, row)))
}

fn render_row(columns: &[Column], row: &Row) -> Element {
    Element::row()
        .width(Size::Fill)
        .gap(1)
        .children(columns.iter().map(|column| render_cell(column, row.get(&column.id))))
}

fn render_cell(column: &Column, value: Option<&CellValue>) -> Element {
    if let (Some(renderer), Some(value)) = (&column.render_cell, value) {
        return renderer(value);
    }

    // Default cell: raw value coerced to display text, empty when absent
    let text = value.map(CellValue::display).unwrap_or_default();
    Element::text(text).width(Size::Fill)
}
