use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{
    CellValue, Column, Element, Event, Row, Size, SortDirection, SortState, SortType,
    SortableTable, TableOptions, Terminal, TextAlign,
};

fn main() -> std::io::Result<()> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("table-demo.log")?,
    );

    let columns = vec![
        Column::new("name", "Name").sortable(SortType::Textual),
        Column::new("price", "Price")
            .sortable(SortType::Numeric)
            .render_cell(|value| {
                Element::text(format!("${}", value.display()))
                    .width(Size::Fill)
                    .text_align(TextAlign::Right)
            }),
        Column::new("note", "Note"),
    ];

    let rows = vec![
        row(&[("name", "Monitor"), ("note", "27 inch")], 249),
        row(&[("name", "keyboard"), ("note", "mechanical")], 89),
        row(&[("name", "Ноутбук"), ("note", "13 inch")], 1199),
        row(&[("name", "mouse"), ("note", "")], 25),
        row(&[("name", "Наушники"), ("note", "wireless")], 129),
    ];

    let mut table = SortableTable::new(
        columns,
        TableOptions {
            rows,
            sorted: Some(SortState::new("name", SortDirection::Ascending)),
        },
    );

    let mut term = Terminal::new()?;

    loop {
        let events = term.poll(Some(Duration::from_millis(100)))?;

        for raw in &events {
            if let crossterm::event::Event::Key(key) = raw {
                if matches!(
                    key.code,
                    crossterm::event::KeyCode::Char('q') | crossterm::event::KeyCode::Esc
                ) {
                    table.destroy();
                    return Ok(());
                }
            }

            if let Some(event) = Event::from_crossterm(raw) {
                table.handle_event(term.layout(), &event);
            }
        }

        let root = table.element().clone();
        term.render(&root)?;
    }
}

fn row(texts: &[(&str, &str)], price: i64) -> Row {
    let mut row: Row = texts
        .iter()
        .map(|(id, text)| (id.to_string(), CellValue::from(*text)))
        .collect();
    row.insert("price".to_string(), CellValue::from(price));
    row
}
