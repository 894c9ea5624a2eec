mod flex;
mod rect;

pub use flex::{layout, LayoutResult};
pub use rect::Rect;
