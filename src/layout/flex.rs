use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Border, Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
}

fn resolve_size(size: Size, available: u16, element: &Element, horizontal: bool) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, horizontal).min(available),
    }
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let border_size = if element.style.border == Border::None {
        0
    } else {
        1
    };

    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };

    // First pass: fixed/estimated sizes and flex weights
    let mut fixed_total = 0u16;
    let mut flex_total = 0u16;
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    for child in children {
        let child_main = if is_row { child.width } else { child.height };
        match child_main {
            Size::Fixed(n) => fixed_total += n,
            Size::Auto => fixed_total += estimate_size(child, is_row),
            Size::Fill => flex_total += 1,
            Size::Flex(weight) => flex_total += weight.max(1),
        }
    }

    // Distribute remaining space over flex items by weight
    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let flex_unit = if flex_total > 0 {
        remaining / flex_total
    } else {
        0
    };
    let mut flex_leftover = if flex_total > 0 {
        remaining % flex_total
    } else {
        0
    };

    // Second pass: place children sequentially along the main axis
    let mut offset = 0u16;
    for child in children {
        let child_main = if is_row { child.width } else { child.height };
        let mut size = match child_main {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => flex_unit,
            Size::Flex(weight) => flex_unit * weight.max(1),
        };
        if matches!(child_main, Size::Fill | Size::Flex(_)) && flex_leftover > 0 {
            size += 1;
            flex_leftover -= 1;
        }

        let slot = if is_row {
            Rect::new(inner.x + offset, inner.y, size, inner.height)
        } else {
            Rect::new(inner.x, inner.y + offset, inner.width, size)
        };
        layout_element(child, slot, result);
        offset += size + element.gap;
    }
}

/// Intrinsic size of an element along one axis, content plus padding
/// and border.
fn estimate_size(element: &Element, horizontal: bool) -> u16 {
    let border_size = if element.style.border == Border::None {
        0
    } else {
        1
    };
    let chrome = if horizontal {
        element.padding.horizontal_total() + border_size * 2
    } else {
        element.padding.vertical_total() + border_size * 2
    };

    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if horizontal {
                display_width(text) as u16
            } else {
                1
            }
        }
        Content::Children(children) => {
            let is_row = element.direction == Direction::Row;
            let along_main = horizontal == is_row;
            let sizes = children.iter().map(|child| child_estimate(child, horizontal));
            if along_main {
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                sizes.sum::<u16>() + gap_total
            } else {
                sizes.max().unwrap_or(0)
            }
        }
    };

    content + chrome
}

fn child_estimate(child: &Element, horizontal: bool) -> u16 {
    let size = if horizontal { child.width } else { child.height };
    match size {
        Size::Fixed(n) => n,
        _ => estimate_size(child, horizontal),
    }
}
