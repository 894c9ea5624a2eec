use std::cmp::Ordering;

use super::CellValue;
use crate::collate::default_collator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortType {
    Numeric,
    Textual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Attribute value written on the active header cell.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ascending" => Some(Self::Ascending),
            "descending" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// The active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }
}

pub type Comparator = Box<dyn Fn(&CellValue, &CellValue) -> Ordering>;

/// Build a two-argument ordering function for a column type and direction.
pub fn sort_comparator(sort_type: SortType, direction: SortDirection) -> Comparator {
    match sort_type {
        SortType::Numeric => Box::new(move |a, b| {
            let ordering = numeric_order(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }),
        SortType::Textual => Box::new(move |a, b| {
            let collator = default_collator();
            match direction {
                SortDirection::Ascending => collator.compare(&a.display(), &b.display()),
                SortDirection::Descending => collator.compare(&b.display(), &a.display()),
            }
        }),
    }
}

/// Subtraction-order semantics: values that don't form a number (or NaN)
/// are unordered and compare as equal, like ordinary float subtraction
/// falling out of a partial order.
fn numeric_order(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}
