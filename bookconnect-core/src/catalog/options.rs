//! Dropdown options for the author and genre selectors

use serde::Serialize;

use super::{LookupTable, Selector, ANY};

/// Label of the sentinel entry in the genre dropdown
pub const ALL_GENRES_LABEL: &str = "All Genres";

/// Label of the sentinel entry in the author dropdown
pub const ALL_AUTHORS_LABEL: &str = "All Authors";

/// One `(value, label)` dropdown entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// The selector this option submits
    pub fn selector(&self) -> Selector {
        Selector::parse(Some(&self.value))
    }
}

/// Build dropdown options from a lookup table
///
/// The `("any", any_label)` sentinel comes first, followed by every table
/// entry in the table's own order.
pub fn select_options(table: &LookupTable, any_label: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: ANY.to_string(),
        label: any_label.to_string(),
    })
    .chain(table.iter().map(|(id, name)| SelectOption {
        value: id.to_string(),
        label: name.to_string(),
    }))
    .collect()
}
