//! Bill of materials for an order: seating objects grouped by product,
//! finish and color.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use serde::Serialize;

use crate::catalog::label_of;
use crate::consts::{DEFAULT_COLOR, DEFAULT_FINISH};
use crate::doc::{Category, PlacedObject};

/// One order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub variant: String,
    /// Catalog label, `None` for variants the catalog does not know.
    pub label: Option<&'static str>,
    pub finish: String,
    pub color: String,
    pub count: usize,
}

/// Group the seating objects in `objects` into order lines.
///
/// Lines appear in the order their first object appears. Missing attributes
/// count as the default color and finish.
#[must_use]
pub fn bill_of_materials(objects: &[PlacedObject]) -> Vec<LineItem> {
    let mut lines: Vec<LineItem> = Vec::new();
    for obj in objects.iter().filter(|o| o.category == Category::Seating) {
        let finish = obj.attributes.finish.as_deref().unwrap_or(DEFAULT_FINISH);
        let color = obj.attributes.color.as_deref().unwrap_or(DEFAULT_COLOR);

        let existing = lines.iter_mut().find(|l| l.variant == obj.variant && l.finish == finish && l.color == color);
        match existing {
            Some(line) => line.count += 1,
            None => lines.push(LineItem {
                variant: obj.variant.clone(),
                label: label_of(&obj.variant),
                finish: finish.to_owned(),
                color: color.to_owned(),
                count: 1,
            }),
        }
    }
    lines
}

/// Total number of units across `lines`.
#[must_use]
pub fn total_units(lines: &[LineItem]) -> usize {
    lines.iter().map(|l| l.count).sum()
}
