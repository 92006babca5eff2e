//! Spreadsheet rows: eight tab-separated cells in a fixed order.

use super::rules::{Anchor, LayoutSpec, Rule, Source, Transform};
use crate::models::{Field, LayoutKind};

const COLUMNS: [(Field, Transform); 8] = [
    (Field::OpenPrice, Transform::Number),
    (Field::ClosePrice, Transform::Number),
    (Field::OpenTime, Transform::Date),
    (Field::CloseTime, Transform::Date),
    (Field::Quantity, Transform::Number),
    (Field::Symbol, Transform::Symbol),
    (Field::Fee, Transform::Number),
    (Field::Pnl, Transform::Number),
];

pub fn layout() -> LayoutSpec {
    LayoutSpec {
        kind: LayoutKind::Tabular,
        anchor: Anchor::Columns {
            count: COLUMNS.len(),
            leading_digit: true,
        },
        rules: COLUMNS
            .iter()
            .enumerate()
            .map(|(i, &(field, transform))| Rule::field(field, Source::Column(i), transform))
            .collect(),
    }
}
