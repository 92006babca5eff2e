//! Mobile closed-PnL screens: one caption per value, stacked vertically.

use super::rules::{
    keyword, Anchor, LayoutSpec, Rule, Source, Transform, LEVERAGE_TOKEN, SYMBOL_PREFIX,
};
use crate::models::{Field, LayoutKind};

pub fn layout() -> LayoutSpec {
    LayoutSpec {
        kind: LayoutKind::Mobile,
        anchor: Anchor::Keywords {
            all: vec![keyword(r"(?i)\btime opened\b")],
            none: vec![],
        },
        rules: vec![
            // realized value first; position PnL may include unrealized funding
            Rule::caption(
                Field::Pnl,
                &["Closing PnL", "Closed PnL"],
                Transform::Number,
            ),
            Rule::caption(Field::Pnl, &["Position PnL"], Transform::Number),
            Rule::caption(
                Field::OpenPrice,
                &[r"Entry Price", r"Avg\.? Entry Price", r"Open Price"],
                Transform::Number,
            ),
            Rule::caption(
                Field::ClosePrice,
                &[r"Avg\.? Close Price", r"Avg\.? Exit Price", r"Exit Price", r"Close Price"],
                Transform::Number,
            ),
            Rule::caption(Field::Quantity, &["Max Held"], Transform::Number),
            Rule::caption(
                Field::Quantity,
                &["Closed Qty", "Closed Quantity"],
                Transform::Number,
            ),
            Rule::caption(Field::Fee, &[r"Trading Fees?", r"Fees?"], Transform::Number),
            Rule::caption(Field::OpenTime, &["Time Opened"], Transform::Date),
            Rule::caption(Field::CloseTime, &["Time Closed"], Transform::Date),
            Rule::caption(Field::Symbol, &["Contract", "Symbol"], Transform::Symbol),
            Rule::field(
                Field::Symbol,
                Source::Pattern(SYMBOL_PREFIX.clone()),
                Transform::Symbol,
            ),
            Rule::caption(Field::Leverage, &["Leverage"], Transform::Integer),
            Rule::field(
                Field::Leverage,
                Source::Pattern(LEVERAGE_TOKEN.clone()),
                Transform::Integer,
            ),
        ],
    }
}
