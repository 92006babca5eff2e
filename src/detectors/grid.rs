//! Desktop "closed position" panels. Captions either come in stacked blocks
//! (three captions, then their three values) or one caption per value.

use super::rules::{
    keyword, Anchor, LayoutSpec, Rule, Source, Transform, LEVERAGE_TOKEN, SYMBOL_PREFIX,
};
use crate::models::{Field, LayoutKind};

const ENTRY: &str = "Entry Price";
const EXIT: &str = r"Exit Price|Close Price";
const QTY: &str = r"Closed Qty|Qty|Quantity";
const FEE: &str = r"Trading Fees?|Fees?";

pub fn layout() -> LayoutSpec {
    LayoutSpec {
        kind: LayoutKind::Grid,
        anchor: Anchor::Keywords {
            all: vec![keyword(r"(?i)\bopen time\b")],
            none: vec![],
        },
        rules: vec![
            // stacked blocks
            Rule::stacked(
                &[ENTRY, EXIT, QTY],
                &[
                    (Field::OpenPrice, Transform::Number),
                    (Field::ClosePrice, Transform::Number),
                    (Field::Quantity, Transform::Number),
                ],
            ),
            Rule::stacked(
                &["Open Time", "Close Time", FEE],
                &[
                    (Field::OpenTime, Transform::Date),
                    (Field::CloseTime, Transform::Date),
                    (Field::Fee, Transform::Number),
                ],
            ),
            // sequential captions
            Rule::caption(Field::OpenPrice, &[ENTRY], Transform::Number),
            Rule::caption(Field::ClosePrice, &[EXIT], Transform::Number),
            Rule::caption(Field::Quantity, &[QTY], Transform::Number),
            Rule::caption(Field::OpenTime, &["Open Time"], Transform::Date),
            Rule::caption(Field::CloseTime, &["Close Time"], Transform::Date),
            Rule::caption(Field::Fee, &[FEE], Transform::Number),
            Rule::caption(
                Field::Pnl,
                &[r"Realized PnL|Closed PnL|PnL"],
                Transform::Number,
            ),
            Rule::caption(Field::Symbol, &[r"Symbol|Contract"], Transform::Symbol),
            Rule::caption(Field::Leverage, &["Leverage"], Transform::Integer),
            // loose fallbacks
            Rule::field(
                Field::Symbol,
                Source::Pattern(SYMBOL_PREFIX.clone()),
                Transform::Symbol,
            ),
            Rule::field(
                Field::Leverage,
                Source::Pattern(LEVERAGE_TOKEN.clone()),
                Transform::Integer,
            ),
        ],
    }
}
