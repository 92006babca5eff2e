//! Older English exports, mostly `Caption: value` lines. Only claims text that
//! carries none of the higher-priority layouts' markers.

use super::rules::{
    keyword, Anchor, LayoutSpec, Rule, Source, Transform, LEVERAGE_TOKEN, SYMBOL_PREFIX,
};
use crate::models::{Field, LayoutKind};

const ENTRY: &[&str] = &[r"Entry Price", r"Open Price", r"Avg\.? Entry Price"];

pub fn layout() -> LayoutSpec {
    LayoutSpec {
        kind: LayoutKind::Legacy,
        anchor: Anchor::Keywords {
            all: vec![
                keyword(r"(?im)^[ \t]*(?:entry price|open price|avg\.? entry price)\b"),
            ],
            none: vec![
                keyword(r"(?i)\bopen time\b"),
                keyword(r"(?i)\btime opened\b"),
                keyword(r"(?i)giá mở"),
            ],
        },
        rules: vec![
            Rule::caption(
                Field::Symbol,
                &["Symbol", "Pair", "Contract", "Market"],
                Transform::Symbol,
            ),
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
            Rule::caption(Field::OpenPrice, ENTRY, Transform::Number),
            Rule::caption(
                Field::ClosePrice,
                &[r"Close Price", r"Exit Price", r"Avg\.? Close Price"],
                Transform::Number,
            ),
            Rule::caption(
                Field::Quantity,
                &["Size", "Position Size", "Quantity", "Qty", "Amount"],
                Transform::Number,
            ),
            Rule::caption(
                Field::Fee,
                &[r"Fees?", r"Trading Fees?", "Commission"],
                Transform::Number,
            ),
            Rule::caption(
                Field::Pnl,
                &["Realized PnL", "Closed PnL", "PnL", "Profit"],
                Transform::Number,
            ),
            Rule::caption(
                Field::OpenTime,
                &["Opened", "Opened At", "Open Date", "Entry Time"],
                Transform::Date,
            ),
            Rule::caption(
                Field::CloseTime,
                &["Closed", "Closed At", "Close Date", "Exit Time"],
                Transform::Date,
            ),
        ],
    }
}
