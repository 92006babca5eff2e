//! Vietnamese-locale position detail: caption lines followed by value lines,
//! timestamps printed as `D/M/YYYY H:MM:SS SA|CH`.

use super::rules::{
    keyword, Anchor, LayoutSpec, Rule, Source, Transform, LEVERAGE_TOKEN, SYMBOL_PREFIX,
};
use crate::models::{Field, LayoutKind};
use crate::normalize::date::LOCAL_DATETIME;

pub fn layout() -> LayoutSpec {
    LayoutSpec {
        kind: LayoutKind::Localized,
        anchor: Anchor::Keywords {
            all: vec![keyword(r"(?i)giá mở"), keyword(r"(?i)giá đóng")],
            none: vec![],
        },
        rules: vec![
            Rule::caption(
                Field::OpenPrice,
                &["giá mở(?: cửa)?", "giá vào lệnh"],
                Transform::Number,
            ),
            Rule::caption(Field::ClosePrice, &["giá đóng(?: cửa)?"], Transform::Number),
            Rule::caption(
                Field::Quantity,
                &["khối lượng", "số lượng"],
                Transform::Number,
            ),
            Rule::caption(
                Field::Symbol,
                &["mã", "cặp(?: giao dịch)?", "hợp đồng"],
                Transform::Symbol,
            ),
            Rule::field(
                Field::Symbol,
                Source::Pattern(SYMBOL_PREFIX.clone()),
                Transform::Symbol,
            ),
            Rule::caption(Field::Fee, &["phí giao dịch", "phí"], Transform::Number),
            Rule::caption(Field::Leverage, &["đòn bẩy"], Transform::Integer),
            Rule::field(
                Field::Leverage,
                Source::Pattern(LEVERAGE_TOKEN.clone()),
                Transform::Integer,
            ),
            Rule::caption(
                Field::Pnl,
                &["lãi/lỗ(?: đã thực hiện)?", "lợi nhuận", "pnl"],
                Transform::Number,
            ),
            Rule::field(
                Field::OpenTime,
                Source::Nth(LOCAL_DATETIME.clone(), 0),
                Transform::Date,
            ),
            Rule::field(
                Field::CloseTime,
                Source::Nth(LOCAL_DATETIME.clone(), 1),
                Transform::Date,
            ),
        ],
    }
}
