pub mod layout;
pub mod trade_record;

pub use layout::LayoutKind;
pub use trade_record::{Field, FieldValue, PartialTrade, TradeRecord};
