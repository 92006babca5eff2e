use serde::{Deserialize, Serialize};
use std::fmt;

fn default_leverage() -> u32 {
    100
}

fn default_symbol() -> String {
    "ETH".to_string()
}

/// One trading position, normalized from whatever layout it was pasted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default)]
    pub open_price: f64,
    #[serde(default)]
    pub close_price: Option<f64>,
    #[serde(default)]
    pub open_time: String,
    #[serde(default)]
    pub close_time: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub fee: f64,
    #[serde(default)]
    pub pnl: f64,
    #[serde(default = "default_leverage")]
    pub leverage: u32,
}

impl TradeRecord {
    /// A position without a close price is still open.
    pub fn is_open(&self) -> bool {
        self.close_price.is_none()
    }
}

/// Fields a layout detector can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OpenPrice,
    ClosePrice,
    OpenTime,
    CloseTime,
    Quantity,
    Symbol,
    Fee,
    Pnl,
    Leverage,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::OpenPrice => write!(f, "open_price"),
            Field::ClosePrice => write!(f, "close_price"),
            Field::OpenTime => write!(f, "open_time"),
            Field::CloseTime => write!(f, "close_time"),
            Field::Quantity => write!(f, "quantity"),
            Field::Symbol => write!(f, "symbol"),
            Field::Fee => write!(f, "fee"),
            Field::Pnl => write!(f, "pnl"),
            Field::Leverage => write!(f, "leverage"),
        }
    }
}

/// A value produced by a field transform, before it lands in a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Integer(u32),
}

/// Whatever a detector managed to pull out of the text. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialTrade {
    pub symbol: Option<String>,
    pub open_price: Option<f64>,
    pub close_price: Option<f64>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub quantity: Option<f64>,
    pub fee: Option<f64>,
    pub pnl: Option<f64>,
    pub leverage: Option<u32>,
}

impl PartialTrade {
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::OpenPrice => self.open_price.is_some(),
            Field::ClosePrice => self.close_price.is_some(),
            Field::OpenTime => self.open_time.is_some(),
            Field::CloseTime => self.close_time.is_some(),
            Field::Quantity => self.quantity.is_some(),
            Field::Symbol => self.symbol.is_some(),
            Field::Fee => self.fee.is_some(),
            Field::Pnl => self.pnl.is_some(),
            Field::Leverage => self.leverage.is_some(),
        }
    }

    /// Store a value, coercing it to the field's type. Returns false when the
    /// value does not fit the field and nothing was stored.
    pub fn set(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::OpenPrice, FieldValue::Number(n)) => self.open_price = Some(n),
            // zero close price means the position never closed
            (Field::ClosePrice, FieldValue::Number(n)) => {
                if n == 0.0 {
                    return false;
                }
                self.close_price = Some(n);
            }
            (Field::Quantity, FieldValue::Number(n)) => self.quantity = Some(n),
            (Field::Fee, FieldValue::Number(n)) => self.fee = Some(n.abs()),
            (Field::Pnl, FieldValue::Number(n)) => self.pnl = Some(n),
            (Field::OpenTime, FieldValue::Text(s)) => self.open_time = Some(s),
            (Field::CloseTime, FieldValue::Text(s)) => self.close_time = Some(s),
            (Field::Symbol, FieldValue::Text(s)) => self.symbol = Some(s),
            (Field::Leverage, FieldValue::Integer(n)) => self.leverage = Some(n),
            (Field::Leverage, FieldValue::Number(n)) if n >= 1.0 => {
                self.leverage = Some(n.round() as u32)
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_is_stored_as_magnitude() {
        let mut p = PartialTrade::default();
        assert!(p.set(Field::Fee, FieldValue::Number(-42.66)));
        assert_eq!(p.fee, Some(42.66));
    }

    #[test]
    fn zero_close_price_is_absent() {
        let mut p = PartialTrade::default();
        assert!(!p.set(Field::ClosePrice, FieldValue::Number(0.0)));
        assert!(!p.has(Field::ClosePrice));
    }

    #[test]
    fn mismatched_value_is_rejected() {
        let mut p = PartialTrade::default();
        assert!(!p.set(Field::Symbol, FieldValue::Number(3.0)));
        assert!(!p.set(Field::OpenPrice, FieldValue::Text("ETH".into())));
        assert_eq!(p, PartialTrade::default());
    }

    #[test]
    fn record_deserializes_with_defaults() {
        let rec: TradeRecord =
            serde_json::from_str(r#"{"openPrice": 2860.9, "quantity": 15}"#).unwrap();
        assert_eq!(rec.symbol, "ETH");
        assert_eq!(rec.leverage, 100);
        assert!(rec.is_open());
        assert!((rec.open_price - 2860.9).abs() < 1e-9);
    }

    #[test]
    fn record_serializes_camel_case() {
        let rec = TradeRecord {
            id: String::new(),
            symbol: "BTC".into(),
            open_price: 1.0,
            close_price: Some(2.0),
            open_time: "2025-12-01T10:19:16".into(),
            close_time: None,
            quantity: 1.0,
            fee: 0.5,
            pnl: 1.0,
            leverage: 20,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["openPrice"], 1.0);
        assert_eq!(json["closePrice"], 2.0);
        assert_eq!(json["openTime"], "2025-12-01T10:19:16");
        assert!(json["closeTime"].is_null());
    }
}
