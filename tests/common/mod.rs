use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

use trade_ingest::ai::TradeExtractor;
use trade_ingest::cascade::FixedClock;
use trade_ingest::{ExtractError, TradeRecord};

pub const TABULAR_ROW: &str =
    "2860,90\t2827,45\t1/12/2025 10:19:16\t1/12/2025 10:39:12\t15,00\tETH\t42,66\t-501,75";

pub const MOBILE_TEXT: &str = "SOLUSDT
Long · 20x
Position PnL
118.40
Closing PnL
112.05
Entry Price
182.35
Avg. Close Price
186.10
Max Held
30
Trading Fee
6.35
Time Opened
2025-12-03 14:02:11
Time Closed
2025-12-03 16:45:40";

pub const GRID_STACKED_TEXT: &str = "ETHUSDT Perpetual
Cross 100x
Entry Price
Exit Price
Closed Qty
2,860.90
2,827.45
15.00 ETH
Open Time
Close Time
Trading Fee
2025-12-01 10:19:16
2025-12-01 10:39:12
-42.66 USDT
Realized PnL
-501.75 USDT";

pub const LOCALIZED_NO_TIME: &str = "Giá mở
2.860,90
Giá đóng
2.827,45
Khối lượng
15,00";

pub const FREE_TEXT: &str = "closed my eth short, roughly -500 after fees";

pub fn fixed_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 12, 17)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
    )
}

/// Format `cents / 100` with the given thousands and decimal separators.
pub fn format_amount(cents: i64, thousands: char, decimal: char) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(thousands);
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{decimal}{frac:02}")
}

/// Counts calls and remembers the text it was given.
pub struct CountingExtractor {
    pub calls: Mutex<Vec<String>>,
    pub reply: TradeRecord,
}

impl CountingExtractor {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: TradeRecord {
                id: "from-ai".to_string(),
                symbol: "ETH".to_string(),
                open_price: 3000.0,
                close_price: Some(2950.0),
                open_time: "2025-12-16T08:00:00".to_string(),
                close_time: Some("2025-12-16T09:00:00".to_string()),
                quantity: 2.0,
                fee: 1.2,
                pnl: -101.2,
                leverage: 10,
            },
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TradeExtractor for CountingExtractor {
    async fn extract(&self, raw: &str) -> Result<TradeRecord, ExtractError> {
        self.calls.lock().unwrap().push(raw.to_string());
        Ok(self.reply.clone())
    }
}
