use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

use crate::ai::TradeExtractor;
use crate::cascade::FixedClock;
use crate::config::Config;
use crate::error::ExtractError;
use crate::models::TradeRecord;
use crate::observe::{CascadeEvent, CascadeObserver};

pub const FIXED_NOW: &str = "2025-12-17T09:00:00";

pub const TABULAR_ROW: &str =
    "2860,90\t2827,45\t1/12/2025 10:19:16\t1/12/2025 10:39:12\t15,00\tETH\t42,66\t-501,75";

pub const LOCALIZED_TEXT: &str = "ETHUSDT Vĩnh cửu
Đòn bẩy
100x
Giá mở
2.860,90
Giá đóng
2.827,45
Khối lượng
15,00
Phí giao dịch
-42,66
Lãi/Lỗ
-501,75
Thời gian mở
1/12/2025 10:19:16 SA
Thời gian đóng
1/12/2025 10:39:12 CH";

pub const GRID_STACKED_TEXT: &str = "ETHUSDT Perpetual
Cross 100x
Closed Short
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

pub const GRID_SEQUENTIAL_TEXT: &str = "BTCUSDT Perpetual 50x
Entry Price
97,250.5
Exit Price
98,100.0
Qty
0.25 BTC
Open Time
2025-12-02 08:00:00
Close Time
2025-12-02 09:30:00
Trading Fee
3.12 USDT
Realized PnL
209.26 USDT";

pub const MOBILE_TEXT: &str = "ETHUSDT
Short · 100x
Position PnL
-459.09
Closing PnL
-501.75
Entry Price
2,860.90
Avg. Close Price
2,827.45
Max Held
15.00
Trading Fee
42.66
Time Opened
2025-12-01 10:19:16
Time Closed
2025-12-01 10:39:12";

pub const LEGACY_TEXT: &str = "Symbol: BTCUSDT
Side: Long
Leverage: 50x
Entry Price: 97,250.5
Close Price: 98,100.0
Size: 0.25
Fee: -3.12
PnL: 212.38
Opened: 2025-12-01 08:00:00
Closed: 2025-12-01 09:30:00";

pub const FREE_TEXT: &str =
    "Bought some ETH yesterday around 2,900 and sold it later today. Not sure about fees.";

pub fn fixed_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 12, 17)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
    )
}

/// What `MockExtractor` hands back.
pub fn mock_record() -> TradeRecord {
    TradeRecord {
        id: "ai-1".to_string(),
        symbol: "ETH".to_string(),
        open_price: 2900.0,
        close_price: None,
        open_time: "2025-12-16T00:00:00".to_string(),
        close_time: None,
        quantity: 0.0,
        fee: 0.0,
        pnl: 0.0,
        leverage: 100,
    }
}

/// Records every text it is asked to extract.
#[derive(Default)]
pub struct MockExtractor {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl MockExtractor {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TradeExtractor for MockExtractor {
    async fn extract(&self, raw: &str) -> Result<TradeRecord, ExtractError> {
        self.calls.lock().unwrap().push(raw.to_string());
        if self.fail {
            return Err(ExtractError::EmptyResponse);
        }
        Ok(mock_record())
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<CascadeEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<CascadeEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl CascadeObserver for RecordingObserver {
    fn on_event(&self, event: &CascadeEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// A Config suitable for testing: no API key, fixed defaults.
pub fn default_test_config() -> Config {
    Config {
        ai_base_url: "http://127.0.0.1:9".to_string(),
        ai_model: "test-model".to_string(),
        ai_api_key: String::new(),
        ai_timeout_secs: 5,
        default_symbol: "ETH".to_string(),
        default_leverage: 100,
        timezone: "UTC".to_string(),
        log_level: "debug".to_string(),
    }
}
