use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use crate::ai::TradeExtractor;
use crate::config::Config;
use crate::detectors;
use crate::error::ExtractError;
use crate::models::{LayoutKind, PartialTrade, TradeRecord};
use crate::observe::{CascadeEvent, CascadeObserver, TracingObserver};

/// Generation of the detector cascade. Bumped whenever layouts or their
/// priority change.
pub const CASCADE_VERSION: u32 = 2;

pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in a named time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Falls back to UTC for unknown zone names.
    pub fn from_name(name: &str) -> Self {
        let tz = name.parse::<Tz>().unwrap_or_else(|_| {
            warn!("Unknown time zone {:?}, using UTC", name);
            Tz::UTC
        });
        Self::new(tz)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Values used for whatever a detector did not find.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub symbol: String,
    pub leverage: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            symbol: "ETH".to_string(),
            leverage: 100,
        }
    }
}

impl Defaults {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            symbol: cfg.default_symbol.clone(),
            leverage: cfg.default_leverage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateFailure {
    MissingOpenPrice,
    MissingQuantityAndSymbol,
}

impl fmt::Display for GateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateFailure::MissingOpenPrice => write!(f, "missing_open_price"),
            GateFailure::MissingQuantityAndSymbol => write!(f, "missing_quantity_and_symbol"),
        }
    }
}

/// A detector result is usable only with a nonzero open price and either a
/// nonzero quantity or a symbol.
pub fn passes_gate(p: &PartialTrade) -> Result<(), GateFailure> {
    if p.open_price.map_or(true, |v| v == 0.0) {
        return Err(GateFailure::MissingOpenPrice);
    }
    let has_quantity = p.quantity.is_some_and(|q| q != 0.0);
    let has_symbol = p.symbol.as_deref().is_some_and(|s| !s.is_empty());
    if !has_quantity && !has_symbol {
        return Err(GateFailure::MissingQuantityAndSymbol);
    }
    Ok(())
}

/// Fill the gaps of a detector result from the default template.
pub fn merge(partial: PartialTrade, defaults: &Defaults, now: NaiveDateTime) -> TradeRecord {
    TradeRecord {
        id: String::new(),
        symbol: partial.symbol.unwrap_or_else(|| defaults.symbol.clone()),
        open_price: partial.open_price.unwrap_or(0.0),
        close_price: partial.close_price,
        open_time: partial
            .open_time
            .unwrap_or_else(|| now.format(CANONICAL_FORMAT).to_string()),
        close_time: partial.close_time,
        quantity: partial.quantity.unwrap_or(0.0),
        fee: partial.fee.unwrap_or(0.0).abs(),
        pnl: partial.pnl.unwrap_or(0.0),
        leverage: partial.leverage.unwrap_or(defaults.leverage),
    }
}

/// Runs the layout cascade and, when nothing matches, the AI fallback.
pub struct TradeParser {
    extractor: Arc<dyn TradeExtractor>,
    observer: Arc<dyn CascadeObserver>,
    clock: Arc<dyn Clock>,
    defaults: Defaults,
}

impl TradeParser {
    pub fn new(extractor: Arc<dyn TradeExtractor>) -> Self {
        Self {
            extractor,
            observer: Arc::new(TracingObserver),
            clock: Arc::new(SystemClock::new(Tz::UTC)),
            defaults: Defaults::default(),
        }
    }

    pub fn from_config(cfg: &Config, extractor: Arc<dyn TradeExtractor>) -> Self {
        Self::new(extractor)
            .with_clock(Arc::new(SystemClock::from_name(&cfg.timezone)))
            .with_defaults(Defaults::from_config(cfg))
    }

    pub fn with_observer(mut self, observer: Arc<dyn CascadeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Heuristic path only: the first layout whose result passes the gate,
    /// merged over the defaults.
    pub fn detect(&self, text: &str) -> Option<(LayoutKind, TradeRecord)> {
        let candidates = detectors::classify(text);
        self.observer.on_event(&CascadeEvent::Classified {
            version: CASCADE_VERSION,
            candidates: candidates.clone(),
        });

        for layout in candidates {
            let Some(partial) = detectors::detect(layout, text) else {
                continue;
            };
            match passes_gate(&partial) {
                Ok(()) => {
                    self.observer.on_event(&CascadeEvent::Matched {
                        version: CASCADE_VERSION,
                        layout,
                    });
                    let record = merge(partial, &self.defaults, self.clock.now());
                    return Some((layout, record));
                }
                Err(reason) => {
                    self.observer
                        .on_event(&CascadeEvent::GateRejected { layout, reason });
                }
            }
        }
        None
    }

    /// Full pipeline. Only the AI fallback can fail, and its record is
    /// returned untouched.
    pub async fn parse(&self, text: &str) -> Result<TradeRecord, ExtractError> {
        if let Some((_, record)) = self.detect(text) {
            return Ok(record);
        }

        self.observer.on_event(&CascadeEvent::Fallback {
            chars: text.chars().count(),
        });
        self.extractor.extract(text).await.inspect_err(|e| {
            self.observer.on_event(&CascadeEvent::FallbackFailed {
                error: e.to_string(),
            });
        })
    }
}
