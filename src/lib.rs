pub mod ai;
pub mod cascade;
pub mod config;
pub mod detectors;
pub mod error;
pub mod models;
pub mod normalize;
pub mod observe;
#[cfg(test)]
pub mod test_helpers;

pub use cascade::{TradeParser, CASCADE_VERSION};
pub use error::ExtractError;
pub use models::{LayoutKind, TradeRecord};
