use serde::{Deserialize, Serialize};
use std::fmt;

/// Source layouts the cascade knows how to read, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Tabular,
    Localized,
    Grid,
    Mobile,
    Legacy,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 5] = [
        LayoutKind::Tabular,
        LayoutKind::Localized,
        LayoutKind::Grid,
        LayoutKind::Mobile,
        LayoutKind::Legacy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Tabular => "tabular",
            LayoutKind::Localized => "localized",
            LayoutKind::Grid => "grid",
            LayoutKind::Mobile => "mobile",
            LayoutKind::Legacy => "legacy",
        }
    }

    /// Lower is tried first.
    pub fn priority(&self) -> usize {
        match self {
            LayoutKind::Tabular => 0,
            LayoutKind::Localized => 1,
            LayoutKind::Grid => 2,
            LayoutKind::Mobile => 3,
            LayoutKind::Legacy => 4,
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
