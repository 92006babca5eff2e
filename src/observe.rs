use tracing::{debug, info, warn};

use crate::cascade::GateFailure;
use crate::models::LayoutKind;

/// What the cascade did with one input.
#[derive(Debug, Clone, PartialEq)]
pub enum CascadeEvent {
    Classified {
        version: u32,
        candidates: Vec<LayoutKind>,
    },
    Matched {
        version: u32,
        layout: LayoutKind,
    },
    GateRejected {
        layout: LayoutKind,
        reason: GateFailure,
    },
    Fallback {
        chars: usize,
    },
    FallbackFailed {
        error: String,
    },
}

pub trait CascadeObserver: Send + Sync {
    fn on_event(&self, event: &CascadeEvent);
}

/// Forwards cascade events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CascadeObserver for TracingObserver {
    fn on_event(&self, event: &CascadeEvent) {
        match event {
            CascadeEvent::Classified {
                version,
                candidates,
            } => {
                let names: Vec<&str> = candidates.iter().map(|k| k.as_str()).collect();
                debug!(version, candidates = ?names, "layouts classified");
            }
            CascadeEvent::Matched { version, layout } => {
                info!(version, layout = %layout, "layout matched");
            }
            CascadeEvent::GateRejected { layout, reason } => {
                debug!(layout = %layout, reason = %reason, "detector result rejected");
            }
            CascadeEvent::Fallback { chars } => {
                info!(chars, "no layout matched, falling back to AI extraction");
            }
            CascadeEvent::FallbackFailed { error } => {
                warn!(error = %error, "AI extraction failed");
            }
        }
    }
}
