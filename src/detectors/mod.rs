pub mod grid;
pub mod legacy;
pub mod localized;
pub mod mobile;
pub mod rules;
pub mod tabular;

pub use rules::{Anchor, LayoutSpec, Rule, Source, Transform};

use std::sync::LazyLock;

use crate::models::{LayoutKind, PartialTrade};

static LAYOUTS: LazyLock<Vec<LayoutSpec>> = LazyLock::new(|| {
    let mut layouts = vec![
        tabular::layout(),
        localized::layout(),
        grid::layout(),
        mobile::layout(),
        legacy::layout(),
    ];
    layouts.sort_by_key(|l| l.kind.priority());
    layouts
});

/// Every known layout, highest priority first.
pub fn layouts() -> &'static [LayoutSpec] {
    &LAYOUTS
}

/// Layouts whose anchors fire on `text`, highest priority first.
pub fn classify(text: &str) -> Vec<LayoutKind> {
    LAYOUTS
        .iter()
        .filter(|l| l.anchor.matches(text))
        .map(|l| l.kind)
        .collect()
}

/// Run a single layout's detector.
pub fn detect(kind: LayoutKind, text: &str) -> Option<PartialTrade> {
    LAYOUTS
        .iter()
        .find(|l| l.kind == kind)
        .and_then(|l| l.detect(text))
}
