//! Declarative building blocks for layout detectors.
//!
//! A layout is an [`Anchor`] plus an ordered list of [`Rule`]s. The anchor is
//! checked first; rules then fill a [`PartialTrade`], each field keeping the
//! first value any rule produced for it.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{Field, FieldValue, LayoutKind, PartialTrade};
use crate::normalize::{has_digits, parse_any_datetime, parse_number};

const QUOTE_SUFFIXES: &[&str] = &["USDT", "USDC", "BUSD", "USD"];

static LEADING_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{1,4})").unwrap());

/// A line that is itself `Caption: value`.
static CAPTION_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\d\s:+\-$.,][^\d:\r\n]*:").unwrap());

/// `ETHUSDT ...` at the start of a line; captures the base asset.
pub static SYMBOL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*([A-Z0-9]{2,15})[/-]?USDT").unwrap());

/// `100x` anywhere in the text.
pub static LEVERAGE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([1-9]\d{0,2})x\b").unwrap());

/// Regex for a caption line. Group 1 is a value after a colon or tab on the
/// same line, group 2 a value on the next non-blank line. `alternatives` are
/// regex fragments.
pub fn caption(alternatives: &[&str]) -> Regex {
    let alts = alternatives.join("|");
    Regex::new(&format!(
        r"(?im)^[ \t]*(?:{alts})[ \t]*(?:(?::|\t+)[ \t]*(\S[^\r\n]*)|:?[ \t]*(?:\r?\n[ \t]*)+(\S[^\r\n]*))"
    ))
    .unwrap()
}

/// The value of one [`caption`] match. A value carried over to the next line
/// does not count when that line is a caption pair of its own.
fn caption_value<'t>(caps: &regex::Captures<'t>) -> Option<regex::Match<'t>> {
    caps.get(1)
        .or_else(|| caps.get(2).filter(|m| !CAPTION_PAIR.is_match(m.as_str())))
}

/// Regex for N caption lines in a row followed by N value lines in a row.
pub fn stacked(captions: &[&str]) -> Regex {
    let mut pattern = String::from("(?im)");
    for cap in captions {
        pattern.push_str(&format!(r"^[ \t]*(?:{cap})[ \t]*\r?\n"));
    }
    let values = vec![r"[ \t]*([^\r\n]+)"; captions.len()];
    pattern.push_str(&values.join(r"\r?\n"));
    Regex::new(&pattern).unwrap()
}

pub fn keyword(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Number,
    Date,
    Symbol,
    Integer,
}

impl Transform {
    pub fn apply(&self, raw: &str) -> Option<FieldValue> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match self {
            Transform::Number => has_digits(raw).then(|| FieldValue::Number(parse_number(raw))),
            Transform::Date => parse_any_datetime(raw).map(FieldValue::Text),
            Transform::Symbol => normalize_symbol(raw).map(FieldValue::Text),
            Transform::Integer => LEADING_INT
                .captures(raw)
                .and_then(|c| c[1].parse::<u32>().ok())
                .filter(|&n| n > 0)
                .map(FieldValue::Integer),
        }
    }
}

/// `eth/usdt Perpetual` -> `ETH`
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let token = raw.split_whitespace().next()?;
    let mut sym: String = token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_uppercase();

    for quote in QUOTE_SUFFIXES {
        if sym.len() > quote.len() && sym.ends_with(quote) {
            sym.truncate(sym.len() - quote.len());
            break;
        }
    }

    sym.chars().any(|c| c.is_ascii_alphabetic()).then_some(sym)
}

#[derive(Debug, Clone)]
pub enum Source {
    /// Positional cell of a tab-separated row.
    Column(usize),
    /// Capture group 1 of the first match whose value transforms cleanly.
    Pattern(Regex),
    /// A [`caption`] regex; successive matches are tried like `Pattern`.
    Caption(Regex),
    /// The n-th match of the regex (whole match), zero-based.
    Nth(Regex, usize),
}

#[derive(Debug, Clone)]
pub enum Rule {
    Field {
        field: Field,
        source: Source,
        transform: Transform,
    },
    /// One multi-line pattern filling several fields from consecutive captures.
    Stacked {
        pattern: Regex,
        fields: Vec<(Field, Transform)>,
    },
}

impl Rule {
    pub fn field(field: Field, source: Source, transform: Transform) -> Self {
        Rule::Field {
            field,
            source,
            transform,
        }
    }

    pub fn caption(field: Field, captions: &[&str], transform: Transform) -> Self {
        Rule::field(field, Source::Caption(caption(captions)), transform)
    }

    pub fn stacked(captions: &[&str], fields: &[(Field, Transform)]) -> Self {
        Rule::Stacked {
            pattern: stacked(captions),
            fields: fields.to_vec(),
        }
    }

    fn apply(&self, text: &str, columns: &[&str], out: &mut PartialTrade) {
        match self {
            Rule::Field {
                field,
                source,
                transform,
            } => {
                if out.has(*field) {
                    return;
                }
                let value = match source {
                    Source::Column(i) => columns.get(*i).and_then(|r| transform.apply(r)),
                    Source::Pattern(re) => re
                        .captures_iter(text)
                        .filter_map(|c| c.get(1))
                        .find_map(|m| transform.apply(m.as_str())),
                    // a caption may be followed by another caption; keep looking
                    Source::Caption(re) => re
                        .captures_iter(text)
                        .filter_map(|c| caption_value(&c))
                        .find_map(|m| transform.apply(m.as_str())),
                    Source::Nth(re, n) => re
                        .find_iter(text)
                        .nth(*n)
                        .and_then(|m| transform.apply(m.as_str())),
                };
                if let Some(value) = value {
                    out.set(*field, value);
                }
            }
            Rule::Stacked { pattern, fields } => {
                let Some(caps) = pattern.captures(text) else {
                    return;
                };
                for (i, (field, transform)) in fields.iter().enumerate() {
                    if out.has(*field) {
                        continue;
                    }
                    let value = caps.get(i + 1).and_then(|m| transform.apply(m.as_str()));
                    if let Some(value) = value {
                        out.set(*field, value);
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Anchor {
    /// Structural: exactly `count` tab-separated cells.
    Columns { count: usize, leading_digit: bool },
    /// Every `all` regex matches and no `none` regex does.
    Keywords { all: Vec<Regex>, none: Vec<Regex> },
}

impl Anchor {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Anchor::Columns {
                count,
                leading_digit,
            } => {
                let cells = split_columns(text);
                cells.len() == *count
                    && (!leading_digit
                        || cells[0]
                            .trim_start()
                            .starts_with(|c: char| c.is_ascii_digit()))
            }
            Anchor::Keywords { all, none } => {
                all.iter().all(|re| re.is_match(text)) && !none.iter().any(|re| re.is_match(text))
            }
        }
    }
}

pub fn split_columns(text: &str) -> Vec<&str> {
    text.trim_matches(|c: char| c == '\r' || c == '\n' || c == ' ')
        .split('\t')
        .collect()
}

#[derive(Debug, Clone)]
pub struct LayoutSpec {
    pub kind: LayoutKind,
    pub anchor: Anchor,
    pub rules: Vec<Rule>,
}

impl LayoutSpec {
    /// `None` when the anchor is absent; otherwise whatever the rules found,
    /// possibly nothing.
    pub fn detect(&self, text: &str) -> Option<PartialTrade> {
        if !self.anchor.matches(text) {
            return None;
        }

        let columns = match self.anchor {
            Anchor::Columns { .. } => split_columns(text),
            Anchor::Keywords { .. } => Vec::new(),
        };

        let mut out = PartialTrade::default();
        for rule in &self.rules {
            rule.apply(text, &columns, &mut out);
        }
        Some(out)
    }
}
