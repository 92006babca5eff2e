use regex::Regex;
use std::sync::LazyLock;

/// `D/M/YYYY H:MM:SS` with an optional meridiem, as printed by Vietnamese-locale UIs
/// (`SA` = morning, `CH` = afternoon). `AM`/`PM` are read the same way.
pub static LOCAL_DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d{1,2})/(\d{1,2})/(\d{4})\s+(\d{1,2}):(\d{2}):(\d{2})(?:\s*(SA|CH|AM|PM)\b)?",
    )
    .unwrap()
});

static ISO_DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})-(\d{1,2})-(\d{1,2})[ T](\d{1,2}):(\d{2})(?::(\d{2}))?").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Morning,
    Afternoon,
}

impl Meridiem {
    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "SA" | "AM" => Some(Meridiem::Morning),
            "CH" | "PM" => Some(Meridiem::Afternoon),
            _ => None,
        }
    }

    fn to_24h(self, hour: u32) -> u32 {
        match self {
            Meridiem::Afternoon if hour < 12 => hour + 12,
            Meridiem::Morning if hour == 12 => 0,
            _ => hour,
        }
    }
}

fn canonical(year: &str, month: u32, day: u32, hour: u32, minute: &str, second: &str) -> String {
    format!("{year}-{month:02}-{day:02}T{hour:02}:{minute}:{second}")
}

/// Convert `17/12/2025 10:16:52 CH` into `2025-12-17T22:16:52`.
/// Returns `None` when the text has no such timestamp.
pub fn parse_local_datetime(raw: &str) -> Option<String> {
    let caps = LOCAL_DATETIME.captures(raw)?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let mut hour: u32 = caps[4].parse().ok()?;

    if let Some(m) = caps.get(7).and_then(|m| Meridiem::parse(m.as_str())) {
        hour = m.to_24h(hour);
    }

    Some(canonical(&caps[3], month, day, hour, &caps[5], &caps[6]))
}

/// Convert `2025-12-01 10:19:16` (or `2025-12-01T10:19`) into the canonical form.
pub fn parse_iso_datetime(raw: &str) -> Option<String> {
    let caps = ISO_DATETIME.captures(raw)?;

    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    let hour: u32 = caps[4].parse().ok()?;
    let second = caps.get(6).map_or("00", |m| m.as_str());

    Some(canonical(&caps[1], month, day, hour, &caps[5], second))
}

pub fn parse_any_datetime(raw: &str) -> Option<String> {
    parse_local_datetime(raw).or_else(|| parse_iso_datetime(raw))
}
