use regex::Regex;
use std::sync::LazyLock;

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d{4}-\d{1,2}-\d{1,2}|\d{1,2}/\d{1,2}/\d{4})").unwrap()
});

/// First numeric run, with a `-` directly before it (allowing `$` and spaces between).
static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:(-)[ \t]*\$?[ \t]*)?([.,]?\d[\d.,]*)").unwrap());

/// True when the string carries at least one ASCII digit.
pub fn has_digits(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

/// Parse a locale-ambiguous amount such as `1.234,56 ₫`, `$1,234.56`, `-501,75`
/// or `15.00 ETH` into a float.
///
/// Only the first numeric run is read, so trailing annotations such as
/// `USDT (-17.52%)` are ignored. The last of `.`/`,` is the decimal point when
/// both appear. A lone comma is a decimal point unless exactly three digits
/// follow it. Date-shaped input and anything unparseable yield `0.0`; the
/// result is never NaN.
pub fn parse_number(raw: &str) -> f64 {
    if DATE_SHAPE.is_match(raw) {
        return 0.0;
    }

    let Some(caps) = NUMERIC_RUN.captures(raw) else {
        return 0.0;
    };
    let negative = caps.get(1).is_some();
    let unsigned = caps[2].trim_end_matches(['.', ',']);

    let canonical = disambiguate_separators(unsigned);
    let value = match canonical.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return 0.0,
    };

    if negative {
        -value
    } else {
        value
    }
}

fn disambiguate_separators(s: &str) -> String {
    let last_comma = s.rfind(',');
    let last_dot = s.rfind('.');

    match (last_comma, last_dot) {
        (Some(c), Some(d)) => {
            if c > d {
                s.replace('.', "").replace(',', ".")
            } else {
                s.replace(',', "")
            }
        }
        (Some(c), None) => {
            let tail = &s[c + 1..];
            if tail.len() == 3 {
                s.replace(',', "")
            } else {
                let (head, tail) = s.split_at(c);
                format!("{}.{}", head.replace(',', ""), &tail[1..])
            }
        }
        (None, Some(_)) if s.matches('.').count() > 1 => s.replace('.', ""),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn date_shapes_are_zero() {
        assert_eq!(parse_number("2025-12-17"), 0.0);
        assert_eq!(parse_number("17/12/2025 10:16:52"), 0.0);
        assert_eq!(parse_number("2025-12-01 10:19:16"), 0.0);
    }

    #[test]
    fn empty_and_garbage_are_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("USDT"), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert!(!parse_number("..,-").is_nan());
    }

    #[test]
    fn lone_comma_uses_run_length() {
        assert!(close(parse_number("2930,63"), 2930.63));
        assert!(close(parse_number("0,5"), 0.5));
        assert!(close(parse_number("15,00"), 15.0));
        assert!(close(parse_number("1,234"), 1234.0));
        assert!(close(parse_number("1,234,567"), 1_234_567.0));
        assert!(close(parse_number("1,2345"), 1.2345));
    }

    #[test]
    fn last_separator_is_decimal() {
        assert!(close(parse_number("1.234,56"), 1234.56));
        assert!(close(parse_number("1,234.56"), 1234.56));
        assert!(close(parse_number("12.345.678,9"), 12_345_678.9));
        assert!(close(parse_number("12,345,678.9"), 12_345_678.9));
    }

    #[test]
    fn repeated_dots_are_thousands() {
        assert!(close(parse_number("1.234.567"), 1_234_567.0));
        assert!(close(parse_number("1.234"), 1.234));
    }

    #[test]
    fn currency_and_sign() {
        assert!(close(parse_number("-501,75"), -501.75));
        assert!(close(parse_number("$ -1,234.50"), -1234.5));
        assert!(close(parse_number("-42.66 USDT"), -42.66));
        assert!(close(parse_number("2.860,90 ₫"), 2860.9));
        assert!(close(parse_number("+12.5%"), 12.5));
    }

    #[test]
    fn trailing_annotations_are_ignored() {
        assert!(close(parse_number("-501.75 USDT (-17.52%)"), -501.75));
        assert!(close(parse_number("-42.66 USDT (-1.2%)"), -42.66));
        assert!(close(parse_number("2,860.90 (+1.3%)"), 2860.9));
        assert!(close(parse_number("-501,75 USDT (-17,52%)"), -501.75));
        assert!(close(parse_number("112.05 USDT +6.1%"), 112.05));
        assert!(close(parse_number("12-34"), 12.0));
        assert!(close(parse_number("15.00, then more"), 15.0));
    }

    #[test]
    fn both_locale_encodings_agree() {
        let cases = [
            ("1.234,56", "1,234.56", 1234.56),
            ("2.860,90", "2,860.90", 2860.9),
            ("98.100,25", "98,100.25", 98100.25),
            ("1.000.000,01", "1,000,000.01", 1_000_000.01),
            ("-7.250,5", "-7,250.5", -7250.5),
        ];
        for (eu, us, v) in cases {
            assert!(close(parse_number(eu), v), "{eu}");
            assert!(close(parse_number(us), v), "{us}");
        }
    }

    #[test]
    fn has_digits_detects_values() {
        assert!(has_digits("15,00 ETH"));
        assert!(!has_digits("Exit Price"));
    }
}
