pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ExtractError;
use crate::models::TradeRecord;
use crate::normalize::parse_number;

/// Last-resort extraction for text no layout detector understood.
#[async_trait]
pub trait TradeExtractor: Send + Sync {
    async fn extract(&self, raw: &str) -> Result<TradeRecord, ExtractError>;
}

const NUMERIC_KEYS: &[&str] = &["openPrice", "closePrice", "quantity", "fee", "pnl", "leverage"];

pub fn build_prompt(raw: &str) -> String {
    format!(
        "Extract one trading position from the text below. Reply with a single JSON object \
         and nothing else, using these keys:\n\
         symbol (base asset, e.g. \"ETH\"), openPrice (number), closePrice (number or null), \
         openTime and closeTime (\"YYYY-MM-DDTHH:MM:SS\" or null), quantity (number), \
         fee (number, positive), pnl (number, negative for losses), leverage (integer).\n\
         Numbers may use either comma or dot as the decimal separator in the source.\n\n\
         TEXT:\n{raw}"
    )
}

/// Pull the JSON object out of a model reply, tolerating code fences and
/// surrounding prose.
pub fn parse_reply(reply: &str) -> Result<TradeRecord, ExtractError> {
    let json_str = extract_json_object(reply)?;
    let mut value: Value =
        serde_json::from_str(json_str).map_err(|e| ExtractError::JsonParsing(e.to_string()))?;

    let obj = value
        .as_object_mut()
        .ok_or_else(|| ExtractError::MalformedResponse("Reply is not a JSON object".into()))?;

    obj.retain(|_, v| !v.is_null());

    // models sometimes quote numbers, with locale separators
    for key in NUMERIC_KEYS {
        let parsed = match obj.get(*key) {
            Some(Value::String(s)) => Some(parse_number(s)),
            _ => None,
        };
        if let Some(n) = parsed {
            obj.insert((*key).to_string(), serde_json::json!(n));
        }
    }
    let leverage = obj.get("leverage").and_then(Value::as_f64);
    if let Some(f) = leverage {
        obj.insert(
            "leverage".to_string(),
            serde_json::json!(f.round().max(0.0) as u64),
        );
    }

    serde_json::from_value(value).map_err(|e| ExtractError::JsonParsing(e.to_string()))
}

fn extract_json_object(reply: &str) -> Result<&str, ExtractError> {
    let body = match reply.find("```") {
        Some(start) => {
            let after = &reply[start + 3..];
            let after = after.strip_prefix("json").unwrap_or(after);
            match after.find("```") {
                Some(end) => &after[..end],
                None => after,
            }
        }
        None => reply,
    };

    let start = body
        .find('{')
        .ok_or_else(|| ExtractError::MalformedResponse("No JSON object found".into()))?;
    let end = body
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| ExtractError::MalformedResponse("Unclosed JSON object".into()))?;
    Ok(&body[start..=end])
}
