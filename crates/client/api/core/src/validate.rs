//! Structural receipt guards at the server boundary.
//!
//! The `is_valid_*` guards inspect a raw JSON value and never fail; the
//! `assert_valid_*` variants return a descriptive error for call sites that
//! want to fail loudly. `decode_*` combines guard, typed decode, and the
//! typed invariant check. Malformed receipts are logged and rejected; the
//! caller falls back to a generic summary instead of crashing the screen.

use devotion_core::{GachaReceipt, RewardReceipt};
use serde_json::Value;

use crate::traits::ApiError;

/// Required (field, shape) pairs for a generic reward receipt.
const RECEIPT_FIELDS: [(&str, Shape); 4] = [
    ("source", Shape::String),
    ("sourceId", Shape::String),
    ("items", Shape::Array),
    ("balances", Shape::Object),
];

/// Additional required pairs for a gacha receipt.
const GACHA_FIELDS: [(&str, Shape); 3] = [
    ("bannerId", Shape::String),
    ("pullCount", Shape::Number),
    ("results", Shape::Array),
];

#[derive(Clone, Copy, Debug)]
enum Shape {
    String,
    Number,
    Array,
    Object,
}

impl Shape {
    fn matches(self, value: &Value) -> bool {
        match self {
            Shape::String => value.is_string(),
            Shape::Number => value.is_number(),
            Shape::Array => value.is_array(),
            Shape::Object => value.is_object(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Number => "number",
            Shape::Array => "array",
            Shape::Object => "object",
        }
    }
}

fn first_mismatch(value: &Value, fields: &[(&'static str, Shape)]) -> Option<String> {
    let Some(map) = value.as_object() else {
        return Some("payload is not an object".to_string());
    };
    for (field, shape) in fields {
        match map.get(*field) {
            None => return Some(format!("missing field `{field}`")),
            Some(v) if !shape.matches(v) => {
                return Some(format!("field `{field}` is not a {}", shape.name()));
            }
            Some(_) => {}
        }
    }
    None
}

/// True when the value has the shape of a reward receipt. Never panics.
pub fn is_valid_receipt(value: &Value) -> bool {
    first_mismatch(value, &RECEIPT_FIELDS).is_none()
}

/// True when the value has the shape of a gacha receipt. Never panics.
pub fn is_valid_gacha_receipt(value: &Value) -> bool {
    is_valid_receipt(value) && first_mismatch(value, &GACHA_FIELDS).is_none()
}

/// Fail-loud variant of [`is_valid_receipt`] for integration boundaries.
pub fn assert_valid_receipt(value: &Value) -> Result<(), ApiError> {
    match first_mismatch(value, &RECEIPT_FIELDS) {
        None => Ok(()),
        Some(problem) => {
            tracing::error!(%problem, "rejecting malformed receipt payload");
            Err(ApiError::InvalidPayload(format!("receipt: {problem}")))
        }
    }
}

/// Fail-loud variant of [`is_valid_gacha_receipt`].
pub fn assert_valid_gacha_receipt(value: &Value) -> Result<(), ApiError> {
    assert_valid_receipt(value)?;
    match first_mismatch(value, &GACHA_FIELDS) {
        None => Ok(()),
        Some(problem) => {
            tracing::error!(%problem, "rejecting malformed gacha receipt payload");
            Err(ApiError::InvalidPayload(format!("gacha receipt: {problem}")))
        }
    }
}

/// Guard, decode, and invariant-check a reward receipt payload.
pub fn decode_receipt(value: Value) -> Result<RewardReceipt, ApiError> {
    assert_valid_receipt(&value)?;
    let receipt: RewardReceipt = serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidPayload(format!("receipt: {e}")))?;
    receipt.validate()?;
    Ok(receipt)
}

/// Guard, decode, and invariant-check a gacha receipt payload.
pub fn decode_gacha_receipt(value: Value) -> Result<GachaReceipt, ApiError> {
    assert_valid_gacha_receipt(&value)?;
    let receipt: GachaReceipt = serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidPayload(format!("gacha receipt: {e}")))?;
    receipt.validate()?;
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_minimal_receipt() {
        let value = json!({"source": "x", "sourceId": "y", "items": [], "balances": {}});
        assert!(is_valid_receipt(&value));
        assert!(assert_valid_receipt(&value).is_ok());
    }

    #[test]
    fn rejects_incomplete_receipts() {
        assert!(!is_valid_receipt(&json!({})));
        assert!(!is_valid_receipt(&json!({"source": "x"})));
        assert!(!is_valid_receipt(
            &json!({"source": "x", "sourceId": "y", "items": []})
        ));
        assert!(!is_valid_receipt(&json!("not an object")));
    }

    #[test]
    fn rejects_wrong_field_shapes() {
        let value = json!({"source": 1, "sourceId": "y", "items": [], "balances": {}});
        assert!(!is_valid_receipt(&value));

        let err = assert_valid_receipt(&value).unwrap_err();
        assert!(err.to_string().contains("source"));
    }

    #[test]
    fn gacha_guard_requires_banner_fields() {
        let base = json!({
            "source": "summon", "sourceId": "r1", "items": [], "balances": {}
        });
        assert!(!is_valid_gacha_receipt(&base));

        let full = json!({
            "source": "summon", "sourceId": "r1", "items": [], "balances": {},
            "bannerId": "b1", "pullCount": 1, "pityBefore": 0, "pityAfter": 1,
            "pityTriggered": false,
            "results": [{
                "rarity": "SR", "heroDataId": 4, "heroName": "Karis", "outcome": "new"
            }]
        });
        assert!(is_valid_gacha_receipt(&full));
        assert!(decode_gacha_receipt(full).is_ok());
    }

    #[test]
    fn decode_enforces_typed_invariants() {
        // Structurally fine, but the source id is blank.
        let value = json!({"source": "x", "sourceId": "  ", "items": [], "balances": {}});
        assert!(is_valid_receipt(&value));
        assert!(matches!(
            decode_receipt(value),
            Err(ApiError::MalformedReceipt(_))
        ));
    }
}
