//! Conversion between Notion property payloads and [CellValue]s.
//!
//! Decoding dispatches on the wire `type` string and always produces a value.
//! Encoding dispatches on the classified [PropertyType] and only supports the
//! shapes that have an entry in [encode]'s table.

use crate::domain::models::{CellValue, PropertyType, parse_date};
use crate::error::{DecodeErr, EncodeErr};
use serde_json::{Map, Value, json};


/// Decode one property payload of the form `{"type": t, t: <encoded>}`.
pub fn decode(payload: Value) -> Result<CellValue, DecodeErr> {
    let Value::Object(mut payload) = payload else {
        return Err(DecodeErr::MissingType);
    };
    let Some(Value::String(wire_type)) = payload.remove("type") else {
        return Err(DecodeErr::MissingType);
    };

    let encoded = match payload.remove(&wire_type) {
        None | Some(Value::Null) => return Ok(CellValue::Empty),
        Some(encoded) => encoded,
    };

    Ok(match wire_type.as_str() {
        "select" => decode_select(encoded),
        "rich_text" | "title" => decode_rich_text(&wire_type, encoded),
        "date" => decode_date(encoded),
        _ => CellValue::from(encoded),
    })
}

fn decode_select(encoded: Value) -> CellValue {
    match encoded.get("name").and_then(Value::as_str) {
        Some(name) => CellValue::Text(name.to_string()),
        None => passthrough("select", encoded),
    }
}

fn decode_rich_text(wire_type: &str, encoded: Value) -> CellValue {
    let plain_text = match &encoded {
        Value::Array(segments) if segments.is_empty() => return CellValue::Empty,
        Value::Array(segments) => segments[0].get("plain_text").and_then(Value::as_str),
        _ => None,
    };

    match plain_text {
        Some(text) => CellValue::Text(text.to_string()),
        None => passthrough(wire_type, encoded),
    }
}

fn decode_date(encoded: Value) -> CellValue {
    match encoded
        .get("start")
        .and_then(Value::as_str)
        .and_then(parse_date)
    {
        Some(date) => CellValue::Date(date),
        None => passthrough("date", encoded),
    }
}

fn passthrough(wire_type: &str, encoded: Value) -> CellValue {
    tracing::warn!(%wire_type, json_kind = json_kind(&encoded), "unexpected property payload, keeping it as is");
    CellValue::from(encoded)
}

/// the shape of a json value without its content
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encode `value` as the payload of a `property_type` property.
pub fn encode(value: CellValue, property_type: PropertyType) -> Result<Value, EncodeErr> {
    let encoded = match property_type {
        PropertyType::Text => json!({ "content": text(value, property_type)? }),
        PropertyType::RichText | PropertyType::Title => {
            json!([{ "text": { "content": text(value, property_type)? } }])
        }
        PropertyType::Select => match value {
            CellValue::Empty => Value::Null,
            value => json!({ "name": text(value, property_type)? }),
        },
        PropertyType::Date => match value {
            CellValue::Empty => Value::Null,
            value => json!({
                "start": date(value, property_type)?,
                "end": null,
                "time_zone": null,
            }),
        },
        PropertyType::Checkbox => match value {
            CellValue::Bool(checked) => Value::Bool(checked),
            other => return Err(mismatch(property_type, &other)),
        },
        PropertyType::Number => match value {
            CellValue::Number(number) => Value::Number(number),
            CellValue::Empty => Value::Null,
            other => return Err(mismatch(property_type, &other)),
        },
        PropertyType::Url | PropertyType::Unknown => {
            return Err(EncodeErr::Unsupported(property_type));
        }
    };

    let mut payload = Map::new();
    payload.insert(property_type.as_str().to_string(), encoded);
    Ok(Value::Object(payload))
}

fn text(value: CellValue, property_type: PropertyType) -> Result<String, EncodeErr> {
    match value {
        CellValue::Text(text) => Ok(text),
        other => Err(mismatch(property_type, &other)),
    }
}

/// the calendar day of a date, dropping any time of day
fn date(value: CellValue, property_type: PropertyType) -> Result<String, EncodeErr> {
    let date_time = match &value {
        CellValue::Date(date_time) => Some(*date_time),
        CellValue::Text(raw) => parse_date(raw),
        _ => None,
    };

    date_time
        .map(|date_time| date_time.date().format("%Y-%m-%d").to_string())
        .ok_or_else(|| mismatch(property_type, &value))
}

fn mismatch(property_type: PropertyType, value: &CellValue) -> EncodeErr {
    EncodeErr::ValueMismatch {
        property_type,
        found: value.kind(),
    }
}
