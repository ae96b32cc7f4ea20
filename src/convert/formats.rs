//! OpenAPI `format` handling
//!
//! OpenAPI uses `format` to express numeric widths and binary encodings that
//! JSON Schema draft-04 can only express through `minimum`/`maximum` and
//! `pattern`.

use serde_json::{Map, Number, Value};

use super::options::ConvertOptions;

/// Formats JSON Schema draft-04 understands natively
const JSON_SCHEMA_FORMATS: [&str; 7] = [
    "date-time",
    "email",
    "hostname",
    "ipv4",
    "ipv6",
    "uri",
    "uri-reference",
];

/// Pattern for base64 content (`format: byte`)
pub const BYTE_PATTERN: &str = r"^[\w\d+\/=]*$";

/// 2^128, the magnitude bound of a 32-bit float
const FLOAT_BOUND: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Apply format-specific rewrites to a single schema object.
pub fn convert_format(schema: &mut Map<String, Value>, options: &ConvertOptions) {
    let Some(format) = schema
        .get("format")
        .and_then(Value::as_str)
        .map(str::to_owned)
    else {
        return;
    };
    if JSON_SCHEMA_FORMATS.contains(&format.as_str()) {
        return;
    }

    match format.as_str() {
        "date" if options.date_to_date_time => {
            schema.insert("format".to_string(), Value::String("date-time".to_string()));
        }
        "int32" => set_bounds(schema, Number::from(i32::MIN), Number::from(i32::MAX)),
        "int64" => set_bounds(schema, Number::from(i64::MIN), Number::from(i64::MAX)),
        "float" => set_float_bounds(schema, FLOAT_BOUND),
        "double" => set_float_bounds(schema, f64::MAX),
        "byte" => {
            schema.insert("pattern".to_string(), Value::String(BYTE_PATTERN.to_string()));
        }
        _ => {}
    }
}

fn set_float_bounds(schema: &mut Map<String, Value>, bound: f64) {
    // Both bounds are finite, so from_f64 cannot fail
    if let (Some(min), Some(max)) = (Number::from_f64(-bound), Number::from_f64(bound)) {
        set_bounds(schema, min, max);
    }
}

/// Fill in `minimum`/`maximum` where the schema leaves them unset
fn set_bounds(schema: &mut Map<String, Value>, min: Number, max: Number) {
    if is_unset(schema.get("minimum")) {
        schema.insert("minimum".to_string(), Value::Number(min));
    }
    if is_unset(schema.get("maximum")) {
        schema.insert("maximum".to_string(), Value::Number(max));
    }
}

fn is_unset(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}
