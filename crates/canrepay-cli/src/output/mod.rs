pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use std::str::FromStr;

use canrepay_core::round_display;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Human-facing rendering of a JSON value. Decimal strings longer than cents
/// are rounded to two places.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => match Decimal::from_str(s) {
            Ok(d) if d.scale() > 2 => round_display(d, 2).to_string(),
            _ => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(arr) => arr.iter().map(display_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value_rounds_long_decimals() {
        assert_eq!(display_value(&json!("187.426999163")), "187.43");
        assert_eq!(display_value(&json!("16.3")), "16.3");
        assert_eq!(display_value(&json!("Provincial")), "Provincial");
        assert_eq!(display_value(&Value::Null), "-");
    }
}
