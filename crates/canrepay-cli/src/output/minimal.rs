use serde_json::Value;

use super::display_value;

/// Headline figure of each computation, in priority order.
const HEADLINE_KEYS: [&str; 6] = [
    "years",
    "net_worth",
    "total_monthly_payment",
    "progress_pct",
    "projected_total",
    "remaining_after_payment",
];

/// Print just the headline answer from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let Value::Object(map) = result_obj else {
        return display_value(result_obj);
    };

    HEADLINE_KEYS
        .iter()
        .find_map(|key| map.get(*key).filter(|v| !v.is_null()))
        .or_else(|| map.get("remaining"))
        .map(display_value)
        .or_else(|| {
            map.iter()
                .next()
                .map(|(key, val)| format!("{}: {}", key, display_value(val)))
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_headline_prefers_years() {
        let v = json!({"result": {"number_of_payments": "195.0284", "years": "16.3"}});
        assert_eq!(headline(&v), "16.3");
    }

    #[test]
    fn test_headline_budget_without_payment_falls_back_to_remaining() {
        let v = json!({"result": {"total_expenses": "1350", "remaining": "1650",
                                  "remaining_after_payment": null}});
        assert_eq!(headline(&v), "1650");
    }
}
