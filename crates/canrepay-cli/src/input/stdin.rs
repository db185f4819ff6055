use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialise piped input into `T`. `None` when stdin is a terminal or the
/// pipe carried nothing but whitespace.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Failed to read stdin: {e}"))?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = serde_json::from_str(trimmed).map_err(|e| format!("Failed to parse stdin: {e}"))?;
    tracing::debug!(bytes = trimmed.len(), "read input from stdin");
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use canrepay_core::budget::BudgetInput;
    use rust_decimal::Decimal;

    #[test]
    fn test_blank_pipe_is_no_input() {
        let parsed: Option<BudgetInput> = parse_piped(" \n\t").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_pipe_parses_into_the_command_input() {
        let parsed: Option<BudgetInput> =
            parse_piped(r#"{"monthly_income": "2500", "fixed_expenses": {"rent": "900"}}"#)
                .unwrap();
        let input = parsed.unwrap();
        assert_eq!(input.monthly_income, Decimal::from(2500));
        assert_eq!(input.fixed_expenses["rent"], Decimal::from(900));
    }

    #[test]
    fn test_wrong_shape_names_stdin() {
        let err = parse_piped::<BudgetInput>(r#"{"fixed_expenses": {}}"#).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse stdin"));
    }
}
