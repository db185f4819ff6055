use serde_json::Value;
use std::io::{self, Write};

/// Pretty-print the result envelope to stdout, decimals at full precision.
pub fn print_json(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_json(&mut stdout.lock(), value) {
        tracing::error!(error = %e, "failed to write JSON output");
    }
}

fn write_json<W: Write>(writer: &mut W, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decimal_strings_keep_full_precision() {
        let mut buf = Vec::new();
        write_json(&mut buf, &json!({"result": {"provincial_monthly_payment": "187.426999163"}}))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"187.426999163\""));
        assert!(text.ends_with("}\n"));
    }
}
