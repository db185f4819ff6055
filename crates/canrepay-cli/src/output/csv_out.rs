use serde_json::Value;
use std::io;

type StdoutCsv<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write the result as two-column CSV (field, value) to stdout.
///
/// Values are written at full precision; warnings follow as `warning` rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Err(e) = write_envelope(&mut wtr, value).and_then(|_| wtr.flush().map_err(Into::into)) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_envelope(wtr: &mut StdoutCsv<'_>, value: &Value) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;

    let Some(envelope) = value.as_object() else {
        return wtr.write_record(["value", &raw_value(value)]);
    };

    let fields = envelope
        .get("result")
        .and_then(Value::as_object)
        .unwrap_or(envelope);
    for (key, val) in fields {
        wtr.write_record([key.as_str(), &raw_value(val)])?;
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        for w in warnings {
            wtr.write_record(["warning", &raw_value(w)])?;
        }
    }
    Ok(())
}

fn raw_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
