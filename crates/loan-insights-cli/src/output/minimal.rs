use serde_json::Value;

/// Key figures, most informative first. The first one present is printed.
const PRIORITY_KEYS: [&str; 6] = [
    "max_loan_amount",
    "credit_score",
    "annual_rate",
    "average",
    "offers",
    "occupations",
];

/// Print just the headline figure from the output.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        // offers and catalogues: one line per entry, first field only
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(m) => m
                    .values()
                    .next()
                    .map(format_minimal)
                    .unwrap_or_default(),
                other => format_minimal(other),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
