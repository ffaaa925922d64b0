use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Final `result` line for commands that produce a value.
pub fn emit_result(command: &str, mut fields: serde_json::Value) -> io::Result<()> {
    if let Some(map) = fields.as_object_mut() {
        map.insert("event".to_string(), "result".into());
        map.insert("command".to_string(), command.into());
    }
    emit(fields)
}
