use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

// Diagnostics go to stderr so stdout stays machine-readable.

pub fn ok(msg: &str) {
    eprintln!("✓ {msg}");
}

pub fn warn(msg: &str) {
    eprintln!("⚠ warning: {msg}");
}

pub fn error(msg: &str) {
    eprintln!("✗ error: {msg}");
}
