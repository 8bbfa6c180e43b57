use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a JSON input file into a command's typed field record.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    if !p.is_file() {
        return Err(format!("Not a readable file: {}", p.display()).into());
    }
    let contents = fs::read_to_string(p)
        .map_err(|e| format!("Failed to read '{}': {}", p.display(), e))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", p.display(), e))?;
    Ok(value)
}

/// Read typed JSON from stdin if data is being piped.
/// Returns None when stdin is a TTY or empty.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: T = serde_json::from_str(trimmed)?;
    Ok(Some(value))
}
