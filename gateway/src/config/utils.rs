//! Helpers for reading typed values out of the process environment

use std::env;
use std::error::Error;
use std::str::FromStr;

/// Read an environment variable, treating unset and blank values alike
pub(super) fn env_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse an environment variable, falling back to `default` when unset
///
/// A set but unparseable value is an error rather than a silent default.
pub(super) fn parse_env<T>(name: &str, default: T) -> Result<T, Box<dyn Error>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_var(name) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| format!("Invalid value for {name} ('{raw}'): {e}").into()),
        None => Ok(default),
    }
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`)
pub(super) fn parse_bool(name: &str, raw: &str) -> Result<bool, Box<dyn Error>> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("Invalid boolean for {name}: '{other}'").into()),
    }
}
