use std::path::PathBuf;

pub const PHANTOM1_DIR: &str = "TMD_BMD_PHANTOM1_DIR";
pub const PHANTOM2_DIR: &str = "TMD_BMD_PHANTOM2_DIR";
pub const BODY_DIR: &str = "TMD_BMD_BODY_DIR";
pub const EXTENSIONS: &str = "TMD_BMD_EXTENSIONS";

/// Loads a `.env` file from the working directory if one exists.
pub fn init() {
    _ = dotenv::dotenv();
}

pub fn var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

pub fn path_var(key: &str) -> Option<PathBuf> {
    var(key).map(PathBuf::from)
}

/// Comma separated list, e.g. `TMD_BMD_EXTENSIONS=bmp,png`.
pub fn list_var(key: &str) -> Option<Vec<String>> {
    let values: Vec<String> = var(key)?
        .split(',')
        .map(|value| value.trim().trim_start_matches('.').to_string())
        .filter(|value| !value.is_empty())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
