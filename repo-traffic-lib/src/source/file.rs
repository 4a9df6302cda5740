use crate::Result;
use crate::traffic::RawRecord;
use camino::Utf8Path;
use ohno::IntoAppError;
use std::fs;

/// Load a JSON array of raw records from a local file.
pub fn load_records(path: &Utf8Path) -> Result<Vec<RawRecord>> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("unable to read records from '{path}'"))?;
    serde_json::from_str(&text).into_app_err_with(|| format!("unable to parse records in '{path}'"))
}
