//! Machine-readable dump.

use lastbible_data::Database;

use crate::ReportError;

/// Pretty-printed JSON of the whole database.
///
/// Tables that are not available serialize as `null`. Text fields that
/// decode to a single plain run become bare strings; anything else is an
/// array of tokens.
pub fn to_json(db: &Database) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(db)?;
    out.push('\n');
    Ok(out)
}
