//! Persistence of the busy-date list.
//!
//! The artifact is a pretty-printed JSON array of `YYYY-MM-DD` strings
//! written to a well-known path, fully overwriting prior content. The
//! file is only touched on a successful run; fatal errors upstream
//! leave it as-is.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CliResult;

/// Writes `dates` to `path` as a pretty-printed JSON array.
pub fn write_busy_dates(path: &Path, dates: &[String]) -> CliResult<()> {
    let mut body = serde_json::to_string_pretty(dates)?;
    body.push('\n');
    fs::write(path, body)?;

    debug!(path = %path.display(), count = dates.len(), "Wrote busy dates");
    Ok(())
}
