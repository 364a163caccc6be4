//! The process-wide override table.
//!
//! Install it once at startup. Replacing it later is safe: every encode or
//! decode loads one snapshot and uses it to the end.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::debug;

use super::CodecTable;
use crate::error::Result;

static GLOBAL_CODECS: ArcSwapOption<CodecTable> = ArcSwapOption::const_empty();

/// Installs `table` as the process-wide override table.
///
/// # Panics
///
/// Panics if an entry lacks its encoder or decoder. Use
/// [`try_set_global_codecs`] for tables built at runtime.
pub fn set_global_codecs(table: CodecTable) {
    if let Err(err) = try_set_global_codecs(table) {
        panic!("{err}");
    }
}

/// Installs `table` as the process-wide override table, or returns
/// [`MalformedCodecTable`](crate::TypedJsonError::MalformedCodecTable)
/// leaving the current table in place.
pub fn try_set_global_codecs(table: CodecTable) -> Result<()> {
    table.validate()?;
    debug!(entries = table.len(), "installing global codec table");
    GLOBAL_CODECS.store(Some(Arc::new(table)));
    Ok(())
}

/// Removes the process-wide override table.
pub fn clear_global_codecs() {
    debug!("clearing global codec table");
    GLOBAL_CODECS.store(None);
}

/// A snapshot of the process-wide override table, if one is installed.
pub fn global_codecs() -> Option<Arc<CodecTable>> {
    GLOBAL_CODECS.load_full()
}
