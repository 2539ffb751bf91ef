//! Row stores holding one row per recorded workday.

pub mod csv_log;
pub mod notion;

use crate::errors::AppResult;
use crate::models::stored_row::StoredRow;
use crate::models::work_entry::WorkEntry;

/// The two operations this tool needs from a row store.
pub trait RowStore {
    /// Every row of the store; fields may be missing.
    fn query_all(&mut self) -> AppResult<Vec<StoredRow>>;

    /// Persist a new row for `entry`.
    fn create_row(&mut self, entry: &WorkEntry) -> AppResult<()>;
}
