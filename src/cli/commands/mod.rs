pub mod config;
pub mod forecast;
pub mod init;
pub mod list;
pub mod log;
pub mod record;
pub mod round;
pub mod summary;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RowStore;
use crate::store::csv_log::CsvLog;
use crate::store::notion::NotionClient;

/// Row store selected by the `--local` flag.
pub(crate) fn open_store(cfg: &Config, local: bool) -> AppResult<Box<dyn RowStore>> {
    if local {
        Ok(Box::new(CsvLog::new(cfg.csv_path())))
    } else {
        Ok(Box::new(NotionClient::new(cfg.notion_settings()?)?))
    }
}
