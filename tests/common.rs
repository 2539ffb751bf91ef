#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworktime::errors::AppResult;
use rworktime::models::stored_row::StoredRow;
use rworktime::models::work_entry::WorkEntry;
use rworktime::store::RowStore;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test, isolated from the user's config and credentials.
pub fn rwt(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rworktime");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("NOTION_TOKEN")
        .env_remove("DATABASE_ID");
    cmd
}

/// Create an empty unique directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktime", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Row store kept in memory, shaped like the remote one.
#[derive(Default)]
pub struct MemoryStore {
    pub rows: Vec<StoredRow>,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<StoredRow>) -> Self {
        Self { rows }
    }
}

impl RowStore for MemoryStore {
    fn query_all(&mut self) -> AppResult<Vec<StoredRow>> {
        Ok(self.rows.clone())
    }

    fn create_row(&mut self, entry: &WorkEntry) -> AppResult<()> {
        let rec = entry.to_record();
        self.rows.push(StoredRow {
            date: Some(rec.date),
            start_time: Some(rec.start_time),
            end_time: Some(rec.end_time),
            rest: Some(rec.rest),
            work_time: Some(rec.work_time),
            content: Some(rec.content),
        });
        Ok(())
    }
}

/// Complete row as the remote store returns it.
pub fn row(date: &str, start: &str, end: &str, work_time: &str) -> StoredRow {
    StoredRow {
        date: Some(date.to_string()),
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
        rest: Some("01:00".to_string()),
        work_time: Some(work_time.to_string()),
        content: Some("dev".to_string()),
    }
}
