//! Local append-only CSV files, one per month (`work_time_YYYYMM.csv`).

use crate::errors::AppResult;
use crate::models::stored_row::StoredRow;
use crate::models::work_entry::WorkEntry;
use crate::store::RowStore;
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub struct CsvLog {
    dir: PathBuf,
}

impl CsvLog {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn file_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("work_time_{}.csv", date.format("%Y%m")))
    }

    /// Append one row, no header. Returns the file written.
    pub fn append(&self, entry: &WorkEntry) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.file_for(entry.date);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

        // Field order is the column order: date, start, end, rest, work, content.
        wtr.serialize(entry.to_record())?;
        wtr.flush()?;

        Ok(path)
    }

    fn read_file(path: &Path) -> AppResult<Vec<StoredRow>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let field = |i: usize| {
                record
                    .get(i)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            rows.push(StoredRow {
                date: field(0),
                start_time: field(1),
                end_time: field(2),
                rest: field(3),
                work_time: field(4),
                content: field(5),
            });
        }
        Ok(rows)
    }
}

impl RowStore for CsvLog {
    fn query_all(&mut self) -> AppResult<Vec<StoredRow>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("work_time_") && n.ends_with(".csv"))
            })
            .collect();
        files.sort();

        let mut rows = Vec::new();
        for f in files {
            rows.extend(Self::read_file(&f)?);
        }
        Ok(rows)
    }

    fn create_row(&mut self, entry: &WorkEntry) -> AppResult<()> {
        self.append(entry)?;
        Ok(())
    }
}
