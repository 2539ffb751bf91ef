use crate::errors::AppResult;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append an internal log line to the audit log file.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let now = Local::now().to_rfc3339();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{} | {} | {} | {}", now, operation, target, message)?;

    Ok(())
}

/// Non-blocking variant: a failed write only prints a warning.
pub fn ttlog_or_warn(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(path, operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}

/// All audit lines, oldest first; empty when the log does not exist yet.
pub fn read_log(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}
