/// A row as read back from a store. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredRow {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub rest: Option<String>,
    pub work_time: Option<String>,
    pub content: Option<String>,
}

impl StoredRow {
    /// Draft rows lacking any of the fields needed for the monthly totals
    /// are not complete.
    pub fn is_complete(&self) -> bool {
        [
            &self.date,
            &self.start_time,
            &self.end_time,
            &self.rest,
            &self.work_time,
        ]
        .iter()
        .all(|f| f.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}
