use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub entry_count: usize,
    pub total_hours: i64,
    pub total_minutes: i64,
    /// `None` only for the empty summary.
    pub last_date: Option<NaiveDate>,
}

impl MonthlySummary {
    /// Summary for a month with no recorded entries.
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            entry_count: 0,
            total_hours: 0,
            total_minutes: 0,
            last_date: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    pub fn total_in_minutes(&self) -> i64 {
        self.total_hours * 60 + self.total_minutes
    }
}
