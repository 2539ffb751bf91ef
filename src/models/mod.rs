pub mod month_requirement;
pub mod monthly_summary;
pub mod stored_row;
pub mod work_entry;
