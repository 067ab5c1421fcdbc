use chrono::NaiveDate;

/// Supplies the reference "today" for upcoming-holiday filtering and remaining days
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
