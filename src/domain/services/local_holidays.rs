use crate::domain::entities::Holiday;
use chrono::{Datelike, NaiveDate};

/// Built-in holidays as (name, month, day), repeated every year
const LOCAL_HOLIDAYS: &[(&str, u32, u32)] = &[
    ("New Year's Day", 1, 1),
    ("Eid Al Fitr", 4, 9),
    ("Independence Day", 5, 25),
    ("Christmas Day", 12, 25),
];

/// Built-in holidays of the reference year that fall on or after `reference`
pub fn local_holidays(reference: NaiveDate) -> Vec<Holiday> {
    LOCAL_HOLIDAYS
        .iter()
        .filter_map(|&(name, month, day)| {
            NaiveDate::from_ymd_opt(reference.year(), month, day).map(|date| (name, date))
        })
        .filter(|(_, date)| *date >= reference)
        .map(|(name, date)| Holiday::single_day(name, date, reference))
        .collect()
}
