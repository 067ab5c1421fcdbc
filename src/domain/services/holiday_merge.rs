use crate::domain::entities::{parse_iso_date, remaining_days, weekday_name, ExternalHoliday, Holiday};
use crate::domain::errors::{DateParseError, HolidayResult};
use crate::domain::ports::HijriConverter;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{HashMap, HashSet};

/// Collapse provider records into one [`Holiday`] per name.
///
/// - `day_count` is the number of records sharing the name
/// - the first record of a name supplies the start date; later ones are dropped
/// - the Gregorian end date is `start + day_count` days
/// - start and end dates are returned in their Hijri form
/// - `remaining_days` is measured from `today` to the Gregorian start date
///
/// Holidays are processed one after another in first-seen order. The start and
/// end conversions of a single holiday run concurrently. The first failure
/// aborts the whole merge.
pub async fn merge_holidays(
    records: &[ExternalHoliday],
    converter: &dyn HijriConverter,
    today: NaiveDate,
) -> HolidayResult<Vec<Holiday>> {
    let mut day_counts: HashMap<&str, u32> = HashMap::new();
    for record in records {
        *day_counts.entry(record.name.as_str()).or_insert(0) += 1;
    }

    let mut seen = HashSet::with_capacity(day_counts.len());
    let mut holidays = Vec::with_capacity(day_counts.len());

    for record in records {
        if !seen.insert(record.name.as_str()) {
            continue;
        }

        let day_count = day_counts[record.name.as_str()];
        let start = parse_iso_date(&record.date)?;
        let end = start
            .checked_add_signed(Duration::days(i64::from(day_count)))
            .ok_or_else(|| {
                DateParseError::new(record.date.as_str(), "end date is out of range")
            })?;

        let (hijri_start, hijri_end) =
            futures::try_join!(converter.convert(start), converter.convert(end))?;

        tracing::debug!(
            name = %record.name,
            day_count,
            start = %start,
            end = %end,
            "Merged holiday"
        );

        holidays.push(Holiday {
            name: record.name.clone(),
            start_date: hijri_start,
            start_day: record.day.clone(),
            day_count,
            end_date: hijri_end,
            end_day: weekday_name(end.weekday()).to_string(),
            remaining_days: remaining_days(today, start),
        });
    }

    Ok(holidays)
}
