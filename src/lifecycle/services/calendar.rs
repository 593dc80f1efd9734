use crate::shared::error::ViewError;
use crate::shared::Result;
use chrono::{Datelike, Month, Months, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Five weeks of seven days
pub const DEFAULT_GRID_LENGTH: usize = 35;

/// Fifty-three weeks of seven days
pub const MAX_GRID_LENGTH: usize = 371;

/// One position of the month grid.
///
/// Cells before the first or after the last day of the month have no date
/// and never hold records.
#[derive(Debug, PartialEq, Eq)]
pub struct DayCell<'a, T> {
    pub index: usize,
    /// `index - leading_offset + 1`; may fall outside the month
    pub day: i64,
    pub date: Option<NaiveDate>,
    pub records: Vec<&'a T>,
}

impl<T> DayCell<'_, T> {
    pub fn in_current_month(&self) -> bool {
        self.date.is_some()
    }
}

/// Lays `records` out on a `grid_length`-cell month grid.
///
/// Cell `i` shows day `i - leading_offset + 1`. Every in-month cell collects
/// the records dated exactly on that day, in collection order. An offset of
/// `grid_length` or more leaves every cell out of month.
///
/// # Errors
/// Returns `ViewError::InvalidCalendarMonth` when `month` is not in `1..=12`
/// or the year is outside the supported calendar range, and
/// `ViewError::InvalidGridLength` when `grid_length` is not in
/// `1..=MAX_GRID_LENGTH`.
pub fn place_on_grid<'a, T, F>(
    records: &'a [T],
    date_of: F,
    year: i32,
    month: u32,
    grid_length: usize,
    leading_offset: usize,
) -> Result<Vec<DayCell<'a, T>>>
where
    F: Fn(&T) -> NaiveDate,
{
    validate_grid_length(grid_length)?;
    let first = first_of_month(year, month)?;
    let month_length = i64::from(days_in_month(year, month)?);
    let offset = i64::try_from(leading_offset).unwrap_or(i64::MAX);

    let mut by_date: BTreeMap<NaiveDate, Vec<&'a T>> = BTreeMap::new();
    for record in records {
        let date = date_of(record);
        if date.year() == year && date.month() == month {
            by_date.entry(date).or_default().push(record);
        }
    }

    let cells = (0..grid_length)
        .map(|index| {
            let day = i64::try_from(index)
                .unwrap_or(i64::MAX)
                .saturating_sub(offset)
                .saturating_add(1);
            let date = if (1..=month_length).contains(&day) {
                u32::try_from(day).ok().and_then(|d| first.with_day(d))
            } else {
                None
            };
            let records = date
                .and_then(|d| by_date.get(&d).cloned())
                .unwrap_or_default();

            DayCell {
                index,
                day,
                date,
                records,
            }
        })
        .collect();

    Ok(cells)
}

/// Checks that a grid has between 1 and [`MAX_GRID_LENGTH`] cells
///
/// # Errors
/// Returns `ViewError::InvalidGridLength` otherwise.
pub fn validate_grid_length(grid_length: usize) -> Result<()> {
    if grid_length == 0 || grid_length > MAX_GRID_LENGTH {
        return Err(ViewError::InvalidGridLength {
            grid_length,
            max: MAX_GRID_LENGTH,
        }
        .into());
    }
    Ok(())
}

/// Number of days in a month of the proleptic Gregorian calendar
///
/// # Errors
/// Returns `ViewError::InvalidCalendarMonth` for an invalid month or year.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or(ViewError::InvalidCalendarMonth { year, month })?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Blank cells needed before day 1 when weeks start on `week_start`
///
/// # Errors
/// Returns `ViewError::InvalidCalendarMonth` for an invalid month or year.
pub fn leading_offset_for(year: i32, month: u32, week_start: Weekday) -> Result<usize> {
    let first = first_of_month(year, month)?;
    let offset = (7 + first.weekday().num_days_from_monday()
        - week_start.num_days_from_monday())
        % 7;
    Ok(offset as usize)
}

/// Weekday column headers starting at `week_start`
pub fn weekday_headers(week_start: Weekday) -> Vec<String> {
    std::iter::successors(Some(week_start), |day| Some(day.succ()))
        .take(7)
        .map(|day| day.to_string())
        .collect()
}

/// The month after `(year, month)`
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    }
}

/// The month before `(year, month)`
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year.saturating_sub(1), 12)
    } else {
        (year, month - 1)
    }
}

/// English month name ("February")
///
/// # Errors
/// Returns `ViewError::InvalidCalendarMonth` when `month` is not in `1..=12`.
pub fn month_name(year: i32, month: u32) -> Result<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .ok_or_else(|| ViewError::InvalidCalendarMonth { year, month }.into())
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(ViewError::InvalidCalendarMonth { year, month }.into());
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ViewError::InvalidCalendarMonth { year, month }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Visit {
        label: &'static str,
        date: NaiveDate,
    }

    fn visit(label: &'static str, year: i32, month: u32, day: u32) -> Visit {
        Visit {
            label,
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        }
    }

    fn labels(cell: &DayCell<'_, Visit>) -> Vec<&'static str> {
        cell.records.iter().map(|v| v.label).collect()
    }

    #[test]
    fn test_february_2026_with_fixed_offset() {
        let visits = vec![
            visit("a", 2026, 2, 17),
            visit("b", 2026, 2, 17),
            visit("c", 2026, 2, 18),
            visit("d", 2026, 2, 1),
        ];
        let cells = place_on_grid(&visits, |v| v.date, 2026, 2, 35, 5).unwrap();

        assert_eq!(cells.len(), 35);
        for index in 0..5 {
            assert!(!cells[index].in_current_month());
            assert!(cells[index].records.is_empty());
        }
        assert_eq!(cells[5].day, 1);
        assert_eq!(
            cells[5].date,
            Some(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
        );
        assert_eq!(labels(&cells[5]), vec!["d"]);
        assert_eq!(cells[32].day, 28);
        assert!(cells[32].in_current_month());
        assert!(!cells[33].in_current_month());
        assert!(!cells[34].in_current_month());
        assert_eq!(cells[34].day, 30);

        // Day 17 sits at index 21 and keeps collection order
        assert_eq!(labels(&cells[21]), vec!["a", "b"]);
        assert_eq!(labels(&cells[22]), vec!["c"]);
    }

    #[test]
    fn test_leading_cells_have_non_positive_days() {
        let visits: Vec<Visit> = Vec::new();
        let cells = place_on_grid(&visits, |v| v.date, 2026, 2, 35, 5).unwrap();
        assert_eq!(cells[0].day, -4);
        assert_eq!(cells[4].day, 0);
    }

    #[test]
    fn test_grid_length_is_fixed_regardless_of_month() {
        let visits: Vec<Visit> = Vec::new();
        for month in 1..=12 {
            let cells = place_on_grid(&visits, |v| v.date, 2026, month, 35, 0).unwrap();
            assert_eq!(cells.len(), 35);
            assert_eq!(cells.iter().filter(|c| c.in_current_month()).count() as u32,
                days_in_month(2026, month).unwrap());
        }
        let cells = place_on_grid(&visits, |v| v.date, 2026, 2, 42, 3).unwrap();
        assert_eq!(cells.len(), 42);
    }

    #[test]
    fn test_short_month_end_cells_are_out_of_month() {
        let visits = vec![visit("x", 2026, 4, 30)];
        let cells = place_on_grid(&visits, |v| v.date, 2026, 4, 35, 0).unwrap();

        // April has 30 days: day 31 (index 30) is out of month
        assert!(cells[29].in_current_month());
        assert_eq!(labels(&cells[29]), vec!["x"]);
        assert!(!cells[30].in_current_month());
        assert_eq!(cells[30].day, 31);
    }

    #[test]
    fn test_records_from_other_months_are_ignored() {
        let visits = vec![visit("jan", 2026, 1, 17), visit("feb", 2026, 2, 17), visit("old", 2025, 2, 17)];
        let cells = place_on_grid(&visits, |v| v.date, 2026, 2, 35, 0).unwrap();
        let placed: Vec<&str> = cells.iter().flat_map(|c| labels(c)).collect();
        assert_eq!(placed, vec!["feb"]);
    }

    #[test]
    fn test_leap_year_february() {
        let visits = vec![visit("leap", 2028, 2, 29)];
        let cells = place_on_grid(&visits, |v| v.date, 2028, 2, 35, 2).unwrap();
        // Day 29 at index 29 + 2 - 1 = 30
        assert_eq!(cells[30].day, 29);
        assert!(cells[30].in_current_month());
        assert_eq!(labels(&cells[30]), vec!["leap"]);
        assert!(!cells[31].in_current_month());
    }

    #[test]
    fn test_small_grid_truncates_month() {
        let visits = vec![visit("late", 2026, 2, 20)];
        let cells = place_on_grid(&visits, |v| v.date, 2026, 2, 7, 0).unwrap();
        assert_eq!(cells.len(), 7);
        assert!(cells.iter().all(|c| c.records.is_empty()));
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let visits: Vec<Visit> = Vec::new();
        for month in [0, 13] {
            let err = place_on_grid(&visits, |v| v.date, 2026, month, 35, 0).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ViewError>(),
                Some(ViewError::InvalidCalendarMonth { .. })
            ));
        }
    }

    #[test]
    fn test_offset_beyond_grid_leaves_every_cell_out_of_month() {
        let visits = vec![visit("early", 2026, 2, 2)];
        for offset in [35, usize::MAX, 1usize << 63] {
            let cells = place_on_grid(&visits, |v| v.date, 2026, 2, 35, offset).unwrap();
            assert_eq!(cells.len(), 35);
            assert!(cells.iter().all(|c| !c.in_current_month()));
            assert!(cells.iter().all(|c| c.records.is_empty()));
            assert!(cells.iter().all(|c| c.day <= 0));
        }
    }

    #[test]
    fn test_offset_past_month_end_keeps_day_arithmetic() {
        let visits: Vec<Visit> = Vec::new();
        let cells = place_on_grid(&visits, |v| v.date, 2026, 2, 35, 40).unwrap();
        assert_eq!(cells[0].day, -39);
        assert_eq!(cells[34].day, -5);
    }

    #[test]
    fn test_grid_length_out_of_range_is_rejected() {
        let visits: Vec<Visit> = Vec::new();
        for grid_length in [0, MAX_GRID_LENGTH + 1, usize::MAX] {
            let err = place_on_grid(&visits, |v| v.date, 2026, 2, grid_length, 0).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ViewError>(),
                Some(ViewError::InvalidGridLength { .. })
            ));
        }
        let cells = place_on_grid(&visits, |v| v.date, 2026, 2, MAX_GRID_LENGTH, 0).unwrap();
        assert_eq!(cells.len(), MAX_GRID_LENGTH);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1).unwrap(), 31);
        assert_eq!(days_in_month(2026, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2026, 4).unwrap(), 30);
        assert_eq!(days_in_month(2026, 12).unwrap(), 31);
        assert!(days_in_month(2026, 13).is_err());
    }

    #[test]
    fn test_leading_offset_for() {
        // 1 February 2026 is a Sunday
        assert_eq!(leading_offset_for(2026, 2, Weekday::Sun).unwrap(), 0);
        assert_eq!(leading_offset_for(2026, 2, Weekday::Mon).unwrap(), 6);
        // 1 March 2026 is a Sunday too; 1 April 2026 is a Wednesday
        assert_eq!(leading_offset_for(2026, 4, Weekday::Sun).unwrap(), 3);
        assert_eq!(leading_offset_for(2026, 4, Weekday::Mon).unwrap(), 2);
    }

    #[test]
    fn test_weekday_headers() {
        assert_eq!(
            weekday_headers(Weekday::Sun),
            vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        assert_eq!(weekday_headers(Weekday::Mon)[6], "Sun");
    }

    #[test]
    fn test_month_navigation() {
        assert_eq!(next_month(2026, 2), (2026, 3));
        assert_eq!(next_month(2026, 12), (2027, 1));
        assert_eq!(previous_month(2026, 1), (2025, 12));
        assert_eq!(previous_month(2026, 3), (2026, 2));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(2026, 2).unwrap(), "February");
        assert!(month_name(2026, 0).is_err());
    }
}
