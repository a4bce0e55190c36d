//! Business calendar: working days per month.

use chrono::{Datelike, NaiveDate, Weekday};

use riordino_model::{ReorderError, Result};

/// Count the Monday-Friday calendar days in a month.
///
/// Supplies the `workdays` scalar for a `(year, month)` period when no
/// explicit override is given.
pub fn workdays_in_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(ReorderError::InvalidMonth { month });
    }
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(ReorderError::InvalidDate { year, month })?;
    let mut count = 0u32;
    let mut day = first;
    while day.month() == month && day.year() == year {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_months() {
        // February 2021 starts on a Monday and spans exactly four weeks
        assert_eq!(workdays_in_month(2021, 2).unwrap(), 20);
        // April 2024: Monday start, 30 days
        assert_eq!(workdays_in_month(2024, 4).unwrap(), 22);
        // December 2025: Monday start, 31 days
        assert_eq!(workdays_in_month(2025, 12).unwrap(), 23);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(matches!(
            workdays_in_month(2025, 0),
            Err(ReorderError::InvalidMonth { month: 0 })
        ));
        assert!(matches!(
            workdays_in_month(2025, 13),
            Err(ReorderError::InvalidMonth { month: 13 })
        ));
    }
}
