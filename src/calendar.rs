use chrono::{Datelike, NaiveDate};

use crate::errors::{AccrualError, Result};

/// calendar month numbers
pub const JAN: u32 = 1;
pub const FEB: u32 = 2;
pub const MAR: u32 = 3;
pub const APR: u32 = 4;
pub const MAY: u32 = 5;
pub const JUN: u32 = 6;
pub const JUL: u32 = 7;
pub const AUG: u32 = 8;
pub const SEP: u32 = 9;
pub const OCT: u32 = 10;
pub const NOV: u32 = 11;
pub const DEC: u32 = 12;

pub const MONTHS_PER_YEAR: u32 = 12;

/// a financial year F spans april 1 of calendar year F to march 31 of F+1
pub type FinancialYear = i32;

/// true iff the month falls in the april..december half of the financial year
pub fn in_fiscal_first_half(month: u32) -> bool {
    (APR..=DEC).contains(&month)
}

/// calendar year for a (financial year, month) pair
///
/// april..december belong to the financial year's own calendar year,
/// january..march to the following one.
pub fn calendar_year_for(year: FinancialYear, month: u32) -> i32 {
    if in_fiscal_first_half(month) {
        year
    } else {
        year + 1
    }
}

/// financial year containing a calendar date
pub fn financial_year_of(date: NaiveDate) -> FinancialYear {
    if in_fiscal_first_half(date.month()) {
        date.year()
    } else {
        date.year() - 1
    }
}

/// construct the calendar date for a (financial year, month, day) triple
///
/// An impossible day (feb 30, apr 31) is an error, never a roll-over into
/// the next month.
pub fn fiscal_date(year: FinancialYear, month: u32, day: u32) -> Result<NaiveDate> {
    let calendar_year = calendar_year_for(year, month);
    NaiveDate::from_ymd_opt(calendar_year, month, day).ok_or(AccrualError::InvalidDate {
        year: calendar_year,
        month,
        day,
    })
}

/// last day of a calendar month
///
/// February is fixed at 28: month-end accrual dates ignore leap years.
pub fn last_day_of_month(month: u32) -> Result<u32> {
    match month {
        FEB => Ok(28),
        JAN | MAR | MAY | JUL | AUG | OCT | DEC => Ok(31),
        APR | JUN | SEP | NOV => Ok(30),
        _ => Err(AccrualError::InvalidMonth { month }),
    }
}

/// months of a financial year in fiscal order: [4, 5, ..., 12, 1, 2, 3]
pub fn fiscal_months() -> impl Iterator<Item = u32> {
    (APR..=DEC).chain(JAN..=MAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiscal_month_order() {
        let months: Vec<u32> = fiscal_months().collect();
        assert_eq!(months, vec![4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3]);
    }

    #[test]
    fn test_fiscal_months_restartable() {
        assert_eq!(fiscal_months().count(), 12);
        assert_eq!(fiscal_months().count(), 12);
    }

    #[test]
    fn test_financial_year_of_first_half() {
        for month in APR..=DEC {
            let date = NaiveDate::from_ymd_opt(2018, month, 15).unwrap();
            assert_eq!(financial_year_of(date), 2018);
        }
    }

    #[test]
    fn test_financial_year_of_second_half() {
        for month in JAN..=MAR {
            let date = NaiveDate::from_ymd_opt(2019, month, 15).unwrap();
            assert_eq!(financial_year_of(date), 2018);
        }
    }

    #[test]
    fn test_calendar_year_for() {
        assert_eq!(calendar_year_for(2018, APR), 2018);
        assert_eq!(calendar_year_for(2018, DEC), 2018);
        assert_eq!(calendar_year_for(2018, JAN), 2019);
        assert_eq!(calendar_year_for(2018, MAR), 2019);
    }

    #[test]
    fn test_fiscal_date_resolves_calendar_year() {
        assert_eq!(
            fiscal_date(2018, APR, 1).unwrap(),
            NaiveDate::from_ymd_opt(2018, 4, 1).unwrap()
        );
        assert_eq!(
            fiscal_date(2018, MAR, 31).unwrap(),
            NaiveDate::from_ymd_opt(2019, 3, 31).unwrap()
        );
    }

    #[test]
    fn test_fiscal_date_rejects_invalid_day() {
        let err = fiscal_date(2018, APR, 31).unwrap_err();
        assert_eq!(
            err,
            AccrualError::InvalidDate {
                year: 2018,
                month: 4,
                day: 31
            }
        );
        assert!(fiscal_date(2018, FEB, 30).is_err());
    }

    #[test]
    fn test_fiscal_date_feb_29_follows_calendar() {
        // fy 2023's february lands in calendar 2024, a leap year
        assert!(fiscal_date(2023, FEB, 29).is_ok());
        assert!(fiscal_date(2022, FEB, 29).is_err());
    }

    #[test]
    fn test_last_day_of_month_table() {
        assert_eq!(last_day_of_month(FEB).unwrap(), 28);
        for month in [JAN, MAR, MAY, JUL, AUG, OCT, DEC] {
            assert_eq!(last_day_of_month(month).unwrap(), 31);
        }
        for month in [APR, JUN, SEP, NOV] {
            assert_eq!(last_day_of_month(month).unwrap(), 30);
        }
        assert_eq!(
            last_day_of_month(13).unwrap_err(),
            AccrualError::InvalidMonth { month: 13 }
        );
    }
}
