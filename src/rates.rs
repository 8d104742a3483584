use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;

/// one span of the interest-rate history, bounds inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub rate: Rate,
}

impl RateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate, rate: Rate) -> Self {
        Self { from, to, rate }
    }

    /// check if the window contains the date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// ordered interest-rate history
///
/// Lookup is a first-match scan in schedule order, so where windows overlap
/// the earlier entry wins. Coverage is not verified: a date no window
/// contains yields `Rate::ZERO`, which accrues zero interest for that month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RateSchedule {
    windows: Vec<RateWindow>,
}

impl RateSchedule {
    pub fn new(windows: Vec<RateWindow>) -> Self {
        Self { windows }
    }

    /// builder-style append, keeping schedule order
    pub fn with_window(mut self, from: NaiveDate, to: NaiveDate, rate: Rate) -> Self {
        self.windows.push(RateWindow::new(from, to, rate));
        self
    }

    /// annual rate applicable on a date, zero when uncovered
    pub fn rate_on(&self, date: NaiveDate) -> Rate {
        self.windows
            .iter()
            .find(|w| w.contains(date))
            .map(|w| w.rate)
            .unwrap_or(Rate::ZERO)
    }

    pub fn windows(&self) -> &[RateWindow] {
        &self.windows
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lookup_within_window() {
        let schedule = RateSchedule::default().with_window(
            date(2018, 4, 1),
            date(2019, 3, 31),
            Rate::from_percentage(dec!(8)),
        );
        assert_eq!(
            schedule.rate_on(date(2018, 10, 15)),
            Rate::from_percentage(dec!(8))
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let schedule = RateSchedule::default().with_window(
            date(2018, 4, 1),
            date(2018, 9, 30),
            Rate::from_percentage(dec!(7.6)),
        );
        assert_eq!(
            schedule.rate_on(date(2018, 4, 1)),
            Rate::from_percentage(dec!(7.6))
        );
        assert_eq!(
            schedule.rate_on(date(2018, 9, 30)),
            Rate::from_percentage(dec!(7.6))
        );
        assert_eq!(schedule.rate_on(date(2018, 10, 1)), Rate::ZERO);
        assert_eq!(schedule.rate_on(date(2018, 3, 31)), Rate::ZERO);
    }

    #[test]
    fn test_uncovered_date_yields_zero() {
        assert_eq!(RateSchedule::default().rate_on(date(2020, 1, 1)), Rate::ZERO);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let schedule = RateSchedule::default()
            .with_window(
                date(2018, 4, 1),
                date(2019, 3, 31),
                Rate::from_percentage(dec!(8)),
            )
            .with_window(
                date(2018, 10, 1),
                date(2019, 3, 31),
                Rate::from_percentage(dec!(7.1)),
            );
        // overlapping span resolves to the earlier schedule entry
        assert_eq!(
            schedule.rate_on(date(2018, 12, 31)),
            Rate::from_percentage(dec!(8))
        );
    }

    #[test]
    fn test_schedule_order_not_date_order() {
        let schedule = RateSchedule::new(vec![
            RateWindow::new(
                date(2019, 4, 1),
                date(2020, 3, 31),
                Rate::from_percentage(dec!(7.1)),
            ),
            RateWindow::new(
                date(2018, 4, 1),
                date(2019, 3, 31),
                Rate::from_percentage(dec!(8)),
            ),
        ]);
        assert_eq!(
            schedule.rate_on(date(2018, 6, 30)),
            Rate::from_percentage(dec!(8))
        );
    }
}
