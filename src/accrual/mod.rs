pub mod engine;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar::FinancialYear;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::ledger::Transaction;
use crate::rates::RateSchedule;

pub use engine::AccrualEngine;

/// one month of the accrual table
///
/// `month` is the calendar month number, emitted in fiscal order (apr..mar).
/// `effective_balance` is the running balance after this month's in-window
/// transactions; `effective_interest` is that month's interest, rounded to
/// 2 decimal places. `rate` is the annual rate looked up for the month, so a
/// schedule gap is visible as a zero here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRow {
    pub month: u32,
    pub rate: Rate,
    pub effective_balance: Money,
    pub effective_interest: Money,
}

/// accrual result for a single financial year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialYearSummary {
    pub year: FinancialYear,
    /// 12 rows in fiscal order, april through march
    pub months: Vec<MonthRow>,
    /// sum of the monthly interest values, rounded to 2 decimal places
    pub interest_earned: Money,
    /// balance at the march row; interest is tracked separately
    pub closing_balance: Money,
}

impl FinancialYearSummary {
    /// opening balance for the year processed after this one
    pub fn carry_forward(&self) -> Money {
        self.closing_balance + self.interest_earned
    }
}

/// compute per-financial-year accrual for a transaction ledger
///
/// Years are keyed ascending and the closing balance plus interest of each
/// processed year opens the next processed one, so a ledger with gap years
/// carries its balance across the gap.
pub fn compute_accrual(
    transactions: &[Transaction],
    schedule: &RateSchedule,
) -> Result<BTreeMap<FinancialYear, FinancialYearSummary>> {
    AccrualEngine::new(schedule.clone()).process(transactions)
}
