use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{self, FinancialYear, APR, DEC, JAN};
use crate::decimal::Money;
use crate::errors::Result;

/// day of month on which a deposit stops counting toward the previous month
pub const CONTRIBUTION_CUTOFF_DAY: u32 = 5;

/// one dated ledger entry; a negative amount is a withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Money,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self { date, amount }
    }

    /// financial year this transaction is booked under
    pub fn financial_year(&self) -> FinancialYear {
        calendar::financial_year_of(self.date)
    }
}

/// half-open `[from, to)` date window whose transactions count toward a month
///
/// Amounts posted before the 5th count toward the previous month's balance,
/// so month m draws from `[5th of m-1, 5th of m)`. April opens the year and
/// has no previous month to reach into: its window is `[april 1, april 5)`.
/// A deposit dated exactly on the 5th of a non-april month therefore lands
/// in the next month's window.
pub fn contribution_window(year: FinancialYear, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let from = if month == APR {
        calendar::fiscal_date(year, APR, 1)?
    } else {
        // january reaches under into december of the same calendar year
        let prev = if month == JAN { DEC } else { month - 1 };
        calendar::fiscal_date(year, prev, CONTRIBUTION_CUTOFF_DAY)?
    };
    let to = calendar::fiscal_date(year, month, CONTRIBUTION_CUTOFF_DAY)?;
    Ok((from, to))
}

/// transactions of the slice falling in the month's contribution window
pub fn in_window<'a>(
    transactions: &'a [Transaction],
    year: FinancialYear,
    month: u32,
) -> Result<impl Iterator<Item = &'a Transaction>> {
    let (from, to) = contribution_window(year, month)?;
    Ok(transactions
        .iter()
        .filter(move |t| from <= t.date && t.date < to))
}

/// bucket transactions by financial year, keys ascending
///
/// Ascending iteration is what makes the cross-year balance carry correct;
/// the accrual engine folds over this map in key order.
pub fn group_by_financial_year(
    transactions: &[Transaction],
) -> BTreeMap<FinancialYear, Vec<Transaction>> {
    let mut grouped: BTreeMap<FinancialYear, Vec<Transaction>> = BTreeMap::new();
    for transaction in transactions {
        grouped
            .entry(transaction.financial_year())
            .or_default()
            .push(*transaction);
    }
    grouped
}
