use std::collections::BTreeMap;

use log::debug;

use crate::calendar::{self, FinancialYear, MONTHS_PER_YEAR};
use crate::decimal::Money;
use crate::errors::Result;
use crate::ledger::{self, Transaction};
use crate::rates::RateSchedule;

use super::{FinancialYearSummary, MonthRow};

/// engine for accruing interest over april..march financial years
pub struct AccrualEngine {
    schedule: RateSchedule,
}

impl AccrualEngine {
    pub fn new(schedule: RateSchedule) -> Self {
        Self { schedule }
    }

    /// build the 12-row accrual table for one financial year
    ///
    /// The balance threads through the months as a local accumulator: each
    /// month folds its in-window transaction amounts in first, then accrues
    /// interest on the updated balance at that month's rate. Interest rounds
    /// to 2 decimal places per month and is never folded back into the
    /// balance within the year.
    pub fn project_year(
        &self,
        transactions: &[Transaction],
        year: FinancialYear,
        opening_balance: Money,
    ) -> Result<FinancialYearSummary> {
        let mut balance = opening_balance;
        let mut months = Vec::with_capacity(MONTHS_PER_YEAR as usize);

        for month in calendar::fiscal_months() {
            let month_end = calendar::fiscal_date(year, month, calendar::last_day_of_month(month)?)?;
            let annual_rate = self.schedule.rate_on(month_end);
            let monthly_rate = annual_rate.monthly_rate();

            for transaction in ledger::in_window(transactions, year, month)? {
                balance += transaction.amount;
            }

            let interest = (balance * monthly_rate.as_decimal()).round_dp(2);
            months.push(MonthRow {
                month,
                rate: annual_rate,
                effective_balance: balance,
                effective_interest: interest,
            });
        }

        let interest_earned = months
            .iter()
            .fold(Money::ZERO, |sum, row| sum + row.effective_interest)
            .round_dp(2);
        let closing_balance = months
            .last()
            .map(|row| row.effective_balance)
            .unwrap_or(opening_balance);

        Ok(FinancialYearSummary {
            year,
            months,
            interest_earned,
            closing_balance,
        })
    }

    /// run every financial year present in the ledger, oldest first
    ///
    /// The carry is an explicit fold accumulator: each processed year opens
    /// at the previous processed year's closing balance plus interest, and
    /// the first at zero. Years without transactions produce no summary and
    /// do not interrupt the carry.
    pub fn process(
        &self,
        transactions: &[Transaction],
    ) -> Result<BTreeMap<FinancialYear, FinancialYearSummary>> {
        let grouped = ledger::group_by_financial_year(transactions);
        let mut summaries = BTreeMap::new();
        let mut opening_balance = Money::ZERO;

        for (year, yearly_transactions) in grouped {
            debug!(
                "accruing fy {} over {} transactions, opening balance {}",
                year,
                yearly_transactions.len(),
                opening_balance
            );
            let summary = self.project_year(&yearly_transactions, year, opening_balance)?;
            opening_balance = summary.carry_forward();
            summaries.insert(year, summary);
        }

        Ok(summaries)
    }
}
