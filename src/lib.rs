pub mod accrual;
pub mod calendar;
pub mod decimal;
pub mod errors;
pub mod ledger;
pub mod rates;


// re-export key types
pub use accrual::{compute_accrual, AccrualEngine, FinancialYearSummary, MonthRow};
pub use calendar::FinancialYear;
pub use decimal::{Money, Rate};
pub use errors::{AccrualError, Result};
pub use ledger::Transaction;
pub use rates::{RateSchedule, RateWindow};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
