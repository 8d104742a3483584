/// quick start - minimal example to get started
use ppf_accrual_rs::chrono::NaiveDate;
use ppf_accrual_rs::{compute_accrual, Money, Rate, RateSchedule, Transaction};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // deposit 1,000 right at the start of fy 2018
    let transactions = vec![Transaction::new(
        NaiveDate::from_ymd_opt(2018, 4, 2).unwrap(),
        Money::from_major(1_000),
    )];

    // 8% annual across the whole year
    let schedule = RateSchedule::default().with_window(
        NaiveDate::from_ymd_opt(2018, 4, 1).unwrap(),
        NaiveDate::from_ymd_opt(2019, 3, 31).unwrap(),
        Rate::from_percentage(dec!(8)),
    );

    let result = compute_accrual(&transactions, &schedule)?;

    for (year, summary) in &result {
        println!(
            "fy {}: interest earned {}, closing balance {}",
            year, summary.interest_earned, summary.closing_balance
        );
        for row in &summary.months {
            println!(
                "  month {:>2} @ {:>6}  balance {:>10}  interest {:>8}",
                row.month, row.rate, row.effective_balance, row.effective_interest
            );
        }
    }

    Ok(())
}
