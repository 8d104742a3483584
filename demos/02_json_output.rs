/// json output - serialize the full accrual result for a downstream ui
use ppf_accrual_rs::chrono::NaiveDate;
use ppf_accrual_rs::{compute_accrual, Money, Rate, RateSchedule, Transaction};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let transactions = vec![
        Transaction::new(
            NaiveDate::from_ymd_opt(2018, 4, 3).unwrap(),
            Money::from_major(12_000),
        ),
        Transaction::new(
            NaiveDate::from_ymd_opt(2018, 10, 1).unwrap(),
            Money::from_major(8_000),
        ),
    ];

    let schedule = RateSchedule::default().with_window(
        NaiveDate::from_ymd_opt(2018, 4, 1).unwrap(),
        NaiveDate::from_ymd_opt(2019, 3, 31).unwrap(),
        Rate::from_percentage(dec!(7.6)),
    );

    let result = compute_accrual(&transactions, &schedule)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
