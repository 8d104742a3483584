/// multi-year ledger - balance and interest carry across financial years
use ppf_accrual_rs::chrono::NaiveDate;
use ppf_accrual_rs::{compute_accrual, Money, Rate, RateSchedule, Transaction};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // monthly deposits across fy 2018 and fy 2019, one withdrawal in between
    let mut transactions: Vec<Transaction> = (0..9)
        .map(|i| Transaction::new(date(2018, 4 + i, 2), Money::from_major(5_000)))
        .collect();
    transactions.push(Transaction::new(date(2019, 6, 1), Money::from_major(10_000)));
    transactions.push(Transaction::new(date(2019, 11, 2), Money::from_major(-4_000)));

    // published rate dropped from 8% to 7.9% at the fiscal year change
    let schedule = RateSchedule::default()
        .with_window(date(2018, 4, 1), date(2019, 3, 31), Rate::from_percentage(dec!(8)))
        .with_window(date(2019, 4, 1), date(2020, 3, 31), Rate::from_percentage(dec!(7.9)));

    let result = compute_accrual(&transactions, &schedule)?;

    for (year, summary) in &result {
        println!(
            "fy {}: opens {}, closes {}, interest {}",
            year,
            summary.months[0].effective_balance,
            summary.closing_balance,
            summary.interest_earned
        );
    }

    let last = result.values().last().expect("ledger is not empty");
    println!("balance to carry into the next year: {}", last.carry_forward());

    Ok(())
}
