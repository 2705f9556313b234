/// quick start - quote the same loan under both policies
use microlend_core::{compute_loan_quote, Money, QuotePolicy};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // P10,000 at 15% for a year
    let principal = Money::from_major(10_000);

    for policy in [QuotePolicy::SimpleInterest, QuotePolicy::Amortized] {
        let quote = compute_loan_quote(principal, dec!(15), 365, policy)?;
        println!("{}", quote.to_json_pretty()?);
    }

    Ok(())
}
