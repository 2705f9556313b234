/// product quote - load configuration, validate a request and print its schedule
use microlend_core::chrono::NaiveDate;
use microlend_core::{
    check_eligibility, quote_for_product, EligibilityResult, LendingConfig, Money, QuotePolicy,
    RepaymentSchedule,
};
use rust_decimal_macros::dec;

const CONFIG: &str = r#"{
    "currency": { "default": "BWP", "symbol": "P", "name": "Botswana Pula", "decimalDigits": 2 },
    "loanProducts": [{
        "id": 1,
        "product_name": "Business Microloan",
        "product_type": "microloan",
        "description": "Working capital for small businesses",
        "min_amount": 5000,
        "max_amount": 100000,
        "min_interest_rate": 0.12,
        "max_interest_rate": 0.24,
        "min_term_days": 30,
        "max_term_days": 365,
        "origination_fee_rate": 0.02
    }],
    "settings": { "apiBaseUrl": "https://api.example.test", "adminEmail": "admin@example.test" }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = LendingConfig::from_json(CONFIG)?;
    let product = config.find_product(1).ok_or("product 1 not configured")?;

    // too small for this product
    if let EligibilityResult::Rejected { message, .. } = check_eligibility(Money::from_major(4_999), product) {
        println!("rejected: {}", message);
    }

    let offer = quote_for_product(Money::from_major(25_000), dec!(15), 365, QuotePolicy::Amortized, product)?;
    println!(
        "payment {} {}, fee {}, disbursed {}",
        config.currency.symbol,
        offer.quote.periodic_payment.rounded(),
        offer.origination_fee.rounded(),
        offer.net_disbursement.rounded(),
    );

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("bad start date")?;
    let schedule = RepaymentSchedule::generate(&offer.quote, start)?;
    for instalment in &schedule.instalments {
        println!(
            "{:>2} {} {:>10} interest {:>8} balance {:>10}",
            instalment.number,
            instalment.due_date,
            instalment.amount,
            instalment.interest_portion,
            instalment.remaining_balance,
        );
    }

    Ok(())
}
