use microlend_core::quote::term_months;
use microlend_core::{
    check_eligibility, compute_loan_quote, quote_for_product, Decimal, LendingConfig, LoanProduct, Money,
    QuotePolicy, Rate, RepaymentSchedule,
};
use microlend_core::chrono::NaiveDate;
use rust_decimal_macros::dec;

const PRINCIPALS: [i64; 5] = [1, 250, 5_000, 25_000, 1_000_000];
const TERMS: [u32; 7] = [1, 29, 30, 45, 90, 365, 730];

fn rates() -> Vec<Decimal> {
    vec![dec!(0), dec!(0.5), dec!(5), dec!(12.75), dec!(15), dec!(36), dec!(120)]
}

#[test_log::test]
fn simple_total_is_principal_plus_interest() {
    for principal in PRINCIPALS {
        for rate in rates() {
            for term in TERMS {
                let principal = Money::from_major(principal);
                let quote = compute_loan_quote(principal, rate, term, QuotePolicy::SimpleInterest).unwrap();

                assert_eq!(quote.total_repayment, principal + quote.total_interest);
                assert!(!quote.total_interest.is_negative());
            }
        }
    }
}

#[test_log::test]
fn amortized_payment_increases_with_rate() {
    for principal in PRINCIPALS {
        for term in TERMS {
            let payments: Vec<Money> = rates()
                .into_iter()
                .map(|rate| {
                    compute_loan_quote(Money::from_major(principal), rate, term, QuotePolicy::Amortized)
                        .unwrap()
                        .periodic_payment
                })
                .collect();

            for pair in payments.windows(2) {
                assert!(pair[1] > pair[0], "payment not increasing: {:?}", payments);
            }
        }
    }
}

#[test_log::test]
fn zero_rate_amortized_divides_principal() {
    for principal in PRINCIPALS {
        for term in TERMS {
            let principal = Money::from_major(principal);
            let quote = compute_loan_quote(principal, dec!(0), term, QuotePolicy::Amortized).unwrap();
            let months = term_months(term);

            assert_eq!(quote.instalments, months);
            assert_eq!(quote.periodic_payment, principal / Decimal::from(months));
            assert!(quote.total_interest.is_zero());
        }
    }
}

#[test_log::test]
fn eligibility_matches_bounds() {
    let product = LoanProduct::builder()
        .id(42)
        .name("Microloan")
        .amount_range(Money::from_major(5_000), Money::from_major(100_000))
        .build()
        .unwrap();

    for amount in [0, 4_999, 5_000, 5_001, 50_000, 99_999, 100_000, 100_001] {
        let money = Money::from_major(amount);
        let expected = (5_000..=100_000).contains(&amount);
        assert_eq!(check_eligibility(money, &product).is_accepted(), expected, "amount {}", amount);
    }
}

#[test_log::test]
fn config_to_schedule_end_to_end() {
    let json = r#"{
        "currency": { "default": "BWP", "symbol": "P", "name": "Botswana Pula", "decimalDigits": 2 },
        "loanProducts": [{
            "id": 1,
            "product_name": "Invoice Discounting",
            "product_type": "invoice_discount",
            "min_amount": 5000,
            "max_amount": 100000,
            "min_interest_rate": 0.1,
            "max_interest_rate": 0.2,
            "min_term_days": 30,
            "max_term_days": 365,
            "origination_fee_rate": 0.025
        }],
        "settings": { "apiBaseUrl": "https://api.example.test", "adminEmail": "ops@example.test" }
    }"#;

    let config = LendingConfig::from_json(json).unwrap();
    let product = config.find_product(1).unwrap();

    let offer = quote_for_product(Money::from_major(20_000), dec!(18), 180, QuotePolicy::Amortized, product)
        .unwrap();
    assert_eq!(offer.origination_fee, Money::from_major(500));
    assert_eq!(offer.net_disbursement, Money::from_major(19_500));
    assert_eq!(offer.quote.instalments, 6);
    assert_eq!(offer.quote.annual_rate, Rate::from_percentage(18));

    let start = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    let schedule = RepaymentSchedule::generate(&offer.quote, start).unwrap();

    assert_eq!(schedule.instalments.len(), 6);
    assert_eq!(schedule.maturity_date(), NaiveDate::from_ymd_opt(2025, 9, 15));
    assert_eq!(schedule.instalments.last().unwrap().remaining_balance, Money::ZERO);

    let principal_repaid: Money = schedule.instalments.iter().map(|i| i.principal_portion).sum();
    assert_eq!(principal_repaid, Money::from_major(20_000));
}
