use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::quote::overflow;

/// days in the simple-interest year basis
pub const YEAR_BASIS_DAYS: u32 = 365;

/// days in one simple-interest instalment period
pub const INSTALMENT_PERIOD_DAYS: u32 = 30;

/// amounts produced by the simple-interest policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SimpleTerms {
    pub interest: Money,
    pub total: Money,
    pub periodic_payment: Money,
    pub instalments: u32,
}

/// linear interest over the term, no compounding
pub(crate) fn simple_interest(principal: Money, annual_rate: Rate, term_days: u32) -> Result<SimpleTerms> {
    let days = Decimal::from(term_days);

    let interest = principal
        .as_decimal()
        .checked_mul(annual_rate.as_decimal())
        .and_then(|v| v.checked_mul(days))
        .and_then(|v| v.checked_div(Decimal::from(YEAR_BASIS_DAYS)))
        .ok_or_else(|| overflow("interest"))?;

    let total = principal
        .as_decimal()
        .checked_add(interest)
        .ok_or_else(|| overflow("total repayment"))?;

    let periods = days / Decimal::from(INSTALMENT_PERIOD_DAYS);
    let periodic_payment = total.checked_div(periods).ok_or_else(|| overflow("periodic payment"))?;

    Ok(SimpleTerms {
        interest: Money::from_decimal(interest),
        total: Money::from_decimal(total),
        periodic_payment: Money::from_decimal(periodic_payment),
        instalments: instalment_count(term_days),
    })
}

/// number of ~30-day instalments needed to cover the term, the last one may be partial
pub fn instalment_count(term_days: u32) -> u32 {
    term_days.div_ceil(INSTALMENT_PERIOD_DAYS)
}

/// share of each instalment that is interest
pub(crate) fn interest_share(interest: Money, total: Money) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    interest.as_decimal() / total.as_decimal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_year_at_fifteen_percent() {
        let terms = simple_interest(Money::from_major(10_000), Rate::from_percentage(15), 365).unwrap();

        assert_eq!(terms.interest.as_decimal(), dec!(1500));
        assert_eq!(terms.total.as_decimal(), dec!(11500));
        assert_eq!(terms.periodic_payment.rounded().as_decimal(), dec!(945.21));
        assert_eq!(terms.instalments, 13);
    }

    #[test]
    fn test_short_term_single_instalment() {
        let terms = simple_interest(Money::from_major(1_000), Rate::from_percentage(10), 15).unwrap();

        assert_eq!(terms.instalments, 1);
        // half a period, so the "periodic" payment is double the total
        assert_eq!(terms.periodic_payment, terms.total * dec!(2));
    }

    #[test]
    fn test_instalment_count() {
        assert_eq!(instalment_count(1), 1);
        assert_eq!(instalment_count(30), 1);
        assert_eq!(instalment_count(31), 2);
        assert_eq!(instalment_count(90), 3);
    }

    #[test]
    fn test_zero_rate() {
        let terms = simple_interest(Money::from_major(3_000), Rate::ZERO, 90).unwrap();
        assert!(terms.interest.is_zero());
        assert_eq!(terms.periodic_payment, Money::from_major(1_000));
    }
}
