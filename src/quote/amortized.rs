use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::quote::overflow;

/// days treated as one month when converting a term to instalments
pub const DAYS_PER_MONTH: u32 = 30;

/// amounts produced by the amortized policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AmortizedTerms {
    pub payment: Money,
    pub total: Money,
    pub interest: Money,
    pub months: u32,
}

/// whole months in a term: term_days / 30 rounded half-up, never below one
pub fn term_months(term_days: u32) -> u32 {
    (term_days.saturating_add(DAYS_PER_MONTH / 2) / DAYS_PER_MONTH).max(1)
}

/// equal monthly instalments on a compounding balance
pub(crate) fn amortized(principal: Money, annual_rate: Rate, term_days: u32) -> Result<AmortizedTerms> {
    let months = term_months(term_days);
    let payment = level_payment(principal, annual_rate, months)?;

    // principal / n is truncated at 28 digits, so payment * n can land below principal
    if annual_rate.monthly_rate().as_decimal().is_zero() {
        return Ok(AmortizedTerms {
            payment,
            total: principal,
            interest: Money::ZERO,
            months,
        });
    }

    let total = payment
        .as_decimal()
        .checked_mul(Decimal::from(months))
        .ok_or_else(|| overflow("total repayment"))?;
    let total = Money::from_decimal(total);

    Ok(AmortizedTerms {
        payment,
        total,
        interest: total - principal,
        months,
    })
}

/// payment = P * r * (1 + r)^n / ((1 + r)^n - 1)
pub(crate) fn level_payment(principal: Money, annual_rate: Rate, months: u32) -> Result<Money> {
    let r = annual_rate.monthly_rate().as_decimal();

    if r.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..months {
        compound = compound
            .checked_mul(base)
            .ok_or_else(|| overflow("compounding factor"))?;
    }

    let numerator = principal
        .as_decimal()
        .checked_mul(r)
        .and_then(|v| v.checked_mul(compound))
        .ok_or_else(|| overflow("periodic payment"))?;
    let denominator = compound - Decimal::ONE;

    let payment = numerator
        .checked_div(denominator)
        .ok_or_else(|| overflow("periodic payment"))?;

    Ok(Money::from_decimal(payment))
}
