pub mod amortized;
pub mod simple;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{LendingError, Result};
use crate::types::QuotePolicy;

pub use amortized::term_months;
pub use simple::instalment_count;

/// payments, interest and total repayment for one set of loan inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub policy: QuotePolicy,
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_days: u32,
    /// number of scheduled payments (30-day periods or whole months)
    pub instalments: u32,
    pub periodic_payment: Money,
    pub total_interest: Money,
    pub total_repayment: Money,
}

impl LoanQuote {
    /// copy with every monetary amount rounded to two decimal places
    pub fn rounded(&self) -> Self {
        Self {
            periodic_payment: self.periodic_payment.rounded(),
            total_interest: self.total_interest.rounded(),
            total_repayment: self.total_repayment.rounded(),
            ..self.clone()
        }
    }

    /// convert to pretty-printed json string, amounts rounded for display
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.rounded())
    }
}

/// calculator bound to one quote policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanTermsCalculator {
    policy: QuotePolicy,
}

impl LoanTermsCalculator {
    pub fn new(policy: QuotePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> QuotePolicy {
        self.policy
    }

    pub fn quote(&self, principal: Money, annual_rate_percent: Decimal, term_days: u32) -> Result<LoanQuote> {
        compute_loan_quote(principal, annual_rate_percent, term_days, self.policy)
    }
}

/// compute a quote for principal, annual rate in percent and term in days
pub fn compute_loan_quote(
    principal: Money,
    annual_rate_percent: Decimal,
    term_days: u32,
    policy: QuotePolicy,
) -> Result<LoanQuote> {
    if !principal.is_positive() {
        return Err(LendingError::invalid_input(
            "principal",
            format!("must be positive, got {}", principal),
        ));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(LendingError::invalid_input(
            "annual rate",
            format!("must not be negative, got {}%", annual_rate_percent),
        ));
    }
    if term_days == 0 {
        return Err(LendingError::invalid_input("term", "must be at least one day"));
    }

    let annual_rate = Rate::from_percent(annual_rate_percent);

    let quote = match policy {
        QuotePolicy::SimpleInterest => {
            let terms = simple::simple_interest(principal, annual_rate, term_days)?;
            LoanQuote {
                policy,
                principal,
                annual_rate,
                term_days,
                instalments: terms.instalments,
                periodic_payment: terms.periodic_payment,
                total_interest: terms.interest,
                total_repayment: terms.total,
            }
        }
        QuotePolicy::Amortized => {
            let terms = amortized::amortized(principal, annual_rate, term_days)?;
            LoanQuote {
                policy,
                principal,
                annual_rate,
                term_days,
                instalments: terms.months,
                periodic_payment: terms.payment,
                total_interest: terms.interest,
                total_repayment: terms.total,
            }
        }
    };

    debug!(
        ?policy,
        %principal,
        %annual_rate,
        term_days,
        payment = %quote.periodic_payment.rounded(),
        "computed loan quote"
    );

    Ok(quote)
}

pub(crate) fn overflow(what: &str) -> LendingError {
    LendingError::invalid_input("loan inputs", format!("{} exceeds representable range", what))
}
