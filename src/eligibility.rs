use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{LendingError, Result};
use crate::product::LoanProduct;
use crate::quote::{compute_loan_quote, LoanQuote};
use crate::types::{BoundViolation, ProductId, QuotePolicy};

/// outcome of checking a requested amount against a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityResult {
    Accepted,
    Rejected {
        violation: BoundViolation,
        message: String,
    },
}

impl EligibilityResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EligibilityResult::Accepted)
    }

    /// turn a rejection into an `OutOfRange` error
    pub fn into_result(self) -> Result<()> {
        match self {
            EligibilityResult::Accepted => Ok(()),
            EligibilityResult::Rejected { message, .. } => Err(LendingError::OutOfRange { message }),
        }
    }
}

/// accepted iff min_amount <= amount <= max_amount
pub fn check_eligibility(amount: Money, product: &LoanProduct) -> EligibilityResult {
    let range = format!("allowed range {} - {}", product.min_amount, product.max_amount);

    if amount < product.min_amount {
        return EligibilityResult::Rejected {
            violation: BoundViolation::AmountBelowMinimum,
            message: format!("amount below minimum of {} ({})", product.min_amount, range),
        };
    }
    if amount > product.max_amount {
        return EligibilityResult::Rejected {
            violation: BoundViolation::AmountAboveMaximum,
            message: format!("amount above maximum of {} ({})", product.max_amount, range),
        };
    }

    EligibilityResult::Accepted
}

/// outcome of checking an offered rate and term against a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermsCheck {
    Accepted,
    Rejected { violations: Vec<(BoundViolation, String)> },
}

impl TermsCheck {
    pub fn is_accepted(&self) -> bool {
        matches!(self, TermsCheck::Accepted)
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            TermsCheck::Accepted => Ok(()),
            TermsCheck::Rejected { violations } => Err(LendingError::OutOfRange {
                message: violations
                    .into_iter()
                    .map(|(_, message)| message)
                    .collect::<Vec<_>>()
                    .join("; "),
            }),
        }
    }
}

/// check an annual rate (percent) and term (days) against the product's ranges
pub fn check_terms(annual_rate_percent: Decimal, term_days: u32, product: &LoanProduct) -> TermsCheck {
    let rate = Rate::from_percent(annual_rate_percent);
    let mut violations = Vec::new();

    let rate_range = format!(
        "allowed range {} - {}",
        product.min_interest_rate, product.max_interest_rate
    );
    if rate < product.min_interest_rate {
        violations.push((
            BoundViolation::RateBelowMinimum,
            format!("rate below minimum of {} ({})", product.min_interest_rate, rate_range),
        ));
    } else if rate > product.max_interest_rate {
        violations.push((
            BoundViolation::RateAboveMaximum,
            format!("rate above maximum of {} ({})", product.max_interest_rate, rate_range),
        ));
    }

    let term_range = format!(
        "allowed range {} - {} days",
        product.min_term_days, product.max_term_days
    );
    if term_days < product.min_term_days {
        violations.push((
            BoundViolation::TermBelowMinimum,
            format!("term below minimum of {} days ({})", product.min_term_days, term_range),
        ));
    } else if term_days > product.max_term_days {
        violations.push((
            BoundViolation::TermAboveMaximum,
            format!("term above maximum of {} days ({})", product.max_term_days, term_range),
        ));
    }

    if violations.is_empty() {
        TermsCheck::Accepted
    } else {
        TermsCheck::Rejected { violations }
    }
}

/// quote for a specific product, with the origination fee it would charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuote {
    pub product_id: ProductId,
    pub quote: LoanQuote,
    pub origination_fee: Money,
    pub net_disbursement: Money,
}

/// validate a request against a product and quote it
pub fn quote_for_product(
    amount: Money,
    annual_rate_percent: Decimal,
    term_days: u32,
    policy: QuotePolicy,
    product: &LoanProduct,
) -> Result<ProductQuote> {
    if !product.active {
        return Err(LendingError::invalid_input(
            "product",
            format!("product {} ({}) is not active", product.id, product.name),
        ));
    }

    check_eligibility(amount, product).into_result()?;
    check_terms(annual_rate_percent, term_days, product).into_result()?;

    let quote = compute_loan_quote(amount, annual_rate_percent, term_days, policy)?;
    let origination_fee = product.origination_fee(amount);

    debug!(product_id = product.id, fee = %origination_fee.rounded(), "quoted product");

    Ok(ProductQuote {
        product_id: product.id,
        net_disbursement: amount - origination_fee,
        origination_fee,
        quote,
    })
}
