pub mod config;
pub mod decimal;
pub mod eligibility;
pub mod errors;
pub mod product;
pub mod quote;
pub mod schedule;
pub mod types;

// re-export key types
pub use config::{CurrencySettings, LendingConfig, PlatformSettings};
pub use decimal::{Money, Rate};
pub use eligibility::{
    check_eligibility, check_terms, quote_for_product, EligibilityResult, ProductQuote, TermsCheck,
};
pub use errors::{LendingError, Result};
pub use product::{LoanProduct, LoanProductBuilder};
pub use quote::{compute_loan_quote, LoanQuote, LoanTermsCalculator};
pub use schedule::{RepaymentSchedule, ScheduledInstalment};
pub use types::{BoundViolation, ProductCategory, ProductId, QuotePolicy};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
