use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LendingError, Result};
use crate::types::{ProductCategory, ProductId};

/// a lending product as configured by the platform administrators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanProduct {
    pub id: ProductId,
    #[serde(rename = "product_name")]
    pub name: String,
    #[serde(rename = "product_type")]
    pub category: ProductCategory,
    #[serde(default)]
    pub description: String,
    pub min_amount: Money,
    pub max_amount: Money,
    pub min_interest_rate: Rate,
    pub max_interest_rate: Rate,
    pub min_term_days: u32,
    pub max_term_days: u32,
    pub origination_fee_rate: Rate,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl LoanProduct {
    pub fn builder() -> LoanProductBuilder {
        LoanProductBuilder::new()
    }

    /// check every bounded pair and the fee rate
    pub fn validate(&self) -> Result<()> {
        let fail = |message: String| {
            Err(LendingError::invalid_config(format!(
                "product {} ({}): {}",
                self.id, self.name, message
            )))
        };

        if self.name.trim().is_empty() {
            return fail("product name must not be empty".to_string());
        }
        if !self.min_amount.is_positive() {
            return fail(format!("minimum amount {} must be positive", self.min_amount));
        }
        if self.min_amount > self.max_amount {
            return fail(format!(
                "minimum amount {} exceeds maximum amount {}",
                self.min_amount, self.max_amount
            ));
        }
        if self.min_interest_rate.is_negative() {
            return fail(format!(
                "minimum interest rate {} must not be negative",
                self.min_interest_rate
            ));
        }
        if self.min_interest_rate > self.max_interest_rate {
            return fail(format!(
                "minimum interest rate {} exceeds maximum interest rate {}",
                self.min_interest_rate, self.max_interest_rate
            ));
        }
        if self.min_term_days == 0 {
            return fail("minimum term must be at least one day".to_string());
        }
        if self.min_term_days > self.max_term_days {
            return fail(format!(
                "minimum term {} days exceeds maximum term {} days",
                self.min_term_days, self.max_term_days
            ));
        }
        if self.origination_fee_rate.is_negative() || self.origination_fee_rate >= Rate::ONE {
            return fail(format!(
                "origination fee rate {} must be in [0%, 100%)",
                self.origination_fee_rate
            ));
        }

        Ok(())
    }

    /// origination fee charged on a principal, informational only
    pub fn origination_fee(&self, principal: Money) -> Money {
        principal.fraction(self.origination_fee_rate)
    }
}

/// builder for loan products, defaults mirror a freshly added admin product
pub struct LoanProductBuilder {
    id: Option<ProductId>,
    name: Option<String>,
    category: ProductCategory,
    description: String,
    amount_range: (Money, Money),
    rate_range: (Rate, Rate),
    term_range: (u32, u32),
    origination_fee_rate: Rate,
    active: bool,
}

impl LoanProductBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            category: ProductCategory::Custom,
            description: String::new(),
            amount_range: (Money::from_major(5_000), Money::from_major(50_000)),
            rate_range: (Rate::from_decimal(dec!(0.10)), Rate::from_decimal(dec!(0.20))),
            term_range: (30, 365),
            origination_fee_rate: Rate::from_decimal(dec!(0.025)),
            active: true,
        }
    }

    pub fn id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: ProductCategory) -> Self {
        self.category = category;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn amount_range(mut self, min: Money, max: Money) -> Self {
        self.amount_range = (min, max);
        self
    }

    pub fn rate_range(mut self, min: Rate, max: Rate) -> Self {
        self.rate_range = (min, max);
        self
    }

    pub fn term_range(mut self, min_days: u32, max_days: u32) -> Self {
        self.term_range = (min_days, max_days);
        self
    }

    pub fn origination_fee_rate(mut self, rate: Rate) -> Self {
        self.origination_fee_rate = rate;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn build(self) -> Result<LoanProduct> {
        let id = self.id.ok_or_else(|| LendingError::invalid_config("product id required"))?;
        let name = self
            .name
            .ok_or_else(|| LendingError::invalid_config("product name required"))?;

        let product = LoanProduct {
            id,
            name,
            category: self.category,
            description: self.description,
            min_amount: self.amount_range.0,
            max_amount: self.amount_range.1,
            min_interest_rate: self.rate_range.0,
            max_interest_rate: self.rate_range.1,
            min_term_days: self.term_range.0,
            max_term_days: self.term_range.1,
            origination_fee_rate: self.origination_fee_rate,
            active: self.active,
        };
        product.validate()?;
        Ok(product)
    }
}

impl Default for LoanProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}
