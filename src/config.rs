use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{LendingError, Result};
use crate::product::LoanProduct;
use crate::types::ProductId;

/// platform configuration as published by the admin console
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingConfig {
    pub currency: CurrencySettings,
    #[serde(default)]
    pub loan_products: Vec<LoanProduct>,
    pub settings: PlatformSettings,
}

/// currency the platform lends in; formatting itself happens in the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySettings {
    /// ISO 4217 code
    #[serde(rename = "default")]
    pub code: String,
    pub symbol: String,
    pub name: String,
    pub decimal_digits: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    pub api_base_url: String,
    pub admin_email: String,
    #[serde(default)]
    pub auto_refresh: bool,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            code: "BWP".to_string(),
            symbol: "P".to_string(),
            name: "Botswana Pula".to_string(),
            decimal_digits: 2,
        }
    }
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://monei-api.tmugore.workers.dev".to_string(),
            admin_email: "admin@monei.co.bw".to_string(),
            auto_refresh: true,
        }
    }
}

impl LendingConfig {
    /// parse and validate a json document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LendingConfig = serde_json::from_str(json)?;
        config.validate()?;
        info!(
            currency = %config.currency.code,
            products = config.loan_products.len(),
            "loaded lending configuration"
        );
        Ok(config)
    }

    /// read, parse and validate a json file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(error = %err, "rejected lending configuration");
        }
        result
    }

    fn check(&self) -> Result<()> {
        self.currency.validate()?;
        self.settings.validate()?;

        let mut seen = HashSet::new();
        for product in &self.loan_products {
            if !seen.insert(product.id) {
                return Err(LendingError::invalid_config(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            product.validate()?;
        }

        Ok(())
    }

    pub fn active_products(&self) -> impl Iterator<Item = &LoanProduct> {
        self.loan_products.iter().filter(|p| p.active)
    }

    pub fn find_product(&self, id: ProductId) -> Option<&LoanProduct> {
        self.loan_products.iter().find(|p| p.id == id)
    }
}

impl CurrencySettings {
    pub fn validate(&self) -> Result<()> {
        if self.code.len() != 3 || !self.code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(LendingError::invalid_config(format!(
                "currency code '{}' must be three uppercase letters",
                self.code
            )));
        }
        if self.symbol.trim().is_empty() {
            return Err(LendingError::invalid_config("currency symbol must not be empty"));
        }
        if self.decimal_digits > 8 {
            return Err(LendingError::invalid_config(format!(
                "currency decimal digits {} exceeds 8",
                self.decimal_digits
            )));
        }
        Ok(())
    }
}

impl PlatformSettings {
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(LendingError::invalid_config("api base url must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::types::ProductCategory;

    const SAMPLE: &str = r#"{
        "currency": {
            "default": "BWP",
            "symbol": "P",
            "name": "Botswana Pula",
            "decimalDigits": 2
        },
        "loanProducts": [
            {
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
                "origination_fee_rate": 0.02,
                "active": true
            },
            {
                "id": 2,
                "product_name": "PO Financing",
                "product_type": "purchase_order",
                "min_amount": 10000,
                "max_amount": 500000,
                "min_interest_rate": 0.1,
                "max_interest_rate": 0.2,
                "min_term_days": 30,
                "max_term_days": 180,
                "origination_fee_rate": 0.025,
                "active": false
            }
        ],
        "websiteContent": { "hero": { "title": "ignored" } },
        "settings": {
            "apiBaseUrl": "https://api.example.test",
            "adminEmail": "admin@example.test",
            "autoRefresh": true
        }
    }"#;

    #[test]
    fn test_load_sample() {
        let config = LendingConfig::from_json(SAMPLE).unwrap();

        assert_eq!(config.currency.code, "BWP");
        assert_eq!(config.currency.decimal_digits, 2);
        assert_eq!(config.loan_products.len(), 2);
        assert_eq!(config.find_product(2).unwrap().category, ProductCategory::PurchaseOrder);
        assert_eq!(config.find_product(1).unwrap().min_amount, Money::from_major(5_000));
        assert!(config.find_product(3).is_none());

        let active: Vec<_> = config.active_products().map(|p| p.id).collect();
        assert_eq!(active, vec![1]);
    }

    #[test]
    fn test_inverted_bounds_rejected_at_load() {
        let broken = SAMPLE.replace("\"max_amount\": 100000", "\"max_amount\": 1000");
        let err = LendingConfig::from_json(&broken).unwrap_err();

        assert!(matches!(err, LendingError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("exceeds maximum amount"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let broken = SAMPLE.replace("\"purchase_order\"", "\"crowdfunding\"");
        assert!(matches!(
            LendingConfig::from_json(&broken),
            Err(LendingError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_field_rejected() {
        let broken = SAMPLE.replace("\"origination_fee_rate\": 0.025,", "");
        assert!(matches!(
            LendingConfig::from_json(&broken),
            Err(LendingError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let broken = SAMPLE.replace("\"id\": 2", "\"id\": 1");
        let err = LendingConfig::from_json(&broken).unwrap_err();
        assert!(err.to_string().contains("duplicate product id 1"));
    }

    #[test]
    fn test_currency_code_validated() {
        let mut config = LendingConfig::default();
        config.currency.code = "pula".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_is_valid() {
        let config = LendingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency.name, "Botswana Pula");
        assert!(config.loan_products.is_empty());
    }

    #[test]
    fn test_round_trip_keeps_field_names() {
        let config = LendingConfig::from_json(SAMPLE).unwrap();
        let json = config.to_json_pretty().unwrap();

        assert!(json.contains("\"loanProducts\""));
        assert!(json.contains("\"product_name\""));
        assert!(json.contains("\"decimalDigits\""));
    }
}
