use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::Money;
use crate::errors::{LendingError, Result};
use crate::quote::simple::{interest_share, INSTALMENT_PERIOD_DAYS};
use crate::quote::LoanQuote;
use crate::types::QuotePolicy;

/// one payment in a repayment schedule, amounts rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledInstalment {
    pub number: u32,
    pub due_date: NaiveDate,
    pub amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub remaining_balance: Money,
}

/// dated breakdown of a loan quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    pub policy: QuotePolicy,
    pub start_date: NaiveDate,
    pub instalments: Vec<ScheduledInstalment>,
    pub total_paid: Money,
    pub total_interest: Money,
}

impl RepaymentSchedule {
    /// expand a quote into instalments starting from the disbursement date
    pub fn generate(quote: &LoanQuote, start_date: NaiveDate) -> Result<Self> {
        let instalments = match quote.policy {
            QuotePolicy::SimpleInterest => simple_instalments(quote, start_date)?,
            QuotePolicy::Amortized => amortized_instalments(quote, start_date)?,
        };

        let total_paid: Money = instalments.iter().map(|i| i.amount).sum();
        let total_interest: Money = instalments.iter().map(|i| i.interest_portion).sum();

        debug!(
            policy = ?quote.policy,
            count = instalments.len(),
            %total_paid,
            "generated repayment schedule"
        );

        Ok(Self {
            policy: quote.policy,
            start_date,
            instalments,
            total_paid,
            total_interest,
        })
    }

    /// get instalment by its 1-based number
    pub fn get(&self, number: u32) -> Option<&ScheduledInstalment> {
        number
            .checked_sub(1)
            .and_then(|index| self.instalments.get(index as usize))
    }

    /// date of the final instalment
    pub fn maturity_date(&self) -> Option<NaiveDate> {
        self.instalments.last().map(|i| i.due_date)
    }
}

/// level 30-day payments, interest split pro rata, last one absorbs rounding
fn simple_instalments(quote: &LoanQuote, start_date: NaiveDate) -> Result<Vec<ScheduledInstalment>> {
    let count = quote.instalments;
    let total = quote.total_repayment.rounded();
    let interest_total = quote.total_interest.rounded();
    let share = interest_share(quote.total_interest, quote.total_repayment);
    let payment = quote.periodic_payment.rounded();
    let maturity = add_days(start_date, quote.term_days)?;

    let mut instalments = Vec::new();
    let mut paid = Money::ZERO;
    let mut interest_paid = Money::ZERO;
    let mut principal_left = quote.principal.rounded();

    for number in 1..=count {
        let is_last = number == count;

        // sub-cent loans can reach the total early, the remaining instalments are then zero
        let (amount, interest_portion, due_date) = if is_last {
            (
                total - paid,
                (interest_total - interest_paid).max(Money::ZERO),
                maturity,
            )
        } else {
            let amount = payment.min(total - paid);
            (
                amount,
                (amount * share).rounded().min(interest_total - interest_paid),
                add_days(start_date, number * INSTALMENT_PERIOD_DAYS)?,
            )
        };
        let principal_portion = amount - interest_portion;

        paid += amount;
        interest_paid += interest_portion;
        principal_left = (principal_left - principal_portion).max(Money::ZERO);

        instalments.push(ScheduledInstalment {
            number,
            due_date,
            amount,
            interest_portion,
            principal_portion,
            remaining_balance: principal_left,
        });
    }

    Ok(instalments)
}

/// monthly payments on a declining balance, last one clears the balance
fn amortized_instalments(quote: &LoanQuote, start_date: NaiveDate) -> Result<Vec<ScheduledInstalment>> {
    let count = quote.instalments;
    let monthly_rate = quote.annual_rate.monthly_rate().as_decimal();
    let payment = quote.periodic_payment.rounded();
    add_months(start_date, count)?;

    let mut instalments = Vec::new();
    let mut balance = quote.principal.rounded();

    for number in 1..=count {
        let interest_portion = (balance * monthly_rate).rounded();
        let principal_portion = if number == count {
            balance
        } else {
            (payment - interest_portion).min(balance)
        };
        let amount = principal_portion + interest_portion;
        balance -= principal_portion;

        instalments.push(ScheduledInstalment {
            number,
            due_date: add_months(start_date, number)?,
            amount,
            interest_portion,
            principal_portion,
            remaining_balance: balance,
        });
    }

    Ok(instalments)
}

fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days as u64))
        .ok_or_else(|| LendingError::invalid_input("start date", "schedule runs past the supported calendar"))
}

fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| LendingError::invalid_input("start date", "schedule runs past the supported calendar"))
}
