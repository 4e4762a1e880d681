//! Money and salary value objects

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Non-negative monetary amount with a 3-letter currency code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    currency: String,
}

impl Money {
    /// Create a validated amount of money
    pub fn create(amount: f64, currency: &str) -> DomainResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation(
                "Money.NegativeAmount",
                "Amount must be a non-negative number",
            ));
        }
        let currency = currency.trim();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::validation(
                "Money.InvalidCurrency",
                format!("'{}' is not a 3-letter currency code", currency),
            ));
        }
        Ok(Self {
            amount,
            currency: currency.to_ascii_uppercase(),
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

/// Salary offered by a vacancy
///
/// A salary is either unspecified, a fixed amount, or a range with
/// `min < max`. Equal bounds collapse to the fixed variant so there is
/// exactly one representation per salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Salary {
    None,
    Fixed(Money),
    Range { min: Money, max: Money },
}

impl Salary {
    /// Salary not disclosed
    pub fn none() -> Self {
        Salary::None
    }

    /// Fixed salary
    pub fn fixed(amount: Money) -> Self {
        Salary::Fixed(amount)
    }

    /// Salary range; bounds must share a currency and satisfy `min <= max`
    pub fn range(min: Money, max: Money) -> DomainResult<Self> {
        if min.currency() != max.currency() {
            return Err(DomainError::validation(
                "Salary.CurrencyMismatch",
                "Salary bounds must use the same currency",
            ));
        }
        if max.amount() < min.amount() {
            return Err(DomainError::validation(
                "Salary.InvalidRange",
                "Maximum salary cannot be less than minimum salary",
            ));
        }
        if max.amount() == min.amount() {
            return Ok(Salary::Fixed(min));
        }
        Ok(Salary::Range { min, max })
    }

    /// Build a salary from optional bounds
    ///
    /// Absent max (or max equal to min) means a fixed salary; a max above
    /// min means a range; a max without a min is rejected.
    pub fn from_bounds(min: Option<Money>, max: Option<Money>) -> DomainResult<Self> {
        match (min, max) {
            (None, None) => Ok(Salary::None),
            (Some(min), None) => Ok(Salary::Fixed(min)),
            (Some(min), Some(max)) => Salary::range(min, max),
            (None, Some(_)) => Err(DomainError::validation(
                "Salary.MinRequired",
                "Maximum salary requires a minimum salary",
            )),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Salary::None)
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Salary::None => write!(f, "not disclosed"),
            Salary::Fixed(m) => write!(f, "{}", m),
            Salary::Range { min, max } => write!(f, "{} - {}", min, max),
        }
    }
}
