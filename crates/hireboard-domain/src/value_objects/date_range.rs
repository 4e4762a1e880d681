//! Date range value object

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Period with a required start and an optional end
///
/// An absent end means the period is ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a validated date range
    pub fn create(start: NaiveDate, end: Option<NaiveDate>) -> DomainResult<Self> {
        if let Some(end) = end {
            if end < start {
                return Err(DomainError::validation(
                    "DateRange.EndBeforeStart",
                    "End date cannot precede start date",
                ));
            }
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}
