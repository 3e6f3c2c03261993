//! Payment frequency and contract classification enums
//!
//! Wire names follow the upstream request payloads: frequencies are
//! `monthly | quarterly | semiAnnually | annually`, payment types are
//! `oneTime | recurring`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContractError;

/// How often a recurring contract pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentFrequency {
    /// One payment per calendar month
    Monthly,
    /// One payment per quarter (every 3 months)
    Quarterly,
    /// One payment per half year (every 6 months)
    SemiAnnually,
    /// One payment per year
    Annually,
}

impl PaymentFrequency {
    /// Returns the number of months between consecutive payments
    pub fn months_per_period(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 1,
            PaymentFrequency::Quarterly => 3,
            PaymentFrequency::SemiAnnually => 6,
            PaymentFrequency::Annually => 12,
        }
    }

    /// Returns the number of payments per year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::SemiAnnually => 2,
            PaymentFrequency::Annually => 1,
        }
    }

    /// Returns the wire name for this frequency
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::SemiAnnually => "semiAnnually",
            PaymentFrequency::Annually => "annually",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentFrequency {
    type Err = ContractError;

    /// Parses a wire frequency string
    ///
    /// Only the four exact supported values are accepted; anything else is
    /// an `InvalidFrequency` error, never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "quarterly" => Ok(PaymentFrequency::Quarterly),
            "semiAnnually" => Ok(PaymentFrequency::SemiAnnually),
            "annually" => Ok(PaymentFrequency::Annually),
            other => Err(ContractError::InvalidFrequency(other.to_string())),
        }
    }
}

/// Whether a contract pays once or on a recurring schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentType {
    /// Single payment equal to the contract amount
    OneTime,
    /// Repeated payments per the contract frequency
    Recurring,
}

/// Lifecycle status of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Contract is live and accruing payments
    Active,
    /// Approved but first payment not yet made
    PendingPayment,
    /// All scheduled payments made
    Completed,
    /// Terminated before its natural end
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_per_period() {
        assert_eq!(PaymentFrequency::Monthly.months_per_period(), 1);
        assert_eq!(PaymentFrequency::Quarterly.months_per_period(), 3);
        assert_eq!(PaymentFrequency::SemiAnnually.months_per_period(), 6);
        assert_eq!(PaymentFrequency::Annually.months_per_period(), 12);
    }

    #[test]
    fn test_payments_per_year() {
        assert_eq!(PaymentFrequency::Monthly.payments_per_year(), 12);
        assert_eq!(PaymentFrequency::Annually.payments_per_year(), 1);
    }

    #[test]
    fn test_parse_wire_names() {
        assert_eq!(
            "semiAnnually".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::SemiAnnually
        );
        assert_eq!(
            "monthly".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Monthly
        );
    }

    #[test]
    fn test_parse_rejects_unknown_frequency() {
        let result = "weekly".parse::<PaymentFrequency>();
        assert_eq!(
            result,
            Err(ContractError::InvalidFrequency("weekly".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_case() {
        // Frequency matching is exact; "Monthly" is not a supported value.
        assert!("Monthly".parse::<PaymentFrequency>().is_err());
        assert!("semi_annually".parse::<PaymentFrequency>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&PaymentFrequency::SemiAnnually).unwrap();
        assert_eq!(json, "\"semiAnnually\"");

        let json = serde_json::to_string(&PaymentType::OneTime).unwrap();
        assert_eq!(json, "\"oneTime\"");
    }
}
