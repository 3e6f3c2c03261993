//! Budget-health classification and summaries
//!
//! A budget line (department, project, event, or category with an assigned
//! budget) is classified by its usage percentage: 90% and above is danger,
//! 70% and above is warning, anything below is healthy. Boundary values
//! land in the stricter bucket. A non-positive budget reads as 0% usage so
//! unconfigured lines never raise spurious alarms.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use core_kernel::{Money, Percentage};

use crate::aggregate::{aggregate, Dimension};
use crate::record::FinancialRecord;

/// Usage percentage at or above which a budget line is in danger
pub const DANGER_THRESHOLD: Decimal = dec!(90);

/// Usage percentage at or above which a budget line is in warning
pub const WARNING_THRESHOLD: Decimal = dec!(70);

/// Health bucket of a budget line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Healthy,
    Warning,
    Danger,
}

impl BudgetHealth {
    /// Buckets a usage percentage, boundaries rounding to the stricter side
    pub fn for_usage(usage: Percentage) -> Self {
        let points = usage.points();
        if points >= DANGER_THRESHOLD {
            BudgetHealth::Danger
        } else if points >= WARNING_THRESHOLD {
            BudgetHealth::Warning
        } else {
            BudgetHealth::Healthy
        }
    }
}

/// Usage percentage and health bucket for one budget line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetUsage {
    /// Consumed / budget, in percentage points
    pub usage_percentage: Percentage,
    /// Health bucket derived from the percentage
    pub status: BudgetHealth,
}

/// Classifies consumption against a budget
///
/// Total over all inputs: a non-positive budget yields 0% and healthy
/// rather than a division error.
pub fn classify(budget: Money, consumed: Money) -> BudgetUsage {
    let usage_percentage = Percentage::ratio_of(&consumed, &budget);
    BudgetUsage {
        usage_percentage,
        status: BudgetHealth::for_usage(usage_percentage),
    }
}

/// A master row (department, project, event, or category) with its budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Master-row key, matching record foreign keys
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Allocated budget
    pub budget: Money,
}

impl BudgetLine {
    pub fn new(id: Uuid, name: impl Into<String>, budget: Money) -> Self {
        Self {
            id,
            name: name.into(),
            budget,
        }
    }
}

/// Computed report row for one budget line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Master-row key
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Allocated budget
    pub budget: Money,
    /// Total counted spend
    pub total_expenses: Money,
    /// Budget minus spend; negative when overspent
    pub remaining: Money,
    /// Consumed / budget, in percentage points
    pub usage_percentage: Percentage,
    /// Health bucket
    pub status: BudgetHealth,
}

impl BudgetSummary {
    /// Builds a summary row from a budget line and its counted spend
    pub fn build(line: &BudgetLine, total_expenses: Money) -> Self {
        let usage = classify(line.budget, total_expenses);
        Self {
            id: line.id,
            name: line.name.clone(),
            budget: line.budget,
            total_expenses,
            remaining: line.budget - total_expenses,
            usage_percentage: usage.usage_percentage,
            status: usage.status,
        }
    }
}

/// Produces one summary per budget line for the given dimension
///
/// Lines with no matching records report zero spend. Output preserves the
/// input line order.
pub fn summarize(
    lines: &[BudgetLine],
    records: &[FinancialRecord],
    dimension: Dimension,
) -> Vec<BudgetSummary> {
    let totals = aggregate(records, dimension);
    let summaries: Vec<BudgetSummary> = lines
        .iter()
        .map(|line| {
            let total = totals.get(&line.id).copied().unwrap_or_else(Money::zero);
            BudgetSummary::build(line, total)
        })
        .collect();

    debug!(?dimension, lines = summaries.len(), "built budget summaries");
    summaries
}
