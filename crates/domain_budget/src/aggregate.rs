//! Per-dimension spend aggregation
//!
//! Budget reports total approved spend along four independent axes:
//! department, project, event, and category. A record contributes to every
//! dimension it is linked to, so the same expense can appear in both its
//! department total and its category total; records with no key for a
//! dimension are simply skipped for that dimension.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use core_kernel::Money;

use crate::record::FinancialRecord;

/// An axis along which spend is aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Department,
    Project,
    Event,
    Category,
}

impl Dimension {
    /// All reporting dimensions
    pub const ALL: [Dimension; 4] = [
        Dimension::Department,
        Dimension::Project,
        Dimension::Event,
        Dimension::Category,
    ];
}

/// Sums record amounts per dimension key
///
/// Only records whose approval status counts toward reports contribute.
/// The returned map has one entry per distinct key that received at least
/// one contribution; keys with no records are absent, not zero.
pub fn aggregate(records: &[FinancialRecord], dimension: Dimension) -> HashMap<Uuid, Money> {
    let mut totals: HashMap<Uuid, Money> = HashMap::new();

    for record in records {
        if !record.status.counts_toward_reports() {
            continue;
        }
        if let Some(key) = record.dimension_key(dimension) {
            let entry = totals.entry(key).or_insert_with(Money::zero);
            *entry = *entry + record.amount;
        }
    }

    debug!(
        ?dimension,
        records = records.len(),
        buckets = totals.len(),
        "aggregated records"
    );
    totals
}
