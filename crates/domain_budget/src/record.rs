//! Normalized financial records
//!
//! Expenses, invoice payments, and subcontracts arrive from persistence as
//! three differently-shaped rows. Reporting flattens them into one record
//! shape: a kind tag, a contribution amount, an approval status, and
//! optional foreign keys for each reporting dimension.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{CategoryId, DepartmentId, EventId, Money, ProjectId};
use domain_contract::{PaymentType, RecurringContract};

use crate::aggregate::Dimension;
use crate::error::BudgetError;

/// What kind of spend a record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecordKind {
    /// Employee expense reimbursement
    Expense,
    /// Invoice payment request
    InvoicePayment,
    /// Subcontract / vendor contract
    Subcontract {
        /// One-time or recurring
        payment_type: PaymentType,
    },
}

/// Approval state of a financial record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Submitted, awaiting approval
    Pending,
    /// Approved by a manager or admin
    Approved,
    /// Rejected
    Rejected,
    /// Approved and paid out
    Settled,
}

impl ApprovalStatus {
    /// Whether records in this state count toward budget reports
    ///
    /// Settlement happens after approval; settled spend must not drop out
    /// of the report.
    pub fn counts_toward_reports(&self) -> bool {
        matches!(self, ApprovalStatus::Approved | ApprovalStatus::Settled)
    }
}

/// A single financial record normalized for aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Record kind tag
    #[serde(flatten)]
    pub kind: RecordKind,
    /// Amount this record contributes to each linked dimension
    pub amount: Money,
    /// Approval state
    pub status: ApprovalStatus,
    /// Owning department, if assigned
    pub department_id: Option<DepartmentId>,
    /// Linked project, if assigned
    pub project_id: Option<ProjectId>,
    /// Linked event, if assigned
    pub event_id: Option<EventId>,
    /// Expense category, if assigned
    pub category_id: Option<CategoryId>,
}

impl FinancialRecord {
    fn new(kind: RecordKind, amount: Money) -> Result<Self, BudgetError> {
        if amount.is_negative() {
            return Err(BudgetError::InvalidAmount(format!(
                "record amount must not be negative, got {amount}"
            )));
        }
        Ok(Self {
            kind,
            amount,
            status: ApprovalStatus::Approved,
            department_id: None,
            project_id: None,
            event_id: None,
            category_id: None,
        })
    }

    /// Creates an expense record
    pub fn expense(amount: Money) -> Result<Self, BudgetError> {
        Self::new(RecordKind::Expense, amount)
    }

    /// Creates an invoice-payment record
    pub fn invoice_payment(amount: Money) -> Result<Self, BudgetError> {
        Self::new(RecordKind::InvoicePayment, amount)
    }

    /// Creates a subcontract record from a contract
    ///
    /// Commitment accounting: a recurring subcontract contributes its full
    /// committed value to every dimension it is linked to, not just the
    /// amounts disbursed to date. One-time subcontracts contribute their
    /// single payment.
    pub fn from_subcontract(contract: &RecurringContract) -> Self {
        Self {
            kind: RecordKind::Subcontract {
                payment_type: contract.payment_type,
            },
            amount: contract.total_amount(),
            status: ApprovalStatus::Approved,
            department_id: None,
            project_id: None,
            event_id: None,
            category_id: None,
        }
    }

    /// Sets the approval status
    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = status;
        self
    }

    /// Links the record to a department
    pub fn with_department(mut self, id: DepartmentId) -> Self {
        self.department_id = Some(id);
        self
    }

    /// Links the record to a project
    pub fn with_project(mut self, id: ProjectId) -> Self {
        self.project_id = Some(id);
        self
    }

    /// Links the record to an event
    pub fn with_event(mut self, id: EventId) -> Self {
        self.event_id = Some(id);
        self
    }

    /// Links the record to a category
    pub fn with_category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    /// Returns this record's foreign key for the given dimension, if any
    pub fn dimension_key(&self, dimension: Dimension) -> Option<Uuid> {
        match dimension {
            Dimension::Department => self.department_id.map(Into::into),
            Dimension::Project => self.project_id.map(Into::into),
            Dimension::Event => self.event_id.map(Into::into),
            Dimension::Category => self.category_id.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain_contract::PaymentFrequency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = FinancialRecord::expense(Money::from_yen(-100));
        assert!(matches!(result, Err(BudgetError::InvalidAmount(_))));
    }

    #[test]
    fn test_recurring_subcontract_contributes_committed_total() {
        let contract = RecurringContract::recurring(
            date(2024, 1, 1),
            date(2024, 12, 31),
            PaymentFrequency::Monthly,
            1,
            Money::from_yen(100_000),
        )
        .unwrap();

        let record = FinancialRecord::from_subcontract(&contract);
        assert_eq!(record.amount, Money::from_yen(1_200_000));
        assert_eq!(
            record.kind,
            RecordKind::Subcontract {
                payment_type: PaymentType::Recurring
            }
        );
    }

    #[test]
    fn test_one_time_subcontract_contributes_single_payment() {
        let contract = RecurringContract::one_time(
            date(2024, 1, 1),
            date(2024, 12, 31),
            Money::from_yen(500_000),
        )
        .unwrap();

        let record = FinancialRecord::from_subcontract(&contract);
        assert_eq!(record.amount, Money::from_yen(500_000));
    }

    #[test]
    fn test_dimension_key_lookup() {
        let dept = DepartmentId::new();
        let record = FinancialRecord::expense(Money::from_yen(10_000))
            .unwrap()
            .with_department(dept);

        assert_eq!(
            record.dimension_key(Dimension::Department),
            Some(*dept.as_uuid())
        );
        assert_eq!(record.dimension_key(Dimension::Project), None);
    }

    #[test]
    fn test_report_counting_statuses() {
        assert!(ApprovalStatus::Approved.counts_toward_reports());
        assert!(ApprovalStatus::Settled.counts_toward_reports());
        assert!(!ApprovalStatus::Pending.counts_toward_reports());
        assert!(!ApprovalStatus::Rejected.counts_toward_reports());
    }
}
