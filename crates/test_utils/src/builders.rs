//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{CategoryId, DepartmentId, EventId, Money, ProjectId};
use domain_budget::{ApprovalStatus, FinancialRecord};
use domain_contract::{ContractStatus, PaymentFrequency, RecurringContract};

use crate::fixtures::{DateFixtures, MoneyFixtures};

/// Builder for constructing test contracts
pub struct ContractBuilder {
    start: NaiveDate,
    end: NaiveDate,
    frequency: PaymentFrequency,
    payment_day: u32,
    periodic_amount: Money,
    status: ContractStatus,
    name: String,
    one_time: bool,
}

impl Default for ContractBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractBuilder {
    /// Creates a builder for a monthly contract over calendar year 2024
    pub fn new() -> Self {
        Self {
            start: DateFixtures::calendar_year_start(),
            end: DateFixtures::calendar_year_end(),
            frequency: PaymentFrequency::Monthly,
            payment_day: 1,
            periodic_amount: MoneyFixtures::monthly_fee(),
            status: ContractStatus::Active,
            name: "Test Vendor Contract".to_string(),
            one_time: false,
        }
    }

    /// Sets the contract period
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the payment frequency
    pub fn with_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the nominal payment day
    pub fn with_payment_day(mut self, day: u32) -> Self {
        self.payment_day = day;
        self
    }

    /// Sets the per-occurrence amount
    pub fn with_periodic_amount(mut self, amount: Money) -> Self {
        self.periodic_amount = amount;
        self
    }

    /// Sets the lifecycle status
    pub fn with_status(mut self, status: ContractStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Makes this a one-time contract paying the periodic amount once
    pub fn one_time(mut self) -> Self {
        self.one_time = true;
        self
    }

    /// Builds the contract, panicking on invalid test data
    pub fn build(self) -> RecurringContract {
        let contract = if self.one_time {
            RecurringContract::one_time(self.start, self.end, self.periodic_amount)
        } else {
            RecurringContract::recurring(
                self.start,
                self.end,
                self.frequency,
                self.payment_day,
                self.periodic_amount,
            )
        };
        contract
            .expect("ContractBuilder produced invalid contract")
            .with_name(self.name)
            .with_status(self.status)
    }
}

/// Builder for constructing test financial records
pub struct RecordBuilder {
    amount: Money,
    status: ApprovalStatus,
    department_id: Option<DepartmentId>,
    project_id: Option<ProjectId>,
    event_id: Option<EventId>,
    category_id: Option<CategoryId>,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    /// Creates a builder for an approved expense with a small amount
    pub fn new() -> Self {
        Self {
            amount: MoneyFixtures::small_expense(),
            status: ApprovalStatus::Approved,
            department_id: None,
            project_id: None,
            event_id: None,
            category_id: None,
        }
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
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

    fn apply_links(&self, mut record: FinancialRecord) -> FinancialRecord {
        record = record.with_status(self.status);
        if let Some(id) = self.department_id {
            record = record.with_department(id);
        }
        if let Some(id) = self.project_id {
            record = record.with_project(id);
        }
        if let Some(id) = self.event_id {
            record = record.with_event(id);
        }
        if let Some(id) = self.category_id {
            record = record.with_category(id);
        }
        record
    }

    /// Builds an expense record
    pub fn build_expense(self) -> FinancialRecord {
        let record = FinancialRecord::expense(self.amount)
            .expect("RecordBuilder produced invalid expense");
        self.apply_links(record)
    }

    /// Builds an invoice-payment record
    pub fn build_invoice_payment(self) -> FinancialRecord {
        let record = FinancialRecord::invoice_payment(self.amount)
            .expect("RecordBuilder produced invalid invoice payment");
        self.apply_links(record)
    }

    /// Builds a subcontract record from a contract; the builder's amount is
    /// ignored in favor of the contract's committed value
    pub fn build_subcontract(self, contract: &RecurringContract) -> FinancialRecord {
        let record = FinancialRecord::from_subcontract(contract);
        self.apply_links(record)
    }
}
