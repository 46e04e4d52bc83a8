use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{InvoiceKind, KontoError};

/// Opaque identifier of a tax rule owned by the tax engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxId(pub u64);

/// Opaque chart-of-accounts identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u64);

/// One scheduled due date on a payment plan and the amount due on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDueDates {
    /// Due date.
    pub date: NaiveDate,
    /// Amount due on `date` (signed).
    pub amount: Decimal,
}

impl PaymentDueDates {
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        Self { date, amount }
    }
}

/// Sum of all amounts on a payment plan.
///
/// Fails with [`KontoError::Arithmetic`] when the sum leaves the `Decimal` range.
pub fn total_due(plan: &[PaymentDueDates]) -> Result<Decimal, KontoError> {
    plan.iter().try_fold(Decimal::ZERO, |acc, due| {
        acc.checked_add(due.amount).ok_or_else(|| {
            KontoError::Arithmetic(format!("payment plan total overflows at {}", due.date))
        })
    })
}

/// Named tax bucket as shown in invoice totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxGroup {
    /// Group name (never empty when built through [`TaxGroup::new`]).
    pub name: String,
    /// Tax amount of the group.
    pub amount: Decimal,
    /// Ordering key among sibling groups.
    pub sequence: i32,
}

impl TaxGroup {
    /// Build a tax group. Fails with [`KontoError::EmptyTaxGroupName`] when
    /// `name` is empty or only whitespace.
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
        sequence: i32,
    ) -> Result<Self, KontoError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(KontoError::EmptyTaxGroupName);
        }
        Ok(Self {
            name,
            amount,
            sequence,
        })
    }
}

/// One resolved tax line: the outcome of applying a tax rule to `base`.
///
/// Field names are part of the interchange contract with the UI and
/// reporting layers and must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedTaxData {
    /// Tax rule identifier.
    pub id: TaxId,
    /// Tax label.
    pub name: String,
    /// Computed tax amount.
    pub amount: Decimal,
    /// Application order among the taxes of one line.
    pub sequence: i32,
    /// Account receiving the tax on invoices.
    pub account_id: Option<AccountId>,
    /// Account receiving the tax on refunds.
    pub refund_account_id: Option<AccountId>,
    /// Tax participates in analytic accounting.
    pub analytic: bool,
    /// Base amount the tax was computed from.
    pub base: Decimal,
}

impl AppliedTaxData {
    /// Target account for a document of the given kind.
    pub fn account_for(&self, kind: InvoiceKind) -> Option<AccountId> {
        match kind {
            InvoiceKind::Invoice => self.account_id,
            InvoiceKind::Refund => self.refund_account_id,
        }
    }

    /// Encode as a JSON object with the interchange field names.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, KontoError> {
        Ok(serde_json::to_string(self)?)
    }

    #[cfg(feature = "json")]
    pub fn from_json(s: &str) -> Result<Self, KontoError> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Records carrying a display/processing order key.
pub trait Sequenced {
    fn sequence(&self) -> i32;
}

impl Sequenced for TaxGroup {
    fn sequence(&self) -> i32 {
        self.sequence
    }
}

impl Sequenced for AppliedTaxData {
    fn sequence(&self) -> i32 {
        self.sequence
    }
}

/// Stable sort by sequence; equal sequences keep their input order.
pub fn sort_by_sequence<T: Sequenced>(items: &mut [T]) {
    items.sort_by_key(|item| item.sequence());
}
