use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::KontoError;

/// Which way the document faces: issued to a customer or received from a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `out_*` — documents we issue.
    Out,
    /// `in_*` — documents we receive.
    In,
}

/// Whether the document claims money or gives it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceKind {
    /// `*_invoice`
    Invoice,
    /// `*_refund` (credit or debit note).
    Refund,
}

impl InvoiceKind {
    /// The opposite kind.
    pub fn flipped(self) -> Self {
        match self {
            Self::Invoice => Self::Refund,
            Self::Refund => Self::Invoice,
        }
    }
}

/// Counterparty role on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerRole {
    Customer,
    Supplier,
}

impl PartnerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Supplier => "supplier",
        }
    }
}

impl fmt::Display for PartnerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Journal a document is posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalType {
    Sale,
    Purchase,
}

impl JournalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Purchase => "purchase",
        }
    }
}

impl fmt::Display for JournalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cash-flow direction of a document's stored (unsigned) amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentSign {
    /// +1 — money received.
    Inbound,
    /// −1 — money paid.
    Outbound,
}

impl PaymentSign {
    /// The multiplier: `1` or `-1`.
    pub fn value(self) -> i8 {
        match self {
            Self::Inbound => 1,
            Self::Outbound => -1,
        }
    }

    /// Apply the sign to an unsigned stored amount.
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Inbound => amount,
            Self::Outbound => -amount,
        }
    }
}

/// One of the four invoice-type codes, held as its two classifying axes.
///
/// Every code table (refund type, partner role, payment sign, journal type)
/// is a projection of `direction` and `kind`, so the tables cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceType {
    pub direction: Direction,
    pub kind: InvoiceKind,
}

impl InvoiceType {
    /// `out_invoice` — customer invoice.
    pub const OUT_INVOICE: Self = Self::new(Direction::Out, InvoiceKind::Invoice);
    /// `in_invoice` — vendor bill.
    pub const IN_INVOICE: Self = Self::new(Direction::In, InvoiceKind::Invoice);
    /// `out_refund` — customer credit note.
    pub const OUT_REFUND: Self = Self::new(Direction::Out, InvoiceKind::Refund);
    /// `in_refund` — vendor refund.
    pub const IN_REFUND: Self = Self::new(Direction::In, InvoiceKind::Refund);

    /// The closed code domain.
    pub const ALL: [Self; 4] = [
        Self::OUT_INVOICE,
        Self::IN_INVOICE,
        Self::OUT_REFUND,
        Self::IN_REFUND,
    ];

    pub const fn new(direction: Direction, kind: InvoiceKind) -> Self {
        Self { direction, kind }
    }

    /// Lower-snake-case code string.
    pub fn code(&self) -> &'static str {
        match (self.direction, self.kind) {
            (Direction::Out, InvoiceKind::Invoice) => "out_invoice",
            (Direction::In, InvoiceKind::Invoice) => "in_invoice",
            (Direction::Out, InvoiceKind::Refund) => "out_refund",
            (Direction::In, InvoiceKind::Refund) => "in_refund",
        }
    }

    /// Parse from the code string. Exact match only.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "out_invoice" => Some(Self::OUT_INVOICE),
            "in_invoice" => Some(Self::IN_INVOICE),
            "out_refund" => Some(Self::OUT_REFUND),
            "in_refund" => Some(Self::IN_REFUND),
            _ => None,
        }
    }

    /// Invoice ↔ refund, same direction. Applying it twice is the identity.
    pub fn refund_type(&self) -> Self {
        Self::new(self.direction, self.kind.flipped())
    }

    pub fn partner_role(&self) -> PartnerRole {
        match self.direction {
            Direction::Out => PartnerRole::Customer,
            Direction::In => PartnerRole::Supplier,
        }
    }

    pub fn journal_type(&self) -> JournalType {
        match self.direction {
            Direction::Out => JournalType::Sale,
            Direction::In => JournalType::Purchase,
        }
    }

    /// Inbound when we issue an invoice or receive a refund.
    pub fn payment_sign(&self) -> PaymentSign {
        match (self.direction, self.kind) {
            (Direction::Out, InvoiceKind::Invoice) | (Direction::In, InvoiceKind::Refund) => {
                PaymentSign::Inbound
            }
            (Direction::In, InvoiceKind::Invoice) | (Direction::Out, InvoiceKind::Refund) => {
                PaymentSign::Outbound
            }
        }
    }

    /// Convert an unsigned stored amount into a signed cash-flow amount.
    pub fn signed_amount(&self, amount: Decimal) -> Decimal {
        self.payment_sign().signed(amount)
    }

    pub fn is_inbound(&self) -> bool {
        self.payment_sign() == PaymentSign::Inbound
    }

    pub fn is_invoice(&self) -> bool {
        self.kind == InvoiceKind::Invoice
    }

    pub fn is_refund(&self) -> bool {
        self.kind == InvoiceKind::Refund
    }
}

impl fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for InvoiceType {
    type Err = KontoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| KontoError::UnknownInvoiceType(s.to_string()))
    }
}

impl TryFrom<String> for InvoiceType {
    type Error = KontoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InvoiceType> for String {
    fn from(value: InvoiceType) -> Self {
        value.code().to_string()
    }
}
