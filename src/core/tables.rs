//! Invoice-type code tables keyed by the raw code string.
//!
//! These keep the dictionary contract of the classic tables: a lookup with a
//! code outside `out_invoice`, `in_invoice`, `out_refund`, `in_refund` yields
//! `None`, and the caller decides whether that is an input error. The tables
//! are views over [`InvoiceType::ALL`], not separately maintained data.

use super::{InvoiceType, JournalType, PartnerRole};

fn lookup(code: &str) -> Option<InvoiceType> {
    let found = InvoiceType::from_code(code);
    if found.is_none() {
        tracing::debug!(code, "unknown invoice type code");
    }
    found
}

/// Refund counterpart of `code` (invoice ↔ refund, same direction).
pub fn refund_type_of(code: &str) -> Option<&'static str> {
    lookup(code).map(|t| t.refund_type().code())
}

/// `customer` for `out_*`, `supplier` for `in_*`.
pub fn partner_role_of(code: &str) -> Option<PartnerRole> {
    lookup(code).map(|t| t.partner_role())
}

/// `+1` for `out_invoice`/`in_refund`, `-1` for `in_invoice`/`out_refund`.
pub fn payment_sign_of(code: &str) -> Option<i8> {
    lookup(code).map(|t| t.payment_sign().value())
}

/// `sale` for `out_*`, `purchase` for `in_*`.
pub fn journal_type_of(code: &str) -> Option<JournalType> {
    lookup(code).map(|t| t.journal_type())
}

/// Invoice type → refund type, as `(code, code)` pairs.
pub fn refund_table() -> impl Iterator<Item = (&'static str, &'static str)> {
    InvoiceType::ALL
        .into_iter()
        .map(|t| (t.code(), t.refund_type().code()))
}

/// Invoice type → partner role.
pub fn partner_table() -> impl Iterator<Item = (&'static str, PartnerRole)> {
    InvoiceType::ALL
        .into_iter()
        .map(|t| (t.code(), t.partner_role()))
}

/// Invoice type → payment sign.
pub fn sign_table() -> impl Iterator<Item = (&'static str, i8)> {
    InvoiceType::ALL
        .into_iter()
        .map(|t| (t.code(), t.payment_sign().value()))
}

/// Invoice type → journal type.
pub fn journal_table() -> impl Iterator<Item = (&'static str, JournalType)> {
    InvoiceType::ALL
        .into_iter()
        .map(|t| (t.code(), t.journal_type()))
}
