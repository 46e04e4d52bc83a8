//! # konto
//!
//! The vocabulary an accounting module shares with its callers: invoice-type
//! code tables, resolved tax lines, payment due dates, tax groups and the
//! data shape consumed by the reconciliation widget.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Nothing here computes tax, rounds currency or persists anything; these are
//! the types and mappings the engines around it agree on.
//!
//! ## Quick Start
//!
//! ```rust
//! use konto::core::*;
//! use rust_decimal_macros::dec;
//!
//! let bill: InvoiceType = "in_invoice".parse().unwrap();
//! assert_eq!(bill.refund_type().code(), "in_refund");
//! assert_eq!(bill.partner_role(), PartnerRole::Supplier);
//! assert_eq!(bill.signed_amount(dec!(120.00)), dec!(-120.00));
//!
//! // Raw string lookups keep the dictionary contract: unknown codes are absent.
//! assert_eq!(refund_type_of("out_invoice"), Some("out_refund"));
//! assert_eq!(payment_sign_of("entry"), None);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice-type tables, tax lines, tax groups, due dates |
//! | `reconciliation` (default) | Reconciliation widget data shape |
//! | `json` | JSON encode/decode helpers via `serde_json` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "reconciliation")]
pub mod reconciliation;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
