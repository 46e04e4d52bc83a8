//! Core accounting vocabulary.
//!
//! Invoice-type classification with its derived code tables, plus the plain
//! records exchanged with the tax engine and payment-term computation.

mod error;
mod invoice_type;
pub mod tables;
mod types;

pub use error::*;
pub use invoice_type::*;
pub use tables::{journal_type_of, partner_role_of, payment_sign_of, refund_type_of};
pub use types::*;
