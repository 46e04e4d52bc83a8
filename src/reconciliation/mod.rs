//! Data shape consumed by the reconciliation widget.
//!
//! The widget defines the schema of its records, so this layer only
//! constrains values to a small set of kinds: booleans, numbers, strings and
//! nested mappings.
//!
//! # Example
//!
//! ```rust
//! use konto::reconciliation::*;
//!
//! let mut data = DataForReconciliationWidget::default();
//! data.customers.push(WidgetRecord::from([
//!     ("partner_id".to_string(), WidgetValue::from(7)),
//!     ("name".to_string(), WidgetValue::from("Deco Addict")),
//! ]));
//! assert!(!data.is_empty());
//! ```

mod value;
mod widget;

pub use value::{WidgetRecord, WidgetValue};
pub use widget::DataForReconciliationWidget;
