//! `invoicedesk-invoicing` — invoice domain model and store.
//!
//! Entities, per-line arithmetic, and the in-memory [`InvoiceStore`] that
//! owns the invoice collection. Deterministic domain logic, no IO.

pub mod invoice;
pub mod store;

pub use invoice::{
    Invoice, InvoiceDraft, InvoiceId, InvoiceItem, InvoicePatch, InvoiceStatus, ItemPatch,
};
pub use store::{InvoiceCommand, InvoiceStore};
