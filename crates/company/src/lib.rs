//! `invoicedesk-company` — the invoicing entity's own identity record.

pub mod profile;

pub use profile::{Company, CompanyStore};
