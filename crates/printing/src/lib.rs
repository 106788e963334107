//! `invoicedesk-printing` — printable invoice documents.
//!
//! Renders an invoice plus the company record into a self-contained HTML
//! page suitable for the host's print dialog or export.

pub mod document;

pub use document::render_invoice_html;
