use chrono::NaiveDate;
use serde::Serialize;

use invoicedesk_invoicing::{Invoice, InvoiceStatus};

/// Days past due before an unpaid invoice classifies as overdue.
pub const OVERDUE_AFTER_DAYS: i64 = 15;

/// Maximum entries in the dashboard's recent/overdue lists.
pub const DASHBOARD_LIST_LIMIT: usize = 10;

/// Sum of `amount` over paid invoices.
pub fn total_revenue(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|invoice| invoice.status == InvoiceStatus::Paid)
        .map(|invoice| invoice.amount)
        .sum()
}

/// Count of invoices still marked pending.
pub fn pending_count(invoices: &[Invoice]) -> usize {
    invoices
        .iter()
        .filter(|invoice| invoice.status == InvoiceStatus::Pending)
        .count()
}

pub fn total_count(invoices: &[Invoice]) -> usize {
    invoices.len()
}

/// Derived overdue classification: unpaid and at least
/// [`OVERDUE_AFTER_DAYS`] whole days past the due date.
///
/// Independent of the stored status: an invoice manually marked `Overdue`
/// that is still inside the window does not classify, and a paid one never
/// does regardless of its due date.
pub fn is_overdue(invoice: &Invoice, today: NaiveDate) -> bool {
    invoice.status != InvoiceStatus::Paid
        && (today - invoice.due_date).num_days() >= OVERDUE_AFTER_DAYS
}

/// Count of invoices classified overdue as of `today`.
pub fn overdue_count(invoices: &[Invoice], today: NaiveDate) -> usize {
    invoices
        .iter()
        .filter(|invoice| is_overdue(invoice, today))
        .count()
}

/// Newest first by `created_date`, truncated to `limit`.
///
/// The sort is stable: invoices created the same day keep their relative
/// collection order.
pub fn recent_invoices(invoices: &[Invoice], limit: usize) -> Vec<Invoice> {
    let mut recent = invoices.to_vec();
    recent.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    recent.truncate(limit);
    recent
}

/// Invoices classified overdue, in collection order (not sorted by how late
/// they are), truncated to `limit`.
pub fn overdue_invoices(invoices: &[Invoice], today: NaiveDate, limit: usize) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|invoice| is_overdue(invoice, today))
        .take(limit)
        .cloned()
        .collect()
}

/// The four headline dashboard figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub pending_payments: usize,
    pub total_invoices: usize,
    pub overdue: usize,
}

/// Presentation-ready dashboard read model, recomputed on every call.
///
/// List entries are full invoice copies so display code has everything it
/// needs without reaching back into the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub recent_invoices: Vec<Invoice>,
    pub overdue_invoices: Vec<Invoice>,
}

impl DashboardSnapshot {
    pub fn compute(invoices: &[Invoice], today: NaiveDate) -> Self {
        Self {
            stats: DashboardStats {
                total_revenue: total_revenue(invoices),
                pending_payments: pending_count(invoices),
                total_invoices: total_count(invoices),
                overdue: overdue_count(invoices, today),
            },
            recent_invoices: recent_invoices(invoices, DASHBOARD_LIST_LIMIT),
            overdue_invoices: overdue_invoices(invoices, today, DASHBOARD_LIST_LIMIT),
        }
    }
}
