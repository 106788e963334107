//! `invoicedesk-reporting` — read-time aggregation over invoice snapshots.
//!
//! Stateless: every function recomputes from the snapshot it is handed,
//! nothing is cached. The dashboard always reflects the collection as of the
//! read.

pub mod dashboard;

pub use dashboard::{
    DashboardSnapshot, DashboardStats, DASHBOARD_LIST_LIMIT, OVERDUE_AFTER_DAYS, is_overdue,
    overdue_count, overdue_invoices, pending_count, recent_invoices, total_count, total_revenue,
};
