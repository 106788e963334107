use chrono::{NaiveDate, Utc};

use invoicedesk_auth::{Credentials, SessionStore, User};
use invoicedesk_company::{Company, CompanyStore};
use invoicedesk_invoicing::{
    Invoice, InvoiceCommand, InvoiceDraft, InvoiceId, InvoicePatch, InvoiceStore,
};
use invoicedesk_reporting::DashboardSnapshot;

/// Application facade: one session, one company record, one invoice
/// collection.
///
/// Session state does not gate the other operations; the presentation layer
/// re-checks [`App::current_user`] before invoking mutations on a user's
/// behalf. The facade is single-threaded; a multi-threaded host wraps the
/// whole value in one mutex rather than locking per store.
#[derive(Debug, Default)]
pub struct App {
    session: SessionStore,
    company: CompanyStore,
    invoices: InvoiceStore,
}

impl App {
    /// Facade with the reference credential pair and default company record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Facade checking logins against `credentials` instead of the default
    /// pair.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            session: SessionStore::new(credentials),
            ..Default::default()
        }
    }

    // ── session ──────────────────────────────────────────────────────────

    pub fn login(&mut self, username: &str, password: &str) -> bool {
        self.session.login(username, password)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    // ── invoices ─────────────────────────────────────────────────────────

    /// Persist a draft; returns the stored copy with its assigned id.
    pub fn add_invoice(&mut self, draft: InvoiceDraft) -> Invoice {
        self.invoices.create(draft)
    }

    pub fn update_invoice(&mut self, id: &InvoiceId, patch: InvoicePatch) -> bool {
        self.invoices.update(id, patch)
    }

    pub fn delete_invoice(&mut self, id: &InvoiceId) -> bool {
        self.invoices.delete(id)
    }

    pub fn invoice(&self, id: &InvoiceId) -> Option<Invoice> {
        self.invoices.get(id)
    }

    /// Snapshot of the collection, insertion order.
    pub fn invoices(&self) -> Vec<Invoice> {
        self.invoices.list_all()
    }

    /// Command-style entry into the invoice store's single write path.
    pub fn apply(&mut self, command: InvoiceCommand) -> Option<Invoice> {
        self.invoices.apply(command)
    }

    // ── company ──────────────────────────────────────────────────────────

    pub fn company(&self) -> Company {
        self.company.get()
    }

    pub fn update_company(&mut self, company: Company) {
        self.company.replace(company);
    }

    // ── dashboard ────────────────────────────────────────────────────────

    /// Dashboard computed against today's date.
    pub fn dashboard(&self) -> DashboardSnapshot {
        self.dashboard_at(Utc::now().date_naive())
    }

    /// Deterministic variant taking the date of record explicitly.
    pub fn dashboard_at(&self, today: NaiveDate) -> DashboardSnapshot {
        DashboardSnapshot::compute(&self.invoices.list_all(), today)
    }
}
