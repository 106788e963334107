//! In-memory invoice store: the single owner and writer of the collection.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::invoice::{Invoice, InvoiceDraft, InvoiceId, InvoiceItem, InvoicePatch};

/// Mutation commands accepted by [`InvoiceStore::apply`].
///
/// Every write goes through one of these three variants; there is no other
/// mutation path into the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InvoiceCommand {
    Create(InvoiceDraft),
    Update { id: InvoiceId, patch: InvoicePatch },
    Delete(InvoiceId),
}

/// In-memory collection of invoices, insertion order preserved.
///
/// The store hands out copies on every read, so callers can never alias
/// internal state. Single-threaded; a multi-threaded host wraps the whole
/// store (or the facade owning it) in one mutex rather than adding locking
/// here.
#[derive(Debug, Default)]
pub struct InvoiceStore {
    invoices: Vec<Invoice>,
    /// Monotonic id sequence. Never derived from `invoices.len()`: deleting
    /// and re-creating must not reissue an id.
    next_seq: u64,
}

impl InvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an invoice from a draft, dated today.
    pub fn create(&mut self, draft: InvoiceDraft) -> Invoice {
        self.create_with_date(draft, Utc::now().date_naive())
    }

    /// Create with an explicit `created_date` (deterministic variant).
    ///
    /// Lines whose trimmed description is empty are dropped, and the invoice
    /// `amount` is the sum of the surviving lines' amounts. The persisted
    /// record is returned as a copy.
    pub fn create_with_date(&mut self, draft: InvoiceDraft, created_date: NaiveDate) -> Invoice {
        self.next_seq += 1;
        let id = InvoiceId::from_sequence(self.next_seq);

        let items: Vec<InvoiceItem> = draft
            .items
            .into_iter()
            .filter(|item| !item.description.trim().is_empty())
            .collect();
        let amount: f64 = items.iter().map(|item| item.amount).sum();

        let invoice = Invoice {
            id: id.clone(),
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            customer_phone: draft.customer_phone,
            amount,
            status: draft.status,
            due_date: draft.due_date,
            created_date,
            items,
        };
        self.invoices.push(invoice.clone());
        info!(invoice_id = %id, amount, "invoice created");
        invoice
    }

    /// Merge `patch` into the matching invoice.
    ///
    /// An unknown id is a silent no-op (returns `false`); callers that never
    /// look at the return value get exactly that behavior. `amount` is taken
    /// from the patch as-is, never recomputed from `items`.
    pub fn update(&mut self, id: &InvoiceId, patch: InvoicePatch) -> bool {
        let Some(invoice) = self.invoices.iter_mut().find(|invoice| &invoice.id == id) else {
            debug!(invoice_id = %id, "update ignored: no such invoice");
            return false;
        };

        if let Some(customer_name) = patch.customer_name {
            invoice.customer_name = customer_name;
        }
        if let Some(customer_email) = patch.customer_email {
            invoice.customer_email = customer_email;
        }
        if let Some(customer_phone) = patch.customer_phone {
            invoice.customer_phone = customer_phone;
        }
        if let Some(amount) = patch.amount {
            invoice.amount = amount;
        }
        if let Some(status) = patch.status {
            invoice.status = status;
        }
        if let Some(due_date) = patch.due_date {
            invoice.due_date = due_date;
        }
        if let Some(items) = patch.items {
            invoice.items = items;
        }
        info!(invoice_id = %id, "invoice updated");
        true
    }

    /// Remove the matching invoice. An unknown id is a silent no-op
    /// (returns `false`).
    pub fn delete(&mut self, id: &InvoiceId) -> bool {
        let before = self.invoices.len();
        self.invoices.retain(|invoice| &invoice.id != id);
        let removed = self.invoices.len() < before;
        if removed {
            info!(invoice_id = %id, "invoice deleted");
        } else {
            debug!(invoice_id = %id, "delete ignored: no such invoice");
        }
        removed
    }

    /// Copy of the invoice with the given id.
    pub fn get(&self, id: &InvoiceId) -> Option<Invoice> {
        self.invoices.iter().find(|invoice| &invoice.id == id).cloned()
    }

    /// Snapshot of the whole collection, insertion order.
    pub fn list_all(&self) -> Vec<Invoice> {
        self.invoices.clone()
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Apply one mutation command — the authoritative write path.
    ///
    /// `Create` yields the persisted copy; the other variants keep their
    /// silent no-op contract and yield nothing.
    pub fn apply(&mut self, command: InvoiceCommand) -> Option<Invoice> {
        match command {
            InvoiceCommand::Create(draft) => Some(self.create(draft)),
            InvoiceCommand::Update { id, patch } => {
                self.update(&id, patch);
                None
            }
            InvoiceCommand::Delete(id) => {
                self.delete(&id);
                None
            }
        }
    }
}
