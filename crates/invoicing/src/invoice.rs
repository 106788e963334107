use chrono::NaiveDate;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use invoicedesk_core::{DomainError, ItemId};

/// Invoice identifier, assigned by the store (`INV-001`, `INV-002`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl InvoiceId {
    pub(crate) fn from_sequence(seq: u64) -> Self {
        Self(format!("INV-{seq:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InvoiceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::invalid_id("InvoiceId: empty"));
        }
        Ok(Self(s.to_owned()))
    }
}

/// Payment status as recorded on the invoice.
///
/// `Overdue` here is a manually set value; the dashboard's overdue
/// classification is derived from the due date independently and the two may
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvoiceStatus::Pending => write!(f, "pending"),
            InvoiceStatus::Paid => write!(f, "paid"),
            InvoiceStatus::Overdue => write!(f, "overdue"),
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            other => Err(DomainError::validation(format!(
                "unknown invoice status '{other}'"
            ))),
        }
    }
}

/// One field edit on an invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemPatch {
    Description(String),
    Quantity(i64),
    Rate(f64),
    Discount(f64),
}

/// One billable line within an invoice.
///
/// `amount` is derived: `quantity * rate - discount`, recomputed whenever one
/// of the three numeric fields changes and left alone on description edits.
/// The result is not clamped; a discount larger than the line total yields a
/// negative amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: ItemId,
    pub description: String,
    pub quantity: i64,
    pub rate: f64,
    pub discount: f64,
    pub amount: f64,
}

impl InvoiceItem {
    /// Fresh line with the capture defaults: quantity 1, everything else
    /// zero, empty description.
    pub fn new() -> Self {
        Self {
            id: ItemId::new(),
            description: String::new(),
            quantity: 1,
            rate: 0.0,
            discount: 0.0,
            amount: 0.0,
        }
    }

    /// Apply one field edit, keeping `amount` consistent.
    pub fn apply(&mut self, patch: ItemPatch) {
        match patch {
            ItemPatch::Description(text) => self.description = text,
            ItemPatch::Quantity(quantity) => {
                self.quantity = quantity;
                self.recompute();
            }
            ItemPatch::Rate(rate) => {
                self.rate = rate;
                self.recompute();
            }
            ItemPatch::Discount(discount) => {
                self.discount = discount;
                self.recompute();
            }
        }
    }

    fn recompute(&mut self) {
        self.amount = self.quantity as f64 * self.rate - self.discount;
    }
}

impl Default for InvoiceItem {
    fn default() -> Self {
        Self::new()
    }
}

/// A billing record for one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// Derived: sum of `items[].amount` at the time of the last save.
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    /// Fixed at creation, never mutated afterwards.
    pub created_date: NaiveDate,
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Sum of line amounts. Equals `amount` at every save point.
    pub fn items_subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }
}

/// Creation input: everything the caller supplies. The id, `created_date`
/// and invoice `amount` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceItem>,
}

/// Partial update; `None` fields keep their current value.
///
/// `amount` is not recomputed from `items` here: a caller replacing the line
/// set supplies the matching total itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoicePatch {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<InvoiceStatus>,
    pub due_date: Option<NaiveDate>,
    pub items: Option<Vec<InvoiceItem>>,
}
