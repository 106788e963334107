//! Standalone HTML invoice document.
//!
//! Layout mirrors the hosted print view: company header, bill-to block, one
//! table row per line item, subtotal and total derived from the line
//! amounts. Tax is not computed, so subtotal and total coincide.

use std::fmt::Write as _;

use invoicedesk_company::Company;
use invoicedesk_currency::symbol_for;
use invoicedesk_invoicing::Invoice;

/// Render `invoice` as a self-contained HTML page.
///
/// Monetary values are shown to two decimals behind the display symbol for
/// `currency_code` (unknown codes fall back to `$`).
pub fn render_invoice_html(invoice: &Invoice, company: &Company, currency_code: &str) -> String {
    let symbol = symbol_for(currency_code);
    let subtotal = invoice.items_subtotal();
    let total = subtotal;

    let mut rows = String::new();
    for item in &invoice.items {
        let _ = write!(
            rows,
            "\
        <tr>\n\
          <td>{description}</td>\n\
          <td>{quantity}</td>\n\
          <td>{symbol}{rate:.2}</td>\n\
          <td>{symbol}{discount:.2}</td>\n\
          <td>{symbol}{amount:.2}</td>\n\
        </tr>\n",
            description = escape(&item.description),
            quantity = item.quantity,
            rate = item.rate,
            discount = item.discount,
            amount = item.amount,
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Invoice {id}</title>
    <style>
      body {{ font-family: Arial, sans-serif; margin: 20px; }}
      .header {{ display: flex; justify-content: space-between; margin-bottom: 30px; }}
      .company-info {{ text-align: right; }}
      .invoice-title {{ font-size: 24px; font-weight: bold; margin-bottom: 10px; }}
      .customer-info {{ margin-bottom: 30px; }}
      table {{ width: 100%; border-collapse: collapse; margin-bottom: 20px; }}
      th, td {{ padding: 10px; text-align: left; border-bottom: 1px solid #ddd; }}
      th {{ background-color: #f5f5f5; }}
      .totals {{ text-align: right; margin-top: 20px; }}
      .total-row {{ font-weight: bold; font-size: 18px; }}
      @media print {{ body {{ margin: 0; }} }}
    </style>
  </head>
  <body>
    <div class="header">
      <div>
        <div class="invoice-title">INVOICE</div>
        <div>Invoice #: {id}</div>
        <div>Date: {created}</div>
      </div>
      <div class="company-info">
        <div style="font-weight: bold; font-size: 18px;">{company_name}</div>
        <div>{company_address}</div>
        <div>{company_phone}</div>
        <div>{company_website}</div>
      </div>
    </div>
    <div class="customer-info">
      <strong>Bill To:</strong><br>
      {customer_name}<br>
      {customer_email}<br>
      {customer_phone}
    </div>
    <table>
      <thead>
        <tr>
          <th>Description</th>
          <th>Qty</th>
          <th>Rate</th>
          <th>Discount</th>
          <th>Amount</th>
        </tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>
    <div class="totals">
      <div>Subtotal: {symbol}{subtotal:.2}</div>
      <div class="total-row">Total: {symbol}{total:.2}</div>
    </div>
    <div style="margin-top: 40px; font-size: 12px; color: #666;">
      Thank you for your business! Payment is due by {due}.
    </div>
  </body>
</html>
"#,
        id = escape(invoice.id.as_str()),
        created = invoice.created_date.format("%b %d, %Y"),
        company_name = escape(&company.name),
        company_address = escape(&company.address),
        company_phone = escape(&company.phone),
        company_website = escape(&company.website),
        customer_name = escape(&invoice.customer_name),
        customer_email = escape(&invoice.customer_email),
        customer_phone = escape(&invoice.customer_phone),
        due = invoice.due_date.format("%b %d, %Y"),
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use invoicedesk_invoicing::{InvoiceDraft, InvoiceItem, InvoiceStatus, InvoiceStore, ItemPatch};

    use super::*;

    fn line(description: &str, quantity: i64, rate: f64, discount: f64) -> InvoiceItem {
        let mut item = InvoiceItem::new();
        item.apply(ItemPatch::Description(description.to_owned()));
        item.apply(ItemPatch::Quantity(quantity));
        item.apply(ItemPatch::Rate(rate));
        item.apply(ItemPatch::Discount(discount));
        item
    }

    fn sample_invoice() -> Invoice {
        let mut store = InvoiceStore::new();
        store.create_with_date(
            InvoiceDraft {
                customer_name: "Alice".to_owned(),
                customer_email: "alice@example.com".to_owned(),
                customer_phone: "+15550001".to_owned(),
                status: InvoiceStatus::Pending,
                due_date: NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
                items: vec![line("design", 2, 50.0, 5.0), line("hosting", 1, 20.0, 0.0)],
            },
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
    }

    #[test]
    fn renders_every_line_item_row() {
        let html = render_invoice_html(&sample_invoice(), &Company::default(), "USD");
        assert!(html.contains("design"));
        assert!(html.contains("hosting"));
        assert_eq!(html.matches("<tr>").count(), 3); // header row + two items
    }

    #[test]
    fn subtotal_and_total_equal_the_item_sum() {
        let invoice = sample_invoice();
        let html = render_invoice_html(&invoice, &Company::default(), "USD");
        assert_eq!(invoice.items_subtotal(), 115.0);
        assert!(html.contains("Subtotal: $115.00"));
        assert!(html.contains("Total: $115.00"));
    }

    #[test]
    fn carries_company_and_customer_headers() {
        let html = render_invoice_html(&sample_invoice(), &Company::default(), "USD");
        assert!(html.contains("Web Frik"));
        assert!(html.contains("Sadar Joypurhat"));
        assert!(html.contains("Alice"));
        assert!(html.contains("alice@example.com"));
        assert!(html.contains("Invoice #: INV-001"));
        assert!(html.contains("Payment is due by Feb 14, 2025"));
    }

    #[test]
    fn uses_the_requested_currency_symbol() {
        let html = render_invoice_html(&sample_invoice(), &Company::default(), "BDT");
        assert!(html.contains("Total: ৳115.00"));
        // Unknown codes fall back to the dollar symbol.
        let fallback = render_invoice_html(&sample_invoice(), &Company::default(), "XYZ");
        assert!(fallback.contains("Total: $115.00"));
    }

    #[test]
    fn escapes_markup_in_free_text() {
        let mut store = InvoiceStore::new();
        let invoice = store.create_with_date(
            InvoiceDraft {
                customer_name: "Dunder & Mifflin <Paper>".to_owned(),
                customer_email: "sales@example.com".to_owned(),
                customer_phone: "+1".to_owned(),
                status: InvoiceStatus::Pending,
                due_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                items: vec![line("reams <a4>", 1, 5.0, 0.0)],
            },
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let html = render_invoice_html(&invoice, &Company::default(), "USD");
        assert!(html.contains("Dunder &amp; Mifflin &lt;Paper&gt;"));
        assert!(html.contains("reams &lt;a4&gt;"));
        assert!(!html.contains("<a4>"));
    }
}
