use jiff::tz::TimeZone;
use serde::Serialize;
use tera::{Context, Tera};

use struk_core::format::{format_quantity, format_rupiah, format_timestamp};
use struk_core::models::batch::BatchRequest;
use struk_core::models::employee::{resolve_cashier, Employee};
use struk_core::models::transaction::Transaction;

use crate::error::ExportError;
use crate::store::StoreProfile;
use crate::styles::ReceiptStyles;

const RECEIPT_TEMPLATE: &str = "receipt.html";
const DOCUMENT_TEMPLATE: &str = "document.html";

/// Whether the printer should start a new page after a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBreak {
    Always,
    Auto,
}

impl PageBreak {
    fn as_css(self) -> &'static str {
        match self {
            PageBreak::Always => "always",
            PageBreak::Auto => "auto",
        }
    }
}

#[derive(Serialize)]
struct ReceiptView<'a> {
    store: &'a StoreProfile,
    styles: &'a ReceiptStyles,
    page_break: &'static str,
    receipt_id: &'a str,
    timestamp: String,
    cashier: &'a str,
    lines: Vec<LineView<'a>>,
    total: String,
    payment: String,
    change: String,
}

#[derive(Serialize)]
struct LineView<'a> {
    name: &'a str,
    quantity: String,
    amount: String,
}

#[derive(Serialize)]
struct DocumentView<'a> {
    receipts: &'a [String],
}

/// Renders transactions into 80mm receipt markup.
///
/// Templates are compiled once in [`ReceiptFormatter::new`]; rendering
/// afterwards only depends on its inputs. All interpolated text is
/// HTML-escaped.
pub struct ReceiptFormatter {
    tera: Tera,
    store: StoreProfile,
    styles: ReceiptStyles,
    time_zone: TimeZone,
}

impl ReceiptFormatter {
    pub fn new(
        store: StoreProfile,
        styles: ReceiptStyles,
        time_zone: TimeZone,
    ) -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (RECEIPT_TEMPLATE, include_str!("templates/receipt.html")),
            (DOCUMENT_TEMPLATE, include_str!("templates/document.html")),
        ])
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        tera.set_escape_fn(escape_markup);

        Ok(Self {
            tera,
            store,
            styles,
            time_zone,
        })
    }

    /// Render one standalone receipt fragment. A missing cashier is shown
    /// as the placeholder, never reported as an error.
    pub fn format_receipt(
        &self,
        transaction: &Transaction,
        employees: &[Employee],
    ) -> Result<String, ExportError> {
        self.render_receipt(transaction, employees, PageBreak::Always)
    }

    pub fn render_receipt(
        &self,
        transaction: &Transaction,
        employees: &[Employee],
        page_break: PageBreak,
    ) -> Result<String, ExportError> {
        let lines = transaction
            .items
            .iter()
            .map(|item| LineView {
                name: &item.name,
                quantity: format_quantity(item.quantity),
                amount: format_rupiah(item.extended_price()),
            })
            .collect();

        let view = ReceiptView {
            store: &self.store,
            styles: &self.styles,
            page_break: page_break.as_css(),
            receipt_id: &transaction.receipt_id,
            timestamp: format_timestamp(&transaction.timestamp, &self.time_zone),
            cashier: resolve_cashier(employees, transaction.employee_id.as_ref()),
            lines,
            total: format_rupiah(transaction.total),
            payment: format_rupiah(transaction.payment),
            change: format_rupiah(transaction.change),
        };

        let context = Context::from_serialize(&view)?;
        Ok(self.tera.render(RECEIPT_TEMPLATE, &context)?)
    }

    /// Render every transaction of the batch, in order, into one HTML
    /// document. Every receipt but the last forces a page break after it.
    pub fn assemble(&self, batch: &BatchRequest) -> Result<String, ExportError> {
        let last = batch.len().saturating_sub(1);
        let receipts = batch
            .transactions()
            .iter()
            .enumerate()
            .map(|(i, trx)| {
                let page_break = if i < last {
                    PageBreak::Always
                } else {
                    PageBreak::Auto
                };
                self.render_receipt(trx, batch.employees(), page_break)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let context = Context::from_serialize(DocumentView {
            receipts: &receipts,
        })?;
        Ok(self.tera.render(DOCUMENT_TEMPLATE, &context)?)
    }
}

/// HTML escaping for text and attribute content. Unlike Tera's default it
/// leaves `/` alone so dates such as `19/10/2025` stay readable in the markup.
fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
