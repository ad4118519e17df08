//! Terminal text renderer
//!
//! Renders cart snapshots, product lists and receipts as fixed-width text.

use shared::{CartLineView, CartSnapshot, CartTotals, OrderReceipt, Product};
use std::io::Write;
use std::sync::Arc;

use super::ViewRenderer;
use crate::cart::money::format_money;

/// Default line width (matches an 80mm receipt)
pub const DEFAULT_WIDTH: usize = 48;

/// Fixed-width text renderer
///
/// Write failures are logged and otherwise ignored: a renderer is a sink
/// and the cart never depends on it succeeding.
pub struct TextRenderer<W: Write> {
    width: usize,
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(width: usize, out: W) -> Self {
        Self { width, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render the cart panel
    pub fn render_cart(&self, snapshot: &CartSnapshot) -> String {
        let mut s = String::new();
        self.sep(&mut s, '=');
        s.push_str(&format!("CART ({} items)\n", snapshot.item_count));
        self.sep(&mut s, '-');

        if snapshot.is_empty() {
            s.push_str("Your cart is empty\n");
            s.push_str("Discover our specialty coffees!\n");
        } else {
            for line in &snapshot.lines {
                self.render_line(&mut s, line);
            }
        }

        self.sep(&mut s, '-');
        self.render_totals(&mut s, &snapshot.totals);
        if snapshot.discount_applied {
            s.push_str("15% session discount active\n");
        }
        self.sep(&mut s, '=');
        s
    }

    /// Render a product list
    pub fn render_products(&self, products: &[Arc<Product>]) -> String {
        if products.is_empty() {
            return "No products found\n".to_string();
        }

        let mut s = String::new();
        for p in products {
            s.push_str(&format!("[{}] {} ({})\n", p.id(), p.name(), p.category()));
            if !p.description().is_empty() {
                s.push_str(&format!("    {}\n", p.description()));
            }
            if p.on_sale() {
                s.push_str(&format!(
                    "    {}  (was {})\n",
                    format_money(p.sale_price()),
                    format_money(p.price())
                ));
            } else {
                s.push_str(&format!("    {}\n", format_money(p.price())));
            }
        }
        s
    }

    /// Render an order receipt
    pub fn render_receipt(&self, receipt: &OrderReceipt) -> String {
        let mut s = String::new();
        self.sep(&mut s, '=');
        s.push_str(&format!("ORDER {}\n", receipt.order_id));
        s.push_str(&format!(
            "{}\n",
            receipt.placed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        self.sep(&mut s, '-');
        for line in &receipt.lines {
            self.render_line(&mut s, line);
        }
        self.sep(&mut s, '-');
        self.render_totals(&mut s, &receipt.totals);
        self.sep(&mut s, '=');
        s
    }

    fn render_line(&self, s: &mut String, line: &CartLineView) {
        s.push_str(&format!("{} [{}]\n", line.name, line.product_id));
        let left = format!("  {} each x{}", format_money(line.unit_price), line.quantity);
        s.push_str(&self.row(&left, &format_money(line.line_total)));
    }

    fn render_totals(&self, s: &mut String, totals: &CartTotals) {
        s.push_str(&self.row("Subtotal", &format_money(totals.subtotal)));
        s.push_str(&self.row("Discount", &format!("-{}", format_money(totals.discount))));
        s.push_str(&self.row("Shipping", &format_money(totals.shipping)));
        s.push_str(&self.row("Total", &format_money(totals.total)));
    }

    /// Left and right text on one line, padded to the renderer width
    fn row(&self, left: &str, right: &str) -> String {
        let used = left.chars().count() + right.chars().count();
        let pad = self.width.saturating_sub(used).max(1);
        format!("{}{}{}\n", left, " ".repeat(pad), right)
    }

    fn sep(&self, s: &mut String, c: char) {
        s.extend(std::iter::repeat_n(c, self.width));
        s.push('\n');
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
        {
            tracing::warn!(error = %e, "Failed to write view output");
        }
    }
}

impl<W: Write> ViewRenderer for TextRenderer<W> {
    fn refresh(&mut self, snapshot: &CartSnapshot) {
        let text = self.render_cart(snapshot);
        self.emit(&text);
    }

    fn show_products(&mut self, products: &[Arc<Product>]) {
        let text = self.render_products(products);
        self.emit(&text);
    }

    fn show_categories(&mut self, categories: &[&str]) {
        let text = format!("Categories: all, {}\n", categories.join(", "));
        self.emit(&text);
    }

    fn show_receipt(&mut self, receipt: &OrderReceipt) {
        let text = self.render_receipt(receipt);
        self.emit(&text);
    }

    fn show_help(&mut self, usage: &str) {
        let text = format!("{}\n", usage.trim_end());
        self.emit(&text);
    }
}
