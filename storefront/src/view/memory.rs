//! In-memory view and notifier (same-process inspection)

use shared::{CartSnapshot, Notice, OrderReceipt, Product, Severity};
use std::sync::Arc;

use super::{Notifier, ViewRenderer};

/// Keeps everything it is asked to render
///
/// Used by tests and by embedders that want to read the view state
/// instead of printing it.
#[derive(Debug, Default)]
pub struct MemoryView {
    last: Option<CartSnapshot>,
    refreshes: usize,
    products: Vec<String>,
    receipts: Vec<OrderReceipt>,
    help_shown: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot from the most recent refresh
    pub fn last(&self) -> Option<&CartSnapshot> {
        self.last.as_ref()
    }

    /// Number of refreshes received so far
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Ids of the most recently shown product list
    pub fn shown_products(&self) -> &[String] {
        &self.products
    }

    pub fn receipts(&self) -> &[OrderReceipt] {
        &self.receipts
    }

    pub fn help_shown(&self) -> usize {
        self.help_shown
    }
}

impl ViewRenderer for MemoryView {
    fn refresh(&mut self, snapshot: &CartSnapshot) {
        self.refreshes += 1;
        self.last = Some(snapshot.clone());
    }

    fn show_products(&mut self, products: &[Arc<Product>]) {
        self.products = products.iter().map(|p| p.id().to_string()).collect();
    }

    fn show_receipt(&mut self, receipt: &OrderReceipt) {
        self.receipts.push(receipt.clone());
    }

    fn show_help(&mut self, _usage: &str) {
        self.help_shown += 1;
    }
}

/// Records every notice in order
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Vec<Notice>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.notices.push(Notice::new(message, severity));
    }
}
