//! JSON line renderer
//!
//! One JSON document per line, tagged by event:
//!
//! ```json
//! {"event":"cart","data":{"lines":[...],"item_count":2,...}}
//! ```

use serde::Serialize;
use shared::{CartSnapshot, Notice, OrderReceipt, Product};
use std::io::Write;
use std::sync::Arc;

use super::ViewRenderer;

/// Tagged output record
#[derive(Debug, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub(crate) enum ViewEvent<'a> {
    Cart(&'a CartSnapshot),
    Products(Vec<&'a Product>),
    Categories(&'a [&'a str]),
    Receipt(&'a OrderReceipt),
    Notice(&'a Notice),
    Help(&'a str),
}

/// Write one event as a JSON line, logging instead of failing
pub(crate) fn write_event<W: Write>(out: &mut W, event: &ViewEvent<'_>) {
    let result = serde_json::to_writer(&mut *out, event)
        .map_err(std::io::Error::from)
        .and_then(|_| out.write_all(b"\n"))
        .and_then(|_| out.flush());
    if let Err(e) = result {
        tracing::warn!(error = %e, "Failed to write view event");
    }
}

pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViewRenderer for JsonRenderer<W> {
    fn refresh(&mut self, snapshot: &CartSnapshot) {
        write_event(&mut self.out, &ViewEvent::Cart(snapshot));
    }

    fn show_products(&mut self, products: &[Arc<Product>]) {
        let products = products.iter().map(|p| p.as_ref()).collect();
        write_event(&mut self.out, &ViewEvent::Products(products));
    }

    fn show_categories(&mut self, categories: &[&str]) {
        write_event(&mut self.out, &ViewEvent::Categories(categories));
    }

    fn show_receipt(&mut self, receipt: &OrderReceipt) {
        write_event(&mut self.out, &ViewEvent::Receipt(receipt));
    }

    fn show_help(&mut self, usage: &str) {
        write_event(&mut self.out, &ViewEvent::Help(usage));
    }
}
