//! View 展示层抽象
//!
//! 购物车只依赖两个接口，具体展示方式可插拔：
//! ```text
//!        ┌──────────────────────────────┐
//!        │  ViewRenderer  /  Notifier   │  ◄── 可插拔接口
//!        └──────────────┬───────────────┘
//!                       │
//!     ┌─────────────────┼─────────────────┐
//!     ▼                 ▼                 ▼
//! TextRenderer     JsonRenderer      MemoryView
//! (终端文本)        (JSON 行输出)      (测试 / 嵌入)
//! ```

mod json;
mod memory;
mod notifier;
mod renderer;

pub use json::JsonRenderer;
pub use memory::{MemoryNotifier, MemoryView};
pub use notifier::{ConsoleNotifier, NoticeBoard};
pub use renderer::{DEFAULT_WIDTH, TextRenderer};

use shared::{CartSnapshot, OrderReceipt, Product, Severity};
use std::sync::Arc;

/// 视图渲染器
///
/// 购物车每次变更后都会调用 [`ViewRenderer::refresh`]；渲染器只是一个
/// 输出端，核心逻辑不依赖其返回值或内部状态。
pub trait ViewRenderer {
    /// 用最新的购物车快照刷新视图（件数、明细、四项合计）
    fn refresh(&mut self, snapshot: &CartSnapshot);

    /// 展示商品列表（过滤结果可能为空）
    fn show_products(&mut self, _products: &[Arc<Product>]) {}

    /// 展示可用的分类
    fn show_categories(&mut self, _categories: &[&str]) {}

    /// 展示下单回执
    fn show_receipt(&mut self, _receipt: &OrderReceipt) {}

    /// 展示命令帮助
    fn show_help(&mut self, _usage: &str) {}
}

/// 通知器 - 发出后即忘，展示一段时间后自动消失
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);

    /// 重绘时再次展示仍在窗口内的通知（不重新计时）
    fn show_active(&mut self) {}
}

impl<T: ViewRenderer + ?Sized> ViewRenderer for Box<T> {
    fn refresh(&mut self, snapshot: &CartSnapshot) {
        (**self).refresh(snapshot)
    }

    fn show_products(&mut self, products: &[Arc<Product>]) {
        (**self).show_products(products)
    }

    fn show_categories(&mut self, categories: &[&str]) {
        (**self).show_categories(categories)
    }

    fn show_receipt(&mut self, receipt: &OrderReceipt) {
        (**self).show_receipt(receipt)
    }

    fn show_help(&mut self, usage: &str) {
        (**self).show_help(usage)
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&mut self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }

    fn show_active(&mut self) {
        (**self).show_active()
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFormat {
    /// 人类可读的终端文本
    #[default]
    Text,
    /// 每次刷新输出一行 JSON
    Json,
}

impl std::str::FromStr for ViewFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ViewFormat::Text),
            "json" => Ok(ViewFormat::Json),
            other => Err(format!("unknown view format: {}", other)),
        }
    }
}
