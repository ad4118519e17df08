//! 购物会话
//!
//! 会话独占购物车，并从单一事件通道依次处理事件：用户命令和定时器触发
//! 都是同一通道上的事件，因此任意两个购物车操作都不会交错执行。
//!
//! ```text
//!   stdin ──► Command ──┐
//!                       ├──► mpsc ──► Session::handle_event ──► Cart ──► View / Notifier
//!   timers ─► Deferred ─┘
//! ```

use shared::{CartSnapshot, Severity};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

use super::config::Config;
use super::tasks::BackgroundTasks;
use crate::cart::Cart;
use crate::catalog::{ALL_CATEGORIES, Catalog};
use crate::checkout::{self, CheckoutOutcome};
use crate::command::{Command, USAGE};
use crate::view::{Notifier, ViewRenderer};

pub const SECTION_UNDER_CONSTRUCTION_MESSAGE: &str = "Section under construction";

/// 会话事件
#[derive(Debug)]
pub enum SessionEvent {
    /// 用户命令
    Command(Command),
    /// 一次性折扣定时器触发
    ApplyDiscount,
    /// 下单后续: "处理中" 提示
    CheckoutProcessing,
    /// 下单后续: 清空购物车
    CheckoutComplete,
    /// 读取当前购物车快照
    Snapshot(oneshot::Sender<CartSnapshot>),
}

/// 向会话投递事件的句柄
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl SessionHandle {
    /// 投递命令；会话已结束时返回 false
    pub fn send(&self, command: Command) -> bool {
        self.tx.send(SessionEvent::Command(command)).is_ok()
    }

    /// 在之前投递的事件全部处理后读取快照
    pub async fn snapshot(&self) -> Option<CartSnapshot> {
        let (tx, rx) = oneshot::channel();
        self.tx.send(SessionEvent::Snapshot(tx)).ok()?;
        rx.await.ok()
    }
}

/// 购物会话
pub struct Session<V, N> {
    config: Config,
    catalog: Arc<Catalog>,
    cart: Cart<V, N>,
    tx: mpsc::UnboundedSender<SessionEvent>,
    rx: mpsc::UnboundedReceiver<SessionEvent>,
    tasks: BackgroundTasks,
}

impl<V, N> Session<V, N>
where
    V: ViewRenderer + Send + 'static,
    N: Notifier + Send + 'static,
{
    pub fn new(config: Config, catalog: Arc<Catalog>, view: V, notifier: N) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            config,
            catalog,
            cart: Cart::new(view, notifier),
            tx,
            rx,
            tasks: BackgroundTasks::new(),
        }
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            tx: self.tx.clone(),
        }
    }

    pub fn cart(&self) -> &Cart<V, N> {
        &self.cart
    }

    pub fn tasks_mut(&mut self) -> &mut BackgroundTasks {
        &mut self.tasks
    }

    /// 运行会话直到收到 [`Command::Quit`]，返回最终的购物车
    ///
    /// 启动时展示完整商品列表，并注册一次性折扣定时器。
    pub async fn run(mut self) -> Cart<V, N> {
        tracing::info!(products = self.catalog.len(), "Session started");

        let all = self.catalog.filter(ALL_CATEGORIES);
        self.cart.view_mut().show_products(&all);
        self.defer("discount_timer", self.config.discount_delay(), SessionEvent::ApplyDiscount);

        while let Some(event) = self.rx.recv().await {
            if self.handle_event(event).is_break() {
                break;
            }
        }

        tracing::info!(
            items = self.cart.item_count(),
            total = %self.cart.total(),
            "Session ended"
        );
        self.tasks.shutdown().await;
        self.cart
    }

    /// 处理单个事件
    pub fn handle_event(&mut self, event: SessionEvent) -> ControlFlow<()> {
        match event {
            SessionEvent::Command(command) => return self.handle_command(command),
            SessionEvent::ApplyDiscount => self.cart.apply_discount(),
            SessionEvent::CheckoutProcessing => checkout::announce_processing(&mut self.cart),
            SessionEvent::CheckoutComplete => checkout::complete(&mut self.cart),
            SessionEvent::Snapshot(reply) => {
                let _ = reply.send(self.cart.snapshot());
            }
        }
        ControlFlow::Continue(())
    }

    fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        tracing::debug!(command = ?command, "Handling command");
        match command {
            Command::Products { category } => {
                let category = category.as_deref().unwrap_or(ALL_CATEGORIES);
                let products = self.catalog.filter(category);
                self.cart.view_mut().show_products(&products);
            }
            Command::Categories => {
                let categories = self.catalog.categories();
                self.cart.view_mut().show_categories(&categories);
            }
            Command::Add {
                product_id,
                quantity,
            } => match self.catalog.lookup(&product_id) {
                Some(product) => self.cart.add_product(Arc::clone(product), quantity),
                None => tracing::debug!(product_id = %product_id, "Unknown product, ignoring add"),
            },
            Command::Remove { product_id } => self.cart.remove_product(&product_id),
            Command::SetQuantity {
                product_id,
                quantity,
            } => self.cart.update_quantity(&product_id, quantity),
            Command::Increase { product_id } => self.cart.increase(&product_id),
            Command::Decrease { product_id } => self.cart.decrease(&product_id),
            Command::ShowCart => {
                self.cart.refresh();
                self.cart.notifier_mut().show_active();
            }
            Command::Clear => self.cart.clear(),
            Command::Checkout => {
                if let CheckoutOutcome::Placed(_) = checkout::place_order(&mut self.cart) {
                    self.defer(
                        "checkout_processing",
                        self.config.checkout_progress_delay(),
                        SessionEvent::CheckoutProcessing,
                    );
                    self.defer(
                        "checkout_complete",
                        self.config.checkout_clear_delay(),
                        SessionEvent::CheckoutComplete,
                    );
                }
            }
            Command::Section(section) => {
                tracing::debug!(section = %section, "Section not available");
                self.cart
                    .notifier_mut()
                    .notify(SECTION_UNDER_CONSTRUCTION_MESSAGE, Severity::Error);
            }
            Command::Help => self.cart.view_mut().show_help(USAGE),
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// 延迟投递事件
    fn defer(&mut self, name: &'static str, delay: Duration, event: SessionEvent) {
        let tx = self.tx.clone();
        self.tasks.schedule(name, delay, async move {
            if tx.send(event).is_err() {
                tracing::debug!(task = %name, "Session gone, deferred event dropped");
            }
        });
    }
}
