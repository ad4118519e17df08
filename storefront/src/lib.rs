//! Tambo storefront - 咖啡店铺购物车引擎
//!
//! # 架构概述
//!
//! - **商品目录** (`catalog`): 启动时构建的只读商品列表与索引
//! - **购物车** (`cart`): 数量合并、折扣、运费门槛与合计计算
//! - **下单** (`checkout`): 回执与延迟后续步骤
//! - **展示** (`view`): 可插拔的渲染器与通知器
//! - **会话** (`core`): 单通道事件循环、后台定时任务、配置
//!
//! # 模块结构
//!
//! ```text
//! storefront/src/
//! ├── core/          # 配置、会话、后台任务、输入、错误
//! ├── catalog/       # 商品目录
//! ├── cart/          # 购物车与金额计算
//! ├── view/          # 渲染器、通知器
//! ├── checkout.rs    # 下单流程
//! ├── command.rs     # 命令解析
//! └── utils/         # 日志
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod command;
pub mod core;
pub mod utils;
pub mod view;

// Re-export 公共类型
pub use cart::{Cart, CartLine};
pub use catalog::{ALL_CATEGORIES, Catalog, CatalogError};
pub use command::{Command, CommandError};
pub use crate::core::{AppError, AppResult, Config, Session, SessionEvent, SessionHandle};
pub use view::{Notifier, ViewFormat, ViewRenderer};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 加载 .env、读取配置并初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

/// 按配置加载商品目录（未指定文件时使用内置目录）
pub fn load_catalog(config: &Config) -> AppResult<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::seeded()?,
    };
    Ok(catalog)
}

pub fn print_banner() {
    println!(
        r#"
  _____               _
 |_   _|_ _ _ __ ___ | |__   ___
   | |/ _` | '_ ` _ \| '_ \ / _ \
   | | (_| | | | | | | |_) | (_) |
   |_|\__,_|_| |_| |_|_.__/ \___/
        specialty coffee store
    "#
    );
}
