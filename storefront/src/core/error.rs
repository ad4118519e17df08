//! 应用错误
//!
//! 购物车操作本身不会失败；这里只覆盖启动边界上的错误。

use crate::catalog::CatalogError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 商品目录加载失败
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
}

pub type AppResult<T> = Result<T, AppError>;
