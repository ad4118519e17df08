//! 用户通知消息类型
//!
//! 购物车在状态变化时发出的短暂提示，由通知器负责展示与自动消失。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// 成功（加入购物车、折扣生效、下单成功）
    Success,
    /// 错误样式（移除商品、清空购物车、空购物车下单）
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// 一条通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_snake_case() {
        let json = serde_json::to_string(&Notice::success("ok")).unwrap();
        assert_eq!(json, r#"{"message":"ok","severity":"success"}"#);
    }

    #[test]
    fn test_notice_display() {
        assert_eq!(Notice::error("Cart cleared").to_string(), "[error] Cart cleared");
    }
}
