use std::time::Duration;

use crate::view::ViewFormat;

/// 店面配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DISCOUNT_DELAY_MS | 10000 | 会话开始后多久自动启用折扣 |
/// | NOTICE_DURATION_MS | 3000 | 通知展示时长 |
/// | CHECKOUT_PROGRESS_DELAY_MS | 2000 | 下单后"处理中"提示的延迟 |
/// | CHECKOUT_CLEAR_DELAY_MS | 4000 | 下单后清空购物车的延迟 |
/// | CATALOG_PATH | (内置) | 商品目录 JSON 文件 |
/// | VIEW_FORMAT | text | 输出格式: text / json |
/// | LOG_LEVEL | info | 日志级别 (env-filter 语法) |
/// | LOG_DIR | (无) | 日志文件目录 |
///
/// # 示例
///
/// ```ignore
/// CATALOG_PATH=./catalog.json VIEW_FORMAT=json cargo run -p storefront
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 自动折扣延迟 (毫秒)
    pub discount_delay_ms: u64,
    /// 通知展示时长 (毫秒)
    pub notice_duration_ms: u64,
    /// 下单后"处理中"提示延迟 (毫秒)
    pub checkout_progress_delay_ms: u64,
    /// 下单后清空购物车延迟 (毫秒)
    pub checkout_clear_delay_ms: u64,
    /// 商品目录文件，未设置时使用内置目录
    pub catalog_path: Option<String>,
    /// 输出格式
    pub view_format: ViewFormat,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            discount_delay_ms: env_parse("DISCOUNT_DELAY_MS").unwrap_or(10_000),
            notice_duration_ms: env_parse("NOTICE_DURATION_MS").unwrap_or(3_000),
            checkout_progress_delay_ms: env_parse("CHECKOUT_PROGRESS_DELAY_MS").unwrap_or(2_000),
            checkout_clear_delay_ms: env_parse("CHECKOUT_CLEAR_DELAY_MS").unwrap_or(4_000),
            catalog_path: std::env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),
            view_format: env_parse("VIEW_FORMAT").unwrap_or_default(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|p| !p.is_empty()),
        }
    }

    pub fn discount_delay(&self) -> Duration {
        Duration::from_millis(self.discount_delay_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    pub fn checkout_progress_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_progress_delay_ms)
    }

    pub fn checkout_clear_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_clear_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
