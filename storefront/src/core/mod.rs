//! 核心模块 - 配置、会话、后台任务、错误

pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod tasks;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use input::read_commands;
pub use session::{Session, SessionEvent, SessionHandle};
pub use tasks::{BackgroundTasks, TaskKind};
