//! 终端通知器
//!
//! 通知展示一个固定时间窗口（默认 3 秒）后自动消失。消失不需要定时器：
//! [`NoticeBoard`] 记录展示时间，读取时判断是否过期。重绘购物车时
//! [`ConsoleNotifier`] 只会重新展示仍在窗口内的通知。

use shared::{Notice, Severity};
use std::io::Write;
use std::time::Duration;
use tokio::time::Instant;

use super::json::{ViewEvent, write_event};
use super::{Notifier, ViewFormat};

/// 当前通知板
#[derive(Debug)]
pub struct NoticeBoard {
    current: Option<(Notice, Instant)>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// 展示新通知（替换旧通知）
    pub fn post(&mut self, notice: Notice) {
        self.current = Some((notice, Instant::now()));
    }

    /// 仍在展示窗口内的通知
    pub fn current(&self) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|(_, shown_at)| shown_at.elapsed() < self.ttl)
            .map(|(notice, _)| notice)
    }
}

/// 终端通知器
pub struct ConsoleNotifier<W: Write> {
    board: NoticeBoard,
    format: ViewFormat,
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(ttl: Duration, format: ViewFormat, out: W) -> Self {
        Self {
            board: NoticeBoard::new(ttl),
            format,
            out,
        }
    }

    pub fn board(&self) -> &NoticeBoard {
        &self.board
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ConsoleNotifier<W> {
    fn write_notice(&mut self, notice: &Notice) {
        match self.format {
            ViewFormat::Text => {
                let marker = match notice.severity {
                    Severity::Success => "✔",
                    Severity::Error => "✖",
                };
                if let Err(e) = writeln!(self.out, "{} {}", marker, notice.message) {
                    tracing::warn!(error = %e, "Failed to write notice");
                }
            }
            ViewFormat::Json => write_event(&mut self.out, &ViewEvent::Notice(notice)),
        }
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, message: &str, severity: Severity) {
        let notice = Notice::new(message, severity);
        tracing::debug!(severity = %severity, message = %message, "Notice posted");
        self.write_notice(&notice);
        self.board.post(notice);
    }

    fn show_active(&mut self) {
        if let Some(notice) = self.board.current().cloned() {
            self.write_notice(&notice);
        }
    }
}
