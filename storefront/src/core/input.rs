//! 命令输入监听器
//!
//! 逐行读取输入，解析为 [`Command`] 后投递给会话。输入结束 (EOF) 等同于
//! `quit`。

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

use super::session::SessionHandle;
use crate::command::Command;

/// 读取命令直到 quit、EOF 或取消
pub async fn read_commands<R>(input: R, handle: SessionHandle, shutdown: CancellationToken)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        let line = tokio::select! {
            _ = shutdown.cancelled() => break,
            line = lines.next_line() => line,
        };

        match line {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        let quit = command == Command::Quit;
                        if !handle.send(command) || quit {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(input = %line, error = %e, "Rejected command");
                        eprintln!("{} (type 'help' for commands)", e);
                    }
                }
            }
            Ok(None) => {
                tracing::debug!("Input closed");
                handle.send(Command::Quit);
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                handle.send(Command::Quit);
                break;
            }
        }
    }
}
