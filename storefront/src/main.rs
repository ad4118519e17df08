use std::io;
use std::sync::Arc;

use storefront::core::{TaskKind, read_commands};
use storefront::view::{ConsoleNotifier, DEFAULT_WIDTH, JsonRenderer, TextRenderer};
use storefront::{Session, ViewFormat, ViewRenderer, load_catalog, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    if config.view_format == ViewFormat::Text {
        print_banner();
    }

    tracing::info!("Storefront starting...");

    // 2. 加载商品目录
    let catalog = Arc::new(load_catalog(&config)?);

    // 3. 选择输出方式
    let view: Box<dyn ViewRenderer + Send> = match config.view_format {
        ViewFormat::Text => Box::new(TextRenderer::new(DEFAULT_WIDTH, io::stdout())),
        ViewFormat::Json => Box::new(JsonRenderer::new(io::stdout())),
    };
    let notifier = ConsoleNotifier::new(config.notice_duration(), config.view_format, io::stdout());

    // 4. 启动会话与输入监听
    let mut session = Session::new(config, catalog, view, notifier);
    let handle = session.handle();
    let tasks = session.tasks_mut();
    let shutdown = tasks.shutdown_token();
    tasks.spawn("stdin_reader", TaskKind::Listener, async move {
        read_commands(tokio::io::BufReader::new(tokio::io::stdin()), handle, shutdown).await;
    });

    let cart = session.run().await;
    tracing::info!(items = cart.item_count(), "Storefront stopped");

    Ok(())
}
